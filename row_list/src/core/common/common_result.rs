// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`]
///    wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`crate::RowListError`] and any other type of error.
pub type CommonResult<T> = miette::Result<T>;

/// Wrap the given value in `Ok(..)`, or produce `Ok(())` when no value is given.
///
/// ```
/// use r3bl_row_list::{ok, CommonResult};
///
/// fn unit() -> CommonResult<()> { ok!() }
/// fn value() -> CommonResult<u8> { ok!(42) }
///
/// assert!(unit().is_ok());
/// assert_eq!(value().unwrap(), 42);
/// ```
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// Drop in replacement for [`assert_eq!`] that prints a colorized diff of the left and
/// right values when they don't match.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Wrap the given block or stmt so that it returns `Ok(())`. Saves having to write
/// `Ok(())` at the end of every `main()`.
///
/// ```
/// use r3bl_row_list::{throws, CommonResult};
///
/// fn run() -> CommonResult<()> {
///     throws!({
///         let width: usize = "80".parse().map_err(|_| miette::miette!("bad width"))?;
///         assert_eq!(width, 80);
///     })
/// }
///
/// assert!(run().is_ok());
/// ```
#[macro_export]
macro_rules! throws {
    ($it: block) => {{
        $it
        return Ok(())
    }};
    ($it: stmt) => {{
        $it
        return Ok(())
    }};
}
