// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Keys and identities are short strings (team names, usernames, conversation ids), so
//! they are kept on the stack until they outgrow [`DEFAULT_STRING_STORAGE_SIZE`].

use smallstr::SmallString;
use smallvec::SmallVec;

// PERF: Most keys are `<tag>:<identity>` w/ short identities. Larger sizes bloat every
// `RenderInstruction`.
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 32;

/// Stack allocated string storage for small strings. When this gets larger than
/// [`DEFAULT_STRING_STORAGE_SIZE`], it will be [`smallvec::SmallVec::spilled`] on the
/// heap.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

/// Stack allocated list, that can [`smallvec::SmallVec::spilled`] into the heap if it
/// gets larger than [`INLINE_VEC_SIZE`].
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
pub const INLINE_VEC_SIZE: usize = 8;

/// Format the arguments into a new [`InlineString`] w/out going through a heap
/// allocated [`String`].
#[macro_export]
macro_rules! inline_string {
    ($($format_args:tt)*) => {{
        use std::fmt::Write as _;
        let mut acc = $crate::InlineString::new();
        // Writing to an `InlineString` can't fail.
        _ = write!(acc, $($format_args)*);
        acc
    }};
}
