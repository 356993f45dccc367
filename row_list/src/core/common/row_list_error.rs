// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{InlineString, RowIndex, RowKey};

/// Every way a render pass can fail. None of these are expected at runtime; they all
/// signal a defect, either in the code that assembles rows, or in a sub-renderer. None
/// of them are retried, and a failing row aborts the whole pass.
///
/// | Variant               | Raised by                                   |
/// | :-------------------- | :------------------------------------------ |
/// | [`UnhandledVariant`]  | [`crate::try_decode_row()`] (untyped input) |
/// | [`MalformedPayload`]  | [`crate::try_decode_row()`] (untyped input) |
/// | [`DuplicateKey`]      | [`crate::project()`]                        |
/// | [`SubRendererFailed`] | a [`crate::VariantRenderer`]                |
///
/// [`UnhandledVariant`]: Self::UnhandledVariant
/// [`MalformedPayload`]: Self::MalformedPayload
/// [`DuplicateKey`]: Self::DuplicateKey
/// [`SubRendererFailed`]: Self::SubRendererFailed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum RowListError {
    /// The row's tag is not one of the declared kinds. Typed rows can't produce this,
    /// since the compiler checks that every kind has a dispatch branch.
    #[error("🧩 Unhandled row variant: '{tag}'")]
    #[diagnostic(
        code(r3bl_row_list::unhandled_variant),
        help(
            "The row kinds known to the producer and to this crate have drifted. \
             Add the kind to the row enum and its dispatcher."
        )
    )]
    UnhandledVariant { tag: InlineString },

    /// Two rows in the same sequence produced the same stable key.
    #[error("🔑 Duplicate row key '{key}' at rows {first_index} and {duplicate_index}")]
    #[diagnostic(
        code(r3bl_row_list::duplicate_key),
        help(
            "The rows passed to `project()` must have distinct natural identities \
             per kind. Deduplicate them where they are assembled."
        )
    )]
    DuplicateKey {
        key: RowKey,
        first_index: RowIndex,
        duplicate_index: RowIndex,
    },

    /// The row's payload doesn't have the shape its tag requires.
    #[error("📦 Malformed payload for row variant '{tag}': {reason}")]
    #[diagnostic(code(r3bl_row_list::malformed_payload))]
    MalformedPayload { tag: InlineString, reason: String },

    /// A pluggable per-kind sub-renderer could not produce its render params.
    #[error("🖌️ Sub-renderer for '{tag}' failed on row {index}: {reason}")]
    #[diagnostic(
        code(r3bl_row_list::sub_renderer_failed),
        help("The whole render pass is aborted, no partial list is produced.")
    )]
    SubRendererFailed {
        tag: InlineString,
        index: RowIndex,
        reason: String,
    },
}

/// Tag used in [`RowListError::MalformedPayload`] when the descriptor has no usable tag
/// field at all.
pub const MISSING_TAG: &str = "<missing>";

impl RowListError {
    /// Convenience for returning this error as a [`crate::CommonResult`].
    ///
    /// # Errors
    ///
    /// Always.
    pub fn into_result<T>(self) -> crate::CommonResult<T> { Err(miette::Report::new(self)) }
}
