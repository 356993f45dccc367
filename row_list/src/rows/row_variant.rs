// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use crate::{RowKey, RowKind};

/// A row descriptor: one tagged entry describing what to render at one position in a
/// list. Implemented by a row family's `enum`, where the variant is the tag and the
/// variant's fields are the payload. Since the tag is the variant, the tag uniquely
/// determines the payload shape, and there is nothing to guess at runtime.
///
/// Rows are immutable value objects. They are assembled once per render pass, consumed
/// by [`crate::project()`], and then discarded.
///
/// # Example
///
/// ```
/// use r3bl_row_list::{RowKind, RowVariant};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash,
///          strum_macros::Display, strum_macros::EnumString,
///          strum_macros::EnumIter, strum_macros::IntoStaticStr)]
/// #[strum(serialize_all = "camelCase")]
/// enum FaqRowKind { Title, Question }
/// impl RowKind for FaqRowKind {}
///
/// #[derive(Debug)]
/// enum FaqRow {
///     Title,
///     Question { slug: String },
/// }
///
/// impl RowVariant for FaqRow {
///     type Kind = FaqRowKind;
///
///     fn kind(&self) -> FaqRowKind {
///         match self {
///             FaqRow::Title => FaqRowKind::Title,
///             FaqRow::Question { .. } => FaqRowKind::Question,
///         }
///     }
///
///     fn identity(&self) -> Option<&str> {
///         match self {
///             FaqRow::Title => None,
///             FaqRow::Question { slug } => Some(slug.as_str()),
///         }
///     }
/// }
///
/// let row = FaqRow::Question { slug: "why-rust".into() };
/// assert_eq!(row.row_key().as_str(), "question:why-rust");
/// assert_eq!(FaqRow::Title.row_key().as_str(), "title");
/// ```
pub trait RowVariant: Debug {
    type Kind: RowKind;

    /// The tag of this row. This `match` must list every variant, which is what keeps
    /// the row `enum` and its kind `enum` in sync.
    fn kind(&self) -> Self::Kind;

    /// The natural identity embedded in the payload. `None` for singleton kinds, which
    /// appear at most once per list.
    fn identity(&self) -> Option<&str>;

    /// The stable key for this row: [`Self::identity`] namespaced by the tag.
    fn row_key(&self) -> RowKey { RowKey::new(self.kind().tag(), self.identity()) }
}
