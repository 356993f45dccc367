// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Display, Formatter, Result},
          hash::Hash,
          str::FromStr};

use strum::IntoEnumIterator;

/// The closed set of kinds (tags) of one row family. Implemented by a fieldless `enum`
/// that mirrors the variants of the row `enum` itself, and derives its tag strings with
/// `strum_macros`:
///
/// ```
/// use r3bl_row_list::RowKind;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash,
///          strum_macros::Display, strum_macros::EnumString,
///          strum_macros::EnumIter, strum_macros::IntoStaticStr)]
/// #[strum(serialize_all = "camelCase")]
/// enum FaqRowKind { Question, BigAnswer }
///
/// impl RowKind for FaqRowKind {}
///
/// assert_eq!(FaqRowKind::BigAnswer.tag(), "bigAnswer");
/// assert_eq!(FaqRowKind::try_from_tag("question"), Some(FaqRowKind::Question));
/// assert_eq!(FaqRowKind::try_from_tag("banner"), None);
/// ```
///
/// The tag strings double as:
/// 1. The namespace of every [`crate::RowKey`] (so they must never contain
///    [`crate::RowKey::SEPARATOR`]).
/// 2. The `"type"` field of untyped (JSON) row descriptors, see
///    [`crate::try_decode_row`].
pub trait RowKind:
    Copy
    + Debug
    + Display
    + Eq
    + Hash
    + FromStr
    + IntoEnumIterator
    + Into<&'static str>
    + Send
    + Sync
    + 'static
{
    /// The tag string of this kind.
    fn tag(self) -> &'static str { self.into() }

    /// Look up a tag in the registry of declared kinds.
    fn try_from_tag(tag: &str) -> Option<Self> { tag.parse().ok() }

    /// Every declared tag, in declaration order.
    fn declared_tags() -> Vec<&'static str> { Self::iter().map(RowKind::tag).collect() }
}

/// Position of a row in its sequence. Only used by variants that render differently as
/// a function of position; never used to derive keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RowIndex(pub usize);

impl RowIndex {
    #[must_use]
    pub fn new(index: usize) -> Self { Self(index) }

    #[must_use]
    pub fn as_usize(self) -> usize { self.0 }

    #[must_use]
    pub fn is_first(self) -> bool { self.0 == 0 }
}

impl From<usize> for RowIndex {
    fn from(index: usize) -> Self { Self(index) }
}

impl Display for RowIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.0) }
}
