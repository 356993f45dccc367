// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::{InlineString, inline_string};

/// Stable identity of a rendered row, used by the host for incremental reconciliation.
///
/// Similar to React's `key` prop. The key is derived from the row's **natural
/// identity** (a team name, a username, a conversation id), namespaced by the row's tag,
/// and never from its position in the list. So reordering or filtering the rows upstream
/// doesn't discard and recreate host state for rows that didn't change.
///
/// | Row                              | Key             |
/// | :------------------------------- | :-------------- |
/// | `header` for team `T1`           | `header:T1`     |
/// | `member` w/ username `alice`     | `member:alice`  |
/// | `divider` (one per list, no id)  | `divider`       |
///
/// Since tags never contain [`RowKey::SEPARATOR`], two rows of different kinds can never
/// collide, even if their identities are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey(InlineString);

impl RowKey {
    pub const SEPARATOR: char = ':';

    #[must_use]
    pub fn new(tag: &str, identity: Option<&str>) -> Self {
        debug_assert!(!tag.contains(Self::SEPARATOR), "tag '{tag}' contains separator");
        match identity {
            Some(identity) => Self(inline_string!("{tag}{}{identity}", Self::SEPARATOR)),
            None => Self(inline_string!("{tag}")),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str { self.0.as_str() }

    /// The namespace part of the key.
    #[must_use]
    pub fn tag(&self) -> &str {
        self.0
            .split_once(Self::SEPARATOR)
            .map_or(self.0.as_str(), |(tag, _)| tag)
    }

    /// The natural identity part of the key, `None` for singleton rows.
    #[must_use]
    pub fn identity(&self) -> Option<&str> {
        self.0.split_once(Self::SEPARATOR).map(|(_, identity)| identity)
    }
}

impl Display for RowKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.0) }
}

impl AsRef<str> for RowKey {
    fn as_ref(&self) -> &str { self.as_str() }
}
