// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::Deserialize;

use crate::{RowKind, RowVariant, Teamname};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum TeamListRowKind {
    Team,
}

impl RowKind for TeamListRowKind {}

/// One team in the main list of teams. There is a single kind, so adding a second one
/// (eg: a "create team" call to action) only needs a new variant here and its arm in
/// [`crate::TeamListDispatcher`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TeamListRow {
    Team(TeamSummary),
}

impl RowVariant for TeamListRow {
    type Kind = TeamListRowKind;

    fn kind(&self) -> TeamListRowKind {
        match self {
            TeamListRow::Team(_) => TeamListRowKind::Team,
        }
    }

    fn identity(&self) -> Option<&str> {
        match self {
            TeamListRow::Team(summary) => Some(summary.name.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub name: Teamname,
    #[serde(default)]
    pub member_count: usize,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_open: bool,
    /// Pending requests to join this team.
    #[serde(default)]
    pub new_requests: usize,
}

impl TeamSummary {
    #[must_use]
    pub fn new(name: Teamname) -> Self {
        Self {
            name,
            member_count: 0,
            is_new: false,
            is_open: false,
            new_requests: 0,
        }
    }
}
