// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::Deserialize;

use crate::{InlineString, RowKind, RowVariant, TabsRow, Teamname, inline_string};

/// Tags of [`TeamRow`].
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
pub enum TeamRowKind {
    Header,
    Tabs,
    Member,
    Subteam,
    Invites,
    Settings,
}

impl RowKind for TeamRowKind {}

/// One row of a team's detail page.
///
/// `header`, `tabs`, `invites` and `settings` appear once per team, and are keyed by the
/// team name. `member` and `subteam` repeat, and are keyed by the username and subteam
/// name respectively.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TeamRow {
    Header { teamname: Teamname },
    Tabs(TabsRow),
    Member(MemberRow),
    Subteam(SubteamRow),
    Invites { teamname: Teamname },
    Settings { teamname: Teamname },
}

impl RowVariant for TeamRow {
    type Kind = TeamRowKind;

    fn kind(&self) -> TeamRowKind {
        match self {
            TeamRow::Header { .. } => TeamRowKind::Header,
            TeamRow::Tabs(_) => TeamRowKind::Tabs,
            TeamRow::Member(_) => TeamRowKind::Member,
            TeamRow::Subteam(_) => TeamRowKind::Subteam,
            TeamRow::Invites { .. } => TeamRowKind::Invites,
            TeamRow::Settings { .. } => TeamRowKind::Settings,
        }
    }

    fn identity(&self) -> Option<&str> {
        match self {
            TeamRow::Header { teamname }
            | TeamRow::Invites { teamname }
            | TeamRow::Settings { teamname } => Some(teamname.as_str()),
            TeamRow::Tabs(tabs) => Some(tabs.teamname.as_str()),
            TeamRow::Member(member) => Some(member.username.as_str()),
            TeamRow::Subteam(subteam) => Some(subteam.teamname.as_str()),
        }
    }
}

/// A member of the team whose page is shown.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRow {
    pub username: InlineString,
    pub teamname: Teamname,
}

impl MemberRow {
    #[must_use]
    pub fn new(username: &str, teamname: Teamname) -> Self {
        Self {
            username: inline_string!("{username}"),
            teamname,
        }
    }
}

/// A subteam of the team whose page is shown. `teamname` is the subteam's full name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubteamRow {
    pub teamname: Teamname,
}

impl SubteamRow {
    #[must_use]
    pub fn new(teamname: Teamname) -> Self { Self { teamname } }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_tags() {
        assert_eq2!(TeamRowKind::declared_tags(), vec![
            "header", "tabs", "member", "subteam", "invites", "settings"
        ]);
        for kind in TeamRowKind::iter() {
            assert_eq2!(kind.to_string(), kind.tag());
            assert_eq2!(TeamRowKind::try_from_tag(kind.tag()), Some(kind));
        }
    }

    #[test]
    fn test_keys() {
        let team = Teamname::from("acme");
        assert_eq2!(
            TeamRow::Tabs(TabsRow::new(team.clone())).row_key().as_str(),
            "tabs:acme"
        );
        assert_eq2!(
            TeamRow::Member(MemberRow::new("alice", team.clone())).row_key().as_str(),
            "member:alice"
        );
        assert_eq2!(
            TeamRow::Subteam(SubteamRow::new(Teamname::from("acme.dev")))
                .row_key()
                .as_str(),
            "subteam:acme.dev"
        );
        assert_eq2!(TeamRow::Settings { teamname: team }.row_key().as_str(), "settings:acme");
    }

    #[test]
    fn test_deserialize_tagged() {
        let row: TeamRow = serde_json::from_str(
            r#"{"type": "member", "username": "alice", "teamname": "acme"}"#,
        )
        .unwrap();
        assert_eq2!(row, TeamRow::Member(MemberRow::new("alice", Teamname::from("acme"))));

        let row: TeamRow = serde_json::from_str(
            r#"{"type": "tabs", "teamname": "acme", "admin": false, "memberCount": 3,
                "numInvites": 0, "numRequests": 0, "numSubteams": 0}"#,
        )
        .unwrap();
        let mut expected = TabsRow::new(Teamname::from("acme"));
        expected.member_count = 3;
        assert_eq2!(row, TeamRow::Tabs(expected));
    }
}
