// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::HashMap;

use serde::Deserialize;

use crate::{CommonResult, InlineString, MemberRow, RowIndex, RowKind, RowListError,
            Teamname, TeamRowKind, VariantRenderer, inline_string, ok};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum TeamRole {
    Owner,
    Admin,
    Writer,
    Reader,
}

/// What the host needs to draw one member row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRenderParams {
    pub username: InlineString,
    pub teamname: Teamname,
    /// Member rows alternate their background by position.
    pub index: RowIndex,
    pub role: Option<TeamRole>,
    pub full_name: Option<String>,
}

/// Copies the payload as is. Knows nothing about roles.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMemberRenderer;

impl VariantRenderer<MemberRow> for DefaultMemberRenderer {
    type Output = MemberRenderParams;

    fn render_variant(&self, index: RowIndex, row: &MemberRow) -> CommonResult<MemberRenderParams> {
        ok!(MemberRenderParams {
            username: row.username.clone(),
            teamname: row.teamname.clone(),
            index,
            role: None,
            full_name: None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub role: TeamRole,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Details about the members of one team, keyed by username.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct MemberRoster(HashMap<InlineString, RosterEntry>);

impl MemberRoster {
    pub fn insert(&mut self, username: &str, role: TeamRole, full_name: Option<&str>) {
        self.0.insert(inline_string!("{username}"), RosterEntry {
            role,
            full_name: full_name.map(ToString::to_string),
        });
    }

    #[must_use]
    pub fn get(&self, username: &str) -> Option<&RosterEntry> { self.0.get(username) }

    #[must_use]
    pub fn len(&self) -> usize { self.0.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

/// Looks up every member in a [`MemberRoster`]. A member that isn't in the roster means
/// the rows and the roster are out of sync, which fails the render pass.
#[derive(Debug, Clone, Default)]
pub struct RosterMemberRenderer {
    pub roster: MemberRoster,
}

impl RosterMemberRenderer {
    #[must_use]
    pub fn new(roster: MemberRoster) -> Self { Self { roster } }
}

impl VariantRenderer<MemberRow> for RosterMemberRenderer {
    type Output = MemberRenderParams;

    fn render_variant(&self, index: RowIndex, row: &MemberRow) -> CommonResult<MemberRenderParams> {
        let Some(entry) = self.roster.get(&row.username) else {
            return RowListError::SubRendererFailed {
                tag: inline_string!("{}", TeamRowKind::Member.tag()),
                index,
                reason: format!(
                    "member '{}' is not in the roster of team '{}'",
                    row.username, row.teamname
                ),
            }
            .into_result();
        };

        ok!(MemberRenderParams {
            username: row.username.clone(),
            teamname: row.teamname.clone(),
            index,
            role: Some(entry.role),
            full_name: entry.full_name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    fn roster() -> MemberRoster {
        let mut it = MemberRoster::default();
        it.insert("alice", TeamRole::Owner, Some("Alice Liddell"));
        it.insert("bob", TeamRole::Writer, None);
        it
    }

    #[test]
    fn test_default_copies_payload_and_position() {
        let row = MemberRow::new("alice", Teamname::from("acme"));
        let it = DefaultMemberRenderer.render_variant(RowIndex::new(3), &row).unwrap();
        assert_eq2!(it.username.as_str(), "alice");
        assert_eq2!(it.index, RowIndex::new(3));
        assert_eq2!(it.role, None);
    }

    #[test]
    fn test_roster_lookup() {
        let renderer = RosterMemberRenderer::new(roster());
        let row = MemberRow::new("alice", Teamname::from("acme"));
        let it = renderer.render_variant(RowIndex::new(0), &row).unwrap();
        assert_eq2!(it.role, Some(TeamRole::Owner));
        assert_eq2!(it.full_name.as_deref(), Some("Alice Liddell"));
    }

    #[test]
    fn test_roster_miss_fails() {
        let renderer = RosterMemberRenderer::new(roster());
        let row = MemberRow::new("mallory", Teamname::from("acme"));
        let report = renderer.render_variant(RowIndex::new(5), &row).unwrap_err();
        let Some(RowListError::SubRendererFailed { tag, index, reason }) =
            report.downcast_ref::<RowListError>()
        else {
            panic!("expected SubRendererFailed, got {report:?}");
        };
        assert_eq2!(tag.as_str(), "member");
        assert_eq2!(*index, RowIndex::new(5));
        assert!(reason.contains("mallory"));
    }

    #[test]
    fn test_roster_deserialize() {
        let it: MemberRoster = serde_json::from_str(
            r#"{"alice": {"role": "admin", "fullName": "Alice"}, "bob": {"role": "reader"}}"#,
        )
        .unwrap();
        assert_eq2!(it.len(), 2);
        assert_eq2!(it.get("bob").map(|it| it.role), Some(TeamRole::Reader));
    }
}
