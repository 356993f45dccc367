// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::{CommonResult, InlineString, InlineVec, RowDispatcher, RowIndex, TeamListRow,
            TeamSummary, Teamname, inline_string, ok};

/// Where the list is shown. Some affordances only exist on desktop.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    clap::ValueEnum,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    #[default]
    Desktop,
    Mobile,
}

impl Platform {
    #[must_use]
    pub fn is_mobile(self) -> bool { self == Platform::Mobile }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamBadge {
    Open,
    /// Pending requests to join.
    Requests(usize),
    New,
}

impl Display for TeamBadge {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            TeamBadge::Open => f.write_str("OPEN"),
            TeamBadge::Requests(count) => write!(f, "({count})"),
            TeamBadge::New => f.write_str("NEW"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum TeamListAction {
    ViewTeam,
    OpenFolder,
    ManageChat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamListRenderParams {
    pub name: Teamname,
    pub member_count_label: InlineString,
    /// In display order.
    pub badges: InlineVec<TeamBadge>,
    pub actions: InlineVec<TeamListAction>,
    pub avatar_size: u8,
    pub show_divider: bool,
}

/// `"1 member"`, `"0 members"`, `"12 members"`.
#[must_use]
pub fn member_count_label(count: usize) -> InlineString {
    let plural = if count == 1 { "" } else { "s" };
    inline_string!("{count} member{plural}")
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TeamListDispatcher {
    pub platform: Platform,
}

impl TeamListDispatcher {
    #[must_use]
    pub fn new(platform: Platform) -> Self { Self { platform } }

    fn render_team(&self, team: &TeamSummary) -> TeamListRenderParams {
        let mut badges = InlineVec::new();
        if team.is_open {
            badges.push(TeamBadge::Open);
        }
        if team.new_requests > 0 {
            badges.push(TeamBadge::Requests(team.new_requests));
        }
        if team.is_new {
            badges.push(TeamBadge::New);
        }

        let mut actions = InlineVec::new();
        actions.push(TeamListAction::ViewTeam);
        if !self.platform.is_mobile() {
            actions.push(TeamListAction::OpenFolder);
            actions.push(TeamListAction::ManageChat);
        }

        TeamListRenderParams {
            name: team.name.clone(),
            member_count_label: member_count_label(team.member_count),
            badges,
            actions,
            avatar_size: if self.platform.is_mobile() { 48 } else { 32 },
            show_divider: !self.platform.is_mobile(),
        }
    }
}

impl RowDispatcher<TeamListRow> for TeamListDispatcher {
    type Params = TeamListRenderParams;

    fn render_params(&self, row: &TeamListRow, _index: RowIndex) -> CommonResult<Self::Params> {
        match row {
            TeamListRow::Team(team) => ok!(self.render_team(team)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TeamListProps, assert_eq2, project, team_list_rows};
    use smallvec::smallvec;
    use test_case::test_case;

    #[test_case(0, "0 members")]
    #[test_case(1, "1 member")]
    #[test_case(2, "2 members")]
    fn test_member_count_label(count: usize, expected: &str) {
        assert_eq2!(member_count_label(count).as_str(), expected);
    }

    fn team() -> TeamListRow {
        TeamListRow::Team(TeamSummary {
            name: Teamname::from("acme"),
            member_count: 4,
            is_new: true,
            is_open: true,
            new_requests: 2,
        })
    }

    #[test]
    fn test_badge_display() {
        assert_eq2!(TeamBadge::Requests(3).to_string(), "(3)");
        assert_eq2!(TeamBadge::Open.to_string(), "OPEN");
    }

    #[test]
    fn test_desktop() {
        let it = TeamListDispatcher::new(Platform::Desktop)
            .dispatch(&team(), RowIndex::new(0))
            .unwrap();
        assert_eq2!(it.key.as_str(), "team:acme");
        let expected_badges: InlineVec<TeamBadge> =
            smallvec![TeamBadge::Open, TeamBadge::Requests(2), TeamBadge::New];
        assert_eq2!(it.params.badges, expected_badges);
        let expected_actions: InlineVec<TeamListAction> = smallvec![
            TeamListAction::ViewTeam,
            TeamListAction::OpenFolder,
            TeamListAction::ManageChat
        ];
        assert_eq2!(it.params.actions, expected_actions);
        assert!(it.params.show_divider);
    }

    #[test]
    fn test_mobile_only_views_team() {
        let it = TeamListDispatcher::new(Platform::Mobile)
            .dispatch(&team(), RowIndex::new(0))
            .unwrap();
        let expected: InlineVec<TeamListAction> = smallvec![TeamListAction::ViewTeam];
        assert_eq2!(it.params.actions, expected);
        assert_eq2!(it.params.avatar_size, 48);
        assert!(!it.params.show_divider);
    }

    #[test]
    fn test_no_badges_for_plain_team() {
        let row = TeamListRow::Team(TeamSummary::new(Teamname::from("plain")));
        let it = TeamListDispatcher::default().dispatch(&row, RowIndex::new(0)).unwrap();
        assert!(it.params.badges.is_empty());
        assert_eq2!(it.params.member_count_label.as_str(), "0 members");
    }

    #[test]
    fn test_duplicate_teamnames_fail_projection() {
        let props = TeamListProps {
            teamnames: vec![Teamname::from("acme"), Teamname::from("acme")],
            ..Default::default()
        };
        let rows = team_list_rows(&props);
        assert!(project(&rows, &TeamListDispatcher::default()).is_err());
    }
}
