// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonResult, DefaultMemberRenderer, DefaultSubteamRenderer,
            MemberRenderParams, MemberRow, RowDispatcher, RowIndex, SubteamRenderParams,
            SubteamRow, TabsRow, TeamRow, Teamname, VariantRenderer, ok};

/// Render params of every kind of [`TeamRow`].
#[derive(Debug, Clone, PartialEq)]
pub enum TeamPageRenderParams {
    Header { teamname: Teamname },
    Tabs(TabsRow),
    Member(MemberRenderParams),
    Subteam(SubteamRenderParams),
    Invites { teamname: Teamname },
    Settings { teamname: Teamname },
}

/// Dispatches [`TeamRow`]s. Member and subteam rows are delegated to pluggable
/// sub-renderers, all the other kinds are copied from the payload.
///
/// ```
/// use r3bl_row_list::{MemberRoster, RosterMemberRenderer, DefaultSubteamRenderer,
///                     TeamPageDispatcher, TeamRole};
///
/// let mut roster = MemberRoster::default();
/// roster.insert("alice", TeamRole::Admin, None);
/// let dispatcher = TeamPageDispatcher::with_renderers(
///     RosterMemberRenderer::new(roster),
///     DefaultSubteamRenderer,
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct TeamPageDispatcher<M = DefaultMemberRenderer, S = DefaultSubteamRenderer> {
    pub member_renderer: M,
    pub subteam_renderer: S,
}

impl TeamPageDispatcher {
    #[must_use]
    pub fn new() -> Self { Self::default() }
}

impl<M, S> TeamPageDispatcher<M, S> {
    pub fn with_renderers(member_renderer: M, subteam_renderer: S) -> Self {
        Self {
            member_renderer,
            subteam_renderer,
        }
    }
}

impl<M, S> RowDispatcher<TeamRow> for TeamPageDispatcher<M, S>
where
    M: VariantRenderer<MemberRow, Output = MemberRenderParams>,
    S: VariantRenderer<SubteamRow, Output = SubteamRenderParams>,
{
    type Params = TeamPageRenderParams;

    fn render_params(&self, row: &TeamRow, index: RowIndex) -> CommonResult<Self::Params> {
        let it = match row {
            TeamRow::Header { teamname } => TeamPageRenderParams::Header {
                teamname: teamname.clone(),
            },
            TeamRow::Tabs(tabs) => TeamPageRenderParams::Tabs(tabs.clone()),
            TeamRow::Member(member) => TeamPageRenderParams::Member(
                self.member_renderer.render_variant(index, member)?,
            ),
            TeamRow::Subteam(subteam) => TeamPageRenderParams::Subteam(
                self.subteam_renderer.render_variant(index, subteam)?,
            ),
            TeamRow::Invites { teamname } => TeamPageRenderParams::Invites {
                teamname: teamname.clone(),
            },
            TeamRow::Settings { teamname } => TeamPageRenderParams::Settings {
                teamname: teamname.clone(),
            },
        };
        ok!(it)
    }
}
