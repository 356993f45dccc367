// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BigTeamChannelRow, BottomLine, CommonResult, InboxRow, InlineString,
            RowDispatcher, RowIndex, SmallTeamRow, Teamname, inline_string, ok};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmallTeamRenderParams {
    pub name: String,
    pub is_muted: bool,
    /// `None` means the row is a single line.
    pub bottom_line: Option<BottomLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigTeamChannelRenderParams {
    pub teamname: Teamname,
    /// Channel name w/ its `#` prefix.
    pub channel_label: InlineString,
    pub is_bold: bool,
    pub is_muted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboxRenderParams {
    Small(SmallTeamRenderParams),
    BigTeamsLabel { is_filtered: bool },
    BigHeader { teamname: Teamname },
    Big(BigTeamChannelRenderParams),
    Divider { hidden_count: usize },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InboxDispatcher;

impl InboxDispatcher {
    fn render_small(row: &SmallTeamRow) -> SmallTeamRenderParams {
        SmallTeamRenderParams {
            name: row.name.clone(),
            is_muted: row.is_muted,
            bottom_line: row.bottom_line.bottom_line(),
        }
    }

    fn render_big(row: &BigTeamChannelRow) -> BigTeamChannelRenderParams {
        BigTeamChannelRenderParams {
            teamname: row.teamname.clone(),
            channel_label: inline_string!("#{}", row.channelname),
            is_bold: row.has_unread && !row.is_muted,
            is_muted: row.is_muted,
        }
    }
}

impl RowDispatcher<InboxRow> for InboxDispatcher {
    type Params = InboxRenderParams;

    fn render_params(&self, row: &InboxRow, _index: RowIndex) -> CommonResult<Self::Params> {
        let it = match row {
            InboxRow::Small(small) => InboxRenderParams::Small(Self::render_small(small)),
            InboxRow::BigTeamsLabel { is_filtered } => InboxRenderParams::BigTeamsLabel {
                is_filtered: *is_filtered,
            },
            InboxRow::BigHeader { teamname } => InboxRenderParams::BigHeader {
                teamname: teamname.clone(),
            },
            InboxRow::Big(big) => InboxRenderParams::Big(Self::render_big(big)),
            InboxRow::Divider { hidden_count } => InboxRenderParams::Divider {
                hidden_count: *hidden_count,
            },
        };
        ok!(it)
    }
}
