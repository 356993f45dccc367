// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::Deserialize;

use crate::{BottomLineState, InlineString, RowKind, RowVariant, Teamname, inline_string};

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
pub enum InboxRowKind {
    Small,
    BigTeamsLabel,
    BigHeader,
    Big,
    Divider,
}

impl RowKind for InboxRowKind {}

/// One row of the chat inbox. `bigTeamsLabel` and `divider` are singletons (at most one
/// per inbox), so their keys are just their tags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum InboxRow {
    Small(SmallTeamRow),
    BigTeamsLabel {
        #[serde(default)]
        is_filtered: bool,
    },
    BigHeader { teamname: Teamname },
    Big(BigTeamChannelRow),
    Divider {
        /// Small teams that are collapsed under the divider.
        #[serde(default)]
        hidden_count: usize,
    },
}

impl RowVariant for InboxRow {
    type Kind = InboxRowKind;

    fn kind(&self) -> InboxRowKind {
        match self {
            InboxRow::Small(_) => InboxRowKind::Small,
            InboxRow::BigTeamsLabel { .. } => InboxRowKind::BigTeamsLabel,
            InboxRow::BigHeader { .. } => InboxRowKind::BigHeader,
            InboxRow::Big(_) => InboxRowKind::Big,
            InboxRow::Divider { .. } => InboxRowKind::Divider,
        }
    }

    fn identity(&self) -> Option<&str> {
        match self {
            InboxRow::Small(small) => Some(small.conversation_id_key.as_str()),
            InboxRow::Big(big) => Some(big.conversation_id_key.as_str()),
            InboxRow::BigHeader { teamname } => Some(teamname.as_str()),
            InboxRow::BigTeamsLabel { .. } | InboxRow::Divider { .. } => None,
        }
    }
}

/// A small team or direct message conversation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmallTeamRow {
    #[serde(rename = "conversationIDKey")]
    pub conversation_id_key: InlineString,
    /// Team name, or the participants for direct messages.
    pub name: String,
    #[serde(default)]
    pub is_muted: bool,
    #[serde(default)]
    pub bottom_line: BottomLineState,
}

impl SmallTeamRow {
    #[must_use]
    pub fn new(conversation_id_key: &str, name: &str) -> Self {
        Self {
            conversation_id_key: inline_string!("{conversation_id_key}"),
            name: name.to_string(),
            is_muted: false,
            bottom_line: BottomLineState::default(),
        }
    }
}

/// A channel of a big team, shown under its team's header.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BigTeamChannelRow {
    #[serde(rename = "conversationIDKey")]
    pub conversation_id_key: InlineString,
    pub teamname: Teamname,
    pub channelname: InlineString,
    #[serde(default)]
    pub has_unread: bool,
    #[serde(default)]
    pub is_muted: bool,
}

impl BigTeamChannelRow {
    #[must_use]
    pub fn new(conversation_id_key: &str, teamname: Teamname, channelname: &str) -> Self {
        Self {
            conversation_id_key: inline_string!("{conversation_id_key}"),
            teamname,
            channelname: inline_string!("{channelname}"),
            has_unread: false,
            is_muted: false,
        }
    }
}
