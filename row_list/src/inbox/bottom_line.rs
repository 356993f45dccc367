// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use serde::Deserialize;

/// The state of a small team conversation that decides what goes in the second line of
/// its inbox row. All fields are optional in the untyped form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct BottomLineState {
    pub you_need_to_rekey: bool,
    pub you_are_reset: bool,
    pub participant_need_to_rekey: bool,
    pub has_reset_users: bool,
    pub has_unread: bool,
    pub snippet: Option<String>,
}

/// What the second line says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BottomLineContent {
    /// Shown as an alert badge.
    RekeyNeeded,
    YouAreReset,
    WaitingForParticipantsToRekey,
    Snippet { text: String, bold: bool },
}

impl Display for BottomLineContent {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            BottomLineContent::RekeyNeeded => f.write_str("REKEY NEEDED"),
            BottomLineContent::YouAreReset => f.write_str("You have to be let back in."),
            BottomLineContent::WaitingForParticipantsToRekey => {
                f.write_str("Waiting for participants to rekey")
            }
            BottomLineContent::Snippet { text, .. } => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BottomLine {
    pub content: BottomLineContent,
    pub show_reset_badge: bool,
}

impl BottomLineState {
    /// Pick the content by strict priority. Returns `None` when there is nothing to say,
    /// in which case the row has no second line at all (and so no reset badge either).
    #[must_use]
    pub fn bottom_line(&self) -> Option<BottomLine> {
        let content = if self.you_need_to_rekey {
            BottomLineContent::RekeyNeeded
        } else if self.you_are_reset {
            BottomLineContent::YouAreReset
        } else if self.participant_need_to_rekey {
            BottomLineContent::WaitingForParticipantsToRekey
        } else {
            match self.snippet.as_deref() {
                Some(snippet) if !snippet.is_empty() => BottomLineContent::Snippet {
                    text: snippet.to_string(),
                    bold: self.has_unread,
                },
                _ => return None,
            }
        };

        Some(BottomLine {
            content,
            show_reset_badge: self.has_reset_users,
        })
    }
}
