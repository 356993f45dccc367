// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Write as _;

use crate::{BottomLineContent, InboxRenderParams, MemberRenderParams, TabKey, TabsRow,
            TeamListRenderParams, TeamPageRenderParams};

/// Render params that can be drawn as one line of plain text. The line is not yet
/// truncated, that is up to [`crate::PlainTextHost`].
pub trait RenderLine {
    fn render_line(&self) -> String;
}

impl RenderLine for TeamPageRenderParams {
    fn render_line(&self) -> String {
        match self {
            TeamPageRenderParams::Header { teamname } => format!("▌{teamname}"),
            TeamPageRenderParams::Tabs(tabs) => render_tabs(tabs),
            TeamPageRenderParams::Member(member) => render_member(member),
            TeamPageRenderParams::Subteam(subteam) => format!("  ├ {}", subteam.short_name),
            TeamPageRenderParams::Invites { teamname } => format!("  Invites to {teamname}"),
            TeamPageRenderParams::Settings { teamname } => format!("  Settings of {teamname}"),
        }
    }
}

fn render_tabs(tabs: &TabsRow) -> String {
    let labels: Vec<String> = tabs
        .visible_tabs()
        .into_iter()
        .map(|tab| {
            let mut acc = match tab {
                TabKey::Members => format!("{tab} ({})", tabs.member_count),
                TabKey::Invites => format!("{tab} ({})", tabs.num_invites),
                TabKey::Subteams => format!("{tab} ({})", tabs.num_subteams),
                TabKey::Settings => tab.to_string(),
            };
            if tab == TabKey::Members {
                let requests = tabs.request_badge_count();
                if requests > 0 {
                    _ = write!(acc, " +{requests}");
                }
            }
            if tabs.selected_tab == Some(tab) {
                format!("[{acc}]")
            } else {
                acc
            }
        })
        .collect();

    let mut acc = labels.join(" | ");
    if tabs.loading {
        acc.push_str(" ⋯");
    }
    acc
}

fn render_member(member: &MemberRenderParams) -> String {
    let mut acc = format!("  {}", member.username);
    if let Some(full_name) = &member.full_name {
        _ = write!(acc, " · {full_name}");
    }
    if let Some(role) = member.role {
        _ = write!(acc, " · {role}");
    }
    acc
}

impl RenderLine for TeamListRenderParams {
    fn render_line(&self) -> String {
        let mut acc = self.name.to_string();
        for badge in &self.badges {
            _ = write!(acc, " {badge}");
        }
        _ = write!(acc, " · {}", self.member_count_label);
        acc
    }
}

impl RenderLine for InboxRenderParams {
    fn render_line(&self) -> String {
        match self {
            InboxRenderParams::Small(small) => {
                let mut acc = small.name.clone();
                if small.is_muted {
                    acc.push_str(" (muted)");
                }
                if let Some(bottom_line) = &small.bottom_line {
                    acc.push_str(" | ");
                    if bottom_line.show_reset_badge {
                        acc.push_str("RESET ");
                    }
                    match &bottom_line.content {
                        BottomLineContent::Snippet { text, bold: true } => {
                            _ = write!(acc, "*{text}*");
                        }
                        content => {
                            _ = write!(acc, "{content}");
                        }
                    }
                }
                acc
            }
            InboxRenderParams::BigTeamsLabel { is_filtered } => {
                if *is_filtered {
                    "Big teams (filtered)".to_string()
                } else {
                    "Big teams".to_string()
                }
            }
            InboxRenderParams::BigHeader { teamname } => format!("▌{teamname}"),
            InboxRenderParams::Big(big) => {
                if big.is_bold {
                    format!("  *{}*", big.channel_label)
                } else {
                    format!("  {}", big.channel_label)
                }
            }
            InboxRenderParams::Divider { hidden_count } => {
                if *hidden_count == 0 {
                    "──────".to_string()
                } else {
                    format!("── {hidden_count} more ──")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BottomLine, SmallTeamRenderParams, Teamname, assert_eq2};

    #[test]
    fn test_tabs_line() {
        let mut tabs = TabsRow::new(Teamname::from("acme"));
        tabs.admin = true;
        tabs.member_count = 3;
        tabs.num_invites = 1;
        tabs.num_requests = 2;
        tabs.selected_tab = Some(TabKey::Members);
        assert_eq2!(
            TeamPageRenderParams::Tabs(tabs).render_line(),
            "[members (3) +2] | invites (1) | settings"
        );
    }

    #[test]
    fn test_small_line_w_reset_badge_and_bold_snippet() {
        let it = InboxRenderParams::Small(SmallTeamRenderParams {
            name: "alice,bob".into(),
            is_muted: false,
            bottom_line: Some(BottomLine {
                content: BottomLineContent::Snippet {
                    text: "hi".into(),
                    bold: true,
                },
                show_reset_badge: true,
            }),
        });
        assert_eq2!(it.render_line(), "alice,bob | RESET *hi*");
    }

    #[test]
    fn test_small_line_wo_bottom_line() {
        let it = InboxRenderParams::Small(SmallTeamRenderParams {
            name: "alice,bob".into(),
            is_muted: true,
            bottom_line: None,
        });
        assert_eq2!(it.render_line(), "alice,bob (muted)");
    }
}
