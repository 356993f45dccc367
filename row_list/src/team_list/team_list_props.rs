// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::HashMap;

use serde::Deserialize;

use crate::{TeamListRow, TeamSummary, Teamname};

/// Everything known about the user's teams, as it comes from the store. Turned into
/// rows w/ [`team_list_rows()`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TeamListProps {
    pub teamnames: Vec<Teamname>,
    pub teammembercounts: HashMap<Teamname, usize>,
    #[serde(rename = "teamNameToIsOpen")]
    pub team_name_to_is_open: HashMap<Teamname, bool>,
    #[serde(rename = "newTeams")]
    pub new_teams: Vec<Teamname>,
    /// One entry per pending request, so a team can appear more than once.
    #[serde(rename = "newTeamRequests")]
    pub new_team_requests: Vec<Teamname>,
}

/// Assemble one row per team, in the order of [`TeamListProps::teamnames`]. Teams that
/// are missing from the count or open maps have zero members and are closed.
#[must_use]
pub fn team_list_rows(props: &TeamListProps) -> Vec<TeamListRow> {
    props
        .teamnames
        .iter()
        .map(|name| {
            TeamListRow::Team(TeamSummary {
                name: name.clone(),
                member_count: props.teammembercounts.get(name).copied().unwrap_or(0),
                is_new: props.new_teams.contains(name),
                is_open: props.team_name_to_is_open.get(name).copied().unwrap_or(false),
                new_requests: props.new_team_requests.iter().filter(|it| *it == name).count(),
            })
        })
        .collect()
}
