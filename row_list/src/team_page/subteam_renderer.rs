// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonResult, InlineString, RowIndex, SubteamRow, Teamname, VariantRenderer,
            inline_string, ok};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubteamRenderParams {
    pub teamname: Teamname,
    /// Name below the root team, eg: `dev.web` for `acme.dev.web`.
    pub short_name: InlineString,
    pub parent: Option<Teamname>,
    pub index: RowIndex,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSubteamRenderer;

impl VariantRenderer<SubteamRow> for DefaultSubteamRenderer {
    type Output = SubteamRenderParams;

    fn render_variant(
        &self,
        index: RowIndex,
        row: &SubteamRow,
    ) -> CommonResult<SubteamRenderParams> {
        let teamname = &row.teamname;
        ok!(SubteamRenderParams {
            short_name: inline_string!("{}", teamname.name_relative_to(teamname.root())),
            parent: teamname.parent(),
            teamname: teamname.clone(),
            index,
        })
    }
}
