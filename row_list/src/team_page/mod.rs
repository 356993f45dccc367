// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Rows of a team's detail page: a header, the tab strip, and then the contents of the
//! selected tab (members, subteams, invites or settings).

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach sources.
mod member_renderer;
mod subteam_renderer;
mod tabs_row;
mod team_page_dispatcher;
mod team_row;
mod teamname;

// Re-export.
pub use member_renderer::*;
pub use subteam_renderer::*;
pub use tabs_row::*;
pub use team_page_dispatcher::*;
pub use team_row::*;
pub use teamname::*;
