// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The main list of teams the user belongs to.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach sources.
mod team_list_dispatcher;
mod team_list_props;
mod team_list_row;

// Re-export.
pub use team_list_dispatcher::*;
pub use team_list_props::*;
pub use team_list_row::*;
