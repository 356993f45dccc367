// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The typed row-list engine. This module knows nothing about teams or chats; the row
//! families in [`crate::team_page`], [`crate::team_list`] and [`crate::inbox`] plug into
//! it by implementing [`RowVariant`] and [`RowDispatcher`].

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach sources.
mod host_binding;
mod projector;
mod render_instruction;
mod row_dispatcher;
mod row_key;
mod row_kind;
mod row_variant;
mod untyped_rows;

#[cfg(test)]
mod test_projector_scenarios;

// Re-export.
pub use host_binding::*;
pub use projector::*;
pub use render_instruction::*;
pub use row_dispatcher::*;
pub use row_key::*;
pub use row_kind::*;
pub use row_variant::*;
pub use untyped_rows::*;
