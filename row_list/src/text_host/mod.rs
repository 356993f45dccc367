// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A [`crate::HostBinding`] that renders each instruction as one keyed line of plain
//! text, truncated to a display width. Used by the `rowlist` binary and by tests.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach sources.
mod plain_text_host;
mod render_line;
mod string_helper;

// Re-export.
pub use plain_text_host::*;
pub use render_line::*;
pub use string_helper::*;
