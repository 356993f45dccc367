// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Rows of the chat inbox: small team (and direct message) conversations first, then a
//! divider, then big teams grouped under a header per team.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Attach sources.
mod bottom_line;
mod inbox_dispatcher;
mod inbox_row;

// Re-export.
pub use bottom_line::*;
pub use inbox_dispatcher::*;
pub use inbox_row::*;
