// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod json_file;
pub mod report_handler;

// Re-export.
pub use json_file::*;
pub use report_handler::*;
