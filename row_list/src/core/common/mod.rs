// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod common_result;
pub mod inline_types;
pub mod row_list_error;

// Re-export.
pub use common_result::*;
pub use inline_types::*;
pub use row_list_error::*;
