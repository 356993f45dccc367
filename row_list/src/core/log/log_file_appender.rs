// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use tracing_appender::rolling::{self, RollingFileAppender};

use crate::CommonResult;

/// Appender for the `--log-file` of `rowlist`. It never rotates: one run of the binary
/// appends to one file. A bare file name (eg: `rowlist.log`) lands in the current
/// directory.
///
/// Don't wrap the result in [`tracing_appender::non_blocking`]: its worker guard would be
/// dropped as soon as the layer is built, and nothing would be written.
///
/// # Errors
///
/// Returns an error if `log_file_path` doesn't end in a file name (eg: `/` or `logs/..`).
pub fn try_create_log_file_appender(log_file_path: &str) -> CommonResult<RollingFileAppender> {
    let path = Path::new(log_file_path);

    let Some(file_name) = path.file_name() else {
        miette::bail!(
            help = "Pass a file path to `--log-file`, eg: `rowlist.log`",
            "Log file path {:?} doesn't name a file",
            log_file_path
        );
    };

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    Ok(rolling::never(directory, file_name))
}
