// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Loading row fixtures and list props from JSON files on disk. This is the only place
//! in the crate that does any I/O, and it is only used by the `rowlist` binary and
//! tests. The engine itself never touches the filesystem.

use std::{fs, io::ErrorKind, path::Path};

use miette::{IntoDiagnostic, WrapErr};
use serde::de::DeserializeOwned;

use crate::{CommonResult, RowVariant, ok, try_decode_rows};

/// A JSON file and a human readable name for what it holds (eg: `"rows"`), which is
/// used in log messages and diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct JsonFile<'a> {
    pub path: &'a Path,
    pub which: &'a str,
}

impl<'a> JsonFile<'a> {
    #[must_use]
    pub fn new(path: &'a Path, which: &'a str) -> Self { Self { path, which } }

    /// Read the whole file. Returns `None` if it is empty (or only whitespace), so that
    /// callers can treat empty files as "nothing to render".
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist or can't be read.
    pub fn try_read(&self) -> CommonResult<Option<String>> {
        tracing::debug!(message = "+ loading file", which = self.which, path = %self.path.display());

        let text = match fs::read_to_string(self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::warn!(message = "file not found", which = self.which, path = %self.path.display());
                return Err(miette::miette!(
                    help = "Check the path that was passed on the command line.",
                    "No {} file found; tried {}",
                    self.which,
                    self.path.display()
                ));
            }
            Err(err) => {
                return Err(err).into_diagnostic().wrap_err_with(|| {
                    format!("Could not read {} file {}", self.which, self.path.display())
                });
            }
        };

        tracing::debug!(message = "- successfully loaded file", which = self.which);

        if text.trim().is_empty() {
            return ok!(None);
        }
        ok!(Some(text))
    }

    /// Load a JSON array of untyped row descriptors and decode it into typed rows. An
    /// empty file is an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read, or if any row fails to decode (see
    /// [`try_decode_rows`]).
    pub fn try_load_rows<R>(&self) -> CommonResult<Vec<R>>
    where
        R: RowVariant + DeserializeOwned,
    {
        match self.try_read()? {
            None => ok!(vec![]),
            Some(text) => try_decode_rows(&text).wrap_err_with(|| {
                format!("Error decoding {} file {}", self.which, self.path.display())
            }),
        }
    }

    /// Load a JSON object. An empty file produces `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or doesn't deserialize into `T`.
    pub fn try_load<T>(&self) -> CommonResult<T>
    where
        T: DeserializeOwned + Default,
    {
        match self.try_read()? {
            None => ok!(T::default()),
            Some(text) => serde_json::from_str(&text)
                .into_diagnostic()
                .wrap_err_with(|| {
                    format!("Error decoding {} file {}", self.which, self.path.display())
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::{RowKind, TeamListProps, TeamRow, TeamRowKind, assert_eq2};

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_names_what_was_tried() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let err = JsonFile::new(&path, "rows").try_read().unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("No rows file found; tried"));
        assert!(msg.contains("nope.json"));
    }

    #[test]
    fn test_empty_file_is_empty_rows() {
        let file = write_temp("   \n");
        let rows: Vec<TeamRow> = JsonFile::new(file.path(), "rows").try_load_rows().unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_load_rows() {
        let file = write_temp(r#"[{"type": "header", "teamname": "acme"}]"#);
        let rows: Vec<TeamRow> = JsonFile::new(file.path(), "rows").try_load_rows().unwrap();
        assert_eq2!(rows.len(), 1);
        assert_eq2!(rows[0].kind(), TeamRowKind::Header);
        assert_eq2!(TeamRowKind::Header.tag(), "header");
    }

    #[test]
    fn test_empty_props_file_is_default() {
        let file = write_temp("");
        let props: TeamListProps = JsonFile::new(file.path(), "props").try_load().unwrap();
        assert_eq2!(props, TeamListProps::default());
    }

    #[test]
    fn test_bad_props_file_is_an_error() {
        let file = write_temp("{ not json");
        let res: CommonResult<TeamListProps> = JsonFile::new(file.path(), "props").try_load();
        assert!(res.is_err());
    }
}
