// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The boundary where rows arrive untyped, as JSON objects tagged by a `"type"` field:
//!
//! ```json
//! [
//!   { "type": "header", "teamname": "T1" },
//!   { "type": "member", "username": "alice", "teamname": "T1" }
//! ]
//! ```
//!
//! Typed rows can't have unknown tags or mismatched payloads, so this is the only place
//! where [`RowListError::UnhandledVariant`] and [`RowListError::MalformedPayload`] can
//! happen. The tag is checked against the registry of declared kinds
//! ([`RowKind::try_from_tag`]) before the payload is deserialized, so that an unknown
//! tag is reported as such, and not as a generic deserialization failure.

use miette::IntoDiagnostic;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{CommonResult, MISSING_TAG, RowKind, RowListError, RowVariant, inline_string, ok};

/// Name of the field that holds the tag of an untyped row.
pub const ROW_TAG_FIELD: &str = "type";

/// Decode one untyped row.
///
/// # Errors
///
/// - [`RowListError::MalformedPayload`] if there is no string tag field, or the payload
///   doesn't match the shape of its tag.
/// - [`RowListError::UnhandledVariant`] if the tag isn't a declared kind.
pub fn try_decode_row<R>(value: Value) -> CommonResult<R>
where
    R: RowVariant + DeserializeOwned,
{
    let Some(tag) = value.get(ROW_TAG_FIELD).and_then(Value::as_str) else {
        return RowListError::MalformedPayload {
            tag: inline_string!("{MISSING_TAG}"),
            reason: format!("row has no string `{ROW_TAG_FIELD}` field"),
        }
        .into_result();
    };
    let tag = inline_string!("{tag}");

    let Some(kind) = <R::Kind as RowKind>::try_from_tag(&tag) else {
        tracing::error!(message = "unhandled row variant", tag = %tag);
        return RowListError::UnhandledVariant { tag }.into_result();
    };

    match serde_json::from_value::<R>(value) {
        Ok(row) => {
            debug_assert_eq!(row.kind(), kind, "serde tag and kind tag disagree");
            ok!(row)
        }
        Err(err) => RowListError::MalformedPayload {
            tag,
            reason: err.to_string(),
        }
        .into_result(),
    }
}

/// Decode a JSON array of untyped rows, preserving order. The first row that fails to
/// decode fails the whole sequence, so no partial sequence is ever produced.
///
/// # Errors
///
/// Returns an error if `json` isn't a JSON array, or see [`try_decode_row`].
pub fn try_decode_rows<R>(json: &str) -> CommonResult<Vec<R>>
where
    R: RowVariant + DeserializeOwned,
{
    let values: Vec<Value> = serde_json::from_str(json).into_diagnostic()?;

    let mut rows = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        match try_decode_row(value) {
            Ok(row) => rows.push(row),
            Err(report) => {
                tracing::error!(message = "could not decode row", index, error = ?report);
                return Err(report);
            }
        }
    }

    ok!(rows)
}
