//! Generated-region rewriting for the build file
//!
//! The build file carries exactly one machine-generated block, delimited by
//! literal marker lines. Everything between the markers (markers included)
//! is replaced wholesale on every run; text outside the span is preserved
//! byte for byte.

use std::path::Path;

use crate::error::{ParcelError, ParcelResult};

/// Marker opening the generated block
pub const REGION_BEGIN: &str = "#region images";

/// Marker closing the generated block
pub const REGION_END: &str = "#endregion";

/// Replace the marker-delimited region of `content` with `replacement`
///
/// Matches the first occurrence of the begin marker and the first end marker
/// after it; only that one span is rewritten even if the file contains
/// several. The rewritten region is normalized to
/// `begin marker` + newline + replacement + newline + `end marker`.
///
/// Fails with [`ParcelError::MissingRegionMarkers`] when the begin marker is
/// absent or no end marker follows it. `file` is only used for error
/// reporting.
pub fn replace_region(content: &str, replacement: &str, file: &Path) -> ParcelResult<String> {
    let begin = content
        .find(REGION_BEGIN)
        .ok_or_else(|| ParcelError::MissingRegionMarkers {
            file: file.to_path_buf(),
        })?;

    let after_begin = begin + REGION_BEGIN.len();
    let end = content[after_begin..]
        .find(REGION_END)
        .map(|i| after_begin + i)
        .ok_or_else(|| ParcelError::MissingRegionMarkers {
            file: file.to_path_buf(),
        })?;

    let mut updated = String::with_capacity(content.len() + replacement.len());
    updated.push_str(&content[..begin]);
    updated.push_str(REGION_BEGIN);
    updated.push('\n');
    updated.push_str(replacement);
    updated.push('\n');
    updated.push_str(REGION_END);
    updated.push_str(&content[end + REGION_END.len()..]);
    Ok(updated)
}
