//! Parsing logic for unified diff text

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::types::{DiffLine, FileDiff};

/// Errors that can occur while parsing one file section
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ParseError {
    #[error("Malformed hunk header: {0}")]
    MalformedHunkHeader(String),
}

/// A file section that failed to parse.
///
/// The section keeps its sequential id so the view can render an error
/// indicator in place of the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionError {
    /// The id the section would have carried (`"file3"`, ...).
    pub id: String,
    /// Why the section failed.
    pub error: ParseError,
}

/// Result of parsing one unified diff.
///
/// A malformed section lands in `failures` without affecting any other
/// section; ids are assigned over all sections so they stay stable
/// regardless of which ones degrade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffView {
    /// Successfully parsed file diffs, in input order.
    pub files: Vec<FileDiff>,
    /// Sections that could not be parsed.
    pub failures: Vec<SectionError>,
}

/// Parse unified diff text into per-file line-numbered views.
///
/// The input is split into file sections on the `"\ndiff --git "` boundary
/// and each section is parsed independently, in order. Line numbers for both
/// sides are reconstructed from the hunk headers with two cumulative cursors,
/// and unchanged lines skipped between hunks become synthetic
/// [`LineStatus::Omitted`](crate::LineStatus::Omitted) markers.
///
/// # Example
///
/// ```
/// # use appraise_diff_parser::parse_unified_diff;
/// let view = parse_unified_diff("diff --git a/x b/x\n@@ -1,1 +1,1 @@\n-old\n+new\n");
/// assert_eq!(view.files[0].description, "Modified x");
/// ```
pub fn parse_unified_diff(diff_text: &str) -> DiffView {
    let mut view = DiffView::default();
    let mut ordinal = 0;

    for (index, section) in diff_text.split("\ndiff --git ").enumerate() {
        // An input beginning with the boundary marker yields an empty first
        // segment; it is not a file section.
        if index == 0 && section.is_empty() {
            continue;
        }

        let id = format!("file{ordinal}");
        ordinal += 1;

        match parse_file_section(section, &id) {
            Ok(file) => view.files.push(file),
            Err(error) => {
                log::debug!("diff section {id} failed to parse: {error}");
                view.failures.push(SectionError { id, error });
            }
        }
    }

    view
}

/// Parse a single file section of the diff.
fn parse_file_section(section: &str, id: &str) -> Result<FileDiff, ParseError> {
    let first_line = section.split('\n').next().unwrap_or("");

    // Default file names: the last two whitespace-separated tokens of the
    // section's first line. Explicit ---/+++ lines override them below.
    let mut lhs_name = String::new();
    let mut rhs_name = String::new();
    for token in first_line.split_whitespace() {
        lhs_name = std::mem::replace(&mut rhs_name, token.to_string());
    }

    let mut lhs_number: u32 = 0;
    let mut rhs_number: u32 = 0;
    let mut lines = Vec::new();

    for text in section.split('\n') {
        if let Some(rest) = text.strip_prefix("--- ") {
            lhs_name = rest.to_string();
        } else if let Some(rest) = text.strip_prefix("+++ ") {
            rhs_name = rest.to_string();
        } else if text.starts_with("@@ ") {
            let (next_lhs, next_rhs) = parse_hunk_header(text)?;
            let gap = next_lhs.saturating_sub(lhs_number);
            if gap > 1 {
                lines.push(DiffLine::omitted(next_lhs, next_rhs, gap));
            }
            lhs_number = next_lhs;
            rhs_number = next_rhs;
        } else if let Some(rest) = text.strip_prefix('-') {
            lines.push(DiffLine::removed(lhs_number, rhs_number, rest));
            lhs_number += 1;
        } else if let Some(rest) = text.strip_prefix('+') {
            lines.push(DiffLine::added(lhs_number, rhs_number, rest));
            rhs_number += 1;
        } else if let Some(rest) = text.strip_prefix(' ') {
            lines.push(DiffLine::context(lhs_number, rhs_number, rest));
            lhs_number += 1;
            rhs_number += 1;
        }
        // Anything else (index lines, mode lines, the section header itself)
        // is not a content line and is skipped.
    }

    Ok(FileDiff::new(
        file_description(&lhs_name, &rhs_name),
        id,
        lines,
    ))
}

/// Parse a hunk header of the form `@@ -L,C +L2,C2 @@`, returning the new
/// (lhs, rhs) cursor positions.
fn parse_hunk_header(header: &str) -> Result<(u32, u32), ParseError> {
    static HUNK_REGEX: OnceLock<Regex> = OnceLock::new();

    let re = HUNK_REGEX.get_or_init(|| Regex::new(r"^@@ -(\d+),\d+ \+(\d+),\d+ @@").unwrap());

    let malformed = || ParseError::MalformedHunkHeader(header.to_string());
    let captures = re.captures(header).ok_or_else(malformed)?;
    let lhs = captures[1].parse().map_err(|_| malformed())?;
    let rhs = captures[2].parse().map_err(|_| malformed())?;
    Ok((lhs, rhs))
}

/// Derive the change summary from the final left/right file names.
///
/// The branch order matters: the plain-addition fallback is only reached
/// once both prefixed forms have been ruled out.
fn file_description(lhs_name: &str, rhs_name: &str) -> String {
    if let (Some(lhs), Some(rhs)) = (lhs_name.strip_prefix("a/"), rhs_name.strip_prefix("b/")) {
        if lhs == rhs {
            format!("Modified {lhs}")
        } else {
            format!("Renamed {lhs} to {rhs}")
        }
    } else if let Some(lhs) = lhs_name.strip_prefix("a/") {
        format!("Deleted {lhs}")
    } else {
        format!("Added {}", rhs_name.strip_prefix("b/").unwrap_or(rhs_name))
    }
}
