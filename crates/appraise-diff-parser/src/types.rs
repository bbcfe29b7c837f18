//! Type definitions for parsed diff views

use serde::{Deserialize, Serialize};

/// A single file's diff, as one ordered run of numbered lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDiff {
    /// Human-readable change summary, e.g. `"Modified src/main.rs"` or
    /// `"Renamed old.rs to new.rs"`.
    pub description: String,

    /// Sequential identifier (`"file0"`, `"file1"`, ...) assigned by section
    /// order within one parse call.
    pub id: String,

    /// The diff lines in display order, including synthetic gap markers.
    pub lines: Vec<DiffLine>,

    /// Whether the file section is expanded in the view.
    pub display: bool,
}

/// A single line in a file diff.
///
/// Both side numbers are always populated: an added line carries the
/// left-hand number it was inserted after (not advanced), and a removed line
/// likewise carries the unadvanced right-hand number. A gap marker holds the
/// position both sides resume at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffLine {
    /// Line number in the left-hand (old) file version.
    pub lhs_number: u32,

    /// Line number in the right-hand (new) file version.
    pub rhs_number: u32,

    /// Line classification.
    pub status: LineStatus,

    /// Line content without the leading `-`/`+`/space, or the gap
    /// description for omitted markers.
    pub text: String,
}

/// Classification of a diff line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStatus {
    /// Unchanged line present on both sides.
    Context,
    /// Line added on the right-hand side (+).
    Added,
    /// Line removed from the left-hand side (-).
    Removed,
    /// Synthetic marker for unchanged lines skipped between hunks.
    Omitted,
}

impl DiffLine {
    /// Create a context line.
    pub fn context(lhs_number: u32, rhs_number: u32, text: impl Into<String>) -> Self {
        Self {
            lhs_number,
            rhs_number,
            status: LineStatus::Context,
            text: text.into(),
        }
    }

    /// Create an added line.
    pub fn added(lhs_number: u32, rhs_number: u32, text: impl Into<String>) -> Self {
        Self {
            lhs_number,
            rhs_number,
            status: LineStatus::Added,
            text: text.into(),
        }
    }

    /// Create a removed line.
    pub fn removed(lhs_number: u32, rhs_number: u32, text: impl Into<String>) -> Self {
        Self {
            lhs_number,
            rhs_number,
            status: LineStatus::Removed,
            text: text.into(),
        }
    }

    /// Create a gap marker at the position both cursors resume at.
    pub fn omitted(lhs_number: u32, rhs_number: u32, skipped: u32) -> Self {
        Self {
            lhs_number,
            rhs_number,
            status: LineStatus::Omitted,
            text: format!("Skipped {skipped} unchanged lines"),
        }
    }
}

impl FileDiff {
    /// Create a file diff; `display` defaults to true.
    pub fn new(description: impl Into<String>, id: impl Into<String>, lines: Vec<DiffLine>) -> Self {
        Self {
            description: description.into(),
            id: id.into(),
            lines,
            display: true,
        }
    }

    /// Highest line number appearing on either side (for gutter width).
    pub fn max_line_number(&self) -> u32 {
        self.lines
            .iter()
            .map(|l| l.lhs_number.max(l.rhs_number))
            .max()
            .unwrap_or(1)
    }
}
