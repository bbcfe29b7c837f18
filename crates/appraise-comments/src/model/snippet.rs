//! Resolved source snippets shown as inline comment context.

use serde::{Deserialize, Serialize};

/// A small window of source text surrounding a comment anchor.
///
/// Snippets are immutable once constructed and shared by `Arc` across every
/// thread anchored at the same (commit, path, line).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    /// Commit the content was fetched at.
    pub commit: String,

    /// File path relative to the repository root.
    pub path: String,

    /// Window lines in order, ending at the anchor line.
    pub lines: Vec<SnippetLine>,
}

/// One line of a snippet window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetLine {
    /// 1-based line number in the fetched file.
    pub line_number: u32,

    /// Raw line content, without the trailing newline.
    pub contents: String,
}

impl Snippet {
    /// First line number of the window, if any lines were captured.
    pub fn start_line(&self) -> Option<u32> {
        self.lines.first().map(|l| l.line_number)
    }

    /// Last line number of the window (the anchor line).
    pub fn end_line(&self) -> Option<u32> {
        self.lines.last().map(|l| l.line_number)
    }
}
