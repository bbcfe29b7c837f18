//! Unified Diff Parser
//!
//! A library for parsing raw unified-diff text (as produced by `git diff`)
//! into per-file, line-numbered views suitable for review display.
//!
//! Absolute line numbers on both sides of the diff are reconstructed from the
//! hunk headers alone, and unchanged lines skipped between hunks are
//! represented by synthetic gap markers. A section that cannot be parsed
//! degrades to a per-file failure without affecting its siblings.
//!
//! # Example
//!
//! ```
//! use appraise_diff_parser::parse_unified_diff;
//!
//! let diff_text = "diff --git a/x b/x\n--- a/x\n+++ b/x\n@@ -1,2 +1,3 @@\n keep\n-old\n+new\n";
//! let view = parse_unified_diff(diff_text);
//!
//! for file in &view.files {
//!     println!("{} ({} lines)", file.description, file.lines.len());
//! }
//! ```

mod parser;
mod types;

pub use parser::{DiffView, ParseError, SectionError, parse_unified_diff};
pub use types::*;
