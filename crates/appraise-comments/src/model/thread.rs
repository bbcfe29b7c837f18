//! Comment-thread data transfer objects
//!
//! These types mirror the JSON produced by the review backend. They are
//! read-mostly: derived state (status badges, resolved snippets) lives in a
//! separate overlay so the fetched forest stays immutable.

use serde::{Deserialize, Serialize};

/// A comment thread as supplied by the review backend.
///
/// Threads form a forest: replies nest under `children`, and only top-level
/// threads carry source location anchors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThread {
    /// Content hash identifying the thread, unique within a review.
    pub hash: String,

    /// The comment payload.
    pub comment: Comment,

    /// Tri-state resolution marker; absent means purely informational.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,

    /// Nested reply threads, in display order.
    #[serde(default)]
    pub children: Vec<CommentThread>,
}

/// The comment payload of a thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Comment body (markdown source; rendering is the caller's concern).
    #[serde(default)]
    pub description: String,

    /// Seconds since the unix epoch, kept as the opaque wire string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    /// Where in the source the comment was left, if anywhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// Source location a comment refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Commit the comment was anchored against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,

    /// File path relative to the repository root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Line range within the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
}

/// Line range within a file; only the start line is used for anchoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    /// 1-based first line of the range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_line: Option<u32>,
}

impl CommentThread {
    /// The (commit, path, line) anchor, when fully specified.
    ///
    /// A thread missing any part of the location is simply unanchored;
    /// that is a valid state, not an error.
    pub fn anchor(&self) -> Option<(&str, &str, u32)> {
        let location = self.comment.location.as_ref()?;
        let commit = location.commit.as_deref()?;
        let path = location.path.as_deref()?;
        let line = location.range.as_ref()?.start_line?;
        Some((commit, path, line))
    }

    /// Review status, derived from the tri-state `resolved` marker.
    pub fn status(&self) -> ThreadStatus {
        ThreadStatus::from_resolved(self.resolved)
    }
}

/// Review status of a thread, computed once when the review loads rather
/// than re-derived from presence checks at every use site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreadStatus {
    /// Reviewer marked the thread resolved.
    Resolved,
    /// Reviewer asked for further work.
    NeedsWork,
    /// No resolution requested either way.
    #[default]
    Informational,
}

impl ThreadStatus {
    /// Map the backend's optional `resolved` field to a status.
    pub fn from_resolved(resolved: Option<bool>) -> Self {
        match resolved {
            Some(true) => ThreadStatus::Resolved,
            Some(false) => ThreadStatus::NeedsWork,
            None => ThreadStatus::Informational,
        }
    }

    /// Short badge token used by the review UI.
    pub fn badge(&self) -> &'static str {
        match self {
            ThreadStatus::Resolved => "lgtm",
            ThreadStatus::NeedsWork => "nmw",
            ThreadStatus::Informational => "fyi",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserialize_backend_shape() {
        let thread: CommentThread = serde_json::from_value(json!({
            "hash": "abcdef",
            "comment": {
                "description": "Needs a null check",
                "timestamp": "1450828543",
                "location": {
                    "commit": "abc123",
                    "path": "foo.txt",
                    "range": { "startLine": 10 },
                },
            },
            "resolved": false,
            "children": [
                {
                    "hash": "123456",
                    "comment": { "description": "Done" },
                },
            ],
        }))
        .unwrap();

        assert_eq!(thread.hash, "abcdef");
        assert_eq!(thread.anchor(), Some(("abc123", "foo.txt", 10)));
        assert_eq!(thread.status(), ThreadStatus::NeedsWork);
        assert_eq!(thread.children.len(), 1);
        assert_eq!(thread.children[0].status(), ThreadStatus::Informational);
        assert_eq!(thread.children[0].anchor(), None);
    }

    #[test]
    fn test_anchor_requires_every_part() {
        let mut thread: CommentThread = serde_json::from_value(json!({
            "hash": "abcdef",
            "comment": {
                "description": "note",
                "location": { "commit": "abc123", "path": "foo.txt" },
            },
        }))
        .unwrap();

        // Location present but no range.
        assert_eq!(thread.anchor(), None);

        // Range present but no start line.
        thread.comment.location.as_mut().unwrap().range = Some(Range { start_line: None });
        assert_eq!(thread.anchor(), None);

        thread.comment.location.as_mut().unwrap().range = Some(Range {
            start_line: Some(3),
        });
        assert_eq!(thread.anchor(), Some(("abc123", "foo.txt", 3)));
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(ThreadStatus::from_resolved(Some(true)).badge(), "lgtm");
        assert_eq!(ThreadStatus::from_resolved(Some(false)).badge(), "nmw");
        assert_eq!(ThreadStatus::from_resolved(None).badge(), "fyi");
    }

    #[test]
    fn test_serialize_round_trip() {
        let thread = CommentThread {
            hash: "abcdef".to_string(),
            comment: Comment {
                description: "note".to_string(),
                timestamp: Some("1450828543".to_string()),
                location: None,
            },
            resolved: Some(true),
            children: Vec::new(),
        };

        let value = serde_json::to_value(&thread).unwrap();
        let back: CommentThread = serde_json::from_value(value).unwrap();
        assert_eq!(back, thread);
    }
}
