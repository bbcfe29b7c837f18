//! Derived per-thread state, kept outside the fetched forest.

use std::collections::HashMap;
use std::sync::Arc;

use crate::model::{CommentThread, Snippet, ThreadStatus};
use crate::walk::{Traversal, walk_threads};

/// Derived state for a single thread.
#[derive(Debug, Clone, Default)]
pub struct ThreadOverlay {
    /// Status computed once from the thread's `resolved` marker.
    pub status: ThreadStatus,

    /// Resolved snippet window, shared with every thread at the same anchor.
    pub snippet: Option<Arc<Snippet>>,
}

/// Per-review overlay of derived thread state, keyed by thread hash.
///
/// The fetched [`CommentThread`] forest is never mutated; everything the UI
/// derives from it (status badges, resolved snippets) lives here.
#[derive(Debug, Clone, Default)]
pub struct ReviewOverlay {
    entries: HashMap<String, ThreadOverlay>,
}

impl ReviewOverlay {
    /// Build the overlay for a thread forest, computing the status of every
    /// thread (replies included) up front.
    pub fn from_threads(forest: &[CommentThread]) -> Self {
        let mut entries = HashMap::new();
        walk_threads(forest, Traversal::Deep, &mut |thread| {
            entries.insert(
                thread.hash.clone(),
                ThreadOverlay {
                    status: thread.status(),
                    snippet: None,
                },
            );
        });
        Self { entries }
    }

    /// Attach a resolved snippet to the thread with `hash`.
    ///
    /// Attaching twice replaces the previous snippet; an unknown hash gets a
    /// fresh entry with the default status.
    pub fn attach_snippet(&mut self, hash: &str, snippet: Arc<Snippet>) {
        self.entries.entry(hash.to_string()).or_default().snippet = Some(snippet);
    }

    /// The overlay entry for `hash`, if one exists.
    pub fn get(&self, hash: &str) -> Option<&ThreadOverlay> {
        self.entries.get(hash)
    }

    /// The computed status for `hash`.
    pub fn status(&self, hash: &str) -> Option<ThreadStatus> {
        self.entries.get(hash).map(|e| e.status)
    }

    /// The resolved snippet for `hash`, if resolution attached one.
    pub fn snippet(&self, hash: &str) -> Option<&Snippet> {
        self.entries.get(hash)?.snippet.as_deref()
    }

    /// Number of threads tracked by the overlay.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the overlay tracks no threads.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn forest() -> Vec<CommentThread> {
        serde_json::from_value(json!([
            {
                "hash": "root-1",
                "comment": { "description": "fix this" },
                "resolved": false,
                "children": [
                    {
                        "hash": "reply-1",
                        "comment": { "description": "done" },
                        "resolved": true,
                    },
                ],
            },
            {
                "hash": "root-2",
                "comment": { "description": "just fyi" },
            },
        ]))
        .unwrap()
    }

    #[test]
    fn test_statuses_computed_for_every_thread() {
        let overlay = ReviewOverlay::from_threads(&forest());

        assert_eq!(overlay.len(), 3);
        assert_eq!(overlay.status("root-1"), Some(ThreadStatus::NeedsWork));
        assert_eq!(overlay.status("reply-1"), Some(ThreadStatus::Resolved));
        assert_eq!(overlay.status("root-2"), Some(ThreadStatus::Informational));
    }

    #[test]
    fn test_attach_snippet() {
        let mut overlay = ReviewOverlay::from_threads(&forest());
        let snippet = Arc::new(Snippet {
            commit: "abc123".to_string(),
            path: "foo.txt".to_string(),
            lines: Vec::new(),
        });

        overlay.attach_snippet("root-1", Arc::clone(&snippet));

        assert_eq!(overlay.snippet("root-1"), Some(snippet.as_ref()));
        assert_eq!(overlay.snippet("root-2"), None);
        // Status survives the attach.
        assert_eq!(overlay.status("root-1"), Some(ThreadStatus::NeedsWork));
    }
}
