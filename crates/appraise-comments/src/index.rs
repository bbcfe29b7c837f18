//! Location index grouping comment anchors by (commit, path, line).

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::model::CommentThread;
use crate::walk::{Traversal, walk_threads};

/// Per-path cell map: start line → hashes of the threads anchored there.
pub type LineAnchors = BTreeMap<u32, HashSet<String>>;

/// Index of anchored thread hashes, keyed commit → path → start line.
///
/// Built once per review load and consumed by the snippet resolver, which
/// issues one content fetch per distinct (commit, path) pair. Only top-level
/// threads are inspected: reply threads do not carry their own anchors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentLocationIndex {
    by_commit: HashMap<String, HashMap<String, LineAnchors>>,
}

impl CommentLocationIndex {
    /// Build the index from a thread forest.
    ///
    /// Threads without a complete (commit, path, start line) anchor are
    /// silently excluded; unanchored is a valid state. Insertion is
    /// idempotent: the same hash at the same cell is recorded once.
    pub fn build(forest: &[CommentThread]) -> Self {
        let mut index = Self::default();
        walk_threads(forest, Traversal::RootsOnly, &mut |thread| {
            if let Some((commit, path, line)) = thread.anchor() {
                index.insert(commit, path, line, &thread.hash);
            }
        });
        index
    }

    fn insert(&mut self, commit: &str, path: &str, line: u32, hash: &str) {
        self.by_commit
            .entry(commit.to_string())
            .or_default()
            .entry(path.to_string())
            .or_default()
            .entry(line)
            .or_default()
            .insert(hash.to_string());
    }

    /// Iterate every distinct (commit, path) pair with its line cells.
    pub fn files(&self) -> impl Iterator<Item = (&str, &str, &LineAnchors)> {
        self.by_commit.iter().flat_map(|(commit, paths)| {
            paths
                .iter()
                .map(move |(path, lines)| (commit.as_str(), path.as_str(), lines))
        })
    }

    /// Hashes anchored at an exact (commit, path, line) cell.
    pub fn hashes_at(&self, commit: &str, path: &str, line: u32) -> Option<&HashSet<String>> {
        self.by_commit.get(commit)?.get(path)?.get(&line)
    }

    /// Number of distinct (commit, path) pairs — the number of content
    /// fetches a resolution pass will issue.
    pub fn file_count(&self) -> usize {
        self.by_commit.values().map(HashMap::len).sum()
    }

    /// Whether no thread carried a full anchor.
    pub fn is_empty(&self) -> bool {
        self.by_commit.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn thread(hash: &str, location: serde_json::Value) -> serde_json::Value {
        json!({
            "hash": hash,
            "comment": { "description": "note", "location": location },
        })
    }

    fn build(threads: serde_json::Value) -> CommentLocationIndex {
        let forest: Vec<CommentThread> = serde_json::from_value(threads).unwrap();
        CommentLocationIndex::build(&forest)
    }

    #[test]
    fn test_groups_by_commit_path_and_line() {
        let index = build(json!([
            thread("h1", json!({ "commit": "c1", "path": "a.txt", "range": { "startLine": 5 } })),
            thread("h2", json!({ "commit": "c1", "path": "a.txt", "range": { "startLine": 5 } })),
            thread("h3", json!({ "commit": "c1", "path": "a.txt", "range": { "startLine": 9 } })),
            thread("h4", json!({ "commit": "c1", "path": "b.txt", "range": { "startLine": 1 } })),
            thread("h5", json!({ "commit": "c2", "path": "a.txt", "range": { "startLine": 5 } })),
        ]));

        assert_eq!(index.file_count(), 3);

        let at_five = index.hashes_at("c1", "a.txt", 5).unwrap();
        assert_eq!(at_five.len(), 2);
        assert!(at_five.contains("h1") && at_five.contains("h2"));

        assert_eq!(index.hashes_at("c1", "a.txt", 9).unwrap().len(), 1);
        assert_eq!(index.hashes_at("c2", "a.txt", 5).unwrap().len(), 1);
        assert_eq!(index.hashes_at("c1", "b.txt", 9), None);
    }

    #[test]
    fn test_partial_anchors_are_excluded() {
        let index = build(json!([
            // No location at all.
            { "hash": "h1", "comment": { "description": "general remark" } },
            // Missing path.
            thread("h2", json!({ "commit": "c1", "range": { "startLine": 5 } })),
            // Missing start line.
            thread("h3", json!({ "commit": "c1", "path": "a.txt", "range": {} })),
            // Missing range entirely.
            thread("h4", json!({ "commit": "c1", "path": "a.txt" })),
        ]));

        assert!(index.is_empty());
    }

    #[test]
    fn test_insertion_is_idempotent() {
        let anchor = json!({ "commit": "c1", "path": "a.txt", "range": { "startLine": 5 } });
        let index = build(json!([thread("h1", anchor.clone()), thread("h1", anchor)]));

        assert_eq!(index.hashes_at("c1", "a.txt", 5).unwrap().len(), 1);
    }

    #[test]
    fn test_reply_anchors_are_not_indexed() {
        let forest: Vec<CommentThread> = serde_json::from_value(json!([
            {
                "hash": "root",
                "comment": { "description": "no anchor here" },
                "children": [
                    thread("reply", json!({
                        "commit": "c1", "path": "a.txt", "range": { "startLine": 5 },
                    })),
                ],
            },
        ]))
        .unwrap();

        let index = CommentLocationIndex::build(&forest);
        assert!(index.is_empty());
    }

    #[test]
    fn test_lines_iterate_in_order() {
        let index = build(json!([
            thread("h1", json!({ "commit": "c1", "path": "a.txt", "range": { "startLine": 9 } })),
            thread("h2", json!({ "commit": "c1", "path": "a.txt", "range": { "startLine": 2 } })),
            thread("h3", json!({ "commit": "c1", "path": "a.txt", "range": { "startLine": 5 } })),
        ]));

        let (_, _, lines) = index.files().next().unwrap();
        let ordered: Vec<u32> = lines.keys().copied().collect();
        assert_eq!(ordered, vec![2, 5, 9]);
    }
}
