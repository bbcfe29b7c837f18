//! Generic traversal over a comment-thread forest.
//!
//! The surrounding system needs two traversal shapes over the same
//! structure: derived display state is computed for every thread, while
//! location indexing inspects only the roots. Both are the same walk with an
//! explicit mode rather than two ad hoc recursions.

use crate::model::CommentThread;

/// How far a walk over the thread forest descends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Visit only the top-level threads.
    RootsOnly,
    /// Visit every thread, depth-first, parents before children.
    Deep,
}

/// Visit threads of `forest` in order, descending per `mode`.
pub fn walk_threads<'a, F>(forest: &'a [CommentThread], mode: Traversal, visit: &mut F)
where
    F: FnMut(&'a CommentThread),
{
    for thread in forest {
        visit(thread);
        if mode == Traversal::Deep {
            walk_threads(&thread.children, mode, visit);
        }
    }
}
