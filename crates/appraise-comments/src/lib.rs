//! # appraise-comments
//!
//! Comment-thread model, location index, and snippet resolver for code
//! review display.
//!
//! ## Design Principles
//!
//! This crate is designed to be **instrumented** — it receives data and
//! resolves derived state without directly calling external APIs. The only
//! I/O happens through collaborator traits supplied by the embedding
//! application:
//!
//! - [`ContentProvider`] fetches raw file text at a revision
//! - [`PageSource`] fetches pages of a listing by opaque token
//!
//! This enables testability without mocking HTTP clients and keeps the core
//! reusable across backends.
//!
//! ## Resolution pipeline
//!
//! A fetched [`CommentThread`] forest stays immutable. Derived state lives
//! in a [`ReviewOverlay`] keyed by thread hash:
//!
//! ```rust,ignore
//! use appraise_comments::{CommentLocationIndex, ReviewOverlay, SnippetResolver};
//!
//! let index = CommentLocationIndex::build(&threads);
//! let mut overlay = ReviewOverlay::from_threads(&threads);
//!
//! let resolver = SnippetResolver::new(&provider);
//! let report = resolver.resolve(&index, &mut overlay).await;
//!
//! for failure in &report.failures {
//!     // Render the affected comments without inline context.
//! }
//! ```

pub mod config;
pub mod index;
pub mod model;
pub mod resolver;
pub mod traits;
pub mod walk;

// Re-export commonly used types
pub use config::SnippetConfig;
pub use index::CommentLocationIndex;
pub use model::{
    Comment, CommentThread, Location, Range, ReviewOverlay, Snippet, SnippetLine, ThreadOverlay,
    ThreadStatus,
};
pub use resolver::{FetchFailure, OutOfRangeAnchor, ResolveReport, SnippetResolver};
pub use traits::{ContentProvider, NoOpContentProvider, Page, PageSource, Pager};
pub use walk::{Traversal, walk_threads};
