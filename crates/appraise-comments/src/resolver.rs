//! Snippet resolution: batched content fetches and context-window
//! attachment.

use std::sync::Arc;

use futures::future::join_all;
use log::warn;

use crate::config::SnippetConfig;
use crate::index::{CommentLocationIndex, LineAnchors};
use crate::model::{ReviewOverlay, Snippet, SnippetLine};
use crate::traits::ContentProvider;

/// A content fetch that failed; the affected threads keep no snippet.
#[derive(Debug)]
pub struct FetchFailure {
    /// Commit the fetch targeted.
    pub commit: String,
    /// Path the fetch targeted.
    pub path: String,
    /// The collaborator's error.
    pub error: anyhow::Error,
}

/// An anchor line outside the fetched file. Informational, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutOfRangeAnchor {
    /// Commit the anchor refers to.
    pub commit: String,
    /// Path the anchor refers to.
    pub path: String,
    /// The 1-based anchor line that fell outside the file.
    pub line: u32,
}

/// Outcome of one resolution pass.
#[derive(Debug, Default)]
pub struct ResolveReport {
    /// (commit, path) pairs whose fetch failed.
    pub failures: Vec<FetchFailure>,
    /// Anchors that fell outside their fetched file.
    pub out_of_range: Vec<OutOfRangeAnchor>,
}

impl ResolveReport {
    /// Whether every anchor resolved to a snippet.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.out_of_range.is_empty()
    }
}

/// Resolves snippet windows for every anchored thread in an index.
///
/// All anchor lines for a given (commit, path) are grouped before any fetch
/// is issued, guaranteeing at most one content fetch per distinct pair no
/// matter how many threads reference it. Fetches for distinct pairs run
/// concurrently, and a failing pair never blocks or corrupts the others.
pub struct SnippetResolver<'a> {
    provider: &'a dyn ContentProvider,
    config: SnippetConfig,
}

impl<'a> SnippetResolver<'a> {
    /// Create a resolver with the default window size.
    pub fn new(provider: &'a dyn ContentProvider) -> Self {
        Self::with_config(provider, SnippetConfig::default())
    }

    /// Create a resolver with explicit tunables.
    pub fn with_config(provider: &'a dyn ContentProvider, config: SnippetConfig) -> Self {
        Self { provider, config }
    }

    /// Resolve every (commit, path) group in `index`, attaching one shared
    /// snippet per distinct anchor line into `overlay`.
    ///
    /// Completions are merged after all fetches settle; there is no ordering
    /// guarantee between pairs and none is needed.
    pub async fn resolve(
        &self,
        index: &CommentLocationIndex,
        overlay: &mut ReviewOverlay,
    ) -> ResolveReport {
        let fetches = index.files().map(|(commit, path, lines)| async move {
            let fetched = self.provider.fetch_content(commit, path).await;
            (commit, path, lines, fetched)
        });

        let mut report = ResolveReport::default();
        for (commit, path, lines, fetched) in join_all(fetches).await {
            match fetched {
                Ok(contents) => {
                    self.attach_file(commit, path, lines, &contents, overlay, &mut report);
                }
                Err(error) => {
                    warn!("failed to fetch {path} at {commit}: {error:#}");
                    report.failures.push(FetchFailure {
                        commit: commit.to_string(),
                        path: path.to_string(),
                        error,
                    });
                }
            }
        }
        report
    }

    /// Attach snippets for every anchor line of one fetched file.
    fn attach_file(
        &self,
        commit: &str,
        path: &str,
        lines: &LineAnchors,
        contents: &str,
        overlay: &mut ReviewOverlay,
        report: &mut ResolveReport,
    ) {
        let content_lines: Vec<&str> = contents.split('\n').collect();

        for (&line, hashes) in lines {
            let Some(snippet) =
                snippet_window(commit, path, line, &content_lines, self.config.context_lines)
            else {
                report.out_of_range.push(OutOfRangeAnchor {
                    commit: commit.to_string(),
                    path: path.to_string(),
                    line,
                });
                continue;
            };

            // Every thread at this anchor shares the same instance.
            let snippet = Arc::new(snippet);
            for hash in hashes {
                overlay.attach_snippet(hash, Arc::clone(&snippet));
            }
        }
    }
}

/// Compute the window of at most `context_lines` lines ending at `line`
/// (1-based), clipped at the file start. `None` when the anchor falls
/// outside the file.
fn snippet_window(
    commit: &str,
    path: &str,
    line: u32,
    content_lines: &[&str],
    context_lines: usize,
) -> Option<Snippet> {
    if line < 1 || line as usize > content_lines.len() {
        return None;
    }

    let end = (line as usize) - 1;
    let start = end + 1 - context_lines.min(end + 1);
    let lines = (start..=end)
        .map(|i| SnippetLine {
            line_number: (i + 1) as u32,
            contents: content_lines[i].to_string(),
        })
        .collect();

    Some(Snippet {
        commit: commit.to_string(),
        path: path.to_string(),
        lines,
    })
}
