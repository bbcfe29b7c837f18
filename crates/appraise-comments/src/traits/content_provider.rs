//! Trait for the file-content fetch collaborator.

use async_trait::async_trait;

/// Provides raw file content at a specific revision.
///
/// The review core never performs I/O itself; the embedding application
/// supplies an implementation backed by its content service (repository
/// endpoint, local git, ...). Failures are recoverable and local: the
/// resolver leaves the affected threads without snippets and carries on.
///
/// # Example
///
/// ```ignore
/// struct HttpContentProvider {
///     client: ApiClient,
///     repo: String,
/// }
///
/// #[async_trait]
/// impl ContentProvider for HttpContentProvider {
///     async fn fetch_content(&self, commit: &str, path: &str) -> anyhow::Result<String> {
///         self.client
///             .get_file_contents(&self.repo, commit, path)
///             .await
///     }
/// }
/// ```
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Fetch the full text of `path` as of `commit`.
    ///
    /// # Arguments
    /// * `commit` - The revision to read from
    /// * `path` - File path relative to the repository root
    ///
    /// # Returns
    /// The raw file text (newline-separated; the caller splits it).
    async fn fetch_content(&self, commit: &str, path: &str) -> anyhow::Result<String>;
}

/// A no-op provider for contexts where snippet resolution is disabled.
pub struct NoOpContentProvider;

#[async_trait]
impl ContentProvider for NoOpContentProvider {
    async fn fetch_content(&self, _commit: &str, _path: &str) -> anyhow::Result<String> {
        anyhow::bail!("content fetching is disabled")
    }
}
