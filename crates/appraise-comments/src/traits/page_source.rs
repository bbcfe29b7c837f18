//! Paginated listing collaborator, modeled as a lazy page sequence.

use async_trait::async_trait;

/// One page of results from a paginated listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// The items on this page, in listing order.
    pub items: Vec<T>,

    /// Opaque cursor for the next page; `None` on the last page.
    pub next_page_token: Option<String>,
}

/// Fetches pages of a listing by opaque page token.
///
/// Implemented by the embedding application over its listing endpoint; the
/// token format is the server's business and is never inspected here.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// The item type one page carries.
    type Item;

    /// Fetch one page. `token` is `None` for the first page.
    async fn fetch_page(&self, token: Option<&str>) -> anyhow::Result<Page<Self::Item>>;
}

/// Lazy, restartable cursor over a [`PageSource`].
///
/// Pages are fetched one at a time as [`next_page`](Pager::next_page) is
/// called; nothing is fetched ahead of demand. A fetch error ends the
/// sequence, and [`restart`](Pager::restart) rewinds to the first page.
pub struct Pager<'a, S: PageSource> {
    source: &'a S,
    token: Option<String>,
    exhausted: bool,
}

impl<'a, S: PageSource> Pager<'a, S> {
    /// Create a cursor positioned before the first page.
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            token: None,
            exhausted: false,
        }
    }

    /// Fetch the next page of items, or `None` once the sequence ends.
    pub async fn next_page(&mut self) -> Option<anyhow::Result<Vec<S::Item>>> {
        if self.exhausted {
            return None;
        }
        match self.source.fetch_page(self.token.as_deref()).await {
            Ok(page) => {
                self.token = page.next_page_token;
                if self.token.is_none() {
                    self.exhausted = true;
                }
                Some(Ok(page.items))
            }
            Err(err) => {
                self.exhausted = true;
                Some(Err(err))
            }
        }
    }

    /// Rewind the cursor to the first page.
    pub fn restart(&mut self) {
        self.token = None;
        self.exhausted = false;
    }
}
