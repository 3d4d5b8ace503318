//! The article-list endpoint: one page of articles per request.
//!
//! This is the raw endpoint surface, with no caching and no request
//! coalescing; session-level behavior lives in
//! [`crate::orchestrator::QueryOrchestrator`].

mod api;
mod model;
mod params;
mod wire;

pub use model::{Article, ArticlePage};
pub use params::FeedParams;

pub(crate) use api::fetch_page;

use crate::core::{NewsClient, NewsError};

/// A builder for fetching a single page of articles.
pub struct FeedBuilder {
    client: NewsClient,
    params: FeedParams,
}

impl FeedBuilder {
    /// Creates a new `FeedBuilder` with default parameters (page 1, ten
    /// articles, no filters).
    pub fn new(client: &NewsClient) -> Self {
        Self {
            client: client.clone(),
            params: FeedParams::default(),
        }
    }

    /// Start from existing parameters.
    #[must_use]
    pub fn params(mut self, params: FeedParams) -> Self {
        self.params = params;
        self
    }

    /// Two-letter country filter (e.g. `"us"`).
    #[must_use]
    pub fn country(mut self, s: impl Into<String>) -> Self {
        self.params.country = Some(s.into());
        self
    }

    /// Category filter (e.g. `"technology"`).
    #[must_use]
    pub fn category(mut self, s: impl Into<String>) -> Self {
        self.params.category = Some(s.into());
        self
    }

    /// Free-text query, sent as `q`.
    #[must_use]
    pub fn query(mut self, s: impl Into<String>) -> Self {
        self.params.query = Some(s.into());
        self
    }

    /// 1-based page number; values below 1 are clamped.
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.params.set_page(page);
        self
    }

    /// Articles per page.
    #[must_use]
    pub const fn page_size(mut self, n: u32) -> Self {
        self.params.page_size = n;
        self
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// Returns `NewsError::Status` for a non-success response,
    /// `NewsError::Http` when no response arrived at all, and
    /// `NewsError::Data` when the body is not a valid article page.
    pub async fn fetch(self) -> Result<ArticlePage, NewsError> {
        api::fetch_page(&self.client, &self.params).await
    }
}
