/// Filter and pagination state for one article-list request.
///
/// Mirrors the proxy's query parameters: optional `country`, `category` and
/// free-text `q` filters, plus a 1-based `page` and a positive `page_size`.
/// An empty filter string is treated the same as an absent one and is never
/// sent on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedParams {
    /// Two-letter country filter (e.g. `"us"`).
    pub country: Option<String>,
    /// Category filter (e.g. `"technology"`).
    pub category: Option<String>,
    /// Free-text query, sent as `q`.
    pub query: Option<String>,
    /// 1-based page number.
    pub page: u32,
    /// Articles per page; must be positive.
    pub page_size: u32,
}

impl Default for FeedParams {
    fn default() -> Self {
        Self {
            country: None,
            category: None,
            query: None,
            page: 1,
            page_size: 10,
        }
    }
}

impl FeedParams {
    /// Canonical fingerprint of these parameters, used as the cache key and
    /// as the superseded-request token.
    ///
    /// Field order is fixed, so two separately constructed values with equal
    /// fields always produce the same key.
    #[must_use]
    pub fn cache_key(&self) -> String {
        format!(
            "country={}&category={}&q={}&page={}&pageSize={}",
            self.country.as_deref().unwrap_or(""),
            self.category.as_deref().unwrap_or(""),
            self.query.as_deref().unwrap_or(""),
            self.page,
            self.page_size,
        )
    }

    /// Set the page, clamped to the 1-based range the endpoint expects.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }
}
