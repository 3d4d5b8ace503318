use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single article as returned by the news proxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    /// The headline.
    pub title: String,
    /// Short summary, when the source provides one.
    pub description: Option<String>,
    /// A direct link to the full story.
    pub url: String,
    /// Cover image URL, when present.
    pub image_url: Option<String>,
    /// Byline, when present.
    pub author: Option<String>,
    /// Publication time, when the source provides one.
    pub published_at: Option<DateTime<Utc>>,
}

/// One page of the article list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticlePage {
    /// Articles in the order the proxy returned them.
    pub articles: Vec<Article>,
    /// Total number of results the query matched, across all pages.
    pub total_results: u64,
}
