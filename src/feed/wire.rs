use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct FeedEnvelope {
    pub(crate) articles: Option<Vec<WireArticle>>,
    #[serde(rename = "totalResults")]
    pub(crate) total_results: Option<u64>,
}

#[derive(Deserialize)]
pub(crate) struct WireArticle {
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) url: Option<String>,
    #[serde(rename = "urlToImage")]
    pub(crate) url_to_image: Option<String>,
    pub(crate) author: Option<String>,
    #[serde(rename = "publishedAt")]
    pub(crate) published_at: Option<String>,
}

/// Error responses carry an optional human-readable `message`.
#[derive(Deserialize)]
pub(crate) struct ErrorBody {
    pub(crate) message: Option<String>,
}
