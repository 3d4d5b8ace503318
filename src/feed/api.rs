use tracing::debug;
use url::Url;

use crate::{
    core::{NewsClient, NewsError},
    feed::{
        model::{Article, ArticlePage},
        params::FeedParams,
        wire,
    },
};

/// Build the request URL. Empty optional filters are omitted; `page` and
/// `pageSize` are always appended, in that order.
pub(crate) fn feed_url(client: &NewsClient, params: &FeedParams) -> Url {
    let mut url = client.base_feed().clone();
    {
        let mut qp = url.query_pairs_mut();
        if let Some(c) = params.country.as_deref().filter(|s| !s.is_empty()) {
            qp.append_pair("country", c);
        }
        if let Some(c) = params.category.as_deref().filter(|s| !s.is_empty()) {
            qp.append_pair("category", c);
        }
        if let Some(q) = params.query.as_deref().filter(|s| !s.is_empty()) {
            qp.append_pair("q", q);
        }
        qp.append_pair("page", &params.page.to_string());
        qp.append_pair("pageSize", &params.page_size.to_string());
    }
    url
}

pub(crate) async fn fetch_page(
    client: &NewsClient,
    params: &FeedParams,
) -> Result<ArticlePage, NewsError> {
    if params.page == 0 {
        return Err(NewsError::InvalidParams("page must be >= 1".into()));
    }
    if params.page_size == 0 {
        return Err(NewsError::InvalidParams("pageSize must be > 0".into()));
    }

    let url = feed_url(client, params);
    debug!(%url, "fetching article page");

    let resp = client
        .http()
        .get(url)
        .header("accept", "application/json")
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        // The proxy reports failures as `{"message": "..."}`; anything else
        // (including an empty body) falls back to the canonical reason text.
        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<wire::ErrorBody>(&body)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            });
        return Err(NewsError::Status {
            status: status.as_u16(),
            message,
        });
    }

    let body = resp.text().await?;
    let envelope: wire::FeedEnvelope = serde_json::from_str(&body)
        .map_err(|e| NewsError::Data(format!("article page json parse: {e}")))?;

    let articles = envelope
        .articles
        .unwrap_or_default()
        .into_iter()
        .filter_map(|raw| {
            // Items without a headline or a link are not renderable.
            let title = raw.title?;
            let link = raw.url?;

            let published_at = raw.published_at.as_deref().and_then(|s| {
                chrono::DateTime::parse_from_rfc3339(s)
                    .ok()
                    .map(|dt| dt.with_timezone(&chrono::Utc))
            });

            Some(Article {
                title,
                description: raw.description,
                url: link,
                image_url: raw.url_to_image,
                author: raw.author,
                published_at,
            })
        })
        .collect();

    Ok(ArticlePage {
        articles,
        total_results: envelope.total_results.unwrap_or(0),
    })
}
