//! Public client surface + builder.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::NewsError;

/// Default desktop UA to avoid trivial bot blocking.
const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Article endpoint base. The proxy path is deployment-specific, so this is a
/// placeholder; real deployments override it via [`NewsClientBuilder::base_feed`].
const DEFAULT_BASE_FEED: &str = "https://newsproxy.example.com/api/news";

/// HTTP client for the news proxy.
///
/// Cheap to clone; holds only the `reqwest` client and the endpoint base.
/// All session state (cache, request token, timers) lives in
/// [`crate::orchestrator::QueryOrchestrator`].
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: Client,
    base_feed: Url,
}

impl Default for NewsClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl NewsClient {
    /// Create a new builder.
    pub fn builder() -> NewsClientBuilder {
        NewsClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_feed(&self) -> &Url {
        &self.base_feed
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct NewsClientBuilder {
    user_agent: Option<String>,
    base_feed: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl NewsClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the article endpoint base (e.g. a local proxy or a mock
    /// server in tests).
    #[must_use]
    pub fn base_feed(mut self, url: Url) -> Self {
        self.base_feed = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none; timeout
    /// behavior is otherwise left to `reqwest`.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns a `NewsError` if the default base URL fails to parse or the
    /// underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<NewsClient, NewsError> {
        let base_feed = match self.base_feed {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_FEED)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(NewsClient { http, base_feed })
    }
}
