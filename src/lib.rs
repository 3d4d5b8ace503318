//! newswire-rs: async client for a paginated news-proxy endpoint.
//!
//! The [`feed`] module fetches one page of articles. [`QueryOrchestrator`]
//! layers session behavior on top: a short-lived response cache, a
//! superseded-request guard, input debouncing, and an optional auto-refresh
//! poller that publishes updates on an event channel.

pub mod core;
pub mod feed;
pub mod orchestrator;

pub use crate::core::{NewsClient, NewsClientBuilder, NewsError};
pub use crate::feed::{Article, ArticlePage, FeedBuilder, FeedParams};
pub use crate::orchestrator::{FeedEvent, QueryOrchestrator, SubmitOutcome};
