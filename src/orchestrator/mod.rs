//! Session-level query orchestration.
//!
//! [`QueryOrchestrator`] owns everything the feed endpoint itself does not:
//! a short-lived cache of fetched pages, the latest-request token that drops
//! stale in-flight responses, the debounce task that coalesces bursts of
//! control changes, and the auto-refresh poller. View-facing output goes over
//! an event channel as status lines and pages.

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::{Duration, Instant},
};

use tokio::{
    sync::{Mutex, RwLock, mpsc},
    task::JoinHandle,
    time::{interval_at, sleep},
};
use tracing::{debug, warn};

use crate::{
    core::{NewsClient, NewsError},
    feed::{self, ArticlePage, FeedParams},
};

/// Freshness window for cached pages.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30);
/// Window used by [`QueryOrchestrator::debounce_trigger`].
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/* ---------------- Public API ---------------- */

/// One view-facing update.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedEvent {
    /// A page is ready to render.
    Page {
        page: ArticlePage,
        /// Whether the page came from the cache rather than the network.
        cached: bool,
    },
    /// A human-readable status line (`Loading...`, `Error: ...`, ...).
    Status(String),
}

/// How a single [`QueryOrchestrator::submit`] resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Fetched from the network and written to the cache.
    Fetched(ArticlePage),
    /// Served from a fresh cache entry; no network call was made.
    Cached(ArticlePage),
    /// A newer request was issued while this one was in flight. The result
    /// was dropped: no cache write, no events.
    Superseded,
    /// The request failed; the payload is the status line shown to the user.
    /// The orchestrator stays usable and nothing is retried automatically.
    Failed(String),
}

struct CacheEntry {
    fetched_at: Instant,
    page: ArticlePage,
}

struct Shared {
    client: NewsClient,
    params: Mutex<FeedParams>,
    /// Key of the most recently issued request; last writer wins at issue
    /// time, not completion time.
    token: Mutex<Option<String>>,
    /// Successful fetches only; entries are never evicted.
    cache: RwLock<HashMap<String, CacheEntry>>,
    cache_ttl: Duration,
    discarded: AtomicU64,
    events: mpsc::UnboundedSender<FeedEvent>,
}

/// Drives article queries for one session.
///
/// Owns all mutable session state the browser original kept in module-level
/// globals. Construct one at session start and keep it for the session's
/// lifetime; it stays usable after any failure.
pub struct QueryOrchestrator {
    shared: Arc<Shared>,
    debounce: Mutex<Option<JoinHandle<()>>>,
    poller: Mutex<Option<JoinHandle<()>>>,
}

impl QueryOrchestrator {
    /// Create an orchestrator plus the event stream the view consumes.
    pub fn new(
        client: &NewsClient,
        initial: FeedParams,
    ) -> (Self, mpsc::UnboundedReceiver<FeedEvent>) {
        Self::with_cache_ttl(client, initial, DEFAULT_CACHE_TTL)
    }

    /// Like [`QueryOrchestrator::new`], with a non-default cache freshness
    /// window. `Duration::ZERO` disables caching.
    pub fn with_cache_ttl(
        client: &NewsClient,
        initial: FeedParams,
        cache_ttl: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<FeedEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let shared = Arc::new(Shared {
            client: client.clone(),
            params: Mutex::new(initial),
            token: Mutex::new(None),
            cache: RwLock::new(HashMap::new()),
            cache_ttl,
            discarded: AtomicU64::new(0),
            events: tx,
        });
        (
            Self {
                shared,
                debounce: Mutex::new(None),
                poller: Mutex::new(None),
            },
            rx,
        )
    }

    /// Snapshot of the current filter/pagination state.
    pub async fn params(&self) -> FeedParams {
        self.shared.params.lock().await.clone()
    }

    /// Replace the current parameters without submitting. Pair with
    /// [`QueryOrchestrator::debounce_trigger`] the way control inputs do, or
    /// submit explicitly.
    pub async fn set_params(&self, params: FeedParams) {
        *self.shared.params.lock().await = params;
    }

    /// Number of in-flight results dropped because a newer request superseded
    /// them.
    pub fn discarded_results(&self) -> u64 {
        self.shared.discarded.load(Ordering::Relaxed)
    }

    /// Issue a request for `params`, recording it as the latest request.
    ///
    /// A fresh cache entry resolves without any network call. A completed
    /// fetch is applied only if no newer request was issued in the meantime;
    /// otherwise it is dropped silently (see
    /// [`QueryOrchestrator::discarded_results`]).
    pub async fn submit(&self, params: FeedParams) -> SubmitOutcome {
        Shared::submit(&self.shared, params).await
    }

    /// Set the page (clamped to >= 1), then submit the current parameters.
    pub async fn load_page(&self, page: u32) -> SubmitOutcome {
        let params = {
            let mut guard = self.shared.params.lock().await;
            guard.set_page(page);
            guard.clone()
        };
        Shared::submit(&self.shared, params).await
    }

    /// Load the page after the current one.
    pub async fn next_page(&self) -> SubmitOutcome {
        let page = self.shared.params.lock().await.page;
        self.load_page(page.saturating_add(1)).await
    }

    /// Load the page before the current one, if not already on the first.
    pub async fn prev_page(&self) -> Option<SubmitOutcome> {
        let page = self.shared.params.lock().await.page;
        if page > 1 {
            Some(self.load_page(page - 1).await)
        } else {
            None
        }
    }

    /// Coalesce a burst of control changes into one submit, using the default
    /// 300 ms window.
    pub async fn debounce_trigger(&self) {
        self.debounce_trigger_after(DEFAULT_DEBOUNCE).await;
    }

    /// Like [`QueryOrchestrator::debounce_trigger`] with an explicit window.
    ///
    /// Only the last call within the window survives. When it fires, the page
    /// resets to 1 and the current parameters are submitted.
    pub async fn debounce_trigger_after(&self, delay: Duration) {
        let mut slot = self.debounce.lock().await;
        // Cancel the pending trigger before scheduling the replacement so no
        // orphaned callback outlives it.
        if let Some(prev) = slot.take() {
            prev.abort();
        }
        let shared = Arc::clone(&self.shared);
        *slot = Some(tokio::spawn(async move {
            sleep(delay).await;
            let params = {
                let mut guard = shared.params.lock().await;
                guard.set_page(1);
                guard.clone()
            };
            Shared::submit(&shared, params).await;
        }));
    }

    /// Start auto-refresh: submit the current parameters every `interval`.
    ///
    /// At most one poller exists; calling this again replaces the previous
    /// timer. The first tick fires one full interval after the call.
    pub async fn start_polling(&self, interval: Duration) {
        let mut slot = self.poller.lock().await;
        if let Some(prev) = slot.take() {
            prev.abort();
        }
        let shared = Arc::clone(&self.shared);
        *slot = Some(tokio::spawn(async move {
            let mut ticker = interval_at(tokio::time::Instant::now() + interval, interval);
            loop {
                ticker.tick().await;
                if shared.events.is_closed() {
                    break;
                }
                let params = shared.params.lock().await.clone();
                // The original compared publishedAt across ticks to badge
                // newly appeared articles; that stayed a stub and is not
                // carried over.
                Shared::submit(&shared, params).await;
            }
        }));
    }

    /// Stop auto-refresh, if running.
    pub async fn stop_polling(&self) {
        if let Some(prev) = self.poller.lock().await.take() {
            prev.abort();
        }
    }
}

impl Shared {
    async fn submit(shared: &Arc<Self>, params: FeedParams) -> SubmitOutcome {
        let key = params.cache_key();
        *shared.token.lock().await = Some(key.clone());
        shared.send(FeedEvent::Status("Loading...".into()));

        if let Some((page, age)) = shared.cache_lookup(&key).await {
            debug!(%key, age_secs = age.as_secs(), "serving cached page");
            shared.send(FeedEvent::Page {
                page: page.clone(),
                cached: true,
            });
            shared.send(FeedEvent::Status(format!(
                "Showing cached results (updated {}s ago)",
                age.as_secs()
            )));
            return SubmitOutcome::Cached(page);
        }

        match feed::fetch_page(&shared.client, &params).await {
            Ok(page) => {
                // The token stays locked from the check through the cache
                // write and the view events: a newer submit must not slip in
                // between and see a stale page applied after its own issue.
                // Lock order is token, then cache, everywhere.
                let token = shared.token.lock().await;
                if token.as_deref() != Some(key.as_str()) {
                    drop(token);
                    shared.discarded.fetch_add(1, Ordering::Relaxed);
                    debug!(%key, "discarding superseded result");
                    return SubmitOutcome::Superseded;
                }
                shared.cache.write().await.insert(
                    key,
                    CacheEntry {
                        fetched_at: Instant::now(),
                        page: page.clone(),
                    },
                );
                shared.send(FeedEvent::Page {
                    page: page.clone(),
                    cached: false,
                });
                shared.send(FeedEvent::Status(format!(
                    "Showing {} articles (totalResults: {})",
                    page.articles.len(),
                    page.total_results
                )));
                drop(token);
                SubmitOutcome::Fetched(page)
            }
            Err(err) => {
                let status = match &err {
                    NewsError::Status { message, .. } => format!("Error: {message}"),
                    NewsError::Http(e) => format!("Fetch error: {e}"),
                    other => format!("Fetch error: {other}"),
                };
                warn!(%err, "article fetch failed");
                shared.send(FeedEvent::Status(status.clone()));
                SubmitOutcome::Failed(status)
            }
        }
    }

    async fn cache_lookup(&self, key: &str) -> Option<(ArticlePage, Duration)> {
        let guard = self.cache.read().await;
        let entry = guard.get(key)?;
        // Instant is monotonic, so the age never goes backwards.
        let age = entry.fetched_at.elapsed();
        (age < self.cache_ttl).then(|| (entry.page.clone(), age))
    }

    fn send(&self, ev: FeedEvent) {
        let _ = self.events.send(ev);
    }
}
