// ── Dashboard orchestrator ──
//
// Populates the DashboardStore from the remote services. Every fetch
// absorbs its own failure: the target field keeps its previous value and
// the next step runs regardless.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use guardly_api::HomeClient;

use crate::model::{ClientDetail, FilterStatus, Stats, StatsConfig, TlsConfig};
use crate::source::DashboardSource;
use crate::store::DashboardStore;

/// Unwrap a remote result into its payload, logging and discarding the
/// error. The single place that decides whether a call produced data.
pub(crate) fn settle<T>(operation: &'static str, result: Result<T, guardly_api::Error>) -> Option<T> {
    match result {
        Ok(payload) => Some(payload),
        Err(e) if e.is_auth_expired() => {
            warn!(operation, error = %e, "not authenticated; keeping previous value");
            None
        }
        Err(e) => {
            warn!(operation, error = %e, "fetch failed; keeping previous value");
            None
        }
    }
}

/// Orchestrates dashboard fetches into a shared [`DashboardStore`].
///
/// Cheaply cloneable via `Arc`. Overlapping calls of the same fetch are
/// not coordinated: each runs to completion and the last one to resolve
/// wins.
pub struct Dashboard<S = HomeClient> {
    inner: Arc<DashboardInner<S>>,
}

struct DashboardInner<S> {
    source: S,
    store: Arc<DashboardStore>,
}

impl<S> Clone for Dashboard<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: DashboardSource> Dashboard<S> {
    /// Create a dashboard with an empty store. Nothing is fetched.
    pub fn new(source: S) -> Self {
        Self::with_store(source, Arc::new(DashboardStore::new()))
    }

    /// Create a dashboard writing into an existing store.
    pub fn with_store(source: S, store: Arc<DashboardStore>) -> Self {
        Self {
            inner: Arc::new(DashboardInner { source, store }),
        }
    }

    /// Create a dashboard and, if the owner reports a logged-in session,
    /// start [`initialize()`](Self::initialize) in the background.
    ///
    /// Must be called from within a tokio runtime when `logged_in` is
    /// true. A later login does not trigger initialization.
    pub fn open(source: S, logged_in: bool) -> Self {
        let dashboard = Self::new(source);
        if logged_in {
            let background = dashboard.clone();
            tokio::spawn(async move { background.initialize().await });
        } else {
            debug!("not logged in; dashboard left uninitialized");
        }
        dashboard
    }

    /// The store observers read from.
    pub fn store(&self) -> &Arc<DashboardStore> {
        &self.inner.store
    }

    /// The remote services this dashboard fetches from.
    pub fn source(&self) -> &S {
        &self.inner.source
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Run every fetch in a fixed order, then mark the store initialized.
    ///
    /// Order: stats config, TLS config, statistics (with the nested
    /// client lookup), filtering status. Each step is awaited before the
    /// next starts; a failed step never stops the rest. Calling again
    /// re-runs all four.
    pub async fn initialize(&self) {
        self.fetch_stats_config().await;
        self.fetch_tls_config().await;
        self.fetch_stats().await;
        self.fetch_filtering_status().await;
        self.inner.store.mark_initialized();
        info!("dashboard initialized");
    }

    /// Explicit "refresh everything" action.
    pub async fn refresh_all(&self) {
        self.initialize().await;
    }

    /// Refresh everything every `interval` until `cancel` fires.
    ///
    /// The first refresh runs immediately. A zero interval refreshes
    /// once and returns.
    pub async fn run_refresh_loop(&self, interval: Duration, cancel: CancellationToken) {
        if interval.is_zero() {
            self.refresh_all().await;
            return;
        }

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                () = cancel.cancelled() => break,
                _ = ticker.tick() => {
                    debug!("periodic dashboard refresh");
                    self.refresh_all().await;
                }
            }
        }
        debug!("dashboard refresh loop stopped");
    }

    // ── Fetch operations ─────────────────────────────────────────────

    /// Fetch traffic statistics; on success also look up the top client.
    ///
    /// Returns `true` if `stats` was replaced. The client lookup runs
    /// after the replacement and its outcome does not affect the result.
    pub async fn fetch_stats(&self) -> bool {
        let Some(raw) = settle("stats", self.inner.source.stats().await) else {
            return false;
        };

        let stats = self.inner.store.set_stats(Stats::from(raw));
        debug!(queries = stats.num_dns_queries, "stats updated");

        if let Some(top) = stats.top_client() {
            self.fetch_client(top).await;
        } else {
            debug!("no ranked clients; skipping client lookup");
        }
        true
    }

    /// Look up one client and make it the sole entry of `clients_info`.
    ///
    /// Returns `true` if `clients_info` was replaced. An empty result or
    /// an entry without a payload leaves the map untouched.
    pub async fn fetch_client(&self, identifier: &str) -> bool {
        let Some(entries) = settle("clients/find", self.inner.source.find_client(identifier).await)
        else {
            return false;
        };

        // Each entry is a single-key `{identifier: detail}` object.
        let Some(detail) = entries
            .into_iter()
            .next()
            .and_then(|entry| entry.into_values().next())
        else {
            debug!(identifier, "client lookup returned no entries");
            return false;
        };

        self.inner
            .store
            .set_client(identifier.to_owned(), ClientDetail::from(detail));
        debug!(identifier, "client info updated");
        true
    }

    /// Fetch statistics configuration. Returns `true` on replacement.
    pub async fn fetch_stats_config(&self) -> bool {
        let Some(raw) = settle("stats_info", self.inner.source.stats_config().await) else {
            return false;
        };
        self.inner.store.set_stats_config(StatsConfig::from(raw));
        true
    }

    /// Fetch TLS configuration. Returns `true` on replacement.
    pub async fn fetch_tls_config(&self) -> bool {
        let Some(raw) = settle("tls/status", self.inner.source.tls_status().await) else {
            return false;
        };
        self.inner.store.set_tls_config(TlsConfig::from(raw));
        true
    }

    /// Fetch filtering status. Returns `true` on replacement.
    pub async fn fetch_filtering_status(&self) -> bool {
        let Some(raw) = settle(
            "filtering/status",
            self.inner.source.filtering_status().await,
        ) else {
            return false;
        };
        self.inner.store.set_filtering_config(FilterStatus::from(raw));
        true
    }
}
