// ── Central reactive dashboard store ──
//
// Holds every dashboard field. Reads are wait-free snapshot clones;
// writes happen only through the `Dashboard` orchestrator and are
// broadcast to subscribers.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use strum::Display;
use tokio::sync::{broadcast, watch};

use super::field::ObservableField;
use crate::model::{ClientDetail, ClientsInfo, FilterStatus, Stats, StatsConfig, TlsConfig};
use crate::stream::FieldStream;

const CHANGE_CHANNEL_SIZE: usize = 64;

/// Which field of the store was just replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum DashboardChange {
    Initialized,
    Stats,
    StatsConfig,
    TlsConfig,
    FilteringConfig,
    ClientsInfo,
    Reset,
}

/// Reactive state container for the dashboard.
///
/// Every field is either unset or a complete entity. Observers read
/// snapshots, subscribe to one field via [`FieldStream`], or follow all
/// replacements through [`subscribe_changes`](Self::subscribe_changes).
pub struct DashboardStore {
    initialized: watch::Sender<bool>,
    stats: ObservableField<Stats>,
    stats_config: ObservableField<StatsConfig>,
    tls_config: ObservableField<TlsConfig>,
    filtering_config: ObservableField<FilterStatus>,
    clients_info: watch::Sender<Arc<ClientsInfo>>,
    last_refresh: watch::Sender<Option<DateTime<Utc>>>,
    changes: broadcast::Sender<DashboardChange>,
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardStore {
    pub fn new() -> Self {
        let (initialized, _) = watch::channel(false);
        let (clients_info, _) = watch::channel(Arc::new(ClientsInfo::new()));
        let (last_refresh, _) = watch::channel(None);
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_SIZE);

        Self {
            initialized,
            stats: ObservableField::new(),
            stats_config: ObservableField::new(),
            tls_config: ObservableField::new(),
            filtering_config: ObservableField::new(),
            clients_info,
            last_refresh,
            changes,
        }
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    pub fn is_initialized(&self) -> bool {
        *self.initialized.borrow()
    }

    pub fn stats(&self) -> Option<Arc<Stats>> {
        self.stats.get()
    }

    pub fn stats_config(&self) -> Option<Arc<StatsConfig>> {
        self.stats_config.get()
    }

    pub fn tls_config(&self) -> Option<Arc<TlsConfig>> {
        self.tls_config.get()
    }

    pub fn filtering_config(&self) -> Option<Arc<FilterStatus>> {
        self.filtering_config.get()
    }

    pub fn clients_info(&self) -> Arc<ClientsInfo> {
        self.clients_info.borrow().clone()
    }

    /// Detail for a looked-up client, if it is the one currently held.
    pub fn client(&self, identifier: &str) -> Option<Arc<ClientDetail>> {
        self.clients_info.borrow().get(identifier).cloned()
    }

    /// When any field was last replaced.
    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        *self.last_refresh.borrow()
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_initialized(&self) -> FieldStream<bool> {
        FieldStream::new(self.initialized.subscribe())
    }

    pub fn subscribe_stats(&self) -> FieldStream<Option<Arc<Stats>>> {
        FieldStream::new(self.stats.subscribe())
    }

    pub fn subscribe_stats_config(&self) -> FieldStream<Option<Arc<StatsConfig>>> {
        FieldStream::new(self.stats_config.subscribe())
    }

    pub fn subscribe_tls_config(&self) -> FieldStream<Option<Arc<TlsConfig>>> {
        FieldStream::new(self.tls_config.subscribe())
    }

    pub fn subscribe_filtering_config(&self) -> FieldStream<Option<Arc<FilterStatus>>> {
        FieldStream::new(self.filtering_config.subscribe())
    }

    pub fn subscribe_clients_info(&self) -> FieldStream<Arc<ClientsInfo>> {
        FieldStream::new(self.clients_info.subscribe())
    }

    /// Feed of every replacement, in the order they happen.
    pub fn subscribe_changes(&self) -> broadcast::Receiver<DashboardChange> {
        self.changes.subscribe()
    }

    // ── Mutations (orchestrator only) ────────────────────────────────

    pub(crate) fn mark_initialized(&self) {
        self.initialized.send_replace(true);
        self.notify(DashboardChange::Initialized);
    }

    pub(crate) fn set_stats(&self, stats: Stats) -> Arc<Stats> {
        let stats = self.stats.replace(stats);
        self.touch(DashboardChange::Stats);
        stats
    }

    pub(crate) fn set_stats_config(&self, config: StatsConfig) {
        self.stats_config.replace(config);
        self.touch(DashboardChange::StatsConfig);
    }

    pub(crate) fn set_tls_config(&self, config: TlsConfig) {
        self.tls_config.replace(config);
        self.touch(DashboardChange::TlsConfig);
    }

    pub(crate) fn set_filtering_config(&self, status: FilterStatus) {
        self.filtering_config.replace(status);
        self.touch(DashboardChange::FilteringConfig);
    }

    /// Replace the client map with exactly one entry.
    pub(crate) fn set_client(&self, identifier: String, detail: ClientDetail) {
        let mut info = ClientsInfo::with_capacity(1);
        info.insert(identifier, Arc::new(detail));
        self.clients_info.send_replace(Arc::new(info));
        self.touch(DashboardChange::ClientsInfo);
    }

    /// Return every field to its initial state, for reuse across sessions.
    pub fn reset(&self) {
        self.stats.clear();
        self.stats_config.clear();
        self.tls_config.clear();
        self.filtering_config.clear();
        self.clients_info.send_replace(Arc::new(ClientsInfo::new()));
        self.last_refresh.send_replace(None);
        self.initialized.send_replace(false);
        self.notify(DashboardChange::Reset);
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn touch(&self, change: DashboardChange) {
        self.last_refresh.send_replace(Some(Utc::now()));
        self.notify(change);
    }

    fn notify(&self, change: DashboardChange) {
        // No receivers is fine; nobody is watching yet.
        let _ = self.changes.send(change);
    }
}
