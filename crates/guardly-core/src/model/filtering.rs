// ── Filtering domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A subscribed block or allow list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterList {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub enabled: bool,
    pub rules_count: u64,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Content-filtering status snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStatus {
    pub enabled: bool,
    /// Filter list update interval in hours. Zero means never.
    pub interval_hours: u32,
    pub filters: Vec<FilterList>,
    pub whitelist_filters: Vec<FilterList>,
    pub user_rules: Vec<String>,
}

impl FilterStatus {
    /// Total rules across enabled block lists.
    pub fn enabled_rules_count(&self) -> u64 {
        self.filters
            .iter()
            .filter(|f| f.enabled)
            .map(|f| f.rules_count)
            .sum()
    }
}
