// Control API response types
//
// Wire models for the `/control/*` JSON endpoints. The server is written
// in Go, so empty slices frequently arrive as `null` and optional fields
// are omitted entirely; everything leans on `#[serde(default)]`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ── Stats ────────────────────────────────────────────────────────────

/// One ranked entry, e.g. `{"10.0.0.5": 42}`.
///
/// The server emits single-key objects; `IndexMap` keeps document order
/// so the "first key" of an entry is stable.
pub type TopArrayEntry = IndexMap<String, u64>;

/// Response of `GET /control/stats`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsResponse {
    /// `"hours"` or `"days"`.
    pub time_units: String,
    pub num_dns_queries: u64,
    pub num_blocked_filtering: u64,
    pub num_replaced_safebrowsing: u64,
    pub num_replaced_safesearch: u64,
    pub num_replaced_parental: u64,
    /// Average processing time in seconds.
    pub avg_processing_time: f64,
    pub top_queried_domains: Option<Vec<TopArrayEntry>>,
    pub top_clients: Option<Vec<TopArrayEntry>>,
    pub top_blocked_domains: Option<Vec<TopArrayEntry>>,
    pub dns_queries: Option<Vec<u64>>,
    pub blocked_filtering: Option<Vec<u64>>,
    pub replaced_safebrowsing: Option<Vec<u64>>,
    pub replaced_parental: Option<Vec<u64>>,
}

/// Response of `GET /control/stats_info`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsConfigResponse {
    /// Retention in days.
    #[serde(default)]
    pub interval: u32,
}

// ── TLS ──────────────────────────────────────────────────────────────

/// Response of `GET /control/tls/status`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct TlsStatusResponse {
    pub enabled: bool,
    pub server_name: Option<String>,
    pub force_https: bool,
    pub port_https: Option<u16>,
    pub port_dns_over_tls: Option<u16>,
    pub port_dns_over_quic: Option<u16>,
    pub certificate_chain: Option<String>,
    pub private_key: Option<String>,
    pub certificate_path: Option<String>,
    pub private_key_path: Option<String>,
    pub valid_cert: bool,
    pub valid_chain: bool,
    pub valid_key: bool,
    pub valid_pair: bool,
    pub subject: Option<String>,
    pub issuer: Option<String>,
    /// RFC 3339 timestamp.
    pub not_before: Option<String>,
    /// RFC 3339 timestamp.
    pub not_after: Option<String>,
    pub dns_names: Option<Vec<String>>,
    /// `"RSA"` or `"ECDSA"`.
    pub key_type: Option<String>,
    pub warning_validation: Option<String>,
}

// ── Filtering ────────────────────────────────────────────────────────

/// A single filter list subscription.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Filter {
    pub id: i64,
    pub enabled: bool,
    pub url: String,
    pub name: String,
    pub rules_count: u64,
    /// RFC 3339 timestamp; absent until the list was fetched once.
    pub last_updated: Option<String>,
}

/// Response of `GET /control/filtering/status`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterStatusResponse {
    pub enabled: bool,
    /// Update interval in hours.
    pub interval: u32,
    pub filters: Option<Vec<Filter>>,
    pub whitelist_filters: Option<Vec<Filter>>,
    pub user_rules: Option<Vec<String>>,
}

// ── Clients ──────────────────────────────────────────────────────────

/// WHOIS data attached to a runtime client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WhoisInfo {
    pub country: Option<String>,
    pub orgname: Option<String>,
    pub city: Option<String>,
}

/// Client detail as returned inside a `clients/find` entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ClientFindSubEntry {
    pub name: Option<String>,
    pub ids: Option<Vec<String>>,
    pub use_global_settings: bool,
    pub filtering_enabled: bool,
    pub parental_enabled: bool,
    pub safebrowsing_enabled: bool,
    pub safesearch_enabled: bool,
    pub use_global_blocked_services: bool,
    pub blocked_services: Option<Vec<String>>,
    pub upstreams: Option<Vec<String>>,
    pub whois_info: Option<WhoisInfo>,
    pub disallowed: bool,
    pub disallowed_rule: Option<String>,
}

/// One element of the `clients/find` array: `{ "<identifier>": detail }`.
pub type ClientsFindEntry = IndexMap<String, ClientFindSubEntry>;

// ── Session ──────────────────────────────────────────────────────────

/// Body of `POST /control/login`.
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub name: &'a str,
    pub password: &'a str,
}
