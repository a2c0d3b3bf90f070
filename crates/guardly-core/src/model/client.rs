// ── Client domain types ──

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// WHOIS data the server resolved for a client address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoisInfo {
    pub country: Option<String>,
    pub orgname: Option<String>,
    pub city: Option<String>,
}

/// Per-client settings and identity, from a client lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct ClientDetail {
    pub name: Option<String>,
    pub ids: Vec<String>,

    // Protection settings
    pub use_global_settings: bool,
    pub filtering_enabled: bool,
    pub parental_enabled: bool,
    pub safebrowsing_enabled: bool,
    pub safesearch_enabled: bool,
    pub use_global_blocked_services: bool,
    pub blocked_services: Vec<String>,
    pub upstreams: Vec<String>,

    pub whois_info: Option<WhoisInfo>,

    // Access list state
    pub disallowed: bool,
    pub disallowed_rule: Option<String>,
}

/// Looked-up clients keyed by the identifier they were requested with.
///
/// The dashboard keeps at most one entry.
pub type ClientsInfo = HashMap<String, Arc<ClientDetail>>;
