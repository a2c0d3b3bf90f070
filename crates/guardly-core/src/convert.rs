// ── API-to-domain type conversions ──
//
// Bridges raw `guardly_api::models` payloads into the canonical domain
// types. Each `From` impl flattens `null` lists into empty vectors and
// parses timestamp strings, silently dropping values that don't parse.

use chrono::{DateTime, Utc};

use guardly_api::models::{
    ClientFindSubEntry, Filter, FilterStatusResponse, StatsConfigResponse, StatsResponse,
    TlsStatusResponse, TopArrayEntry, WhoisInfo as ApiWhoisInfo,
};

use crate::model::{
    ClientDetail, FilterList, FilterStatus, Stats, StatsConfig, TlsConfig, TopEntry, WhoisInfo,
};

// ── Helpers ────────────────────────────────────────────────────────

/// Parse an RFC 3339 timestamp (Go's `time.Time` JSON encoding).
fn parse_datetime(raw: Option<&String>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

fn top_entries(raw: Option<Vec<TopArrayEntry>>) -> Vec<TopEntry> {
    raw.unwrap_or_default()
        .into_iter()
        .map(|number_data| TopEntry { number_data })
        .collect()
}

/// Drop empty strings the server uses in place of "unset".
fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|s| !s.is_empty())
}

// ── Stats ──────────────────────────────────────────────────────────

impl From<StatsResponse> for Stats {
    fn from(raw: StatsResponse) -> Self {
        Self {
            time_units: raw.time_units.parse().unwrap_or_default(),
            num_dns_queries: raw.num_dns_queries,
            num_blocked_filtering: raw.num_blocked_filtering,
            num_replaced_safebrowsing: raw.num_replaced_safebrowsing,
            num_replaced_safesearch: raw.num_replaced_safesearch,
            num_replaced_parental: raw.num_replaced_parental,
            avg_processing_time: raw.avg_processing_time,
            top_queried_domains: top_entries(raw.top_queried_domains),
            top_blocked_domains: top_entries(raw.top_blocked_domains),
            top_clients: top_entries(raw.top_clients),
            dns_queries: raw.dns_queries.unwrap_or_default(),
            blocked_filtering: raw.blocked_filtering.unwrap_or_default(),
            replaced_safebrowsing: raw.replaced_safebrowsing.unwrap_or_default(),
            replaced_parental: raw.replaced_parental.unwrap_or_default(),
        }
    }
}

impl From<StatsConfigResponse> for StatsConfig {
    fn from(raw: StatsConfigResponse) -> Self {
        Self {
            interval_days: raw.interval,
        }
    }
}

// ── TLS ────────────────────────────────────────────────────────────

impl From<TlsStatusResponse> for TlsConfig {
    fn from(raw: TlsStatusResponse) -> Self {
        let not_before = parse_datetime(raw.not_before.as_ref());
        let not_after = parse_datetime(raw.not_after.as_ref());
        Self {
            enabled: raw.enabled,
            server_name: non_empty(raw.server_name),
            force_https: raw.force_https,
            // Port 0 means the listener is disabled.
            port_https: raw.port_https.filter(|p| *p != 0),
            port_dns_over_tls: raw.port_dns_over_tls.filter(|p| *p != 0),
            port_dns_over_quic: raw.port_dns_over_quic.filter(|p| *p != 0),
            certificate_chain: non_empty(raw.certificate_chain),
            private_key: non_empty(raw.private_key),
            certificate_path: non_empty(raw.certificate_path),
            private_key_path: non_empty(raw.private_key_path),
            valid_cert: raw.valid_cert,
            valid_chain: raw.valid_chain,
            valid_key: raw.valid_key,
            valid_pair: raw.valid_pair,
            subject: non_empty(raw.subject),
            issuer: non_empty(raw.issuer),
            not_before,
            not_after,
            dns_names: raw.dns_names.unwrap_or_default(),
            key_type: non_empty(raw.key_type),
            warning_validation: non_empty(raw.warning_validation),
        }
    }
}

// ── Filtering ──────────────────────────────────────────────────────

impl From<Filter> for FilterList {
    fn from(raw: Filter) -> Self {
        Self {
            id: raw.id,
            last_updated: parse_datetime(raw.last_updated.as_ref()),
            name: raw.name,
            url: raw.url,
            enabled: raw.enabled,
            rules_count: raw.rules_count,
        }
    }
}

fn filter_lists(raw: Option<Vec<Filter>>) -> Vec<FilterList> {
    raw.unwrap_or_default()
        .into_iter()
        .map(FilterList::from)
        .collect()
}

impl From<FilterStatusResponse> for FilterStatus {
    fn from(raw: FilterStatusResponse) -> Self {
        Self {
            enabled: raw.enabled,
            interval_hours: raw.interval,
            filters: filter_lists(raw.filters),
            whitelist_filters: filter_lists(raw.whitelist_filters),
            user_rules: raw.user_rules.unwrap_or_default(),
        }
    }
}

// ── Clients ────────────────────────────────────────────────────────

impl From<ApiWhoisInfo> for WhoisInfo {
    fn from(raw: ApiWhoisInfo) -> Self {
        Self {
            country: non_empty(raw.country),
            orgname: non_empty(raw.orgname),
            city: non_empty(raw.city),
        }
    }
}

impl From<ClientFindSubEntry> for ClientDetail {
    fn from(raw: ClientFindSubEntry) -> Self {
        Self {
            name: non_empty(raw.name),
            ids: raw.ids.unwrap_or_default(),
            use_global_settings: raw.use_global_settings,
            filtering_enabled: raw.filtering_enabled,
            parental_enabled: raw.parental_enabled,
            safebrowsing_enabled: raw.safebrowsing_enabled,
            safesearch_enabled: raw.safesearch_enabled,
            use_global_blocked_services: raw.use_global_blocked_services,
            blocked_services: raw.blocked_services.unwrap_or_default(),
            upstreams: raw.upstreams.unwrap_or_default(),
            whois_info: raw.whois_info.map(WhoisInfo::from),
            disallowed: raw.disallowed,
            disallowed_rule: non_empty(raw.disallowed_rule),
        }
    }
}
