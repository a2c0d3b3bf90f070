// ── Statistics domain types ──

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Granularity of the statistics time series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TimeUnits {
    #[default]
    Hours,
    Days,
}

/// One ranked entry of a "top" list, e.g. a client and its query count.
///
/// The server sends single-key objects; order is kept so the first key
/// is the ranked item's identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopEntry {
    pub number_data: IndexMap<String, u64>,
}

impl TopEntry {
    /// Identifier of the ranked item (domain name or client address).
    pub fn first_key(&self) -> Option<&str> {
        self.number_data.keys().next().map(String::as_str)
    }

    /// Count attached to the first key.
    pub fn count(&self) -> Option<u64> {
        self.number_data.values().next().copied()
    }
}

/// Traffic statistics snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub time_units: TimeUnits,
    pub num_dns_queries: u64,
    pub num_blocked_filtering: u64,
    pub num_replaced_safebrowsing: u64,
    pub num_replaced_safesearch: u64,
    pub num_replaced_parental: u64,
    /// Average processing time in seconds.
    pub avg_processing_time: f64,

    pub top_queried_domains: Vec<TopEntry>,
    pub top_blocked_domains: Vec<TopEntry>,
    pub top_clients: Vec<TopEntry>,

    // Time series, one point per `time_units` step
    pub dns_queries: Vec<u64>,
    pub blocked_filtering: Vec<u64>,
    pub replaced_safebrowsing: Vec<u64>,
    pub replaced_parental: Vec<u64>,
}

impl Stats {
    /// Identifier of the highest-ranked client, if the ranking has one.
    pub fn top_client(&self) -> Option<&str> {
        self.top_clients.first().and_then(TopEntry::first_key)
    }

    /// Share of queries blocked by filter lists, in percent.
    #[allow(clippy::cast_precision_loss, clippy::as_conversions)]
    pub fn blocked_percent(&self) -> f64 {
        if self.num_dns_queries == 0 {
            return 0.0;
        }
        self.num_blocked_filtering as f64 * 100.0 / self.num_dns_queries as f64
    }

    /// Average processing time in milliseconds.
    pub fn avg_processing_ms(&self) -> f64 {
        self.avg_processing_time * 1000.0
    }
}

/// Statistics collection configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Retention period in days.
    pub interval_days: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(pairs: &[(&str, u64)]) -> TopEntry {
        TopEntry {
            number_data: pairs.iter().map(|(k, v)| ((*k).to_owned(), *v)).collect(),
        }
    }

    #[test]
    fn top_client_is_first_key_of_first_entry() {
        let stats = Stats {
            top_clients: vec![entry(&[("10.0.0.5", 90)]), entry(&[("10.0.0.9", 10)])],
            ..Stats::default()
        };
        assert_eq!(stats.top_client(), Some("10.0.0.5"));
        assert_eq!(stats.top_clients[0].count(), Some(90));
    }

    #[test]
    fn top_client_absent_for_empty_ranking_or_mapping() {
        assert_eq!(Stats::default().top_client(), None);

        let stats = Stats {
            top_clients: vec![TopEntry::default()],
            ..Stats::default()
        };
        assert_eq!(stats.top_client(), None);
    }

    #[test]
    fn blocked_percent_handles_zero_queries() {
        assert!(Stats::default().blocked_percent().abs() < f64::EPSILON);

        let stats = Stats {
            num_dns_queries: 200,
            num_blocked_filtering: 50,
            ..Stats::default()
        };
        assert!((stats.blocked_percent() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn time_units_parse_lowercase() {
        assert_eq!("days".parse::<TimeUnits>().ok(), Some(TimeUnits::Days));
        assert_eq!(TimeUnits::Hours.to_string(), "hours");
    }
}
