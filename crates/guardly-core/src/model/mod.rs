// ── Domain model ──
//
// Immutable entity wrappers built once from wire payloads (see
// `convert.rs`) and stored behind `Arc` in the `DashboardStore`.

pub mod client;
pub mod filtering;
pub mod stats;
pub mod tls;

pub use client::{ClientDetail, ClientsInfo, WhoisInfo};
pub use filtering::{FilterList, FilterStatus};
pub use stats::{Stats, StatsConfig, TimeUnits, TopEntry};
pub use tls::TlsConfig;
