//! Reactive dashboard layer between `guardly-api` and the CLI.
//!
//! - **[`Dashboard`]** fetches statistics, statistics configuration, TLS
//!   configuration, filtering status and the top client's details, in a
//!   fixed order. Each fetch absorbs its own failure, leaving the
//!   affected field at its previous value.
//!
//! - **[`DashboardStore`]** holds the observable fields. Every field is
//!   unset or a complete entity; observers read snapshots, subscribe to a
//!   single field via [`FieldStream`], or follow all replacements through
//!   [`DashboardStore::subscribe_changes`].
//!
//! - **[`DashboardSource`]** is the seam to the remote services.
//!   [`HomeClient`](guardly_api::HomeClient) implements it.
//!
//! - **[`Session`]** authenticates against a server and opens a
//!   dashboard that starts initializing only when logged in.

pub mod config;
pub mod convert;
pub mod dashboard;
pub mod error;
pub mod model;
pub mod session;
pub mod source;
pub mod store;
pub mod stream;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{AuthCredentials, ServerConfig, TlsVerification};
pub use dashboard::Dashboard;
pub use error::CoreError;
pub use session::Session;
pub use source::DashboardSource;
pub use store::{DashboardChange, DashboardStore};
pub use stream::{FieldStream, FieldWatchStream};

pub use model::{
    ClientDetail, ClientsInfo, FilterList, FilterStatus, Stats, StatsConfig, TimeUnits, TlsConfig,
    TopEntry, WhoisInfo,
};
