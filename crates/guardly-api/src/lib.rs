// guardly-api: Async Rust client for the AdGuard Home control API

pub mod auth;
pub mod client;
pub mod clients;
pub mod error;
pub mod filtering;
pub mod models;
pub mod session;
pub mod stats;
pub mod tls;
pub mod transport;

pub use auth::{AuthStrategy, Credentials};
pub use client::HomeClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
