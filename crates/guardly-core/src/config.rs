// ── Runtime connection configuration ──
//
// These types describe *how* to reach a server. They carry credential
// data and connection tuning, but never touch disk. The CLI builds a
// `ServerConfig` (usually via guardly-config) and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use guardly_api::transport::{TlsMode, TransportConfig};
use guardly_api::Credentials;

/// How to authenticate with the server.
///
/// Carries credential data; converts into `guardly_api::Credentials`.
#[derive(Debug, Clone)]
pub enum AuthCredentials {
    /// Cookie session via `POST /control/login` (default web UI flow).
    Session {
        username: String,
        password: SecretString,
    },
    /// HTTP basic auth on every request.
    Basic {
        username: String,
        password: SecretString,
    },
    /// Server without configured users.
    None,
}

impl From<&AuthCredentials> for Credentials {
    fn from(auth: &AuthCredentials) -> Self {
        match auth {
            AuthCredentials::Session { username, password } => Credentials::Session {
                username: username.clone(),
                password: password.clone(),
            },
            AuthCredentials::Basic { username, password } => Credentials::Basic {
                username: username.clone(),
                password: password.clone(),
            },
            AuthCredentials::None => Credentials::Anonymous,
        }
    }
}

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed certificates).
    DangerAcceptInvalid,
}

impl From<&TlsVerification> for TlsMode {
    fn from(tls: &TlsVerification) -> Self {
        match tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        }
    }
}

/// Configuration for talking to a single server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server root URL (e.g., `http://192.168.1.2:3000`).
    pub url: Url,
    /// Authentication method and credentials.
    pub auth: AuthCredentials,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: Duration,
    /// Period of the dashboard refresh loop. Zero disables it.
    pub refresh_interval: Duration,
}

impl ServerConfig {
    /// Create a config with defaults for everything but the URL and auth.
    pub fn new(url: Url, auth: AuthCredentials) -> Self {
        Self {
            url,
            auth,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
            refresh_interval: Duration::ZERO,
        }
    }

    /// Transport settings for `guardly_api` clients.
    pub fn transport(&self) -> TransportConfig {
        TransportConfig {
            tls: TlsMode::from(&self.tls),
            timeout: self.timeout,
            cookie_jar: None,
        }
    }
}
