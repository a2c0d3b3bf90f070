// ── TLS domain types ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// TLS configuration and certificate status snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct TlsConfig {
    pub enabled: bool,
    pub server_name: Option<String>,
    pub force_https: bool,
    pub port_https: Option<u16>,
    pub port_dns_over_tls: Option<u16>,
    pub port_dns_over_quic: Option<u16>,

    // Certificate material: inline PEM or file paths
    #[serde(skip_serializing)]
    pub certificate_chain: Option<String>,
    #[serde(skip_serializing)]
    pub private_key: Option<String>,
    pub certificate_path: Option<String>,
    pub private_key_path: Option<String>,

    // Validation results
    pub valid_cert: bool,
    pub valid_chain: bool,
    pub valid_key: bool,
    pub valid_pair: bool,
    pub subject: Option<String>,
    pub issuer: Option<String>,
    pub not_before: Option<DateTime<Utc>>,
    pub not_after: Option<DateTime<Utc>>,
    pub dns_names: Vec<String>,
    pub key_type: Option<String>,
    pub warning_validation: Option<String>,
}

impl TlsConfig {
    /// Whether the certificate, chain, and key all validated.
    pub fn is_valid(&self) -> bool {
        self.valid_cert && self.valid_chain && self.valid_key && self.valid_pair
    }

    /// Whether the certificate's validity window has ended at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.not_after.is_some_and(|end| end < now)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn validity_requires_every_check() {
        let mut tls = TlsConfig {
            valid_cert: true,
            valid_chain: true,
            valid_key: true,
            valid_pair: true,
            ..TlsConfig::default()
        };
        assert!(tls.is_valid());
        tls.valid_chain = false;
        assert!(!tls.is_valid());
    }

    #[test]
    fn expiry_uses_not_after() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let tls = TlsConfig {
            not_after: Some(Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap()),
            ..TlsConfig::default()
        };
        assert!(tls.is_expired_at(now));
        assert!(!TlsConfig::default().is_expired_at(now));
    }
}
