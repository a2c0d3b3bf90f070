//! Profile configuration for guardly.
//!
//! TOML profiles, credential resolution (env + keyring + plaintext),
//! and translation to `guardly_core::ServerConfig`. The CLI layers its
//! flag overrides on top.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use guardly_core::{AuthCredentials, ServerConfig, TlsVerification};

const KEYRING_SERVICE: &str = "guardly";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no credentials configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("profile '{name}' not found")]
    ProfileNotFound { name: String },

    #[error("keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named server profiles.
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Look up a profile, falling back to `default_profile` when `name`
    /// is `None`.
    pub fn profile(&self, name: Option<&str>) -> Result<(String, &Profile), ConfigError> {
        let name = name
            .map(str::to_owned)
            .or_else(|| self.default_profile.clone())
            .unwrap_or_else(|| "default".into());
        self.profiles
            .get(&name)
            .map(|p| (name.clone(), p))
            .ok_or(ConfigError::ProfileNotFound { name })
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default)]
    pub insecure: bool,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Refresh period for `watch`, in humantime notation (`10s`, `1m`).
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            insecure: false,
            timeout: default_timeout(),
            refresh_interval: default_refresh_interval(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}
fn default_refresh_interval() -> String {
    "10s".into()
}

/// How a profile authenticates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// Cookie session through the web UI login.
    #[default]
    Session,
    /// HTTP basic auth on every request.
    Basic,
    /// Server without configured users.
    None,
}

/// A named server profile.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Server base URL (e.g., "http://192.168.1.2:3000").
    pub server: String,

    #[serde(default)]
    pub auth_mode: AuthMode,

    pub username: Option<String>,

    /// Password (plaintext; prefer keyring or env var).
    pub password: Option<String>,

    /// Environment variable name containing the password.
    pub password_env: Option<String>,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Override insecure TLS setting.
    pub insecure: Option<bool>,

    /// Override timeout (seconds).
    pub timeout: Option<u64>,

    /// Override refresh interval (humantime).
    pub refresh_interval: Option<String>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path. `GUARDLY_CONFIG` wins over the
/// platform location.
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os("GUARDLY_CONFIG") {
        return PathBuf::from(path);
    }
    ProjectDirs::from("com", "guardly", "guardly").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("guardly");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the default path + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load config from `path`, layering `GUARDLY_`-prefixed env vars on
/// top. Nested keys use a double underscore
/// (`GUARDLY_DEFAULTS__TIMEOUT=5`). A missing file yields defaults.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("GUARDLY_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to the canonical path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Credential resolution (without CLI flags) ───────────────────────

fn keyring_entry(profile_name: &str) -> Result<keyring::Entry, keyring::Error> {
    keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/password"))
}

/// Store a profile's password in the system keyring.
pub fn store_password(profile_name: &str, password: &str) -> Result<(), ConfigError> {
    keyring_entry(profile_name)?.set_password(password)?;
    Ok(())
}

/// Resolve the username: profile first, then `GUARDLY_USERNAME`.
pub fn resolve_username(profile: &Profile, profile_name: &str) -> Result<String, ConfigError> {
    profile
        .username
        .clone()
        .or_else(|| std::env::var("GUARDLY_USERNAME").ok())
        .ok_or_else(|| ConfigError::NoCredentials {
            profile: profile_name.into(),
        })
}

/// Resolve the password from the credential chain.
pub fn resolve_password(
    profile: &Profile,
    profile_name: &str,
) -> Result<SecretString, ConfigError> {
    // 1. Profile's password_env, then the global env var
    let env_names = profile
        .password_env
        .as_deref()
        .into_iter()
        .chain(std::iter::once("GUARDLY_PASSWORD"));
    for name in env_names {
        if let Ok(pw) = std::env::var(name) {
            return Ok(SecretString::from(pw));
        }
    }

    // 2. Keyring
    if let Ok(entry) = keyring_entry(profile_name) {
        if let Ok(pw) = entry.get_password() {
            return Ok(SecretString::from(pw));
        }
    }

    // 3. Plaintext in config
    if let Some(ref pw) = profile.password {
        return Ok(SecretString::from(pw.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Resolve `AuthCredentials` from a profile's `auth_mode`.
pub fn resolve_auth(profile: &Profile, profile_name: &str) -> Result<AuthCredentials, ConfigError> {
    match profile.auth_mode {
        AuthMode::Session => Ok(AuthCredentials::Session {
            username: resolve_username(profile, profile_name)?,
            password: resolve_password(profile, profile_name)?,
        }),
        AuthMode::Basic => Ok(AuthCredentials::Basic {
            username: resolve_username(profile, profile_name)?,
            password: resolve_password(profile, profile_name)?,
        }),
        AuthMode::None => Ok(AuthCredentials::None),
    }
}

/// Parse a humantime duration (`10s`, `2m`, `0s`).
pub fn parse_interval(field: &str, raw: &str) -> Result<Duration, ConfigError> {
    humantime::parse_duration(raw).map_err(|e| ConfigError::Validation {
        field: field.into(),
        reason: format!("'{raw}': {e}"),
    })
}

/// Build a `ServerConfig` from a profile, without CLI flag overrides.
pub fn profile_to_server_config(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
) -> Result<ServerConfig, ConfigError> {
    let url: url::Url = profile.server.parse().map_err(|_| ConfigError::Validation {
        field: "server".into(),
        reason: format!("invalid URL: {}", profile.server),
    })?;

    let auth = resolve_auth(profile, profile_name)?;

    let tls = if profile.insecure.unwrap_or(defaults.insecure) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    let refresh = profile
        .refresh_interval
        .as_deref()
        .unwrap_or(&defaults.refresh_interval);

    let mut config = ServerConfig::new(url, auth);
    config.tls = tls;
    config.timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));
    config.refresh_interval = parse_interval("refresh_interval", refresh)?;
    Ok(config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use secrecy::ExposeSecret;

    use super::*;

    const SAMPLE: &str = r#"
default_profile = "home"

[defaults]
timeout = 15

[profiles.home]
server = "http://192.168.1.2:3000"
username = "admin"
password = "plain"
password_env = "GUARDLY_TEST_UNSET_PASSWORD_VAR"
refresh_interval = "30s"

[profiles.lab]
server = "https://dns.lab.example"
auth_mode = "none"
insecure = true
"#;

    fn sample_config() -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, SAMPLE).unwrap();
        let cfg = load_config_from(&path).unwrap();
        (dir, cfg)
    }

    #[test]
    fn loads_profiles_and_defaults() {
        let (_dir, cfg) = sample_config();
        assert_eq!(cfg.default_profile.as_deref(), Some("home"));
        assert_eq!(cfg.defaults.timeout, 15);
        assert_eq!(cfg.defaults.output, "table");
        assert_eq!(cfg.profiles.len(), 2);
        assert_eq!(cfg.profiles["home"].auth_mode, AuthMode::Session);
        assert_eq!(cfg.profiles["lab"].auth_mode, AuthMode::None);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert!(cfg.profiles.is_empty());
        assert_eq!(cfg.defaults.refresh_interval, "10s");
    }

    #[test]
    fn profile_lookup_uses_default_name() {
        let (_dir, cfg) = sample_config();
        assert_eq!(cfg.profile(None).unwrap().0, "home");
        assert_eq!(cfg.profile(Some("lab")).unwrap().0, "lab");
        assert!(matches!(
            cfg.profile(Some("nope")),
            Err(ConfigError::ProfileNotFound { .. })
        ));
    }

    #[test]
    fn save_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut cfg = Config::default();
        cfg.profiles.insert(
            "default".into(),
            Profile {
                server: "http://10.0.0.1".into(),
                auth_mode: AuthMode::Basic,
                ..Profile::default()
            },
        );

        save_config_to(&cfg, &path).unwrap();
        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.profiles["default"].server, "http://10.0.0.1");
        assert_eq!(loaded.profiles["default"].auth_mode, AuthMode::Basic);
    }

    #[test]
    fn plaintext_password_is_last_resort() {
        let (_dir, cfg) = sample_config();
        let pw = resolve_password(&cfg.profiles["home"], "guardly-test-home").unwrap();
        assert_eq!(pw.expose_secret(), "plain");
    }

    #[test]
    fn session_profile_builds_server_config() {
        let (_dir, cfg) = sample_config();
        let server =
            profile_to_server_config(&cfg.profiles["home"], "guardly-test-home", &cfg.defaults)
                .unwrap();

        assert_eq!(server.url.as_str(), "http://192.168.1.2:3000/");
        assert_eq!(server.timeout, Duration::from_secs(15));
        assert_eq!(server.refresh_interval, Duration::from_secs(30));
        assert_eq!(server.tls, TlsVerification::SystemDefaults);
        assert!(matches!(server.auth, AuthCredentials::Session { ref username, .. } if username == "admin"));
    }

    #[test]
    fn insecure_anonymous_profile() {
        let (_dir, cfg) = sample_config();
        let server =
            profile_to_server_config(&cfg.profiles["lab"], "lab", &cfg.defaults).unwrap();
        assert_eq!(server.tls, TlsVerification::DangerAcceptInvalid);
        assert!(matches!(server.auth, AuthCredentials::None));
        assert_eq!(server.refresh_interval, Duration::from_secs(10));
    }

    #[test]
    fn invalid_server_url_is_rejected() {
        let profile = Profile {
            server: "not a url".into(),
            auth_mode: AuthMode::None,
            ..Profile::default()
        };
        let err = profile_to_server_config(&profile, "bad", &Defaults::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "server"));
    }

    #[test]
    fn bad_interval_is_a_validation_error() {
        assert!(parse_interval("refresh_interval", "soon").is_err());
        assert_eq!(
            parse_interval("refresh_interval", "2m").unwrap(),
            Duration::from_secs(120)
        );
    }
}
