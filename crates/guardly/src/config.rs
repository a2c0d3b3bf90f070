//! CLI configuration: thin wrapper around `guardly_config`.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--server, --username, --insecure, --timeout).

use std::time::Duration;

use guardly_core::{AuthCredentials, ServerConfig, TlsVerification};

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub use guardly_config::{
    AuthMode, Config, Profile, config_path, load_config, save_config, store_password,
};

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build the `ServerConfig` for a server-bound command.
///
/// A matching profile is used with flag overrides on top. Without one,
/// `--server` alone is enough: a username selects session login with the
/// password from `GUARDLY_PASSWORD`, no username means no auth.
pub fn build_server_config(global: &GlobalOpts, cfg: &Config) -> Result<ServerConfig, CliError> {
    let profile_name = active_profile_name(global, cfg);

    if let Some(profile) = cfg.profiles.get(&profile_name) {
        return resolve_profile(profile, &profile_name, global, cfg);
    }

    // An explicitly requested profile must exist.
    if global.profile.is_some() {
        return Err(CliError::ProfileNotFound {
            name: profile_name,
            available: available_profiles(cfg),
        });
    }

    let server = global.server.as_deref().ok_or_else(|| CliError::NoConfig {
        path: config_path().display().to_string(),
    })?;

    let flag_profile = Profile {
        server: server.to_owned(),
        auth_mode: if global.username.is_some() {
            AuthMode::Session
        } else {
            AuthMode::None
        },
        ..Profile::default()
    };
    resolve_profile(&flag_profile, &profile_name, global, cfg)
}

/// Translate a `Profile` + global flags into a `ServerConfig`.
///
/// Flag overrides take priority over profile values.
fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    global: &GlobalOpts,
    cfg: &Config,
) -> Result<ServerConfig, CliError> {
    let mut effective = profile.clone();
    if let Some(ref server) = global.server {
        effective.server.clone_from(server);
    }
    if global.username.is_some() {
        effective.username.clone_from(&global.username);
    }

    let mut server =
        guardly_config::profile_to_server_config(&effective, profile_name, &cfg.defaults)?;

    if global.insecure {
        server.tls = TlsVerification::DangerAcceptInvalid;
    }
    if let Some(secs) = global.timeout {
        server.timeout = Duration::from_secs(secs);
    }

    tracing::debug!(
        profile = profile_name,
        url = %server.url,
        auth = auth_label(&server.auth),
        "resolved server config"
    );
    Ok(server)
}

fn auth_label(auth: &AuthCredentials) -> &'static str {
    match auth {
        AuthCredentials::Session { .. } => "session",
        AuthCredentials::Basic { .. } => "basic",
        AuthCredentials::None => "none",
    }
}

pub fn available_profiles(cfg: &Config) -> String {
    if cfg.profiles.is_empty() {
        return "(none)".into();
    }
    cfg.profiles.keys().cloned().collect::<Vec<_>>().join(", ")
}

/// Redacted copy of the config for display.
pub fn redacted(cfg: &Config) -> Config {
    let mut shown = cfg.clone();
    for profile in shown.profiles.values_mut() {
        if profile.password.is_some() {
            profile.password = Some("********".into());
        }
    }
    shown
}
