//! Shared helpers for command handlers.

use chrono::{DateTime, Utc};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

/// Turn an unset store field into a fetch error for `section`.
pub fn fetched<T>(value: Option<T>, section: &str) -> Result<T, CliError> {
    value.ok_or_else(|| CliError::FetchFailed {
        section: section.into(),
    })
}

pub fn color(global: &GlobalOpts) -> bool {
    output::should_color(&global.color)
}

pub fn or_dash(value: Option<&str>) -> String {
    value.map_or_else(|| "-".into(), str::to_owned)
}

pub fn port(value: Option<u16>) -> String {
    value.map_or_else(|| "off".into(), |p| p.to_string())
}

pub fn timestamp(value: Option<DateTime<Utc>>) -> String {
    value.map_or_else(
        || "-".into(),
        |t| t.format("%Y-%m-%d %H:%M UTC").to_string(),
    )
}

pub fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".into()
    } else {
        values.join(", ")
    }
}
