//! TLS command handler.

use chrono::Utc;

use guardly_core::{Session, TlsConfig};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle(session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    let dashboard = session.dashboard();
    dashboard.fetch_tls_config().await;

    let tls = util::fetched(dashboard.store().tls_config(), "TLS configuration")?;
    let color = util::color(global);

    let out = output::render_single(
        &global.output,
        &*tls,
        |t| render_detail(t, color),
        |t| util::or_dash(t.server_name.as_deref()),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub fn render_detail(tls: &TlsConfig, color: bool) -> String {
    let mut expiry = util::timestamp(tls.not_after);
    if tls.is_expired_at(Utc::now()) {
        expiry.push_str(" (expired)");
    }

    let mut pairs = vec![
        ("Encryption", output::flag(tls.enabled, color)),
        ("Server name", util::or_dash(tls.server_name.as_deref())),
        ("Force HTTPS", output::flag(tls.force_https, color)),
        ("HTTPS port", util::port(tls.port_https)),
        ("DNS-over-TLS port", util::port(tls.port_dns_over_tls)),
        ("DNS-over-QUIC port", util::port(tls.port_dns_over_quic)),
        ("Certificate valid", output::flag(tls.is_valid(), color)),
        ("Subject", util::or_dash(tls.subject.as_deref())),
        ("Issuer", util::or_dash(tls.issuer.as_deref())),
        ("DNS names", util::join_or_dash(&tls.dns_names)),
        ("Not before", util::timestamp(tls.not_before)),
        ("Not after", expiry),
        ("Key type", util::or_dash(tls.key_type.as_deref())),
    ];
    if let Some(ref warning) = tls.warning_validation {
        pairs.push(("Warning", warning.clone()));
    }
    output::render_pairs(&pairs)
}
