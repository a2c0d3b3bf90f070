//! Dashboard and watch command handlers.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast::error::RecvError;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use guardly_core::{
    ClientsInfo, DashboardChange, DashboardStore, FilterStatus, ServerConfig, Session, Stats,
    StatsConfig, TlsConfig,
};

use crate::cli::{GlobalOpts, WatchArgs};
use crate::error::CliError;
use crate::output;

use super::{filtering, stats, tls, util};

const DASHBOARD_TOP_ROWS: usize = 5;

/// Point-in-time copy of every dashboard field.
#[derive(Debug, Serialize)]
struct DashboardView {
    initialized: bool,
    last_refresh: Option<DateTime<Utc>>,
    stats: Option<Arc<Stats>>,
    stats_config: Option<Arc<StatsConfig>>,
    tls_config: Option<Arc<TlsConfig>>,
    filtering_config: Option<Arc<FilterStatus>>,
    clients_info: Arc<ClientsInfo>,
}

impl DashboardView {
    fn capture(store: &DashboardStore) -> Self {
        Self {
            initialized: store.is_initialized(),
            last_refresh: store.last_refresh(),
            stats: store.stats(),
            stats_config: store.stats_config(),
            tls_config: store.tls_config(),
            filtering_config: store.filtering_config(),
            clients_info: store.clients_info(),
        }
    }
}

pub async fn handle(session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    let dashboard = session.open_dashboard();
    // The session is logged in, so opening started initialization.
    dashboard
        .store()
        .subscribe_initialized()
        .wait_for(|done| *done)
        .await;

    render(dashboard.store(), global)
}

/// Refresh on an interval and re-render after every full pass until
/// interrupted.
pub async fn watch(
    session: &Session,
    args: WatchArgs,
    server: &ServerConfig,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let interval: Duration = args.interval.map_or(server.refresh_interval, Into::into);
    let dashboard = session.dashboard();
    let mut changes = dashboard.store().subscribe_changes();

    let cancel = CancellationToken::new();
    let refresher = {
        let dashboard = dashboard.clone();
        let cancel = cancel.clone();
        tokio::spawn(async move { dashboard.run_refresh_loop(interval, cancel).await })
    };
    debug!(?interval, "watching dashboard");

    // One listener for the whole loop so a Ctrl-C during render is kept.
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let result = loop {
        tokio::select! {
            _ = &mut ctrl_c => break Ok(()),
            change = changes.recv() => match change {
                Ok(DashboardChange::Initialized) => {
                    if let Err(e) = render(dashboard.store(), global) {
                        break Err(e);
                    }
                    if interval.is_zero() {
                        break Ok(());
                    }
                }
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => debug!(skipped, "change feed lagged"),
                Err(RecvError::Closed) => break Ok(()),
            },
        }
    };

    cancel.cancel();
    if let Err(e) = refresher.await {
        warn!(error = %e, "refresh task ended abnormally");
    }
    result
}

fn render(store: &DashboardStore, global: &GlobalOpts) -> Result<(), CliError> {
    let view = DashboardView::capture(store);
    let color = util::color(global);
    let out = output::render_single(
        &global.output,
        &view,
        |v| render_detail(v, color),
        |v| util::timestamp(v.last_refresh),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

fn render_detail(view: &DashboardView, color: bool) -> String {
    let unavailable = || "unavailable".to_owned();
    let retention = view
        .stats_config
        .as_ref()
        .map_or_else(unavailable, |c| format!("{} days", c.interval_days));

    let mut sections = vec![output::render_pairs(&[
        ("Last refresh", util::timestamp(view.last_refresh)),
        ("Stats retention", retention),
    ])];

    sections.push(output::heading("Statistics", color));
    sections.push(view.stats.as_ref().map_or_else(unavailable, |s| {
        stats::render_detail(s, &view.clients_info, DASHBOARD_TOP_ROWS, color)
    }));

    sections.push(output::heading("Encryption", color));
    sections.push(
        view.tls_config
            .as_ref()
            .map_or_else(unavailable, |t| tls::render_detail(t, color)),
    );

    sections.push(output::heading("Filtering", color));
    sections.push(
        view.filtering_config
            .as_ref()
            .map_or_else(unavailable, |f| filtering::render_detail(f, color)),
    );

    sections.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_renders_unavailable_sections() {
        let store = DashboardStore::new();
        let out = render_detail(&DashboardView::capture(&store), false);
        assert_eq!(out.matches("unavailable").count(), 4);
        assert!(out.contains("Statistics"));
    }
}
