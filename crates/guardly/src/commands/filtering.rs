//! Filtering command handler.

use tabled::Tabled;

use guardly_core::{FilterList, FilterStatus, Session};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct FilterRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Enabled")]
    enabled: String,
    #[tabled(rename = "Rules")]
    rules: u64,
    #[tabled(rename = "Updated")]
    updated: String,
}

impl FilterRow {
    fn new(list: &FilterList, color: bool) -> Self {
        Self {
            id: list.id,
            name: list.name.clone(),
            enabled: output::flag(list.enabled, color),
            rules: list.rules_count,
            updated: util::timestamp(list.last_updated),
        }
    }
}

pub async fn handle(session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    let dashboard = session.dashboard();
    dashboard.fetch_filtering_status().await;

    let status = util::fetched(dashboard.store().filtering_config(), "filtering status")?;
    let color = util::color(global);

    let out = output::render_single(
        &global.output,
        &*status,
        |s| render_detail(s, color),
        |s| {
            s.filters
                .iter()
                .map(|f| f.url.clone())
                .collect::<Vec<_>>()
                .join("\n")
        },
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub fn render_detail(status: &FilterStatus, color: bool) -> String {
    let interval = match status.interval_hours {
        0 => "never".to_owned(),
        h => format!("every {h}h"),
    };
    let summary = output::render_pairs(&[
        ("Filtering", output::flag(status.enabled, color)),
        ("List updates", interval),
        ("Active rules", status.enabled_rules_count().to_string()),
        ("Custom rules", status.user_rules.len().to_string()),
    ]);

    let mut sections = vec![summary];
    for (title, lists) in [
        ("Blocklists", &status.filters),
        ("Allowlists", &status.whitelist_filters),
    ] {
        if lists.is_empty() {
            continue;
        }
        sections.push(output::heading(title, color));
        let rows: Vec<FilterRow> = lists.iter().map(|l| FilterRow::new(l, color)).collect();
        sections.push(output::render_table(&rows));
    }
    sections.join("\n")
}
