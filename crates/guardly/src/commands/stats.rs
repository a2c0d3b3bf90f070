//! Statistics command handler.

use tabled::Tabled;

use guardly_core::{ClientsInfo, Session, Stats, TopEntry};

use crate::cli::{GlobalOpts, StatsArgs};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct TopRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Queries")]
    count: u64,
}

pub async fn handle(session: &Session, args: StatsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let dashboard = session.dashboard();
    dashboard.fetch_stats().await;

    let store = dashboard.store();
    let stats = util::fetched(store.stats(), "statistics")?;
    let clients = store.clients_info();
    let color = util::color(global);

    let out = output::render_single(
        &global.output,
        &*stats,
        |s| render_detail(s, &clients, args.top, color),
        |s| top_identifiers(s).join("\n"),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

fn top_identifiers(stats: &Stats) -> Vec<String> {
    stats
        .top_clients
        .iter()
        .filter_map(TopEntry::first_key)
        .map(str::to_owned)
        .collect()
}

/// Summary pairs followed by the three top lists.
pub fn render_detail(stats: &Stats, clients: &ClientsInfo, top: usize, color: bool) -> String {
    let summary = output::render_pairs(&[
        ("Period unit", stats.time_units.to_string()),
        ("DNS queries", stats.num_dns_queries.to_string()),
        (
            "Blocked by filters",
            format!(
                "{} ({:.1}%)",
                stats.num_blocked_filtering,
                stats.blocked_percent()
            ),
        ),
        (
            "Safe browsing",
            stats.num_replaced_safebrowsing.to_string(),
        ),
        ("Safe search", stats.num_replaced_safesearch.to_string()),
        ("Parental control", stats.num_replaced_parental.to_string()),
        (
            "Avg processing",
            format!("{:.2} ms", stats.avg_processing_ms()),
        ),
    ]);

    let mut sections = vec![summary];
    let lists = [
        ("Top clients", &stats.top_clients),
        ("Top queried domains", &stats.top_queried_domains),
        ("Top blocked domains", &stats.top_blocked_domains),
    ];
    for (title, entries) in lists {
        sections.push(output::heading(title, color));
        sections.push(top_table(entries, clients, top));
    }
    sections.join("\n")
}

fn top_table(entries: &[TopEntry], clients: &ClientsInfo, top: usize) -> String {
    let rows: Vec<TopRow> = entries
        .iter()
        .take(top)
        .enumerate()
        .filter_map(|(i, entry)| {
            let key = entry.first_key()?;
            // Show the looked-up client name next to its address.
            let name = match clients.get(key).and_then(|c| c.name.as_deref()) {
                Some(name) => format!("{key} ({name})"),
                None => key.to_owned(),
            };
            Some(TopRow {
                rank: i + 1,
                name,
                count: entry.count().unwrap_or_default(),
            })
        })
        .collect();
    output::render_table(&rows)
}
