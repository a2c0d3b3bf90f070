//! Client lookup command handler.

use guardly_core::{ClientDetail, Session};

use crate::cli::{ClientArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle(session: &Session, args: ClientArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let dashboard = session.dashboard();
    dashboard.fetch_client(&args.identifier).await;

    let detail = dashboard
        .store()
        .client(&args.identifier)
        .ok_or_else(|| CliError::NotFound {
            resource_type: "client".into(),
            identifier: args.identifier.clone(),
        })?;
    let color = util::color(global);

    let out = output::render_single(
        &global.output,
        &detail,
        |d| render_detail(d, color),
        |d| d.name.clone().unwrap_or_else(|| args.identifier.clone()),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub fn render_detail(detail: &ClientDetail, color: bool) -> String {
    let whois = detail.whois_info.as_ref().map(|w| {
        [w.city.as_deref(), w.country.as_deref(), w.orgname.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ")
    });

    let mut pairs = vec![
        ("Name", util::or_dash(detail.name.as_deref())),
        ("IDs", util::join_or_dash(&detail.ids)),
        ("Global settings", output::flag(detail.use_global_settings, color)),
        ("Filtering", output::flag(detail.filtering_enabled, color)),
        ("Parental control", output::flag(detail.parental_enabled, color)),
        ("Safe browsing", output::flag(detail.safebrowsing_enabled, color)),
        ("Safe search", output::flag(detail.safesearch_enabled, color)),
        ("Blocked services", util::join_or_dash(&detail.blocked_services)),
        ("Upstreams", util::join_or_dash(&detail.upstreams)),
        ("WHOIS", util::or_dash(whois.as_deref().filter(|w| !w.is_empty()))),
    ];
    if detail.disallowed {
        pairs.push((
            "Access",
            format!(
                "disallowed ({})",
                detail.disallowed_rule.as_deref().unwrap_or("rule unknown")
            ),
        ));
    }
    output::render_pairs(&pairs)
}
