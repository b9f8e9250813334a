//! Rendering of match reports for stdout.

use crate::config::OutputFormat;
use crate::models::MatchReport;

/// Render a report in the requested format
pub fn render(
    report: &MatchReport,
    format: OutputFormat,
    pretty_json: bool,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json if pretty_json => serde_json::to_string_pretty(report),
        OutputFormat::Json => serde_json::to_string(report),
    }
}

/// One `<advertiser,person>` line per pairing followed by the total CTR
pub fn render_text(report: &MatchReport) -> String {
    let mut lines: Vec<String> = report
        .pairings
        .iter()
        .map(|p| pair_line(&p.advertiser, &p.person))
        .collect();

    lines.push(format!("Max CTR: {}", report.total_ctr));

    if let Some(blocking) = &report.blocking_pairs {
        lines.push(format!("Blocking pairs: {}", blocking.len()));
        lines.extend(
            blocking
                .iter()
                .map(|b| format!("  {} ctr={}", pair_line(&b.advertiser, &b.person), b.ctr)),
        );
    }

    lines.join("\n")
}

fn pair_line(advertiser: &str, person: &str) -> String {
    format!("<advertiser,person>:<{},{}>", advertiser, person)
}
