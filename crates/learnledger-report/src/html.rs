//! HTML history report.
//!
//! Produces a self-contained HTML file with all CSS/JS inlined.

use anyhow::Result;
use std::path::Path;

use learnledger_core::model::{LedgerEntry, PROGRESS_CAP};
use learnledger_core::scoring::PerformanceTier;

use crate::json::HistoryReport;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn tier_class(tier: PerformanceTier) -> &'static str {
    match tier {
        PerformanceTier::Excellent => "excellent",
        PerformanceTier::Good => "good",
        PerformanceTier::Average => "average",
        PerformanceTier::NeedsImprovement => "needs-improvement",
    }
}

/// Generate an HTML page for one learner's history.
pub fn generate_html(report: &HistoryReport) -> String {
    let mut html = String::new();
    let user = html_escape(&report.user);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>learnledger progress: {user}</title>\n"));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!("<h1>Learning progress: {user}</h1>\n"));
    html.push_str(&format!(
        "<p class=\"meta\">{} week(s) logged | generated {}</p>\n",
        report.summary.weeks_logged,
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Progress gauge and summary
    html.push_str("<section class=\"dashboard\">\n");
    html.push_str("<h2>Progress</h2>\n");
    html.push_str(&generate_gauge(report.progress.fraction()));
    html.push_str(&format!(
        "<p class=\"gauge-label\">{} / {} ({} total points)</p>\n",
        report.progress.capped_value, PROGRESS_CAP, report.progress.raw_total
    ));

    let summary = &report.summary;
    html.push_str("<table class=\"summary\">\n<tbody>\n");
    html.push_str(&format!(
        "<tr><th>Total points</th><td>{}</td></tr>\n",
        summary.total_points
    ));
    html.push_str(&format!(
        "<tr><th>Average per week</th><td>{:.1}</td></tr>\n",
        summary.average_points
    ));
    let best = summary
        .best_week
        .map(|(week, points)| format!("week {week} ({points} points)"))
        .unwrap_or_else(|| "-".to_string());
    html.push_str(&format!("<tr><th>Best week</th><td>{best}</td></tr>\n"));
    html.push_str(&format!(
        "<tr><th>Current bonus</th><td>{}</td></tr>\n",
        summary.current_bonus
    ));
    html.push_str("</tbody></table>\n");

    if !report.entries.is_empty() {
        html.push_str(&generate_bar_chart(&report.entries));
    }
    html.push_str("</section>\n");

    // Weekly rows
    html.push_str("<section class=\"results\">\n");
    html.push_str("<h2>History</h2>\n");
    html.push_str("<table class=\"results-table\" id=\"history\">\n");
    html.push_str("<thead><tr><th onclick=\"sortTable(0)\">Week</th><th onclick=\"sortTable(1)\">Learning</th><th onclick=\"sortTable(2)\">Bonus</th><th onclick=\"sortTable(3)\">Application</th><th onclick=\"sortTable(4)\">Certificates</th><th onclick=\"sortTable(5)\">Total</th><th onclick=\"sortTable(6)\">Tier</th></tr></thead>\n");
    html.push_str("<tbody>\n");

    for e in &report.entries {
        let tier = PerformanceTier::from_points(e.total_eval_points);
        html.push_str(&format!(
            "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            tier_class(tier),
            e.week,
            e.learning_points,
            e.bonus,
            e.application_points,
            e.certificate_points,
            e.total_eval_points,
            tier
        ));
    }

    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(&html_escape(
        &serde_json::to_string_pretty(report).unwrap_or_default(),
    ));
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("<script>\n");
    html.push_str(JS);
    html.push_str("</script>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &HistoryReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

/// Horizontal progress bar, `fraction` in `0.0..=1.0`.
fn generate_gauge(fraction: f64) -> String {
    let width = 400;
    let height = 24;
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;

    format!(
        "<svg class=\"gauge\" width=\"{width}\" height=\"{height}\" xmlns=\"http://www.w3.org/2000/svg\">\n\
         \x20 <rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" fill=\"var(--border)\" rx=\"6\"/>\n\
         \x20 <rect x=\"0\" y=\"0\" width=\"{filled}\" height=\"{height}\" fill=\"#22c55e\" rx=\"6\"/>\n\
         </svg>\n"
    )
}

/// One bar per ledger row, scaled to the highest weekly total.
fn generate_bar_chart(entries: &[LedgerEntry]) -> String {
    let bar_height = 22;
    let max_width = 400;
    let padding = 8;
    let label_width = 80;

    let max_total = entries
        .iter()
        .map(|e| e.total_eval_points)
        .max()
        .unwrap_or(0)
        .max(1);

    let total_height = entries.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 80,
        total_height
    );

    for (i, e) in entries.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let share = e.total_eval_points.max(0) as f64 / max_total as f64;
        let width = (share * max_width as f64) as usize;

        let color = match PerformanceTier::from_points(e.total_eval_points) {
            PerformanceTier::Excellent => "#22c55e",
            PerformanceTier::Good => "#84cc16",
            PerformanceTier::Average => "#eab308",
            PerformanceTier::NeedsImprovement => "#ef4444",
        };

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"13\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">week {}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            e.week
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width, y, width, bar_height, color
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{}</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            e.total_eval_points
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --excellent: #dcfce7; --good: #ecfccb; --average: #fef9c3; --low: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --excellent: #064e3b; --good: #365314; --average: #713f12; --low: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta, .gauge-label { color: #6b7280; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
table.summary { width: auto; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
.results-table th { cursor: pointer; }
.excellent { background: var(--excellent); }
.good { background: var(--good); }
.average { background: var(--average); }
.needs-improvement { background: var(--low); }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; display: block; }
"#;

const JS: &str = r#"
function sortTable(col) {
  const table = document.getElementById('history');
  const tbody = table.querySelector('tbody');
  const rows = Array.from(tbody.querySelectorAll('tr'));
  const asc = table.dataset.sortCol == col && table.dataset.sortDir == 'asc' ? false : true;
  rows.sort((a, b) => {
    const va = a.cells[col].textContent;
    const vb = b.cells[col].textContent;
    const na = Number(va), nb = Number(vb);
    const cmp = Number.isNaN(na) || Number.isNaN(nb) ? va.localeCompare(vb) : na - nb;
    return asc ? cmp : -cmp;
  });
  table.dataset.sortCol = col;
  table.dataset.sortDir = asc ? 'asc' : 'desc';
  rows.forEach(r => tbody.appendChild(r));
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use learnledger_core::model::ProgressSnapshot;

    fn make_report(user: &str, totals: &[i64]) -> HistoryReport {
        let entries: Vec<LedgerEntry> = totals
            .iter()
            .enumerate()
            .map(|(i, &total)| LedgerEntry {
                user: user.into(),
                week: i as u32 + 1,
                learning_points: total / 2,
                bonus: total / 2,
                application_points: total - total / 2,
                certificate_points: 0,
                total_eval_points: total,
            })
            .collect();
        let sum: i64 = totals.iter().sum();
        HistoryReport::new(user, entries, ProgressSnapshot::from_total(sum))
    }

    #[test]
    fn html_report_contains_required_elements() {
        let html = generate_html(&make_report("alice", &[1101, 350]));

        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains("Learning progress: alice"));
        assert!(html.contains("1000 / 1000 (1451 total points)"));
        assert!(html.contains("Needs Improvement"));
        assert!(html.contains("week 1 (1101 points)"));
    }

    #[test]
    fn html_escapes_user_names() {
        let html = generate_html(&make_report("<script>x</script>", &[10]));
        assert!(!html.contains("<script>x</script>"));
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
    }

    #[test]
    fn html_for_empty_history() {
        let html = generate_html(&make_report("nobody", &[]));
        assert!(html.contains("0 week(s) logged"));
        assert!(html.contains("<tr><th>Best week</th><td>-</td></tr>"));
    }

    #[test]
    fn gauge_fill_is_clamped() {
        assert!(generate_gauge(2.0).contains("width=\"400\" height=\"24\" fill=\"#22c55e\""));
        assert!(generate_gauge(0.25).contains("width=\"100\" height=\"24\" fill=\"#22c55e\""));
    }

    #[test]
    fn html_report_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alice.html");

        write_html_report(&make_report("alice", &[600]), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<html"));
    }
}
