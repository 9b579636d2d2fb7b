//! The `learnledger export` command.

use std::path::PathBuf;

use anyhow::Result;

use learnledger_report::html::write_html_report;
use learnledger_report::HistoryReport;

use super::Context;

/// Keep user names usable as file names.
fn file_stem(user: &str) -> String {
    user.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Html,
}

/// `all`, or a comma-separated list of `json` and `html`.
fn parse_formats(raw: &str) -> Result<Vec<Format>> {
    if raw == "all" {
        return Ok(vec![Format::Json, Format::Html]);
    }
    raw.split(',')
        .map(str::trim)
        .map(|f| match f {
            "json" => Ok(Format::Json),
            "html" => Ok(Format::Html),
            other => Err(anyhow::anyhow!("unknown format '{other}', expected json, html or all")),
        })
        .collect()
}

pub fn execute(ctx: &Context, user: &str, format: &str, output: Option<PathBuf>) -> Result<()> {
    let formats = parse_formats(format)?;
    let (config, keeper) = ctx.open()?;
    let entries = keeper.history(user)?;
    if entries.is_empty() {
        anyhow::bail!("no history for {user}");
    }

    let report = HistoryReport::new(user, entries, keeper.progress_snapshot(user));
    let output = output.unwrap_or(config.output_dir);
    std::fs::create_dir_all(&output)?;

    let stem = file_stem(user);
    let timestamp = report.generated_at.format("%Y-%m-%dT%H%M%S");

    for fmt in formats {
        match fmt {
            Format::Json => {
                let path = output.join(format!("{stem}-{timestamp}.json"));
                report.save_json(&path)?;
                println!("JSON report: {}", path.display());
            }
            Format::Html => {
                let path = output.join(format!("{stem}-{timestamp}.html"));
                write_html_report(&report, &path)?;
                println!("HTML report: {}", path.display());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_stem_replaces_unsafe_characters() {
        assert_eq!(file_stem("alice"), "alice");
        assert_eq!(file_stem("Doe, Jane"), "Doe__Jane");
        assert_eq!(file_stem("../etc"), "___etc");
    }

    #[test]
    fn parse_formats_accepts_known_names() {
        assert_eq!(parse_formats("all").unwrap(), vec![Format::Json, Format::Html]);
        assert_eq!(parse_formats("html, json").unwrap(), vec![Format::Html, Format::Json]);
    }

    #[test]
    fn parse_formats_rejects_typos() {
        let err = parse_formats("htm").unwrap_err();
        assert!(err.to_string().contains("unknown format 'htm'"));
    }
}
