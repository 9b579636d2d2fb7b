//! History report type with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use learnledger_core::model::{LedgerEntry, ProgressSnapshot};
use learnledger_core::statistics::{summarize, UserSummary};

/// Everything known about one learner at export time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryReport {
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    pub user: String,
    pub progress: ProgressSnapshot,
    pub summary: UserSummary,
    /// Ledger rows in arrival order.
    pub entries: Vec<LedgerEntry>,
}

impl HistoryReport {
    pub fn new(user: &str, entries: Vec<LedgerEntry>, progress: ProgressSnapshot) -> Self {
        Self {
            generated_at: Utc::now(),
            user: user.to_string(),
            progress,
            summary: summarize(user, &entries),
            entries,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        serde_json::from_str(&content).context("failed to parse report JSON")
    }
}
