//! Subcommand implementations.

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use learnledger_core::config::{load_config_from, LedgerConfig};
use learnledger_core::{CsvLedger, Scorekeeper};

pub mod export;
pub mod history;
pub mod init;
pub mod progress;
pub mod submit;
pub mod summary;
pub mod users;

/// Options shared by every subcommand.
pub struct Context {
    pub config_path: Option<PathBuf>,
    pub ledger_override: Option<PathBuf>,
}

impl Context {
    /// Load config, applying `--ledger` on top of it.
    pub fn config(&self) -> Result<LedgerConfig> {
        let mut config = load_config_from(self.config_path.as_deref())?;
        if let Some(ledger) = &self.ledger_override {
            config.ledger_path = ledger.clone();
        }
        Ok(config)
    }

    /// Open the configured ledger and rebuild every learner's state from it.
    pub fn open(&self) -> Result<(LedgerConfig, Scorekeeper<CsvLedger>)> {
        let config = self.config()?;
        tracing::debug!(ledger = %config.ledger_path.display(), "opening ledger");
        let ledger = CsvLedger::open(&config.ledger_path)?;
        let keeper = Scorekeeper::open(ledger).with_context(|| {
            format!("failed to load ledger {}", config.ledger_path.display())
        })?;
        Ok((config, keeper))
    }
}
