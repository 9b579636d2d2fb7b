//! The `learnledger init` command.

use std::path::Path;

use anyhow::Result;

use learnledger_core::config::SAMPLE_CONFIG;
use learnledger_core::CsvLedger;

use super::Context;

pub fn execute(ctx: &Context) -> Result<()> {
    if Path::new("learnledger.toml").exists() {
        println!("learnledger.toml already exists, skipping.");
    } else {
        std::fs::write("learnledger.toml", SAMPLE_CONFIG)?;
        println!("Created learnledger.toml");
    }

    let config = ctx.config()?;
    if config.ledger_path.exists() {
        println!("{} already exists, skipping.", config.ledger_path.display());
    } else {
        CsvLedger::open(&config.ledger_path)?;
        println!("Created {}", config.ledger_path.display());
    }

    println!("\nNext steps:");
    println!("  1. Run: learnledger submit --user alice --week 1 --learning-hours 10");
    println!("  2. Run: learnledger history --user alice");
    println!("  3. Run: learnledger export --user alice --format html");

    Ok(())
}
