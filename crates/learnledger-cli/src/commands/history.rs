//! The `learnledger history` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use learnledger_core::scoring::PerformanceTier;

use super::Context;

pub fn execute(ctx: &Context, user: &str, format: &str) -> Result<()> {
    let (_, keeper) = ctx.open()?;
    let entries = keeper.history(user)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        "table" => {
            if entries.is_empty() {
                println!("No history for {user}.");
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec![
                "Week",
                "Learning",
                "Bonus",
                "Application",
                "Certificates",
                "Total",
                "Tier",
            ]);
            for e in &entries {
                table.add_row(vec![
                    Cell::new(e.week),
                    Cell::new(e.learning_points),
                    Cell::new(e.bonus),
                    Cell::new(e.application_points),
                    Cell::new(e.certificate_points),
                    Cell::new(e.total_eval_points),
                    Cell::new(PerformanceTier::from_points(e.total_eval_points)),
                ]);
            }
            println!("History for {user}");
            println!("{table}");
        }
        other => anyhow::bail!("unknown format '{other}', expected table or json"),
    }

    Ok(())
}
