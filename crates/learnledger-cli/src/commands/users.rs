//! The `learnledger users` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use super::Context;

pub fn execute(ctx: &Context) -> Result<()> {
    let (config, keeper) = ctx.open()?;

    let mut table = Table::new();
    table.set_header(vec!["User", "Total", "Last week", "Bonus"]);
    let mut count = 0usize;
    for (user, state) in keeper.users() {
        table.add_row(vec![
            Cell::new(user),
            Cell::new(state.total_points),
            Cell::new(state.last_week_points),
            Cell::new(state.bonus),
        ]);
        count += 1;
    }

    if count == 0 {
        println!("No learners in {} yet.", config.ledger_path.display());
    } else {
        println!("{table}");
        println!("{count} learner(s)");
    }

    Ok(())
}
