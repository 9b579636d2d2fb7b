//! The `learnledger progress` command.

use anyhow::Result;

use learnledger_core::model::PROGRESS_CAP;

use super::Context;

pub fn execute(ctx: &Context, user: &str) -> Result<()> {
    let (_, keeper) = ctx.open()?;
    let snapshot = keeper.progress_snapshot(user);

    const WIDTH: usize = 30;
    let filled = (snapshot.fraction() * WIDTH as f64).round() as usize;
    println!(
        "{user}: [{}{}] {}/{} ({} total points)",
        "#".repeat(filled),
        "-".repeat(WIDTH - filled),
        snapshot.capped_value,
        PROGRESS_CAP,
        snapshot.raw_total
    );

    Ok(())
}
