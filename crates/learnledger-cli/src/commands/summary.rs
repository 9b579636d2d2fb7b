//! The `learnledger summary` command.

use anyhow::Result;

use learnledger_core::statistics::summarize;

use super::Context;

pub fn execute(ctx: &Context, user: &str) -> Result<()> {
    let (_, keeper) = ctx.open()?;
    let entries = keeper.history(user)?;
    let summary = summarize(user, &entries);

    println!("Summary for {user}");
    println!("  Weeks logged:   {}", summary.weeks_logged);
    println!("  Total points:   {}", summary.total_points);
    println!("  Average/week:   {:.1}", summary.average_points);
    match summary.best_week {
        Some((week, points)) => println!("  Best week:      {week} ({points} points)"),
        None => println!("  Best week:      -"),
    }
    println!("  Current bonus:  {}", summary.current_bonus);

    for (tier, count) in &summary.tier_counts {
        println!("  {tier}: {count}");
    }

    Ok(())
}
