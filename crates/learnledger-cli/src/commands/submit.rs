//! The `learnledger submit` command.

use anyhow::Result;

use learnledger_core::model::PROGRESS_CAP;
use learnledger_core::Submission;

use super::Context;

pub fn execute(
    ctx: &Context,
    user: &str,
    week: &str,
    learning_hours: &str,
    application_hours: &str,
    certificates: &str,
) -> Result<()> {
    // Reject malformed input before touching the ledger
    let submission = Submission::parse(user, week, learning_hours, application_hours, certificates)?;

    let (_, mut keeper) = ctx.open()?;
    let outcome = keeper.submit(&submission)?;
    let score = &outcome.score;

    println!("User: {} (week {})", outcome.entry.user, outcome.entry.week);
    println!("  Learning points:     {}", score.learning_points);
    println!("  Application points:  {}", score.application_points);
    println!("  Certificate points:  {}", score.certificate_points);
    println!("  Total eval points:   {}", score.total_eval_points);
    println!("  Bonus for next week: {}", score.next_bonus);
    println!("  Performance:         {}", outcome.tier);

    let progress = keeper.progress_snapshot(&submission.user);
    println!(
        "  Progress:            {}/{} ({} total)",
        progress.capped_value, PROGRESS_CAP, progress.raw_total
    );

    Ok(())
}
