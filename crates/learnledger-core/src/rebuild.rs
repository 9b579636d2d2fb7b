//! Rebuild per-user running state by replaying the ledger.

use std::collections::BTreeMap;

use crate::error::PersistenceError;
use crate::ledger::Ledger;
use crate::model::{LedgerEntry, UserState};

/// Replay every entry in arrival order.
///
/// For each user, `total_points` sums `total_eval_points` over all rows,
/// while `bonus` and `last_week_points` come from the last row to arrive,
/// regardless of its week number. The ledger is only read.
pub fn rebuild(ledger: &dyn Ledger) -> Result<BTreeMap<String, UserState>, PersistenceError> {
    let entries = ledger.entries()?;
    let states = replay(&entries);
    tracing::debug!(
        rows = entries.len(),
        users = states.len(),
        "rebuilt user state from ledger"
    );
    Ok(states)
}

/// Fold already-loaded entries into per-user state.
pub fn replay(entries: &[LedgerEntry]) -> BTreeMap<String, UserState> {
    let mut states: BTreeMap<String, UserState> = BTreeMap::new();
    for entry in entries {
        let state = states.entry(entry.user.clone()).or_default();
        state.total_points = state.total_points.saturating_add(entry.total_eval_points);
        state.last_week_points = entry.total_eval_points;
        state.bonus = entry.bonus;
    }
    states
}
