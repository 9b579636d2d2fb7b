//! Per-user momentum bonus and running totals.

use std::collections::BTreeMap;

use crate::model::{ProgressSnapshot, UserState};
use crate::scoring::WeeklyScore;

/// In-memory state store, one [`UserState`] per user seen so far.
///
/// Built once at start-up (usually from [`rebuild`](crate::rebuild::rebuild))
/// and handed to whoever needs it; there is no global instance.
#[derive(Debug, Clone, Default)]
pub struct BonusTracker {
    states: BTreeMap<String, UserState>,
}

impl BonusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the tracker with reconstructed state.
    pub fn from_states(states: BTreeMap<String, UserState>) -> Self {
        Self { states }
    }

    /// Current state for `user`, creating a zeroed entry on first sight.
    pub fn get_or_create(&mut self, user: &str) -> &UserState {
        self.states.entry(user.to_string()).or_default()
    }

    /// State for `user` without creating it.
    pub fn get(&self, user: &str) -> Option<&UserState> {
        self.states.get(user)
    }

    /// Fold one scored week into the user's state. The running total
    /// saturates, matching [`replay`](crate::rebuild::replay).
    pub fn apply(&mut self, user: &str, score: &WeeklyScore) {
        let state = self.states.entry(user.to_string()).or_default();
        state.bonus = score.next_bonus;
        state.last_week_points = score.total_eval_points;
        state.total_points = state.total_points.saturating_add(score.total_eval_points);
    }

    /// Put back a state captured before [`apply`](Self::apply). `None` means
    /// the user did not exist and is removed again.
    pub fn restore(&mut self, user: &str, previous: Option<UserState>) {
        match previous {
            Some(state) => {
                self.states.insert(user.to_string(), state);
            }
            None => {
                self.states.remove(user);
            }
        }
    }

    pub fn progress(&self, user: &str) -> ProgressSnapshot {
        let total = self.get(user).map(|s| s.total_points).unwrap_or(0);
        ProgressSnapshot::from_total(total)
    }

    /// Users in sorted order.
    pub fn users(&self) -> impl Iterator<Item = (&str, &UserState)> {
        self.states.iter().map(|(u, s)| (u.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
