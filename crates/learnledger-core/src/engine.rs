//! The scoring engine facade used by the command line and any other shell.
//!
//! Owns the ledger and the in-memory bonus tracker, and keeps the two in
//! step: a week only counts once its row is in the ledger.

use serde::{Deserialize, Serialize};

use crate::error::{PersistenceError, SubmitError};
use crate::input::Submission;
use crate::ledger::Ledger;
use crate::model::{LedgerEntry, ProgressSnapshot, UserState};
use crate::rebuild::rebuild;
use crate::scoring::{compute, PerformanceTier, WeeklyScore};
use crate::tracker::BonusTracker;

/// What a successful submission produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitOutcome {
    /// The row written to the ledger.
    pub entry: LedgerEntry,
    /// Per-category points and the bonus carried into next week.
    pub score: WeeklyScore,
    pub tier: PerformanceTier,
}

/// Scoring engine bound to one ledger.
pub struct Scorekeeper<L: Ledger> {
    ledger: L,
    tracker: BonusTracker,
}

impl<L: Ledger> Scorekeeper<L> {
    /// Replay `ledger` to seed every known user's state.
    pub fn open(ledger: L) -> Result<Self, PersistenceError> {
        let states = rebuild(&ledger)?;
        tracing::debug!(users = states.len(), "scorekeeper ready");
        Ok(Self {
            ledger,
            tracker: BonusTracker::from_states(states),
        })
    }

    /// Score a week with the user's carried bonus and record it.
    ///
    /// The tracker is updated before the append and restored if the append
    /// fails, so memory never runs ahead of the ledger.
    pub fn submit(&mut self, submission: &Submission) -> Result<SubmitOutcome, SubmitError> {
        submission.validate()?;
        let user = submission.user.as_str();

        let previous = self.tracker.get(user).copied();
        let prior_bonus = self.tracker.get_or_create(user).bonus;

        let score = compute(
            submission.learning_hours,
            submission.application_hours,
            submission.certificates,
            prior_bonus,
        );
        self.tracker.apply(user, &score);

        let entry = LedgerEntry {
            user: user.to_string(),
            week: submission.week,
            learning_points: score.learning_points,
            bonus: score.next_bonus,
            application_points: score.application_points,
            certificate_points: score.certificate_points,
            total_eval_points: score.total_eval_points,
        };

        if let Err(source) = self.ledger.append(entry.clone()) {
            self.tracker.restore(user, previous);
            tracing::warn!(
                user,
                week = submission.week,
                "ledger append failed, in-memory state rolled back: {source}"
            );
            return Err(SubmitError::NotRecorded {
                user: user.to_string(),
                week: submission.week,
                source,
            });
        }

        tracing::debug!(
            user,
            week = submission.week,
            total = score.total_eval_points,
            bonus = score.next_bonus,
            "week scored"
        );

        Ok(SubmitOutcome {
            entry,
            tier: score.tier(),
            score,
        })
    }

    /// The user's ledger rows in arrival order.
    pub fn history(&self, user: &str) -> Result<Vec<LedgerEntry>, PersistenceError> {
        self.ledger.query_by_user(user)
    }

    pub fn progress_snapshot(&self, user: &str) -> ProgressSnapshot {
        self.tracker.progress(user)
    }

    pub fn state(&self, user: &str) -> Option<&UserState> {
        self.tracker.get(user)
    }

    /// Known users in sorted order.
    pub fn users(&self) -> impl Iterator<Item = (&str, &UserState)> {
        self.tracker.users()
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }
}
