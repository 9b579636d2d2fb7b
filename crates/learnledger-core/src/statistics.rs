//! Per-user summary statistics over ledger history.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{LedgerEntry, Points};
use crate::scoring::PerformanceTier;

/// Aggregate view of one user's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub user: String,
    /// Number of ledger rows, re-submitted weeks included.
    pub weeks_logged: usize,
    pub total_points: Points,
    /// Mean `total_eval_points` per row; 0.0 with no history.
    pub average_points: f64,
    /// Week number and total of the highest-scoring row (earliest on ties).
    pub best_week: Option<(u32, Points)>,
    /// Bonus recorded on the most recent row.
    pub current_bonus: Points,
    /// How many rows fell into each tier.
    pub tier_counts: BTreeMap<PerformanceTier, usize>,
}

/// Summarize `entries`, which must all belong to `user` and be in arrival order.
pub fn summarize(user: &str, entries: &[LedgerEntry]) -> UserSummary {
    let total_points: Points = entries.iter().map(|e| e.total_eval_points).sum();

    let average_points = if entries.is_empty() {
        0.0
    } else {
        total_points as f64 / entries.len() as f64
    };

    let mut best_week: Option<(u32, Points)> = None;
    let mut tier_counts = BTreeMap::new();
    for entry in entries {
        if best_week.map_or(true, |(_, best)| entry.total_eval_points > best) {
            best_week = Some((entry.week, entry.total_eval_points));
        }
        *tier_counts
            .entry(PerformanceTier::from_points(entry.total_eval_points))
            .or_insert(0) += 1;
    }

    UserSummary {
        user: user.to_string(),
        weeks_logged: entries.len(),
        total_points,
        average_points,
        best_week,
        current_bonus: entries.last().map(|e| e.bonus).unwrap_or(0),
        tier_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(week: u32, bonus: Points, total: Points) -> LedgerEntry {
        LedgerEntry {
            user: "alice".into(),
            week,
            learning_points: bonus,
            bonus,
            application_points: 0,
            certificate_points: total - bonus,
            total_eval_points: total,
        }
    }

    #[test]
    fn summarize_empty_history() {
        let summary = summarize("alice", &[]);
        assert_eq!(summary.weeks_logged, 0);
        assert_eq!(summary.total_points, 0);
        assert_eq!(summary.average_points, 0.0);
        assert!(summary.best_week.is_none());
        assert!(summary.tier_counts.is_empty());
    }

    #[test]
    fn summarize_mixed_history() {
        let entries = vec![entry(1, 500, 1100), entry(2, 450, 450), entry(3, 100, 650)];
        let summary = summarize("alice", &entries);

        assert_eq!(summary.weeks_logged, 3);
        assert_eq!(summary.total_points, 2200);
        assert!((summary.average_points - 2200.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.best_week, Some((1, 1100)));
        assert_eq!(summary.current_bonus, 100);
        assert_eq!(summary.tier_counts[&PerformanceTier::Excellent], 1);
        assert_eq!(summary.tier_counts[&PerformanceTier::Good], 1);
        assert_eq!(summary.tier_counts[&PerformanceTier::Average], 1);
        assert!(!summary
            .tier_counts
            .contains_key(&PerformanceTier::NeedsImprovement));
    }

    #[test]
    fn best_week_prefers_earliest_on_tie() {
        let entries = vec![entry(4, 0, 700), entry(7, 0, 700)];
        assert_eq!(summarize("alice", &entries).best_week, Some((4, 700)));
    }
}
