//! Core data model types for learnledger.
//!
//! These are the rows persisted in the ledger and the running per-user
//! state rebuilt from them.

use serde::{Deserialize, Deserializer, Serialize};

/// Whole-number points. All reported and persisted quantities are rounded.
pub type Points = i64;

/// Upper bound of the progress gauge.
pub const PROGRESS_CAP: Points = 1000;

/// Largest magnitude any single ledger cell may hold.
pub const MAX_POINTS: Points = 1_000_000_000_000_000;

/// Column names of the ledger file, in order.
pub const LEDGER_COLUMNS: [&str; 7] = [
    "User",
    "Week",
    "Learning Points",
    "Bonus",
    "Application Points",
    "Certificate Points",
    "Total Eval Points",
];

/// One scored week for one user. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    #[serde(rename = "User")]
    pub user: String,
    #[serde(rename = "Week")]
    pub week: u32,
    #[serde(rename = "Learning Points", deserialize_with = "coerce_points")]
    pub learning_points: Points,
    /// Momentum bonus carried into the user's next week.
    #[serde(rename = "Bonus", deserialize_with = "coerce_points")]
    pub bonus: Points,
    #[serde(rename = "Application Points", deserialize_with = "coerce_points")]
    pub application_points: Points,
    #[serde(rename = "Certificate Points", deserialize_with = "coerce_points")]
    pub certificate_points: Points,
    #[serde(rename = "Total Eval Points", deserialize_with = "coerce_points")]
    pub total_eval_points: Points,
}

/// Accept any finite number in a points column and round it to the column's
/// whole-number type, so fractional values written by older tools still load.
/// Values beyond [`MAX_POINTS`] are rejected rather than clamped.
fn coerce_points<'de, D>(deserializer: D) -> Result<Points, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() {
        return Err(serde::de::Error::custom(format!(
            "points must be finite, got {value}"
        )));
    }
    let rounded = value.round();
    if rounded.abs() > MAX_POINTS as f64 {
        return Err(serde::de::Error::custom(format!(
            "points out of range, got {value}"
        )));
    }
    Ok(rounded as Points)
}

/// Running state for one user, held only in memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserState {
    /// Momentum value fed into the next week's learning points.
    pub bonus: Points,
    /// Sum of `total_eval_points` over all of the user's entries.
    pub total_points: Points,
    /// `total_eval_points` of the most recent entry.
    pub last_week_points: Points,
}

/// Progress gauge reading for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// `min(total_points, PROGRESS_CAP)`.
    pub capped_value: Points,
    /// Uncapped running total, for the label.
    pub raw_total: Points,
}

impl ProgressSnapshot {
    pub fn from_total(total_points: Points) -> Self {
        Self {
            capped_value: total_points.min(PROGRESS_CAP),
            raw_total: total_points,
        }
    }

    /// Gauge fill in `0.0..=1.0`.
    pub fn fraction(&self) -> f64 {
        (self.capped_value.max(0) as f64) / (PROGRESS_CAP as f64)
    }
}
