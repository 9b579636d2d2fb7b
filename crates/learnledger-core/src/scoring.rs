//! Weekly point formulas and the momentum bonus.
//!
//! Each component is computed unrounded, then rounded once to the nearest
//! whole point with ties away from zero. The week's total is the sum of the
//! rounded components, so the figures shown to a learner always add up.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Points, MAX_POINTS};

/// Share of raw learning points kept after the fixed 10% damping.
const LEARNING_DAMPING: f64 = 0.9;
/// Fraction of the carried bonus added to the next week's learning points.
const BONUS_CARRY_RATE: f64 = 0.02;
/// Per-week decay applied to the bonus when no study hours are logged.
const BONUS_DECAY: f64 = 0.9;

/// Most points a single hours field may earn before the carried bonus is
/// added. A quarter of [`MAX_POINTS`] keeps the bonus fixed point and the
/// weekly total inside the ledger's range.
pub const MAX_COMPONENT_POINTS: f64 = (MAX_POINTS / 4) as f64;

/// Points for one week, plus the bonus to carry into the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyScore {
    pub learning_points: Points,
    pub application_points: Points,
    pub certificate_points: Points,
    pub total_eval_points: Points,
    pub next_bonus: Points,
}

impl WeeklyScore {
    pub fn tier(&self) -> PerformanceTier {
        PerformanceTier::from_points(self.total_eval_points)
    }
}

/// Unrounded learning points: `(hours^0.8) * 100 * 0.9 + prior_bonus * 0.02`.
pub fn learning_points(learning_hours: f64, prior_bonus: Points) -> f64 {
    learning_hours.powf(0.8) * 100.0 * LEARNING_DAMPING + prior_bonus as f64 * BONUS_CARRY_RATE
}

/// Unrounded application points: `(hours^0.9) * 120`.
pub fn application_points(application_hours: f64) -> f64 {
    application_hours.powf(0.9) * 120.0
}

/// Unrounded certificate points: `sqrt(500 / (certificates + 1))`.
///
/// Strictly decreasing in `certificates`; zero certificates yields `sqrt(500)`.
pub fn certificate_points(certificates: u32) -> f64 {
    (500.0 / (f64::from(certificates) + 1.0)).sqrt()
}

/// Round to the nearest whole point, ties away from zero. Saturates at the
/// bounds of [`Points`].
pub fn round_points(value: f64) -> Points {
    value.round() as Points
}

/// Score one week.
///
/// Hours must be non-negative; callers validate input before reaching here.
/// Out-of-range hours saturate instead of overflowing.
/// When hours are logged the bonus is replaced by this week's learning
/// points, otherwise the prior bonus decays by 10%.
pub fn compute(
    learning_hours: f64,
    application_hours: f64,
    certificates: u32,
    prior_bonus: Points,
) -> WeeklyScore {
    let learning = round_points(learning_points(learning_hours, prior_bonus));
    let application = round_points(application_points(application_hours));
    let certificate = round_points(certificate_points(certificates));

    let next_bonus = if learning_hours > 0.0 {
        learning
    } else {
        round_points(prior_bonus as f64 * BONUS_DECAY)
    };

    WeeklyScore {
        learning_points: learning,
        application_points: application,
        certificate_points: certificate,
        total_eval_points: learning
            .saturating_add(application)
            .saturating_add(certificate),
        next_bonus,
    }
}

/// Display label derived from a week's total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PerformanceTier {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

impl PerformanceTier {
    /// Inclusive lower bounds, checked from the top.
    pub fn from_points(total_eval_points: Points) -> Self {
        if total_eval_points >= 800 {
            PerformanceTier::Excellent
        } else if total_eval_points >= 600 {
            PerformanceTier::Good
        } else if total_eval_points >= 400 {
            PerformanceTier::Average
        } else {
            PerformanceTier::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PerformanceTier::Excellent => "Excellent",
            PerformanceTier::Good => "Good",
            PerformanceTier::Average => "Average",
            PerformanceTier::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_heavy_week() {
        let score = compute(100.0, 50.0, 2, 0);
        assert_eq!(score.learning_points, 3583);
        assert_eq!(score.application_points, 4057);
        assert_eq!(score.certificate_points, 13);
        assert_eq!(score.total_eval_points, 7653);
        assert_eq!(score.next_bonus, 3583);
    }

    #[test]
    fn golden_light_week() {
        let score = compute(10.0, 5.0, 0, 0);
        assert_eq!(score.learning_points, 568);
        assert_eq!(score.application_points, 511);
        assert_eq!(score.certificate_points, 22);
        assert_eq!(score.total_eval_points, 1101);
        assert_eq!(score.next_bonus, 568);
    }

    #[test]
    fn total_is_sum_of_rounded_components() {
        let score = compute(3.3, 7.7, 4, 123);
        assert_eq!(
            score.total_eval_points,
            score.learning_points + score.application_points + score.certificate_points
        );
    }

    #[test]
    fn zero_certificates_yields_sqrt_500() {
        assert!((certificate_points(0) - 22.360_679_774_997_9).abs() < 1e-9);
        assert_eq!(compute(0.0, 0.0, 0, 0).certificate_points, 22);
    }

    #[test]
    fn certificate_points_strictly_decrease() {
        let mut previous = certificate_points(0);
        for certs in 1..200 {
            let current = certificate_points(certs);
            assert!(current < previous, "not decreasing at {certs}");
            previous = current;
        }
    }

    #[test]
    fn zero_hours_decays_bonus_without_study_points() {
        let score = compute(0.0, 0.0, 0, 1000);
        assert_eq!(score.next_bonus, 900);
        // only the 2% carry contributes
        assert_eq!(score.learning_points, 20);
    }

    #[test]
    fn bonus_is_replaced_not_accumulated_when_studying() {
        let score = compute(1.0, 0.0, 0, 5000);
        // 1^0.8 * 90 + 5000 * 0.02 = 190
        assert_eq!(score.learning_points, 190);
        assert_eq!(score.next_bonus, 190);
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(round_points(4.5), 5);
        assert_eq!(round_points(2.5), 3);
        assert_eq!(round_points(2.4999), 2);
        // 5 * 0.9 = 4.5 rounds back up to 5
        assert_eq!(compute(0.0, 0.0, 0, 5).next_bonus, 5);
    }

    #[test]
    fn repeated_idle_weeks_never_increase_or_go_negative() {
        let mut bonus = 3583;
        for _ in 0..100 {
            let next = compute(0.0, 0.0, 0, bonus).next_bonus;
            assert!(next >= 0);
            assert!(next <= bonus);
            bonus = next;
        }
        assert!(bonus <= 5, "bonus should settle near zero, got {bonus}");
    }

    #[test]
    fn huge_inputs_saturate() {
        let score = compute(1e300, 1e300, 0, Points::MAX);
        assert_eq!(score.learning_points, Points::MAX);
        assert_eq!(score.total_eval_points, Points::MAX);
    }

    #[test]
    fn capped_components_stay_inside_ledger_range() {
        // repeated maximal weeks: the bonus converges to cap / 0.98
        let mut bonus: Points = 0;
        for _ in 0..500 {
            let learning = round_points(MAX_COMPONENT_POINTS + bonus as f64 * BONUS_CARRY_RATE);
            let total = learning + round_points(MAX_COMPONENT_POINTS) + 23;
            assert!(total <= MAX_POINTS);
            bonus = learning;
        }
    }

    #[test]
    fn compute_is_deterministic() {
        let a = compute(12.5, 3.25, 1, 77);
        let b = compute(12.5, 3.25, 1, 77);
        assert_eq!(a, b);
    }

    #[test]
    fn tier_thresholds_are_inclusive() {
        assert_eq!(PerformanceTier::from_points(800), PerformanceTier::Excellent);
        assert_eq!(PerformanceTier::from_points(799), PerformanceTier::Good);
        assert_eq!(PerformanceTier::from_points(600), PerformanceTier::Good);
        assert_eq!(PerformanceTier::from_points(599), PerformanceTier::Average);
        assert_eq!(PerformanceTier::from_points(400), PerformanceTier::Average);
        assert_eq!(
            PerformanceTier::from_points(399),
            PerformanceTier::NeedsImprovement
        );
        assert_eq!(PerformanceTier::NeedsImprovement.to_string(), "Needs Improvement");
    }
}
