//! Weekly submissions and parsing of raw text input.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::scoring::{application_points, learning_points, MAX_COMPONENT_POINTS};

/// One week of activity for one user, ready to be scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub user: String,
    pub week: u32,
    pub learning_hours: f64,
    pub application_hours: f64,
    pub certificates: u32,
}

impl Submission {
    /// Parse a submission from the raw strings a form or command line
    /// collects. Surrounding whitespace is ignored.
    pub fn parse(
        user: &str,
        week: &str,
        learning_hours: &str,
        application_hours: &str,
        certificates: &str,
    ) -> Result<Self, ValidationError> {
        let submission = Self {
            user: user.trim().to_string(),
            week: parse_whole("week", week)?,
            learning_hours: parse_hours("learning hours", learning_hours)?,
            application_hours: parse_hours("application hours", application_hours)?,
            certificates: parse_whole("certificates", certificates)?,
        };
        submission.validate()?;
        Ok(submission)
    }

    /// Check a typed submission: the user must be named and hours must be
    /// finite, non-negative and small enough to score.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.user.trim().is_empty() {
            return Err(ValidationError::EmptyUser);
        }
        check_hours("learning hours", self.learning_hours)?;
        check_hours("application hours", self.application_hours)?;
        check_scorable(
            "learning hours",
            self.learning_hours,
            learning_points(self.learning_hours, 0),
        )?;
        check_scorable(
            "application hours",
            self.application_hours,
            application_points(self.application_hours),
        )?;
        Ok(())
    }
}

fn parse_whole(field: &'static str, raw: &str) -> Result<u32, ValidationError> {
    let raw = raw.trim();
    raw.parse::<u32>().map_err(|_| {
        if raw.parse::<f64>().is_ok() {
            ValidationError::NotAWholeNumber {
                field,
                value: raw.to_string(),
            }
        } else {
            ValidationError::NotANumber {
                field,
                value: raw.to_string(),
            }
        }
    })
}

fn parse_hours(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    let value = raw
        .parse::<f64>()
        .map_err(|_| ValidationError::NotANumber {
            field,
            value: raw.to_string(),
        })?;
    check_hours(field, value)?;
    Ok(value)
}

fn check_hours(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange { field, value })
    }
}

fn check_scorable(field: &'static str, value: f64, points: f64) -> Result<(), ValidationError> {
    if points <= MAX_COMPONENT_POINTS {
        Ok(())
    } else {
        Err(ValidationError::TooLarge { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_submission() {
        let s = Submission::parse(" alice ", "3", "10.5", "0", "2").unwrap();
        assert_eq!(s.user, "alice");
        assert_eq!(s.week, 3);
        assert_eq!(s.learning_hours, 10.5);
        assert_eq!(s.application_hours, 0.0);
        assert_eq!(s.certificates, 2);
    }

    #[test]
    fn non_numeric_hours_rejected() {
        let err = Submission::parse("alice", "1", "ten", "0", "0").unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotANumber {
                field: "learning hours",
                value: "ten".into()
            }
        );
    }

    #[test]
    fn fractional_week_rejected() {
        let err = Submission::parse("alice", "1.5", "1", "1", "0").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NotAWholeNumber { field: "week", .. }
        ));
    }

    #[test]
    fn negative_certificates_rejected() {
        let err = Submission::parse("alice", "1", "1", "1", "-1").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NotAWholeNumber {
                field: "certificates",
                ..
            }
        ));
    }

    #[test]
    fn negative_and_non_finite_hours_rejected() {
        assert!(matches!(
            Submission::parse("alice", "1", "-2", "0", "0"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            Submission::parse("alice", "1", "0", "inf", "0"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            Submission::parse("alice", "1", "NaN", "0", "0"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn unscorably_large_hours_rejected() {
        assert!(matches!(
            Submission::parse("alice", "1", "1e20", "1e20", "0"),
            Err(ValidationError::TooLarge {
                field: "learning hours",
                ..
            })
        ));
        assert!(matches!(
            Submission::parse("alice", "1", "0", "1e20", "0"),
            Err(ValidationError::TooLarge {
                field: "application hours",
                ..
            })
        ));
        // a generous but finite week still scores
        assert!(Submission::parse("alice", "1", "1e6", "1e6", "0").is_ok());
    }

    #[test]
    fn empty_user_rejected() {
        assert_eq!(
            Submission::parse("   ", "1", "1", "1", "1").unwrap_err(),
            ValidationError::EmptyUser
        );
    }

    #[test]
    fn empty_field_is_not_a_number() {
        assert!(matches!(
            Submission::parse("alice", "", "1", "1", "1"),
            Err(ValidationError::NotANumber { field: "week", .. })
        ));
    }
}
