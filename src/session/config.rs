use std::time::Duration;

use thiserror::Error;

/// Longest allowed time per square.
pub const MAX_TIME_LIMIT_SECS: f64 = 3600.0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("time per square must be between 0 and 3600 seconds, got {0:?}")]
    InvalidTimeLimit(String),
    #[error("number of lives must be a positive whole number, got {0:?}")]
    InvalidLives(String),
}

/// Settings chosen in the start menu. Fixed for the lifetime of a session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrialConfig {
    pub time_limit: Duration,
    pub max_errors: u32,
}

impl TrialConfig {
    pub fn new(time_limit_secs: f64, max_errors: u32) -> Result<Self, SetupError> {
        let time_limit = seconds_to_limit(time_limit_secs)
            .ok_or_else(|| SetupError::InvalidTimeLimit(time_limit_secs.to_string()))?;
        if max_errors == 0 {
            return Err(SetupError::InvalidLives(max_errors.to_string()));
        }
        Ok(Self {
            time_limit,
            max_errors,
        })
    }

    /// Parses the two start-menu fields: seconds per square, then lives.
    pub fn parse(time_text: &str, lives_text: &str) -> Result<Self, SetupError> {
        let time_limit = parse_time_limit(time_text)?;
        let max_errors = lives_text
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| SetupError::InvalidLives(lives_text.to_string()))?;
        Ok(Self {
            time_limit,
            max_errors,
        })
    }

    pub fn time_limit_secs(&self) -> f64 {
        self.time_limit.as_secs_f64()
    }
}

fn parse_time_limit(text: &str) -> Result<Duration, SetupError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .and_then(seconds_to_limit)
        .ok_or_else(|| SetupError::InvalidTimeLimit(text.to_string()))
}

fn seconds_to_limit(secs: f64) -> Option<Duration> {
    if !(secs.is_finite() && secs > 0.0 && secs <= MAX_TIME_LIMIT_SECS) {
        return None;
    }
    Duration::try_from_secs_f64(secs).ok().filter(|d| !d.is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_menu_fields() {
        let config = TrialConfig::parse("3", "3").unwrap();
        assert_eq!(config.time_limit, Duration::from_secs(3));
        assert_eq!(config.max_errors, 3);

        let config = TrialConfig::parse(" 1.5 ", "10").unwrap();
        assert_eq!(config.time_limit, Duration::from_millis(1500));
        assert_eq!(config.max_errors, 10);
    }

    #[test]
    fn rejects_non_numeric_time() {
        assert_eq!(
            TrialConfig::parse("abc", "3"),
            Err(SetupError::InvalidTimeLimit("abc".to_string()))
        );
    }

    #[test]
    fn rejects_non_positive_or_non_finite_time() {
        for bad in ["0", "-1", "", "inf", "NaN", "1e400"] {
            assert!(
                matches!(TrialConfig::parse(bad, "3"), Err(SetupError::InvalidTimeLimit(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_time_beyond_an_hour() {
        for bad in ["1e19", "3600.5", "86400"] {
            assert_eq!(
                TrialConfig::parse(bad, "3"),
                Err(SetupError::InvalidTimeLimit(bad.to_string()))
            );
        }
        assert_eq!(
            TrialConfig::parse("3600", "3").unwrap().time_limit,
            Duration::from_secs(3600)
        );
        assert!(TrialConfig::new(1e19, 3).is_err());
    }

    #[test]
    fn rejects_bad_lives() {
        for bad in ["0", "-2", "2.5", "three", ""] {
            assert_eq!(
                TrialConfig::parse("3", bad),
                Err(SetupError::InvalidLives(bad.to_string()))
            );
        }
    }

    #[test]
    fn time_is_checked_before_lives() {
        assert!(matches!(
            TrialConfig::parse("x", "y"),
            Err(SetupError::InvalidTimeLimit(_))
        ));
    }

    #[test]
    fn new_validates_like_parse() {
        assert!(TrialConfig::new(2.0, 1).is_ok());
        assert!(TrialConfig::new(0.0, 1).is_err());
        assert!(TrialConfig::new(2.0, 0).is_err());
    }
}
