//! Game date argument type.

use crate::error::{FpointsError, Result};
use crate::nhl::time::{parse_game_date, today_date};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for a schedule date, always a real `YYYY-MM-DD` day.
///
/// # Examples
///
/// ```rust
/// use nhl_fpoints::GameDate;
///
/// let date: GameDate = "2025-01-06".parse().unwrap();
/// assert_eq!(date.to_string(), "2025-01-06");
/// assert!("2025-1-6".parse::<GameDate>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameDate(pub NaiveDate);

impl GameDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today's local date.
    pub fn today() -> Self {
        Self(today_date())
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for GameDate {
    type Err = FpointsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(parse_game_date(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_date_from_str() {
        let date: GameDate = "2024-10-08".parse().unwrap();
        assert_eq!(date.as_naive(), NaiveDate::from_ymd_opt(2024, 10, 8).unwrap());
    }

    #[test]
    fn test_game_date_display_round_trips_padding() {
        let date = GameDate::new(NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
        assert_eq!(date.to_string(), "2025-03-04");
    }

    #[test]
    fn test_game_date_invalid() {
        match "2025-02-30".parse::<GameDate>() {
            Err(FpointsError::InvalidDate { date }) => assert_eq!(date, "2025-02-30"),
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_game_date_ordering() {
        let a: GameDate = "2025-01-05".parse().unwrap();
        let b: GameDate = "2025-01-06".parse().unwrap();
        assert!(a < b);
    }
}
