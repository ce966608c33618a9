//! Command implementations for the NHL FPoints CLI

pub mod calc;
pub mod schedule;

use crate::cli::types::GameDate;

/// The requested date, or today's local date.
pub fn resolve_date(date: Option<GameDate>) -> GameDate {
    date.unwrap_or_else(GameDate::today)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_date_keeps_explicit_date() {
        let date: GameDate = "2025-01-06".parse().unwrap();
        assert_eq!(resolve_date(Some(date)), date);
    }

    #[test]
    fn test_resolve_date_defaults_to_today() {
        let before = GameDate::today();
        let resolved = resolve_date(None);
        let after = GameDate::today();
        assert!(resolved == before || resolved == after);
    }
}
