//! Display helpers for FPoints values.

/// One fractional digit, with `+` on non-negative values: `7.0` -> `"+7.0"`.
pub fn format_fpoints(points: f64) -> String {
    if points >= 0.0 {
        // abs() folds -0.0 into 0.0
        format!("+{:.1}", points.abs())
    } else {
        format!("{:.1}", points)
    }
}

/// Whole points, with `+` on non-negative values: `7` -> `"+7"`.
///
/// Takes an integer so fractional totals have to be rounded by the caller,
/// see [`round_fpoints`].
pub fn format_fpoints_int(points: i64) -> String {
    if points >= 0 {
        format!("+{}", points)
    } else {
        points.to_string()
    }
}

/// Round a total to whole points, half away from zero.
pub fn round_fpoints(points: f64) -> i64 {
    points.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fpoints_positive() {
        assert_eq!(format_fpoints(7.0), "+7.0");
        assert_eq!(format_fpoints(13.0), "+13.0");
        assert_eq!(format_fpoints(9.46), "+9.5");
    }

    #[test]
    fn test_format_fpoints_negative() {
        assert_eq!(format_fpoints(-3.5), "-3.5");
        assert_eq!(format_fpoints(-12.0), "-12.0");
    }

    #[test]
    fn test_format_fpoints_zero() {
        assert_eq!(format_fpoints(0.0), "+0.0");
        assert_eq!(format_fpoints(-0.0), "+0.0");
    }

    #[test]
    fn test_format_fpoints_int() {
        assert_eq!(format_fpoints_int(7), "+7");
        assert_eq!(format_fpoints_int(-3), "-3");
        assert_eq!(format_fpoints_int(0), "+0");
        assert_eq!(format_fpoints_int(118), "+118");
    }

    #[test]
    fn test_round_fpoints() {
        assert_eq!(round_fpoints(18.0), 18);
        assert_eq!(round_fpoints(24.25), 24);
        assert_eq!(round_fpoints(2.5), 3);
        assert_eq!(round_fpoints(-2.5), -3);
        assert_eq!(round_fpoints(-0.4), 0);
    }

    #[test]
    fn test_rounded_negative_zero_formats_as_plus_zero() {
        assert_eq!(format_fpoints_int(round_fpoints(-0.4)), "+0");
    }
}
