//! Two-decimal rounding used by conversion and arithmetic.
//!
//! Conversion rounds through the `{:.2}` formatter, arithmetic through
//! `f64::round`. The formatter rounds the stored binary value, while
//! `x * 100.0` can itself round onto a half-cent boundary, so the two disagree
//! for inputs stored just below one (`2.675` gives `2.67` and `2.68`).

/// Round by formatting to two decimals and parsing the text back.
///
/// Falls back to `0.0` if the formatted text cannot be parsed.
pub fn round_formatted(value: f64) -> f64 {
    let formatted = format!("{value:.2}");
    match formatted.parse::<f64>() {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::error!(%formatted, error = %err, "failed to parse rounded measurement");
            0.0
        }
    }
}

/// Round half away from zero at the second decimal.
#[inline]
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_formatted() {
        assert_eq!(round_formatted(3.14159), 3.14);
        assert_eq!(round_formatted(0.1), 0.1);
        assert_eq!(round_formatted(1234.5678), 1234.57);
        assert_eq!(round_formatted(0.004), 0.0);
        assert_eq!(round_formatted(499999.99999999994), 500000.0);
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(3.14159), 3.14);
        assert_eq!(round_cents(1234.5678), 1234.57);
        assert_eq!(round_cents(500500.0), 500500.0);
        assert_eq!(round_cents(-2.346), -2.35);
    }

    #[test]
    fn test_strategies_agree_off_ties() {
        for value in [0.1, 3.999, 12.3456, 99.994, 1e6 / 3.0, 0.03937 / 0.1] {
            assert_eq!(round_formatted(value), round_cents(value), "{value}");
        }
    }

    #[test]
    fn test_strategies_split_below_half_cent() {
        // Stored as 2.67499..., but 2.675 * 100.0 rounds to exactly 267.5
        assert_eq!(2.675_f64 * 100.0, 267.5);
        assert_eq!(round_formatted(2.675), 2.67);
        assert_eq!(round_cents(2.675), 2.68);
    }

    #[test]
    fn test_non_finite_values_pass_through() {
        assert!(round_formatted(f64::NAN).is_nan());
        assert_eq!(round_formatted(f64::INFINITY), f64::INFINITY);
    }
}
