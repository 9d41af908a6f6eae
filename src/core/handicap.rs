use crate::utils::error::{RankingError, Result};

pub const MIN_HANDICAP: f64 = -50.0;
pub const MAX_HANDICAP: f64 = 36.0;

/// Multiply by 10, round to the nearest integer, divide by 10. Halves round
/// toward positive infinity.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Clamps a differential into [-50, 36] and rounds it to one decimal.
/// Non-finite input is rejected.
pub fn confirm_handicap(differential: f64) -> Result<f64> {
    if !differential.is_finite() {
        return Err(RankingError::NonFiniteValue {
            field: "differential".to_string(),
            value: differential,
        });
    }

    if differential < MIN_HANDICAP {
        return Ok(MIN_HANDICAP);
    }
    if differential > MAX_HANDICAP {
        return Ok(MAX_HANDICAP);
    }
    Ok(round_to_tenth(differential))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps() {
        assert_eq!(confirm_handicap(-100.0).unwrap(), -50.0);
        assert_eq!(confirm_handicap(100.0).unwrap(), 36.0);
        assert_eq!(confirm_handicap(-50.0).unwrap(), -50.0);
        assert_eq!(confirm_handicap(36.0).unwrap(), 36.0);
    }

    #[test]
    fn test_rounds_to_one_decimal() {
        assert_eq!(confirm_handicap(12.34).unwrap(), 12.3);
        assert_eq!(confirm_handicap(12.36).unwrap(), 12.4);
        assert_eq!(confirm_handicap(-7.84).unwrap(), -7.8);
        assert_eq!(confirm_handicap(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_halves_round_up() {
        assert_eq!(round_to_tenth(0.25), 0.3);
        assert_eq!(round_to_tenth(-0.25), -0.2);
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(matches!(
            confirm_handicap(f64::NAN),
            Err(RankingError::NonFiniteValue { .. })
        ));
        assert!(confirm_handicap(f64::INFINITY).is_err());
        assert!(confirm_handicap(f64::NEG_INFINITY).is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn confirm_is_idempotent(x in -1.0e6f64..1.0e6) {
                let once = confirm_handicap(x).unwrap();
                let twice = confirm_handicap(once).unwrap();
                prop_assert_eq!(once, twice);
            }

            #[test]
            fn confirm_stays_in_range(x in -1.0e6f64..1.0e6) {
                let confirmed = confirm_handicap(x).unwrap();
                prop_assert!((MIN_HANDICAP..=MAX_HANDICAP).contains(&confirmed));
            }
        }
    }
}
