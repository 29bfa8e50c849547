use crate::models::Artist;
use thiserror::Error;

/// Rejection reasons for out-of-domain inputs
///
/// The arithmetic core is total over non-negative finite reals; anything
/// outside that domain is rejected here, at the boundary, before pricing
/// runs. Non-finite values in particular must never reach the core, where
/// they would propagate silently into every final price.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("artist '{artist}': {field} is negative ({value})")]
    NegativeField {
        artist: String,
        field: &'static str,
        value: f64,
    },

    #[error("artist '{artist}': {field} is not finite")]
    NonFiniteField { artist: String, field: &'static str },

    #[error("treasury is negative ({0})")]
    NegativeTreasury(f64),

    #[error("treasury is not finite")]
    NonFiniteTreasury,
}

fn check_field(artist: &str, field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteField {
            artist: artist.to_string(),
            field,
        });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeField {
            artist: artist.to_string(),
            field,
            value,
        });
    }
    Ok(())
}

/// Validate a batch before pricing. An empty batch is valid.
pub fn validate_batch(artists: &[Artist], treasury: f64) -> Result<(), ValidationError> {
    if !treasury.is_finite() {
        return Err(ValidationError::NonFiniteTreasury);
    }
    if treasury < 0.0 {
        return Err(ValidationError::NegativeTreasury(treasury));
    }

    for artist in artists {
        check_field(&artist.name, "currentFollowers", artist.current_followers)?;
        check_field(&artist.name, "previousFollowers", artist.previous_followers)?;
        check_field(&artist.name, "supply", artist.supply)?;
        check_field(&artist.name, "previousRawValue", artist.previous_raw_value)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_artist() -> Artist {
        Artist {
            name: "Rising Star".to_string(),
            current_followers: 5000.0,
            previous_followers: 2000.0,
            supply: 1000.0,
            previous_raw_value: 2.0,
        }
    }

    #[test]
    fn accepts_valid_batch() {
        assert_eq!(validate_batch(&[valid_artist()], 9000.0), Ok(()));
    }

    #[test]
    fn accepts_empty_batch() {
        assert_eq!(validate_batch(&[], 0.0), Ok(()));
    }

    #[test]
    fn accepts_zero_baseline() {
        // previousFollowers == 0 is a defined edge case, not invalid input
        let mut artist = valid_artist();
        artist.previous_followers = 0.0;
        assert_eq!(validate_batch(&[artist], 9000.0), Ok(()));
    }

    #[test]
    fn rejects_negative_supply() {
        let mut artist = valid_artist();
        artist.supply = -1.0;
        let err = validate_batch(&[artist], 9000.0).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NegativeField {
                artist: "Rising Star".to_string(),
                field: "supply",
                value: -1.0,
            }
        );
    }

    #[test]
    fn rejects_negative_treasury() {
        let err = validate_batch(&[valid_artist()], -100.0).unwrap_err();
        assert_eq!(err, ValidationError::NegativeTreasury(-100.0));
    }

    #[test]
    fn rejects_nan_followers() {
        let mut artist = valid_artist();
        artist.current_followers = f64::NAN;
        let err = validate_batch(&[artist], 9000.0).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NonFiniteField {
                artist: "Rising Star".to_string(),
                field: "currentFollowers",
            }
        );
    }

    #[test]
    fn rejects_infinite_treasury() {
        let err = validate_batch(&[valid_artist()], f64::INFINITY).unwrap_err();
        assert_eq!(err, ValidationError::NonFiniteTreasury);
    }

    #[test]
    fn rejects_infinite_seed_value() {
        let mut artist = valid_artist();
        artist.previous_raw_value = f64::NEG_INFINITY;
        assert!(validate_batch(&[artist], 9000.0).is_err());
    }
}
