//! Tier conversion - rescale a base range to a different AP modifier

use crate::error::CalcError;
use crate::types::DamageRange;

/// Rescale `base` from `old_modifier` to `new_modifier`.
///
/// Used to preview a higher version of a skill before adding books.
pub fn convert_tier(
    base: DamageRange,
    old_modifier: f64,
    new_modifier: f64,
) -> Result<DamageRange, CalcError> {
    if !old_modifier.is_finite() || old_modifier == 0.0 {
        return Err(CalcError::InvalidConfiguration(format!(
            "old AP modifier must be a non-zero number, got {}",
            old_modifier
        )));
    }
    if !new_modifier.is_finite() {
        return Err(CalcError::InvalidConfiguration(format!(
            "new AP modifier must be a finite number, got {}",
            new_modifier
        )));
    }
    if !base.is_finite() {
        return Err(CalcError::InvalidConfiguration(
            "base damage range must be finite".to_string(),
        ));
    }

    Ok(base.scaled(new_modifier / old_modifier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_modifier_is_identity() {
        let base = DamageRange::new(2594.0, 2799.0);
        assert_eq!(convert_tier(base, 1.35, 1.35).unwrap(), base);
    }

    #[test]
    fn test_higher_tier() {
        let converted = convert_tier(DamageRange::new(1000.0, 1200.0), 1.0, 1.5).unwrap();
        assert!((converted.min - 1500.0).abs() < 1e-9);
        assert!((converted.max - 1800.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_old_modifier_rejected() {
        let result = convert_tier(DamageRange::new(1000.0, 1200.0), 0.0, 1.5);
        assert!(matches!(result, Err(CalcError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_nan_modifier_rejected() {
        let result = convert_tier(DamageRange::new(1000.0, 1200.0), 1.0, f64::NAN);
        assert!(result.is_err());
    }
}
