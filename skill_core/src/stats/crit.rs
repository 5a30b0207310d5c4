//! Critical stat curves
//!
//! Both curves are saturating rational functions of the raw stat points:
//!
//! - Crit rate: `rate = 96.98979 * p / (p + 2368.384)` (+10 with Onrush)
//! - Crit multiplier: `mult = 290.8 * p / (p + 2102.36) + 125`
//!
//! Examples with the default constants:
//! - 0 crit points: 0% crit rate
//! - 2368 crit points: ~48.5% crit rate (half of the ceiling)
//! - 1117 crit damage points: ~225.96% crit multiplier
//!
//! Older builds used `180 * p / (p + 1800) + 125` for the multiplier and a
//! saturation of 1124.069 for the rate; only the constants differ.

use crate::config::{CritConstants, CritDamageConstants, CritScaleConstants};

/// Saturating curve shared by every stat conversion.
///
/// Negative points clamp to zero; NaN stays NaN.
pub(crate) fn saturating(points: f64, ceiling: f64, saturation: f64) -> f64 {
    let points = if points < 0.0 { 0.0 } else { points };
    ceiling * points / (points + saturation)
}

/// Crit rate in percent
pub fn crit_rate(points: f64, onrush_active: bool, constants: &CritConstants) -> f64 {
    let base = saturating(points, constants.rate_ceiling, constants.rate_saturation);
    let extra = if onrush_active { constants.onrush_bonus } else { 0.0 };
    base + extra
}

/// Crit damage multiplier in percent (125 = 1.25x)
pub fn crit_multiplier(points: f64, constants: &CritDamageConstants) -> f64 {
    saturating(
        points,
        constants.multiplier_ceiling,
        constants.multiplier_saturation,
    ) + constants.base_multiplier
}

/// Scale applied on top of the crit multiplier, between 1 and 1 + cap
pub fn crit_scale(multiplier: f64, constants: &CritScaleConstants) -> f64 {
    let bonus = (multiplier - constants.pivot) / constants.divisor;
    1.0 + bonus.clamp(0.0, constants.cap)
}

/// Highest crit rate the curve approaches (without Onrush)
pub fn crit_rate_ceiling(constants: &CritConstants) -> f64 {
    constants.rate_ceiling
}

/// Highest multiplier the curve approaches
pub fn crit_multiplier_ceiling(constants: &CritDamageConstants) -> f64 {
    constants.multiplier_ceiling + constants.base_multiplier
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_points_not_reported_as_zero() {
        let rate = crit_rate(f64::NAN, false, &CritConstants::default());
        assert!(rate.is_nan());
        assert_eq!(crit_rate(-50.0, false, &CritConstants::default()), 0.0);
    }

    #[test]
    fn test_crit_rate_zero_points() {
        let rate = crit_rate(0.0, false, &CritConstants::default());
        assert!(rate.abs() < f64::EPSILON);
    }

    #[test]
    fn test_crit_rate_half_at_saturation() {
        let constants = CritConstants::default();
        let rate = crit_rate(constants.rate_saturation, false, &constants);
        assert!((rate - constants.rate_ceiling / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_onrush_adds_flat_bonus() {
        let constants = CritConstants::default();
        let without = crit_rate(1711.0, false, &constants);
        let with = crit_rate(1711.0, true, &constants);
        assert!((with - without - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_crit_rate_reference_build() {
        // 96.98979 * 1711 / (1711 + 2368.384) ≈ 40.68%
        let rate = crit_rate(1711.0, false, &CritConstants::default());
        assert!((rate - 40.68).abs() < 0.01);
    }

    #[test]
    fn test_crit_multiplier_reference_build() {
        // 290.8 * 1117 / (2102.36 + 1117) + 125 ≈ 225.90%
        let mult = crit_multiplier(1117.0, &CritDamageConstants::default());
        let expected = 290.8 * 1117.0 / (2102.36 + 1117.0) + 125.0;
        assert!((mult - expected).abs() < 1e-9);
        assert!(mult > 225.0 && mult < 226.0);
    }

    #[test]
    fn test_crit_multiplier_base() {
        let mult = crit_multiplier(0.0, &CritDamageConstants::default());
        assert!((mult - 125.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_crit_scale_capped() {
        let scale = crit_scale(225.96, &CritScaleConstants::default());
        assert!((scale - 1.10).abs() < 1e-9);
    }

    #[test]
    fn test_crit_scale_below_pivot() {
        let scale = crit_scale(130.0, &CritScaleConstants::default());
        assert!((scale - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_crit_scale_linear_region() {
        // (175 - 150) / 500 = 0.05
        let scale = crit_scale(175.0, &CritScaleConstants::default());
        assert!((scale - 1.05).abs() < 1e-9);
    }

    #[test]
    fn test_negative_points_treated_as_zero() {
        let rate = crit_rate(-50.0, false, &CritConstants::default());
        assert!(rate.abs() < f64::EPSILON);
    }
}
