//! Critical hit range - smooth scale model
//!
//! ```text
//! total_base = avg(adjusted_base) * base_scale + ap * ap_scale + ap * badge%
//! effective  = crit_base + crit_damage_points * crit_per_point
//! avg_crit   = total_base * effective * damping * balance
//! range      = avg_crit ± avg_crit * variance
//! ```
//!
//! Superseded anchor model, kept here for reference only: it blended the
//! base minimum toward the base average with
//! `weight = clamp((ap + crit + crit_dmg - 3000) / 3000, 0, 1)`, then used
//! `(anchor + ap + badge) * (crit_multiplier / 155) * crit_scale` with a
//! ±1.5% spread. It jumped at the 3000 point threshold and overshot at high
//! crit damage, which the smooth model replaces.

use super::scale::SmoothScale;
use crate::config::SmoothScaleConstants;
use crate::types::DamageRange;

/// Inputs of the crit range calculation
#[derive(Debug, Clone, Copy)]
pub struct CritRangeInputs {
    pub adjusted_base: DamageRange,
    pub attack_power: f64,
    pub badge_percent: f64,
    pub crit_damage_points: f64,
    pub balance_factor: f64,
}

/// Effective crit multiplier as a plain factor (e.g. 1.75)
pub fn effective_crit_multiplier(crit_damage_points: f64, scale: &SmoothScale) -> f64 {
    scale.crit_base + crit_damage_points.max(0.0) * scale.crit_per_point
}

/// Crit range for the given inputs
pub fn crit_range(
    inputs: &CritRangeInputs,
    scale: &SmoothScale,
    constants: &SmoothScaleConstants,
) -> DamageRange {
    let badge_mult = inputs.badge_percent / 100.0;
    let total_base = inputs.adjusted_base.average() * scale.base_scale
        + inputs.attack_power * scale.ap_scale
        + inputs.attack_power * badge_mult;

    let effective = effective_crit_multiplier(inputs.crit_damage_points, scale);
    let avg_crit = total_base * effective * constants.crit_damping * inputs.balance_factor;

    DamageRange::around(avg_crit, avg_crit * constants.crit_variance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_inputs() -> CritRangeInputs {
        CritRangeInputs {
            adjusted_base: DamageRange::new(2594.0, 2799.0),
            attack_power: 700.0,
            badge_percent: 55.0,
            crit_damage_points: 1117.0,
            balance_factor: 1.0,
        }
    }

    #[test]
    fn test_reference_crit_range() {
        let constants = SmoothScaleConstants::default();
        let inputs = reference_inputs();
        let scale = SmoothScale::new(700.0, 1117.0, 1.0, &constants);
        let range = crit_range(&inputs, &scale, &constants);

        // total_base = 2696.5 * 0.965 + 700 * 0.875 + 385 = 3599.6225
        // effective = 1.3975 + 1117 * 0.000314 = 1.748238
        let expected_avg = 3599.6225 * 1.748238 * 0.95;
        assert!((range.average() - expected_avg).abs() < 1e-6);
        assert!(range.min < range.average());
        assert!(range.average() < range.max);
        assert!((range.max - range.min - expected_avg * 0.08).abs() < 1e-6);
    }

    #[test]
    fn test_balance_factor_applies_twice() {
        // balance scales both the per point multiplier and the final average
        let constants = SmoothScaleConstants::default();
        let mut inputs = reference_inputs();
        inputs.balance_factor = 1.1;
        let scale = SmoothScale::new(700.0, 1117.0, 1.1, &constants);
        let tuned = crit_range(&inputs, &scale, &constants);

        let effective = 1.3975 + 1117.0 * 0.000314 * 1.1;
        let expected = 3599.6225 * effective * 0.95 * 1.1;
        assert!((tuned.average() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_crit_exceeds_non_crit_base() {
        let constants = SmoothScaleConstants::default();
        let scale = SmoothScale::new(700.0, 0.0, 1.0, &constants);
        let mut inputs = reference_inputs();
        inputs.crit_damage_points = 0.0;
        let range = crit_range(&inputs, &scale, &constants);
        // crit_base 1.3975 * 0.95 > 1
        assert!(range.min > 3599.6225);
    }
}
