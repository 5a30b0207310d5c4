//! Non-critical hit range

use super::scale::SmoothScale;
use crate::config::NonCritModel;
use crate::types::DamageRange;

/// Flat damage granted by the soul badge, as a percent of AP
pub fn badge_bonus(attack_power: f64, badge_percent: f64) -> f64 {
    attack_power * badge_percent / 100.0
}

/// Non-crit range from the upgraded base range.
///
/// - `Fixed`: `(base + ap + badge) * hit_factor`
/// - `SmoothScale`: `base * base_scale + ap * ap_scale + badge`
///
/// Both are multiplied by the balance factor.
pub fn non_crit_range(
    adjusted_base: DamageRange,
    attack_power: f64,
    badge_percent: f64,
    balance_factor: f64,
    scale: &SmoothScale,
    model: NonCritModel,
) -> DamageRange {
    let badge = badge_bonus(attack_power, badge_percent);

    let hit = |base: f64| match model {
        NonCritModel::Fixed { hit_factor } => (base + attack_power + badge) * hit_factor,
        NonCritModel::SmoothScale => {
            base * scale.base_scale + attack_power * scale.ap_scale + badge
        }
    };

    DamageRange::new(hit(adjusted_base.min), hit(adjusted_base.max)).scaled(balance_factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SmoothScaleConstants;

    fn floor_scale() -> SmoothScale {
        SmoothScale::new(700.0, 1117.0, 1.0, &SmoothScaleConstants::default())
    }

    #[test]
    fn test_badge_bonus() {
        assert!((badge_bonus(700.0, 55.0) - 385.0).abs() < 1e-9);
        assert!(badge_bonus(700.0, 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fixed_model() {
        // (2594 + 700 + 385) * 0.88 = 3237.52
        let range = non_crit_range(
            DamageRange::new(2594.0, 2799.0),
            700.0,
            55.0,
            1.0,
            &floor_scale(),
            NonCritModel::Fixed { hit_factor: 0.88 },
        );
        assert!((range.min - 3237.52).abs() < 1e-9);
        assert!((range.max - 3417.92).abs() < 1e-9);
    }

    #[test]
    fn test_smooth_model() {
        // base_scale 0.965, ap_scale 0.875 at the 0.85 floor
        // 2594 * 0.965 + 700 * 0.875 + 385 = 3500.71
        let range = non_crit_range(
            DamageRange::new(2594.0, 2799.0),
            700.0,
            55.0,
            1.0,
            &floor_scale(),
            NonCritModel::SmoothScale,
        );
        assert!((range.min - 3500.71).abs() < 1e-6);
        assert!((range.max - 3698.535).abs() < 1e-6);
        assert!(range.min < range.max);
    }

    #[test]
    fn test_balance_factor_scales_range() {
        let base = DamageRange::new(1000.0, 1200.0);
        let model = NonCritModel::SmoothScale;
        let plain = non_crit_range(base, 500.0, 0.0, 1.0, &floor_scale(), model);
        let tuned = non_crit_range(base, 500.0, 0.0, 1.1, &floor_scale(), model);
        assert!((tuned.min - plain.min * 1.1).abs() < 1e-9);
        assert!((tuned.max - plain.max * 1.1).abs() < 1e-9);
    }
}
