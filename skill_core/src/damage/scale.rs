//! Smooth scale factor
//!
//! A single factor derived from AP + crit damage points drives every
//! sub-scale, so damage grows continuously with stats instead of jumping at
//! fixed stat thresholds.

use crate::config::SmoothScaleConstants;
use serde::{Deserialize, Serialize};

/// Sub-scales derived from the smooth scale factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothScale {
    pub factor: f64,
    pub ap_scale: f64,
    pub base_scale: f64,
    pub crit_base: f64,
    pub crit_per_point: f64,
}

/// Clamp (AP + crit damage points) / reference into [factor_min, factor_max]
pub fn smooth_scale_factor(
    attack_power: f64,
    crit_damage_points: f64,
    constants: &SmoothScaleConstants,
) -> f64 {
    ((attack_power + crit_damage_points) / constants.reference_stat)
        .clamp(constants.factor_min, constants.factor_max)
}

impl SmoothScale {
    pub fn new(
        attack_power: f64,
        crit_damage_points: f64,
        balance_factor: f64,
        constants: &SmoothScaleConstants,
    ) -> Self {
        let factor = smooth_scale_factor(attack_power, crit_damage_points, constants);
        SmoothScale {
            factor,
            ap_scale: constants.ap_scale_base + factor * constants.ap_scale_slope,
            base_scale: constants.base_scale_base + factor * constants.base_scale_slope,
            crit_base: constants.crit_base + factor * constants.crit_base_slope,
            crit_per_point: (constants.crit_per_point + factor * constants.crit_per_point_slope)
                * balance_factor,
        }
    }
}
