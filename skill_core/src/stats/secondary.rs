//! Accuracy and debuff resistance curves

use super::crit::saturating;
use crate::config::SecondaryConstants;

/// Accuracy in percent; 85% with no points
pub fn accuracy_percent(points: f64, constants: &SecondaryConstants) -> f64 {
    saturating(
        points,
        constants.accuracy_ceiling,
        constants.accuracy_saturation,
    ) + constants.accuracy_base
}

/// Debuff resistance in percent
pub fn debuff_resist_percent(points: f64, constants: &SecondaryConstants) -> f64 {
    saturating(points, constants.debuff_ceiling, constants.debuff_saturation)
}
