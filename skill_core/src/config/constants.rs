//! Formula constants configuration
//!
//! Defaults are the canonical constant set. Superseded values seen in older
//! builds of the calculator are noted next to each field; they can be
//! restored through `constants.toml` but are not separate runtime modes.

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Tunable formula constants
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormulaConstants {
    pub crit: CritConstants,
    pub crit_damage: CritDamageConstants,
    pub crit_scale: CritScaleConstants,
    pub secondary: SecondaryConstants,
    pub upgrade: UpgradeConstants,
    pub smooth_scale: SmoothScaleConstants,
    pub non_crit: NonCritModel,
}

impl FormulaConstants {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positives = [
            ("crit.rate_saturation", self.crit.rate_saturation),
            ("crit_damage.multiplier_saturation", self.crit_damage.multiplier_saturation),
            ("crit_scale.divisor", self.crit_scale.divisor),
            ("secondary.accuracy_saturation", self.secondary.accuracy_saturation),
            ("secondary.debuff_saturation", self.secondary.debuff_saturation),
            ("smooth_scale.reference_stat", self.smooth_scale.reference_stat),
        ];
        for (name, value) in positives {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        if self.crit_scale.cap < 0.0 {
            return Err(ConfigError::ValidationError(
                "crit_scale.cap must not be negative".to_string(),
            ));
        }
        if self.smooth_scale.factor_min > self.smooth_scale.factor_max {
            return Err(ConfigError::ValidationError(format!(
                "smooth_scale.factor_min ({}) exceeds factor_max ({})",
                self.smooth_scale.factor_min, self.smooth_scale.factor_max
            )));
        }
        if let NonCritModel::Fixed { hit_factor } = self.non_crit {
            if !(hit_factor.is_finite() && hit_factor > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "non_crit.hit_factor must be positive, got {}",
                    hit_factor
                )));
            }
        }
        Ok(())
    }
}

/// Crit rate curve: rate = ceiling * p / (p + saturation)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CritConstants {
    pub rate_ceiling: f64,
    /// 1124.069 in the first damage form, 2368.384 in the stats overview
    pub rate_saturation: f64,
    /// Flat crit rate added while Onrush is active
    pub onrush_bonus: f64,
}

impl Default for CritConstants {
    fn default() -> Self {
        CritConstants {
            rate_ceiling: 96.98979,
            rate_saturation: 2368.384,
            onrush_bonus: 10.0,
        }
    }
}

/// Crit multiplier curve: multiplier = ceiling * p / (p + saturation) + base
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CritDamageConstants {
    /// Older builds used 180 / 1800
    pub multiplier_ceiling: f64,
    pub multiplier_saturation: f64,
    /// Multiplier with zero crit damage points, in percent
    pub base_multiplier: f64,
}

impl Default for CritDamageConstants {
    fn default() -> Self {
        CritDamageConstants {
            multiplier_ceiling: 290.8,
            multiplier_saturation: 2102.36,
            base_multiplier: 125.0,
        }
    }
}

/// Crit scale: 1 + clamp((multiplier - pivot) / divisor, 0, cap)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CritScaleConstants {
    pub pivot: f64,
    /// Older builds used 600 with a 0.07 cap
    pub divisor: f64,
    pub cap: f64,
}

impl Default for CritScaleConstants {
    fn default() -> Self {
        CritScaleConstants {
            pivot: 150.0,
            divisor: 500.0,
            cap: 0.10,
        }
    }
}

/// Accuracy and debuff resistance curves
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecondaryConstants {
    pub accuracy_ceiling: f64,
    pub accuracy_saturation: f64,
    pub accuracy_base: f64,
    pub debuff_ceiling: f64,
    pub debuff_saturation: f64,
}

impl Default for SecondaryConstants {
    fn default() -> Self {
        SecondaryConstants {
            accuracy_ceiling: 96.16,
            accuracy_saturation: 820.5,
            accuracy_base: 85.0,
            debuff_ceiling: 100.0794,
            debuff_saturation: 366.3908,
        }
    }
}

/// How an upgrade level maps to a bonus percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusPolicy {
    /// Index the Grandmaster table by total level
    #[default]
    Table,
    /// Sum each book's listed percent
    Linear,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpgradeConstants {
    /// Share of the listed upgrade percent that reaches skill damage (0.699 in older builds)
    pub scaling_coefficient: f64,
    pub policy: BonusPolicy,
}

impl Default for UpgradeConstants {
    fn default() -> Self {
        UpgradeConstants {
            scaling_coefficient: 0.728,
            policy: BonusPolicy::Table,
        }
    }
}

/// Smooth scale factor model constants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothScaleConstants {
    /// AP + crit damage points that map to a factor of 1.0
    pub reference_stat: f64,
    pub factor_min: f64,
    pub factor_max: f64,
    pub ap_scale_base: f64,
    pub ap_scale_slope: f64,
    pub base_scale_base: f64,
    pub base_scale_slope: f64,
    pub crit_base: f64,
    pub crit_base_slope: f64,
    pub crit_per_point: f64,
    pub crit_per_point_slope: f64,
    pub crit_damping: f64,
    /// Half-width of the crit range as a fraction of the average crit
    pub crit_variance: f64,
}

impl Default for SmoothScaleConstants {
    fn default() -> Self {
        SmoothScaleConstants {
            reference_stat: 4800.0,
            factor_min: 0.85,
            factor_max: 1.20,
            ap_scale_base: 0.62,
            ap_scale_slope: 0.30,
            base_scale_base: 0.88,
            base_scale_slope: 0.10,
            crit_base: 1.27,
            crit_base_slope: 0.15,
            crit_per_point: 0.00028,
            crit_per_point_slope: 0.00004,
            crit_damping: 0.95,
            crit_variance: 0.04,
        }
    }
}

/// Strategy for the non-critical hit range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum NonCritModel {
    /// Blend base and AP with the smooth scale sub-factors
    SmoothScale,
    /// (base + AP + badge) times a flat hit factor
    Fixed {
        #[serde(default = "default_hit_factor")]
        hit_factor: f64,
    },
}

impl Default for NonCritModel {
    fn default() -> Self {
        NonCritModel::SmoothScale
    }
}

fn default_hit_factor() -> f64 {
    0.88
}
