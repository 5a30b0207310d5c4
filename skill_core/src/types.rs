//! Core value types shared across the engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one numeric field of the calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    BaseDamageMin,
    BaseDamageMax,
    AttackPower,
    SecondaryBonus,
    CritPoints,
    CritDamagePoints,
    AccuracyPoints,
    DebuffResistPoints,
    BalanceFactor,
}

impl InputField {
    /// All fields in form order
    pub fn all() -> &'static [InputField] {
        &[
            InputField::BaseDamageMin,
            InputField::BaseDamageMax,
            InputField::AttackPower,
            InputField::SecondaryBonus,
            InputField::CritPoints,
            InputField::CritDamagePoints,
            InputField::AccuracyPoints,
            InputField::DebuffResistPoints,
            InputField::BalanceFactor,
        ]
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            InputField::BaseDamageMin => "Base Min Damage",
            InputField::BaseDamageMax => "Base Max Damage",
            InputField::AttackPower => "Attack Power (AP)",
            InputField::SecondaryBonus => "Soul Badge Bonus (% of AP)",
            InputField::CritPoints => "Critical (points)",
            InputField::CritDamagePoints => "Critical Damage (points)",
            InputField::AccuracyPoints => "Accuracy (points)",
            InputField::DebuffResistPoints => "Debuff Resistance (points)",
            InputField::BalanceFactor => "Balance Tweak",
        }
    }

    /// Whether an empty value falls back to a default instead of counting as missing
    pub fn is_optional(&self) -> bool {
        matches!(
            self,
            InputField::SecondaryBonus
                | InputField::AccuracyPoints
                | InputField::DebuffResistPoints
                | InputField::BalanceFactor
        )
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A min/max damage range
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DamageRange {
    pub min: f64,
    pub max: f64,
}

impl DamageRange {
    pub fn new(min: f64, max: f64) -> Self {
        DamageRange { min, max }
    }

    /// Midpoint of the range
    pub fn average(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Multiply both ends by the same factor
    pub fn scaled(&self, factor: f64) -> Self {
        DamageRange {
            min: self.min * factor,
            max: self.max * factor,
        }
    }

    /// Symmetric range around a center value
    pub fn around(center: f64, spread: f64) -> Self {
        DamageRange {
            min: center - spread,
            max: center + spread,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

impl fmt::Display for DamageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(f, "{:.*} – {:.*}", precision, self.min, precision, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_average() {
        let range = DamageRange::new(2594.0, 2799.0);
        assert!((range.average() - 2696.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_range_display_precision() {
        let range = DamageRange::new(2594.0, 2799.0);
        assert_eq!(format!("{:.0}", range), "2594 – 2799");
        assert_eq!(format!("{}", range), "2594.00 – 2799.00");
    }

    #[test]
    fn test_optional_fields() {
        assert!(InputField::SecondaryBonus.is_optional());
        assert!(InputField::BalanceFactor.is_optional());
        assert!(!InputField::CritPoints.is_optional());
        assert!(!InputField::AttackPower.is_optional());
    }
}
