//! Free-text form fields and their parsed values

use crate::stats::OverviewInputs;
use crate::types::InputField;
use serde::{Deserialize, Serialize};

/// Parse one free-text field.
///
/// Empty, non-numeric and non-finite text all count as missing.
pub fn parse_field(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Calculator form as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputForm {
    pub base_damage_min: String,
    pub base_damage_max: String,
    pub attack_power: String,
    pub secondary_bonus: String,
    pub crit_points: String,
    pub crit_damage_points: String,
    pub accuracy_points: String,
    pub debuff_resist_points: String,
    pub balance_factor: String,
    pub onrush_active: bool,
}

impl InputForm {
    pub fn get(&self, field: InputField) -> &str {
        match field {
            InputField::BaseDamageMin => &self.base_damage_min,
            InputField::BaseDamageMax => &self.base_damage_max,
            InputField::AttackPower => &self.attack_power,
            InputField::SecondaryBonus => &self.secondary_bonus,
            InputField::CritPoints => &self.crit_points,
            InputField::CritDamagePoints => &self.crit_damage_points,
            InputField::AccuracyPoints => &self.accuracy_points,
            InputField::DebuffResistPoints => &self.debuff_resist_points,
            InputField::BalanceFactor => &self.balance_factor,
        }
    }

    pub fn get_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::BaseDamageMin => &mut self.base_damage_min,
            InputField::BaseDamageMax => &mut self.base_damage_max,
            InputField::AttackPower => &mut self.attack_power,
            InputField::SecondaryBonus => &mut self.secondary_bonus,
            InputField::CritPoints => &mut self.crit_points,
            InputField::CritDamagePoints => &mut self.crit_damage_points,
            InputField::AccuracyPoints => &mut self.accuracy_points,
            InputField::DebuffResistPoints => &mut self.debuff_resist_points,
            InputField::BalanceFactor => &mut self.balance_factor,
        }
    }

    pub fn set(&mut self, field: InputField, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    pub fn value(&self, field: InputField) -> Option<f64> {
        parse_field(self.get(field))
    }

    /// Parse every field
    pub fn parse(&self) -> RawInputs {
        RawInputs {
            base_damage_min: self.value(InputField::BaseDamageMin),
            base_damage_max: self.value(InputField::BaseDamageMax),
            attack_power: self.value(InputField::AttackPower),
            secondary_bonus_percent: self.value(InputField::SecondaryBonus).unwrap_or(0.0),
            crit_points: self.value(InputField::CritPoints),
            crit_damage_points: self.value(InputField::CritDamagePoints),
            accuracy_points: self.value(InputField::AccuracyPoints),
            debuff_resist_points: self.value(InputField::DebuffResistPoints),
            onrush_active: self.onrush_active,
            balance_factor: self
                .value(InputField::BalanceFactor)
                .unwrap_or(DEFAULT_BALANCE_FACTOR),
        }
    }
}

/// Balance factor used when the field is left empty
pub const DEFAULT_BALANCE_FACTOR: f64 = 1.0;

/// Parsed inputs; `None` marks a missing field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawInputs {
    pub base_damage_min: Option<f64>,
    pub base_damage_max: Option<f64>,
    pub attack_power: Option<f64>,
    /// Soul badge bonus in percent of AP, 0 when empty
    pub secondary_bonus_percent: f64,
    pub crit_points: Option<f64>,
    pub crit_damage_points: Option<f64>,
    pub accuracy_points: Option<f64>,
    pub debuff_resist_points: Option<f64>,
    pub onrush_active: bool,
    pub balance_factor: f64,
}

impl Default for RawInputs {
    fn default() -> Self {
        RawInputs {
            base_damage_min: None,
            base_damage_max: None,
            attack_power: None,
            secondary_bonus_percent: 0.0,
            crit_points: None,
            crit_damage_points: None,
            accuracy_points: None,
            debuff_resist_points: None,
            onrush_active: false,
            balance_factor: DEFAULT_BALANCE_FACTOR,
        }
    }
}

impl RawInputs {
    /// Copy with every non-finite value treated like an empty field
    pub fn finite_only(&self) -> RawInputs {
        let finite = |value: Option<f64>| value.filter(|v| v.is_finite());
        RawInputs {
            base_damage_min: finite(self.base_damage_min),
            base_damage_max: finite(self.base_damage_max),
            attack_power: finite(self.attack_power),
            secondary_bonus_percent: finite(Some(self.secondary_bonus_percent)).unwrap_or(0.0),
            crit_points: finite(self.crit_points),
            crit_damage_points: finite(self.crit_damage_points),
            accuracy_points: finite(self.accuracy_points),
            debuff_resist_points: finite(self.debuff_resist_points),
            onrush_active: self.onrush_active,
            balance_factor: finite(Some(self.balance_factor)).unwrap_or(DEFAULT_BALANCE_FACTOR),
        }
    }

    /// The subset feeding the combat overview
    pub fn overview_inputs(&self) -> OverviewInputs {
        let raw = self.finite_only();
        OverviewInputs {
            crit_points: raw.crit_points,
            crit_damage_points: raw.crit_damage_points,
            accuracy_points: raw.accuracy_points,
            debuff_resist_points: raw.debuff_resist_points,
            onrush_active: raw.onrush_active,
        }
    }
}
