//! Input validation - which computation the entered fields allow

use super::form::RawInputs;
use crate::types::InputField;

/// Inputs with every field required for a full calculation present
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompleteInputs {
    pub base_damage_min: f64,
    pub base_damage_max: f64,
    pub attack_power: f64,
    pub secondary_bonus_percent: f64,
    pub crit_points: f64,
    pub crit_damage_points: f64,
    pub accuracy_points: Option<f64>,
    pub debuff_resist_points: Option<f64>,
    pub onrush_active: bool,
    pub balance_factor: f64,
}

/// Validation state derived solely from which fields parsed
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    /// Crit or crit damage missing: nothing can be computed
    Incomplete { missing: Vec<InputField> },
    /// Crit stats present but base damage or AP missing: rates only
    Partial { missing: Vec<InputField> },
    /// Everything required is present
    Complete(CompleteInputs),
}

/// Classify parsed inputs.
///
/// Non-finite values count as missing, the same as unparseable text.
pub fn validate(raw: &RawInputs) -> Validation {
    let raw = &raw.finite_only();
    let crit_missing = missing_fields(&[
        (InputField::CritPoints, raw.crit_points),
        (InputField::CritDamagePoints, raw.crit_damage_points),
    ]);
    let damage_missing = missing_fields(&[
        (InputField::BaseDamageMin, raw.base_damage_min),
        (InputField::BaseDamageMax, raw.base_damage_max),
        (InputField::AttackPower, raw.attack_power),
    ]);

    if !crit_missing.is_empty() {
        let mut missing = crit_missing;
        missing.extend(damage_missing);
        return Validation::Incomplete { missing };
    }

    match (
        raw.base_damage_min,
        raw.base_damage_max,
        raw.attack_power,
        raw.crit_points,
        raw.crit_damage_points,
    ) {
        (Some(min), Some(max), Some(ap), Some(crit), Some(crit_damage)) => {
            Validation::Complete(CompleteInputs {
                base_damage_min: min,
                base_damage_max: max,
                attack_power: ap,
                secondary_bonus_percent: raw.secondary_bonus_percent,
                crit_points: crit,
                crit_damage_points: crit_damage,
                accuracy_points: raw.accuracy_points,
                debuff_resist_points: raw.debuff_resist_points,
                onrush_active: raw.onrush_active,
                balance_factor: raw.balance_factor,
            })
        }
        _ => Validation::Partial {
            missing: damage_missing,
        },
    }
}

fn missing_fields(fields: &[(InputField, Option<f64>)]) -> Vec<InputField> {
    fields
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(field, _)| *field)
        .collect()
}
