//! Base damage adjustment from Grandmaster upgrades

use crate::error::CalcError;
use crate::types::{DamageRange, InputField};

/// Apply an upgrade bonus to a base damage range.
///
/// Only `scaling_coefficient` of the listed percent reaches the skill:
/// `adjusted = base * (1 + bonus_percent * coefficient / 100)`.
pub fn adjust_base(
    base: DamageRange,
    bonus_percent: f64,
    scaling_coefficient: f64,
) -> Result<DamageRange, CalcError> {
    if !base.min.is_finite() {
        return Err(CalcError::NonFiniteValue {
            field: InputField::BaseDamageMin,
        });
    }
    if !base.max.is_finite() {
        return Err(CalcError::NonFiniteValue {
            field: InputField::BaseDamageMax,
        });
    }

    let applied_percent = bonus_percent * scaling_coefficient;
    Ok(base.scaled(1.0 + applied_percent / 100.0))
}
