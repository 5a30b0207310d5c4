//! DamageEngine - composes the formulas behind one immutable config

use crate::config::EngineConfig;
use crate::damage::{
    adjust_base, convert_tier, crit_range, expected_hit, non_crit_range, Calculation,
    CritRangeInputs, DamageResult, SmoothScale,
};
use crate::error::CalcError;
use crate::input::{validate, CompleteInputs, RawInputs, Validation};
use crate::stats::{
    accuracy_percent, crit_multiplier, crit_rate, crit_scale, debuff_resist_percent,
    CombatOverview, OverviewInputs,
};
use crate::types::DamageRange;
use crate::upgrade::{compute_upgrade_totals, UpgradeItem, UpgradeSession, UpgradeTotals};

/// Stateless damage calculator.
///
/// Every method is a pure function of its arguments and the config given
/// at construction.
#[derive(Debug, Clone, Default)]
pub struct DamageEngine {
    config: EngineConfig,
}

impl DamageEngine {
    pub fn new(config: EngineConfig) -> Self {
        DamageEngine { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// A fresh book session for this engine's catalog and level cap
    pub fn new_session(&self) -> UpgradeSession {
        UpgradeSession::new(&self.config.books, self.config.max_level())
    }

    /// Total upgrade level and bonus for a set of books
    pub fn compute_upgrade_totals(&self, items: &[UpgradeItem]) -> UpgradeTotals {
        compute_upgrade_totals(
            items,
            &self.config.grandmaster,
            self.config.constants.upgrade.policy,
        )
    }

    /// Rescale a base range to a new AP modifier
    pub fn convert_tier(
        &self,
        min: f64,
        max: f64,
        old_modifier: f64,
        new_modifier: f64,
    ) -> Result<DamageRange, CalcError> {
        convert_tier(DamageRange::new(min, max), old_modifier, new_modifier)
    }

    /// Crit, accuracy and debuff stats from whatever was entered
    pub fn compute_combat_overview(&self, inputs: &OverviewInputs) -> CombatOverview {
        CombatOverview::compute(inputs, &self.config.constants)
    }

    /// Run the full calculation.
    ///
    /// Missing crit stats are an error; missing base damage or AP degrades
    /// to [`Calculation::RatesOnly`].
    pub fn compute_damage(
        &self,
        raw: &RawInputs,
        upgrade: UpgradeTotals,
    ) -> Result<Calculation, CalcError> {
        match validate(raw) {
            Validation::Incomplete { missing } => {
                tracing::debug!(?missing, "calculation rejected, required fields missing");
                Err(CalcError::MissingRequiredField { fields: missing })
            }
            Validation::Partial { missing } => {
                tracing::debug!(?missing, "base damage incomplete, computing rates only");
                Ok(Calculation::RatesOnly(
                    self.compute_combat_overview(&raw.overview_inputs()),
                ))
            }
            Validation::Complete(inputs) => {
                self.compute_full(&inputs, upgrade).map(Calculation::Full)
            }
        }
    }

    fn compute_full(
        &self,
        inputs: &CompleteInputs,
        upgrade: UpgradeTotals,
    ) -> Result<DamageResult, CalcError> {
        let constants = &self.config.constants;

        // Step 1: Upgrade bonus on the base range
        let base_range = DamageRange::new(inputs.base_damage_min, inputs.base_damage_max);
        let base_range_with_upgrade = adjust_base(
            base_range,
            upgrade.bonus_percent,
            constants.upgrade.scaling_coefficient,
        )?;

        // Step 2: Stat curves
        let crit_rate_percent =
            crit_rate(inputs.crit_points, inputs.onrush_active, &constants.crit);
        let crit_multiplier_percent =
            crit_multiplier(inputs.crit_damage_points, &constants.crit_damage);
        let scale_for_crit = crit_scale(crit_multiplier_percent, &constants.crit_scale);

        // Step 3: Non-crit and crit ranges
        let smooth = SmoothScale::new(
            inputs.attack_power,
            inputs.crit_damage_points,
            inputs.balance_factor,
            &constants.smooth_scale,
        );
        let non_crit = non_crit_range(
            base_range_with_upgrade,
            inputs.attack_power,
            inputs.secondary_bonus_percent,
            inputs.balance_factor,
            &smooth,
            constants.non_crit,
        );
        let crit = crit_range(
            &CritRangeInputs {
                adjusted_base: base_range_with_upgrade,
                attack_power: inputs.attack_power,
                badge_percent: inputs.secondary_bonus_percent,
                crit_damage_points: inputs.crit_damage_points,
                balance_factor: inputs.balance_factor,
            },
            &smooth,
            &constants.smooth_scale,
        );

        let avg_non_crit = non_crit.average();
        let avg_crit = crit.average();

        let result = DamageResult {
            base_range,
            base_range_with_upgrade,
            non_crit_range: non_crit,
            crit_range: crit,
            avg_non_crit,
            avg_crit,
            expected_hit: expected_hit(avg_non_crit, avg_crit, crit_rate_percent),
            crit_rate_percent,
            crit_multiplier_percent,
            crit_scale: scale_for_crit,
            accuracy_percent: inputs
                .accuracy_points
                .map(|p| accuracy_percent(p, &constants.secondary)),
            debuff_resist_percent: inputs
                .debuff_resist_points
                .map(|p| debuff_resist_percent(p, &constants.secondary)),
            upgrade,
        };

        tracing::debug!(
            level = upgrade.level,
            avg_non_crit = result.avg_non_crit,
            avg_crit = result.avg_crit,
            crit_rate = result.crit_rate_percent,
            "damage computed"
        );
        Ok(result)
    }
}
