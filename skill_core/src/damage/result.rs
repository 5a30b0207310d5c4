//! Calculation results

use crate::stats::{percent_or_dash, CombatOverview};
use crate::types::DamageRange;
use crate::upgrade::UpgradeTotals;
use serde::{Deserialize, Serialize};

/// Full damage breakdown for one build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageResult {
    // === Ranges ===
    /// Base range as entered
    pub base_range: DamageRange,
    /// Base range after Grandmaster upgrades
    pub base_range_with_upgrade: DamageRange,
    pub non_crit_range: DamageRange,
    pub crit_range: DamageRange,

    // === Averages ===
    pub avg_non_crit: f64,
    pub avg_crit: f64,
    /// Average hit weighted by crit rate
    pub expected_hit: f64,

    // === Derived stats ===
    pub crit_rate_percent: f64,
    pub crit_multiplier_percent: f64,
    pub crit_scale: f64,
    pub accuracy_percent: Option<f64>,
    pub debuff_resist_percent: Option<f64>,

    /// Upgrades that were applied
    pub upgrade: UpgradeTotals,
}

impl DamageResult {
    /// Crit chance as a probability in [0, 1]
    pub fn crit_chance(&self) -> f64 {
        (self.crit_rate_percent / 100.0).clamp(0.0, 1.0)
    }

    /// Derived stats as an overview record
    pub fn overview(&self) -> CombatOverview {
        CombatOverview {
            crit_rate_percent: Some(self.crit_rate_percent),
            crit_multiplier_percent: Some(self.crit_multiplier_percent),
            crit_scale: Some(self.crit_scale),
            accuracy_percent: self.accuracy_percent,
            debuff_resist_percent: self.debuff_resist_percent,
        }
    }

    /// Result panel lines
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("Base Damage (no GM): {:.0}", self.base_range),
            format!(
                "Base Damage (with GM {}): {:.2}",
                self.upgrade.level, self.base_range_with_upgrade
            ),
            format!("Non-Crit Damage: {:.2}", self.non_crit_range),
            format!("Crit Damage: {:.2}", self.crit_range),
            format!("Avg Hit (non-crit): {:.2}", self.avg_non_crit),
            format!("Avg Hit (crit): {:.2}", self.avg_crit),
            format!("Expected Hit: {:.2}", self.expected_hit),
            format!("Crit Rate: {:.2}%", self.crit_rate_percent),
            format!("Crit Damage Multiplier: {:.2}%", self.crit_multiplier_percent),
            format!("Crit Scale: {:.3}", self.crit_scale),
            format!("Accuracy: {}", percent_or_dash(self.accuracy_percent)),
            format!("Debuff Resistance: {}", percent_or_dash(self.debuff_resist_percent)),
        ]
    }
}

/// Average of a non-crit and a crit hit weighted by crit chance
pub fn expected_hit(avg_non_crit: f64, avg_crit: f64, crit_rate_percent: f64) -> f64 {
    let p = (crit_rate_percent / 100.0).clamp(0.0, 1.0);
    avg_non_crit * (1.0 - p) + avg_crit * p
}

/// Outcome of a successful calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Calculation {
    /// Every required field was present
    Full(DamageResult),
    /// Base damage or AP missing; only the stat curves could be evaluated
    RatesOnly(CombatOverview),
}

impl Calculation {
    pub fn damage(&self) -> Option<&DamageResult> {
        match self {
            Calculation::Full(result) => Some(result),
            Calculation::RatesOnly(_) => None,
        }
    }

    pub fn overview(&self) -> CombatOverview {
        match self {
            Calculation::Full(result) => result.overview(),
            Calculation::RatesOnly(overview) => *overview,
        }
    }

    pub fn summary_lines(&self) -> Vec<String> {
        match self {
            Calculation::Full(result) => result.summary_lines(),
            Calculation::RatesOnly(overview) => {
                let mut lines = vec!["Base damage or AP missing, showing rates only".to_string()];
                lines.extend(
                    overview
                        .lines()
                        .into_iter()
                        .map(|(label, value)| format!("{}: {}", label, value)),
                );
                lines
            }
        }
    }
}
