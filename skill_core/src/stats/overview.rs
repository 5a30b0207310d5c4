//! Combat stats overview - every stat that can be derived from what was entered

use super::{accuracy_percent, crit_multiplier, crit_rate, crit_scale, debuff_resist_percent};
use crate::config::FormulaConstants;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw points feeding the overview panel; `None` means the field was left empty
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OverviewInputs {
    pub crit_points: Option<f64>,
    pub crit_damage_points: Option<f64>,
    pub accuracy_points: Option<f64>,
    pub debuff_resist_points: Option<f64>,
    pub onrush_active: bool,
}

/// Derived combat stats, each unavailable when its input is missing
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatOverview {
    pub crit_rate_percent: Option<f64>,
    pub crit_multiplier_percent: Option<f64>,
    pub crit_scale: Option<f64>,
    pub accuracy_percent: Option<f64>,
    pub debuff_resist_percent: Option<f64>,
}

impl CombatOverview {
    pub fn compute(inputs: &OverviewInputs, constants: &FormulaConstants) -> Self {
        let crit_multiplier_percent = inputs
            .crit_damage_points
            .map(|p| crit_multiplier(p, &constants.crit_damage));

        CombatOverview {
            crit_rate_percent: inputs
                .crit_points
                .map(|p| crit_rate(p, inputs.onrush_active, &constants.crit)),
            crit_multiplier_percent,
            crit_scale: crit_multiplier_percent.map(|m| crit_scale(m, &constants.crit_scale)),
            accuracy_percent: inputs
                .accuracy_points
                .map(|p| accuracy_percent(p, &constants.secondary)),
            debuff_resist_percent: inputs
                .debuff_resist_points
                .map(|p| debuff_resist_percent(p, &constants.secondary)),
        }
    }

    /// Display lines in panel order, with "--" for unavailable values
    pub fn lines(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Crit Rate", percent_or_dash(self.crit_rate_percent)),
            ("Crit Damage Multiplier", percent_or_dash(self.crit_multiplier_percent)),
            ("Accuracy", percent_or_dash(self.accuracy_percent)),
            ("Debuff Resistance", percent_or_dash(self.debuff_resist_percent)),
        ]
    }
}

impl fmt::Display for CombatOverview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .lines()
            .into_iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

/// Format a percentage with two decimals, or "--" when unavailable
pub fn percent_or_dash(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}%", v),
        _ => "--".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_overview_is_all_dashes() {
        let overview =
            CombatOverview::compute(&OverviewInputs::default(), &FormulaConstants::default());
        assert_eq!(overview, CombatOverview::default());
        for (_, value) in overview.lines() {
            assert_eq!(value, "--");
        }
    }

    #[test]
    fn test_partial_overview() {
        let inputs = OverviewInputs {
            accuracy_points: Some(0.0),
            ..Default::default()
        };
        let overview = CombatOverview::compute(&inputs, &FormulaConstants::default());
        assert_eq!(overview.crit_rate_percent, None);
        assert_eq!(percent_or_dash(overview.accuracy_percent), "85.00%");
        assert_eq!(percent_or_dash(overview.debuff_resist_percent), "--");
    }

    #[test]
    fn test_full_overview_display() {
        let inputs = OverviewInputs {
            crit_points: Some(1711.0),
            crit_damage_points: Some(1117.0),
            accuracy_points: Some(950.0),
            debuff_resist_points: Some(420.0),
            onrush_active: true,
        };
        let overview = CombatOverview::compute(&inputs, &FormulaConstants::default());
        let text = overview.to_string();
        assert!(text.starts_with("Crit Rate: 50.68%"));
        assert!(text.contains("Accuracy: 136.60%"));
        assert!((overview.crit_scale.unwrap() - 1.10).abs() < 1e-9);
    }
}
