//! Grandmaster level to bonus percent lookup table

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Upgrade level cap of the linear fallback table
const FALLBACK_MAX_LEVEL: u32 = 306;
const FALLBACK_PERCENT_PER_LEVEL: f64 = 1.90;

/// Total bonus percent for each upgrade level `0..=max_level`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrandmasterTable {
    pub max_level: u32,
    pub percents: Vec<f64>,
}

impl GrandmasterTable {
    /// Bonus percent at `level`; levels past the table use its last entry
    pub fn lookup(&self, level: u32) -> f64 {
        let index = level.min(self.max_level) as usize;
        self.percents
            .get(index)
            .or_else(|| self.percents.last())
            .copied()
            .unwrap_or(0.0)
    }

    /// A table that grows by a fixed percent per level
    pub fn linear(max_level: u32, percent_per_level: f64) -> Self {
        GrandmasterTable {
            max_level,
            percents: (0..=max_level)
                .map(|level| level as f64 * percent_per_level)
                .collect(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let expected = self.max_level as usize + 1;
        if self.percents.len() != expected {
            return Err(ConfigError::ValidationError(format!(
                "grandmaster table has {} entries, expected {} (levels 0..={})",
                self.percents.len(),
                expected,
                self.max_level
            )));
        }

        if self.percents.first().copied() != Some(0.0) {
            return Err(ConfigError::ValidationError(
                "grandmaster table must start at 0% for level 0".to_string(),
            ));
        }

        for (level, pair) in self.percents.windows(2).enumerate() {
            if !pair[1].is_finite() || pair[1] < pair[0] {
                return Err(ConfigError::ValidationError(format!(
                    "grandmaster table decreases at level {} ({} -> {})",
                    level + 1,
                    pair[0],
                    pair[1]
                )));
            }
        }
        Ok(())
    }
}

/// The bundled table
pub fn default_grandmaster_table() -> GrandmasterTable {
    let toml = include_str!("../../config/grandmaster.toml");
    super::parse_toml::<GrandmasterTable>(toml)
        .ok()
        .filter(|table| table.validate().is_ok())
        .unwrap_or_else(|| GrandmasterTable::linear(FALLBACK_MAX_LEVEL, FALLBACK_PERCENT_PER_LEVEL))
}
