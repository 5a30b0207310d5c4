//! skill_core - Skill damage formula engine
//!
//! This library provides:
//! - DamageEngine: Non-crit and crit damage ranges for a skill build
//! - UpgradeSession: Grandmaster skill book counts and their level cap
//! - Stat curves: Crit rate, crit multiplier, accuracy, debuff resistance
//! - Tier conversion: Rescaling a skill's base damage to another AP modifier
//!
//! All damage is computed against a target with zero defense.

pub mod config;
pub mod damage;
pub mod engine;
pub mod error;
pub mod input;
pub mod prelude;
pub mod stats;
pub mod types;
pub mod upgrade;

// Re-export core types for convenience
pub use config::{ConfigError, EngineConfig, FormulaConstants};
pub use damage::{roll_hit, Calculation, DamageResult, HitRoll};
pub use engine::DamageEngine;
pub use error::CalcError;
pub use input::{InputForm, RawInputs, Validation};
pub use stats::{CombatOverview, OverviewInputs};
pub use types::{DamageRange, InputField};
pub use upgrade::{Increment, UpgradeItem, UpgradeSession, UpgradeTotals};
