//! Prelude module for convenient imports
//!
//! ```rust
//! use skill_core::prelude::*;
//! ```

// Engine
pub use crate::engine::DamageEngine;
pub use crate::config::EngineConfig;
pub use crate::error::CalcError;

// Inputs
pub use crate::input::{InputForm, RawInputs};
pub use crate::types::{DamageRange, InputField};

// Results
pub use crate::damage::{Calculation, DamageResult};
pub use crate::stats::{CombatOverview, OverviewInputs};

// Upgrades
pub use crate::upgrade::{Increment, UpgradeSession, UpgradeTotals};
