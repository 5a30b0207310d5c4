//! Stat curves - raw stat points to percentages

mod crit;
mod overview;
mod secondary;

pub use crit::{crit_multiplier, crit_multiplier_ceiling, crit_rate, crit_rate_ceiling, crit_scale};
pub use overview::{percent_or_dash, CombatOverview, OverviewInputs};
pub use secondary::{accuracy_percent, debuff_resist_percent};
