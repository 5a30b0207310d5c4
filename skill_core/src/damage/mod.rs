//! Damage model - base adjustment, non-crit and crit ranges

mod base;
mod crit;
mod non_crit;
mod result;
mod roll;
mod scale;
mod tier;

pub use base::adjust_base;
pub use crit::{crit_range, effective_crit_multiplier, CritRangeInputs};
pub use non_crit::{badge_bonus, non_crit_range};
pub use result::{expected_hit, Calculation, DamageResult};
pub use roll::{roll_hit, HitRoll};
pub use scale::{smooth_scale_factor, SmoothScale};
pub use tier::convert_tier;
