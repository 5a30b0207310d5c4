//! Grandmaster upgrades - skill books and the levels they add

mod item;
mod session;

pub use item::{compute_upgrade_totals, UpgradeItem, UpgradeTotals};
pub use session::{Increment, UpgradeSession};
