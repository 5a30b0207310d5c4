//! Upgrade items and their aggregated totals

use crate::config::{BonusPolicy, BookDefinition, GrandmasterTable};
use serde::{Deserialize, Serialize};

/// A book kind together with how many of it are applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeItem {
    pub id: String,
    pub name: String,
    pub unit_level: u32,
    pub unit_percent: f64,
    pub count: u32,
}

impl UpgradeItem {
    pub fn from_definition(definition: &BookDefinition) -> Self {
        UpgradeItem {
            id: definition.id.clone(),
            name: definition.name.clone(),
            unit_level: definition.unit_level,
            unit_percent: definition.unit_percent,
            count: 0,
        }
    }

    /// Levels contributed by this item
    pub fn level(&self) -> u32 {
        self.unit_level.saturating_mul(self.count)
    }

    /// Listed percent contributed by this item
    pub fn listed_percent(&self) -> f64 {
        self.unit_percent * self.count as f64
    }
}

/// Upgrade level and bonus percent derived from applied books
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UpgradeTotals {
    pub level: u32,
    pub bonus_percent: f64,
}

impl UpgradeTotals {
    /// Totals entered by hand as a level and a percent per level
    pub fn manual(level: u32, percent_per_level: f64) -> Self {
        UpgradeTotals {
            level,
            bonus_percent: level as f64 * percent_per_level,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.level == 0 && self.bonus_percent == 0.0
    }
}

/// Aggregate items into totals.
///
/// The level is capped at `table.max_level`. With [`BonusPolicy::Table`] the
/// bonus is read from the table at that level; with [`BonusPolicy::Linear`]
/// it is the sum of each item's listed percent, scaled down by
/// `capped / raw` when the raw level is over the cap.
pub fn compute_upgrade_totals(
    items: &[UpgradeItem],
    table: &GrandmasterTable,
    policy: BonusPolicy,
) -> UpgradeTotals {
    let raw_level = items
        .iter()
        .fold(0u32, |acc, item| acc.saturating_add(item.level()));
    let level = raw_level.min(table.max_level);

    let bonus_percent = match policy {
        BonusPolicy::Table => table.lookup(level),
        BonusPolicy::Linear => {
            let listed = items.iter().map(UpgradeItem::listed_percent).sum::<f64>();
            if raw_level > level {
                listed * level as f64 / raw_level as f64
            } else {
                listed
            }
        }
    };

    UpgradeTotals {
        level,
        bonus_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{default_books, default_grandmaster_table};

    fn items_with(counts: &[u32]) -> Vec<UpgradeItem> {
        default_books()
            .books
            .iter()
            .zip(counts)
            .map(|(def, &count)| UpgradeItem {
                count,
                ..UpgradeItem::from_definition(def)
            })
            .collect()
    }

    #[test]
    fn test_empty_items() {
        let totals = compute_upgrade_totals(&[], &default_grandmaster_table(), BonusPolicy::Table);
        assert_eq!(totals, UpgradeTotals { level: 0, bonus_percent: 0.0 });
        assert!(totals.is_empty());
    }

    #[test]
    fn test_table_policy() {
        // 5 blue books = level 10
        let items = items_with(&[0, 5, 0, 0]);
        let table = default_grandmaster_table();
        let totals = compute_upgrade_totals(&items, &table, BonusPolicy::Table);
        assert_eq!(totals.level, 10);
        assert!((totals.bonus_percent - 19.0).abs() < 1e-9);
    }

    #[test]
    fn test_linear_policy() {
        // 1 green + 1 legendary = 1.90 + 33.0
        let items = items_with(&[1, 0, 0, 1]);
        let table = default_grandmaster_table();
        let totals = compute_upgrade_totals(&items, &table, BonusPolicy::Linear);
        assert_eq!(totals.level, 19);
        assert!((totals.bonus_percent - 34.9).abs() < 1e-9);
    }

    #[test]
    fn test_policies_diverge_at_high_levels() {
        // 10 legendary books = level 180
        let items = items_with(&[0, 0, 0, 10]);
        let table = default_grandmaster_table();
        let by_table = compute_upgrade_totals(&items, &table, BonusPolicy::Table);
        let by_sum = compute_upgrade_totals(&items, &table, BonusPolicy::Linear);
        assert_eq!(by_table.level, 180);
        assert!(by_table.bonus_percent < by_sum.bonus_percent);
    }

    #[test]
    fn test_level_capped() {
        // 20 legendary books = 360 levels, above the 306 cap
        let items = items_with(&[0, 0, 0, 20]);
        let table = default_grandmaster_table();
        let totals = compute_upgrade_totals(&items, &table, BonusPolicy::Table);
        assert_eq!(totals.level, 306);
        assert!((totals.bonus_percent - table.lookup(306)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_linear_bonus_capped_with_level() {
        // 20 legendary books = 360 levels, 660% listed
        let items = items_with(&[0, 0, 0, 20]);
        let table = default_grandmaster_table();
        let totals = compute_upgrade_totals(&items, &table, BonusPolicy::Linear);
        assert_eq!(totals.level, 306);
        assert!((totals.bonus_percent - 561.0).abs() < 1e-9);
    }

    #[test]
    fn test_manual_totals() {
        let totals = UpgradeTotals::manual(4, 1.90);
        assert_eq!(totals.level, 4);
        assert!((totals.bonus_percent - 7.6).abs() < 1e-9);
    }
}
