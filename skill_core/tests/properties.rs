//! Property tests for the stat curves and the upgrade session

use proptest::prelude::*;
use skill_core::config::{CritConstants, CritDamageConstants, SecondaryConstants};
use skill_core::stats::{
    accuracy_percent, crit_multiplier, crit_multiplier_ceiling, crit_rate, crit_rate_ceiling,
    debuff_resist_percent,
};
use skill_core::{DamageEngine, DamageRange, Increment, RawInputs, UpgradeTotals};

const BOOKS: [&str; 4] = ["green", "blue", "purple", "legendary"];

proptest! {
    #[test]
    fn crit_rate_monotonic_and_bounded(a in 0.0f64..100_000.0, b in 0.0f64..100_000.0) {
        let constants = CritConstants::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let rate_lo = crit_rate(lo, false, &constants);
        let rate_hi = crit_rate(hi, false, &constants);
        prop_assert!(rate_lo <= rate_hi);
        prop_assert!(rate_lo >= 0.0);
        prop_assert!(rate_hi < crit_rate_ceiling(&constants));
    }

    #[test]
    fn crit_multiplier_monotonic_and_bounded(a in 0.0f64..100_000.0, b in 0.0f64..100_000.0) {
        let constants = CritDamageConstants::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let mult_lo = crit_multiplier(lo, &constants);
        let mult_hi = crit_multiplier(hi, &constants);
        prop_assert!(mult_lo <= mult_hi);
        prop_assert!(mult_lo >= 125.0);
        prop_assert!(mult_hi < crit_multiplier_ceiling(&constants));
    }

    #[test]
    fn secondary_curves_bounded(points in 0.0f64..100_000.0) {
        let constants = SecondaryConstants::default();
        let acc = accuracy_percent(points, &constants);
        let res = debuff_resist_percent(points, &constants);
        prop_assert!((85.0..85.0 + 96.16).contains(&acc));
        prop_assert!((0.0..100.0794).contains(&res));
    }

    #[test]
    fn convert_tier_same_modifier_is_identity(
        min in 0.0f64..50_000.0,
        max in 0.0f64..50_000.0,
        modifier in 0.01f64..10.0,
    ) {
        let engine = DamageEngine::default();
        let converted = engine.convert_tier(min, max, modifier, modifier).unwrap();
        prop_assert_eq!(converted, DamageRange::new(min, max));
    }

    #[test]
    fn session_level_never_exceeds_cap(
        ops in prop::collection::vec((0usize..4, -5i64..20), 0..60)
    ) {
        let engine = DamageEngine::default();
        let mut session = engine.new_session();
        for (book, delta) in ops {
            let before = session.clone();
            match session.increment(BOOKS[book], delta).unwrap() {
                Increment::Applied { level, .. } => prop_assert_eq!(level, session.level()),
                Increment::Rejected { .. } => prop_assert_eq!(&session, &before),
            }
            prop_assert!(session.level() <= session.max_level());
        }
        let totals = engine.compute_upgrade_totals(session.items());
        prop_assert_eq!(totals.level, session.level());
    }

    #[test]
    fn table_bonus_non_decreasing(a in 0u32..400, b in 0u32..400) {
        let engine = DamageEngine::default();
        let table = &engine.config().grandmaster;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(table.lookup(lo) <= table.lookup(hi));
    }

    #[test]
    fn upgrades_never_reduce_damage(bonus in 0.0f64..500.0) {
        let engine = DamageEngine::default();
        let raw = RawInputs {
            base_damage_min: Some(2594.0),
            base_damage_max: Some(2799.0),
            attack_power: Some(700.0),
            secondary_bonus_percent: 55.0,
            crit_points: Some(1711.0),
            crit_damage_points: Some(1117.0),
            ..Default::default()
        };
        let plain = engine.compute_damage(&raw, UpgradeTotals::default()).unwrap();
        let upgraded = engine
            .compute_damage(&raw, UpgradeTotals { level: 0, bonus_percent: bonus })
            .unwrap();
        let plain = plain.damage().unwrap();
        let upgraded = upgraded.damage().unwrap();
        prop_assert!(upgraded.base_range_with_upgrade.min >= plain.base_range.min);
        prop_assert!(upgraded.avg_non_crit >= plain.avg_non_crit);
        prop_assert!(upgraded.avg_crit >= plain.avg_crit);
    }
}
