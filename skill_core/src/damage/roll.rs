//! Sample individual hits from a damage result

use super::result::DamageResult;
use crate::types::DamageRange;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One sampled hit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitRoll {
    pub amount: f64,
    pub is_critical: bool,
}

/// Roll a single hit: crit with the result's crit chance, amount uniform in the matching range
pub fn roll_hit(result: &DamageResult, rng: &mut impl Rng) -> HitRoll {
    let is_critical = rng.gen::<f64>() < result.crit_chance();
    let range = if is_critical {
        result.crit_range
    } else {
        result.non_crit_range
    };

    HitRoll {
        amount: roll_in(range, rng),
        is_critical,
    }
}

fn roll_in(range: DamageRange, rng: &mut impl Rng) -> f64 {
    if range.min >= range.max {
        range.max
    } else {
        rng.gen_range(range.min..=range.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upgrade::UpgradeTotals;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn result_with_rate(rate: f64) -> DamageResult {
        DamageResult {
            base_range: DamageRange::new(100.0, 120.0),
            base_range_with_upgrade: DamageRange::new(100.0, 120.0),
            non_crit_range: DamageRange::new(200.0, 240.0),
            crit_range: DamageRange::new(400.0, 440.0),
            avg_non_crit: 220.0,
            avg_crit: 420.0,
            expected_hit: 220.0,
            crit_rate_percent: rate,
            crit_multiplier_percent: 125.0,
            crit_scale: 1.0,
            accuracy_percent: None,
            debuff_resist_percent: None,
            upgrade: UpgradeTotals::default(),
        }
    }

    #[test]
    fn test_never_crits_at_zero_rate() {
        let result = result_with_rate(0.0);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let hit = roll_hit(&result, &mut rng);
            assert!(!hit.is_critical);
            assert!(hit.amount >= 200.0 && hit.amount <= 240.0);
        }
    }

    #[test]
    fn test_always_crits_at_full_rate() {
        let result = result_with_rate(110.0);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let hit = roll_hit(&result, &mut rng);
            assert!(hit.is_critical);
            assert!(hit.amount >= 400.0 && hit.amount <= 440.0);
        }
    }

    #[test]
    fn test_collapsed_range() {
        let mut result = result_with_rate(0.0);
        result.non_crit_range = DamageRange::new(250.0, 250.0);
        let mut rng = StdRng::seed_from_u64(1);
        assert!((roll_hit(&result, &mut rng).amount - 250.0).abs() < f64::EPSILON);
    }
}
