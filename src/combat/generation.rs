//! Encounter rolls and enemy generation.
//!
//! Encounter probability scales with the region's heat. The opponent
//! category is drawn from three normalized weights rather than the
//! cumulative thresholds a naive port would use, so the gang band can
//! never invert at high heat. Stats are rolled per category band and then
//! ramped slowly with elapsed days.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::combat::types::{Enemy, EnemyCategory};
use crate::core::constants::{
    DIFFICULTY_RAMP_DIVISOR, DIFFICULTY_RAMP_START_DAY, ENCOUNTER_BASE_CHANCE,
    ENCOUNTER_CHANCE_PER_HEAT, ENCOUNTER_GRACE_DAYS, FIEND_WEIGHT, GANG_BRIBABLE_CHANCE,
    GANG_BRIBE_SUCCESS_RATE, GANG_WEIGHT_BASE, GANG_WEIGHT_FLOOR, GANG_WEIGHT_PER_HEAT,
    POLICE_BRIBE_SUCCESS_RATE, POLICE_WEIGHT_BASE, POLICE_WEIGHT_PER_HEAT,
};

/// Probability of a random encounter at a given heat level.
pub fn encounter_chance(heat: u8) -> f64 {
    ENCOUNTER_BASE_CHANCE + heat as f64 * ENCOUNTER_CHANCE_PER_HEAT
}

/// True while encounters are suppressed outright (the opening grace
/// period).
pub fn in_grace_period(days_passed: u32) -> bool {
    days_passed <= ENCOUNTER_GRACE_DAYS
}

/// Category weights at a given heat, normalized to sum to 1.
pub fn category_weights(heat: u8) -> [(EnemyCategory, f64); 3] {
    let police = POLICE_WEIGHT_BASE + heat as f64 * POLICE_WEIGHT_PER_HEAT;
    let gang = (GANG_WEIGHT_BASE + heat as f64 * GANG_WEIGHT_PER_HEAT).max(GANG_WEIGHT_FLOOR);
    let fiend = FIEND_WEIGHT;
    let total = police + gang + fiend;
    [
        (EnemyCategory::Police, police / total),
        (EnemyCategory::Gang, gang / total),
        (EnemyCategory::Fiend, fiend / total),
    ]
}

/// Draw the opponent category for a random encounter.
pub fn roll_category(heat: u8, rng: &mut impl Rng) -> EnemyCategory {
    let weights = category_weights(heat);
    let roll: f64 = rng.gen();
    let mut cumulative = 0.0;
    for (category, weight) in weights {
        cumulative += weight;
        if roll < cumulative {
            return category;
        }
    }
    EnemyCategory::Fiend
}

/// Difficulty multiplier: flat through day 3, then a slow linear ramp.
pub fn difficulty_multiplier(days_passed: u32) -> f64 {
    1.0 + days_passed.saturating_sub(DIFFICULTY_RAMP_START_DAY) as f64 / DIFFICULTY_RAMP_DIVISOR
}

struct StatBands {
    health: (u32, u32),
    attack: (u32, u32),
    defense: (u32, u32),
    cash_reward: (u32, u32),
    reputation_reward: (i32, i32),
    bribe_cost: (u32, u32),
}

fn bands(category: EnemyCategory) -> StatBands {
    match category {
        // Tanky and defensive, modest payout.
        EnemyCategory::Police => StatBands {
            health: (60, 85),
            attack: (11, 16),
            defense: (8, 13),
            cash_reward: (40, 90),
            reputation_reward: (8, 15),
            bribe_cost: (150, 400),
        },
        // Balanced but aggressive, best rewards.
        EnemyCategory::Gang => StatBands {
            health: (45, 70),
            attack: (14, 20),
            defense: (4, 8),
            cash_reward: (80, 180),
            reputation_reward: (10, 20),
            bribe_cost: (250, 600),
        },
        // Weak but numerous; pocket change.
        EnemyCategory::Fiend => StatBands {
            health: (25, 45),
            attack: (8, 14),
            defense: (1, 4),
            cash_reward: (10, 40),
            reputation_reward: (3, 8),
            bribe_cost: (0, 0),
        },
    }
}

fn enemy_name(category: EnemyCategory, rng: &mut impl Rng) -> String {
    let pool: &[&str] = match category {
        EnemyCategory::Police => &[
            "Beat Cop",
            "Narc Detective",
            "Patrol Sergeant",
            "Vice Officer",
            "K-9 Unit",
        ],
        EnemyCategory::Gang => &[
            "Corner Enforcer",
            "Crew Lieutenant",
            "Hired Muscle",
            "Rival Runner",
            "Set Captain",
        ],
        EnemyCategory::Fiend => &[
            "Twitchy Fiend",
            "Desperate Addict",
            "Strung-Out Drifter",
            "Alley Lurker",
            "Wild-Eyed Scrapper",
        ],
    };
    pool.choose(rng).copied().unwrap_or("Stranger").to_string()
}

/// Generate an enemy for a category at a given day count. Core stats and
/// bribe cost ramp with the difficulty multiplier; rewards stay at their
/// category band.
pub fn generate_enemy(category: EnemyCategory, days_passed: u32, rng: &mut impl Rng) -> Enemy {
    let bands = bands(category);
    let ramp = difficulty_multiplier(days_passed);
    let scaled = |range: (u32, u32), rng: &mut dyn rand::RngCore| -> u32 {
        let raw = rng.gen_range(range.0..=range.1);
        ((raw as f64) * ramp).round() as u32
    };

    let health = scaled(bands.health, rng);
    let bribable = match category {
        EnemyCategory::Police => true,
        EnemyCategory::Gang => rng.gen_bool(GANG_BRIBABLE_CHANCE),
        EnemyCategory::Fiend => false,
    };
    let bribe_success_rate = match category {
        EnemyCategory::Police => POLICE_BRIBE_SUCCESS_RATE,
        EnemyCategory::Gang => GANG_BRIBE_SUCCESS_RATE,
        EnemyCategory::Fiend => 0.0,
    };
    let bribe_cost = if bribable {
        scaled(bands.bribe_cost, rng)
    } else {
        0
    };

    Enemy {
        name: enemy_name(category, rng),
        category,
        health,
        max_health: health,
        attack: scaled(bands.attack, rng),
        defense: scaled(bands.defense, rng),
        cash_reward: rng.gen_range(bands.cash_reward.0..=bands.cash_reward.1),
        reputation_reward: rng.gen_range(bands.reputation_reward.0..=bands.reputation_reward.1),
        bribable,
        bribe_cost,
        bribe_success_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_encounter_chance_scales_with_heat() {
        assert!((encounter_chance(0) - 0.05).abs() < 1e-9);
        assert!((encounter_chance(5) - 0.50).abs() < 1e-9);
    }

    #[test]
    fn test_grace_period_boundary() {
        assert!(in_grace_period(0));
        assert!(in_grace_period(2));
        assert!(!in_grace_period(3));
    }

    #[test]
    fn test_category_weights_normalized_at_all_heats() {
        for heat in 0..=5 {
            let weights = category_weights(heat);
            let sum: f64 = weights.iter().map(|(_, w)| w).sum();
            assert!((sum - 1.0).abs() < 1e-9, "heat {heat} sums to {sum}");
            for (category, w) in weights {
                assert!(w > 0.0, "heat {heat}: {category:?} weight {w} not positive");
            }
        }
    }

    #[test]
    fn test_high_heat_favors_police() {
        let cold = category_weights(0);
        let hot = category_weights(5);
        assert!(hot[0].1 > cold[0].1, "police share should rise with heat");
        assert!(hot[1].1 < cold[1].1, "gang share should fall with heat");
    }

    #[test]
    fn test_difficulty_flat_until_day_four() {
        assert_eq!(difficulty_multiplier(0), 1.0);
        assert_eq!(difficulty_multiplier(3), 1.0);
        assert!((difficulty_multiplier(4) - (1.0 + 1.0 / 75.0)).abs() < 1e-9);
        assert!(difficulty_multiplier(78) > difficulty_multiplier(4));
    }

    #[test]
    fn test_generated_enemy_within_scaled_bands() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        for _ in 0..200 {
            let enemy = generate_enemy(EnemyCategory::Police, 0, &mut rng);
            assert!((60..=85).contains(&enemy.health));
            assert!((11..=16).contains(&enemy.attack));
            assert!((8..=13).contains(&enemy.defense));
            assert_eq!(enemy.health, enemy.max_health);
            assert!(enemy.bribable);
            assert!(enemy.bribe_cost >= 150);
        }
    }

    #[test]
    fn test_fiends_never_bribable() {
        let mut rng = ChaCha8Rng::seed_from_u64(18);
        for _ in 0..100 {
            let enemy = generate_enemy(EnemyCategory::Fiend, 10, &mut rng);
            assert!(!enemy.bribable);
            assert_eq!(enemy.bribe_cost, 0);
            assert_eq!(enemy.bribe_success_rate, 0.0);
        }
    }

    #[test]
    fn test_late_game_enemies_hit_harder() {
        let mut rng = ChaCha8Rng::seed_from_u64(19);
        let n = 300;
        let avg_attack = |days: u32, rng: &mut ChaCha8Rng| -> f64 {
            (0..n)
                .map(|_| generate_enemy(EnemyCategory::Gang, days, rng).attack as f64)
                .sum::<f64>()
                / n as f64
        };
        let early = avg_attack(1, &mut rng);
        let late = avg_attack(150, &mut rng);
        assert!(late > early * 1.5, "early {early}, late {late}");
    }

    #[test]
    fn test_rewards_not_difficulty_scaled() {
        let mut rng = ChaCha8Rng::seed_from_u64(20);
        for _ in 0..200 {
            let enemy = generate_enemy(EnemyCategory::Gang, 300, &mut rng);
            assert!((80..=180).contains(&enemy.cash_reward));
            assert!((10..=20).contains(&enemy.reputation_reward));
        }
    }
}
