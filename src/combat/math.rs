//! Pure combat math, shared by the battle state machine and the simulator.
//!
//! Both sides use the same roll rules: 15% flat miss, damage
//! `max(1, attack - defense)`, 10% critical for x1.5 rounded.

use rand::Rng;

use crate::core::constants::{
    CRIT_CHANCE, CRIT_MULTIPLIER, FLEE_BASE_CHANCE, FLEE_LOW_HEALTH_BONUS,
    FLEE_LOW_HEALTH_FRACTION, FLEE_MAX_CHANCE, FLEE_MIN_CHANCE, FLEE_OUTMATCHED_PENALTY,
    FLEE_OUTMATCHED_RATIO, MISS_CHANCE,
};

/// Result of one attack roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackRoll {
    /// Zero when the attack missed.
    pub damage: u32,
    pub crit: bool,
    pub missed: bool,
}

/// Roll one attack against a defender.
pub fn roll_attack(attack_power: u32, target_defense: u32, rng: &mut impl Rng) -> AttackRoll {
    if rng.gen_bool(MISS_CHANCE) {
        return AttackRoll {
            damage: 0,
            crit: false,
            missed: true,
        };
    }
    let base = attack_power.saturating_sub(target_defense).max(1);
    let crit = rng.gen_bool(CRIT_CHANCE);
    let damage = if crit {
        (base as f64 * CRIT_MULTIPLIER).round() as u32
    } else {
        base
    };
    AttackRoll {
        damage,
        crit,
        missed: false,
    }
}

/// Apply damage to a health pool, clamping at zero.
pub fn apply_damage(health: u32, damage: u32) -> u32 {
    health.saturating_sub(damage)
}

/// Flee success chance: fixed base, bonus when badly hurt, penalty when the
/// opponent's combined stats outclass the player's, clamped to [0.10, 0.90].
pub fn flee_chance(
    player_health: u32,
    player_max_health: u32,
    player_attack: u32,
    player_defense: u32,
    enemy_attack: u32,
    enemy_defense: u32,
) -> f64 {
    let mut chance = FLEE_BASE_CHANCE;
    if (player_health as f64) < FLEE_LOW_HEALTH_FRACTION * player_max_health as f64 {
        chance += FLEE_LOW_HEALTH_BONUS;
    }
    let enemy_combined = (enemy_attack + enemy_defense) as f64;
    let player_combined = (player_attack + player_defense) as f64;
    if enemy_combined > FLEE_OUTMATCHED_RATIO * player_combined {
        chance -= FLEE_OUTMATCHED_PENALTY;
    }
    chance.clamp(FLEE_MIN_CHANCE, FLEE_MAX_CHANCE)
}
