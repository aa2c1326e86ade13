//! The turn-based battle state machine.
//!
//! One submitted action resolves exactly one turn: the player's move, then
//! the enemy's counter when the battle is still live. Validation failures
//! (bribing the unbribable, bribing broke) are rejected before anything
//! mutates and do not consume the turn.

use rand::Rng;

use crate::combat::math::{apply_damage, flee_chance, roll_attack};
use crate::combat::types::{
    AmmoState, BattleAction, BattleEvent, BattlePhase, BattleState, Enemy, PlayerFighter,
    TurnOutcome, TurnReport,
};
use crate::core::constants::{
    DEFEAT_CASH_LOSS_MAX, DEFEAT_CASH_LOSS_MIN, DEFEAT_REP_LOSS_MAX, DEFEAT_REP_LOSS_MIN,
    FIRST_STRIKE_CHANCE,
};
use crate::error::CommandError;

/// Open a battle against a freshly generated enemy. The enemy gets a 30%
/// chance to strike before the player can act; in the worst case that
/// first strike already finishes the fight.
pub fn begin_battle(
    enemy: Enemy,
    player: &mut PlayerFighter,
    rng: &mut impl Rng,
) -> (BattleState, TurnReport) {
    let mut events = vec![BattleEvent::EnemyAppeared {
        name: enemy.name.clone(),
        category: enemy.category,
    }];
    let mut outcome = TurnOutcome::Continue;

    if rng.gen_bool(FIRST_STRIKE_CHANCE) {
        events.push(BattleEvent::FirstStrike);
        enemy_turn(&enemy, player, &mut events, rng);
        if player.health == 0 {
            outcome = TurnOutcome::Defeat;
        }
    }

    let phase = match outcome.terminal() {
        Some(terminal) => BattlePhase::Resolved(terminal),
        None => BattlePhase::AwaitingPlayer,
    };
    (
        BattleState { enemy, phase },
        TurnReport { events, outcome },
    )
}

/// Resolve one player action. `ammo` is the equipped firearm's ammo state,
/// `None` for melee; `clip_size` only matters when ammo is present.
pub fn resolve_turn(
    battle: &mut BattleState,
    action: BattleAction,
    player: &mut PlayerFighter,
    ammo: &mut Option<AmmoState>,
    clip_size: u32,
    rng: &mut impl Rng,
) -> Result<TurnReport, CommandError> {
    if battle.is_resolved() {
        return Err(CommandError::NoActiveBattle);
    }
    // Validate before touching anything.
    if action == BattleAction::Bribe {
        if !battle.enemy.bribable {
            return Err(CommandError::NotBribable);
        }
        if player.cash < battle.enemy.bribe_cost {
            return Err(CommandError::InsufficientCash {
                needed: battle.enemy.bribe_cost,
                available: player.cash,
            });
        }
    }

    let mut events = Vec::new();
    let mut outcome = TurnOutcome::Continue;

    match action {
        BattleAction::Attack => {
            if player_attack_turn(battle, player, ammo, clip_size, &mut events, rng) {
                outcome = TurnOutcome::Victory;
            }
        }
        BattleAction::Flee => {
            let chance = flee_chance(
                player.health,
                player.max_health,
                player.attack_power,
                player.defense,
                battle.enemy.attack,
                battle.enemy.defense,
            );
            if rng.gen_bool(chance) {
                events.push(BattleEvent::FleeSucceeded);
                outcome = TurnOutcome::Escaped;
            } else {
                events.push(BattleEvent::FleeFailed);
            }
        }
        BattleAction::Bribe => {
            // Cost is paid up front whether or not the bribe lands.
            let cost = battle.enemy.bribe_cost;
            player.cash -= cost;
            let accepted = rng.gen_bool(battle.enemy.bribe_success_rate);
            events.push(BattleEvent::BribePaid { cost, accepted });
            if accepted {
                outcome = TurnOutcome::Bribed;
            }
        }
    }

    // The enemy answers any non-terminal turn.
    if outcome == TurnOutcome::Continue {
        enemy_turn(&battle.enemy, player, &mut events, rng);
        if player.health == 0 {
            outcome = TurnOutcome::Defeat;
        }
    }

    if let Some(terminal) = outcome.terminal() {
        battle.phase = BattlePhase::Resolved(terminal);
    }
    Ok(TurnReport { events, outcome })
}

/// The player's attack. Firearms consume a round per shot; an empty clip
/// with rounds in reserve spends the whole turn reloading, and a dry
/// weapon wastes the turn outright. Returns true when the enemy falls.
fn player_attack_turn(
    battle: &mut BattleState,
    player: &PlayerFighter,
    ammo: &mut Option<AmmoState>,
    clip_size: u32,
    events: &mut Vec<BattleEvent>,
    rng: &mut impl Rng,
) -> bool {
    if let Some(state) = ammo {
        if state.in_clip == 0 {
            if state.reserve == 0 {
                events.push(BattleEvent::OutOfAmmo);
                return false;
            }
            let rounds = state.reserve.min(clip_size);
            state.reserve -= rounds;
            state.in_clip = rounds;
            events.push(BattleEvent::Reloaded { rounds });
            return false;
        }
        state.in_clip -= 1;
    }

    let roll = roll_attack(player.attack_power, battle.enemy.defense, rng);
    if roll.missed {
        events.push(BattleEvent::PlayerMissed);
        return false;
    }
    events.push(BattleEvent::PlayerHit {
        damage: roll.damage,
        crit: roll.crit,
    });
    battle.enemy.take_damage(roll.damage);
    if !battle.enemy.is_alive() {
        events.push(BattleEvent::EnemyDefeated {
            cash_reward: battle.enemy.cash_reward,
            reputation_reward: battle.enemy.reputation_reward,
        });
        return true;
    }
    false
}

/// Roll the price of losing: a cash fraction in [10%, 25%] and a
/// reputation hit in [5, 15].
pub fn defeat_penalty(cash: u32, rng: &mut impl Rng) -> (u32, i32) {
    let fraction = rng.gen_range(DEFEAT_CASH_LOSS_MIN..=DEFEAT_CASH_LOSS_MAX);
    let cash_loss = ((cash as f64) * fraction).round() as u32;
    let rep_loss = rng.gen_range(DEFEAT_REP_LOSS_MIN..=DEFEAT_REP_LOSS_MAX);
    (cash_loss.min(cash), rep_loss)
}

fn enemy_turn(
    enemy: &Enemy,
    player: &mut PlayerFighter,
    events: &mut Vec<BattleEvent>,
    rng: &mut impl Rng,
) {
    let roll = roll_attack(enemy.attack, player.defense, rng);
    if roll.missed {
        events.push(BattleEvent::EnemyMissed);
        return;
    }
    player.health = apply_damage(player.health, roll.damage);
    events.push(BattleEvent::EnemyHit {
        damage: roll.damage,
        crit: roll.crit,
    });
    if player.health == 0 {
        events.push(BattleEvent::PlayerDefeated);
    }
}
