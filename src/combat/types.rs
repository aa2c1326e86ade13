//! Combat data types: enemies, battle state, actions, and outcomes.

use serde::{Deserialize, Serialize};

/// The three opponent categories. Police skew tanky and bribable, gangs
/// hit hard, fiends are weak but everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyCategory {
    Police,
    Gang,
    Fiend,
}

impl EnemyCategory {
    pub fn name(self) -> &'static str {
        match self {
            EnemyCategory::Police => "police",
            EnemyCategory::Gang => "gang",
            EnemyCategory::Fiend => "fiend",
        }
    }
}

/// An opponent. Created at encounter start, dropped when the battle ends;
/// never persisted between encounters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub category: EnemyCategory,
    pub health: u32,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    /// Granted verbatim on player victory.
    pub cash_reward: u32,
    pub reputation_reward: i32,
    pub bribable: bool,
    /// Cost of a bribe attempt. Meaningless when not bribable.
    pub bribe_cost: u32,
    /// Probability a paid bribe actually works.
    pub bribe_success_rate: f64,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }
}

/// Ammo for the equipped firearm. Absent entirely for melee weapons and
/// bare fists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmmoState {
    pub in_clip: u32,
    pub reserve: u32,
}

/// The player's side of a battle, copied out of the snapshot for the turn
/// and written back by the session afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerFighter {
    pub health: u32,
    pub max_health: u32,
    pub attack_power: u32,
    pub defense: u32,
    pub cash: u32,
}

/// Player-chosen battle action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleAction {
    Attack,
    Flee,
    Bribe,
}

/// Terminal result of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    Victory,
    Defeat,
    Escaped,
    Bribed,
}

/// Where the battle stands. Exactly one transition out of `AwaitingPlayer`
/// happens per submitted action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BattlePhase {
    AwaitingPlayer,
    Resolved(BattleOutcome),
}

/// Live battle state. Ephemeral: exists only between encounter start and
/// the battle screen closing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleState {
    pub enemy: Enemy,
    pub phase: BattlePhase,
}

impl BattleState {
    pub fn is_resolved(&self) -> bool {
        matches!(self.phase, BattlePhase::Resolved(_))
    }
}

/// What happened during one resolved slice of combat, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum BattleEvent {
    EnemyAppeared { name: String, category: EnemyCategory },
    FirstStrike,
    PlayerHit { damage: u32, crit: bool },
    PlayerMissed,
    Reloaded { rounds: u32 },
    OutOfAmmo,
    FleeFailed,
    FleeSucceeded,
    BribePaid { cost: u32, accepted: bool },
    EnemyHit { damage: u32, crit: bool },
    EnemyMissed,
    EnemyDefeated { cash_reward: u32, reputation_reward: i32 },
    PlayerDefeated,
}

impl BattleEvent {
    /// Player-facing log line for this event.
    pub fn describe(&self) -> String {
        match self {
            BattleEvent::EnemyAppeared { name, category } => {
                format!("A {} ({}) blocks your path!", name, category.name())
            }
            BattleEvent::FirstStrike => "They catch you off guard!".to_string(),
            BattleEvent::PlayerHit { damage, crit: true } => {
                format!("Critical hit! You deal {damage} damage.")
            }
            BattleEvent::PlayerHit { damage, crit: false } => {
                format!("You deal {damage} damage.")
            }
            BattleEvent::PlayerMissed => "Your attack misses.".to_string(),
            BattleEvent::Reloaded { rounds } => format!("You reload {rounds} rounds."),
            BattleEvent::OutOfAmmo => "Click. You're out of ammo.".to_string(),
            BattleEvent::FleeFailed => "You can't break away!".to_string(),
            BattleEvent::FleeSucceeded => "You slip away into the alleys.".to_string(),
            BattleEvent::BribePaid {
                cost,
                accepted: true,
            } => format!("${cost} changes hands. They look the other way."),
            BattleEvent::BribePaid {
                cost,
                accepted: false,
            } => format!("They pocket your ${cost} and attack anyway!"),
            BattleEvent::EnemyHit { damage, crit: true } => {
                format!("They land a brutal hit for {damage} damage!")
            }
            BattleEvent::EnemyHit {
                damage,
                crit: false,
            } => format!("They hit you for {damage} damage."),
            BattleEvent::EnemyMissed => "Their attack misses.".to_string(),
            BattleEvent::EnemyDefeated {
                cash_reward,
                reputation_reward,
            } => format!("You win! +${cash_reward}, +{reputation_reward} reputation."),
            BattleEvent::PlayerDefeated => "You go down hard.".to_string(),
        }
    }
}

/// The net result of submitting one player action (or of the battle-start
/// first strike): every event in order plus the single outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    pub events: Vec<BattleEvent>,
    pub outcome: TurnOutcome,
}

/// Exactly one of these per resolved turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    Continue,
    Victory,
    Defeat,
    Escaped,
    Bribed,
}

impl TurnOutcome {
    pub fn terminal(self) -> Option<BattleOutcome> {
        match self {
            TurnOutcome::Continue => None,
            TurnOutcome::Victory => Some(BattleOutcome::Victory),
            TurnOutcome::Defeat => Some(BattleOutcome::Defeat),
            TurnOutcome::Escaped => Some(BattleOutcome::Escaped),
            TurnOutcome::Bribed => Some(BattleOutcome::Bribed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enemy() -> Enemy {
        Enemy {
            name: "Beat Cop".to_string(),
            category: EnemyCategory::Police,
            health: 50,
            max_health: 50,
            attack: 10,
            defense: 5,
            cash_reward: 60,
            reputation_reward: 10,
            bribable: true,
            bribe_cost: 200,
            bribe_success_rate: 0.7,
        }
    }

    #[test]
    fn test_enemy_damage_clamps() {
        let mut e = enemy();
        e.take_damage(30);
        assert_eq!(e.health, 20);
        e.take_damage(100);
        assert_eq!(e.health, 0);
        assert!(!e.is_alive());
    }

    #[test]
    fn test_turn_outcome_terminal_mapping() {
        assert_eq!(TurnOutcome::Continue.terminal(), None);
        assert_eq!(
            TurnOutcome::Victory.terminal(),
            Some(BattleOutcome::Victory)
        );
        assert_eq!(TurnOutcome::Defeat.terminal(), Some(BattleOutcome::Defeat));
        assert_eq!(
            TurnOutcome::Escaped.terminal(),
            Some(BattleOutcome::Escaped)
        );
        assert_eq!(TurnOutcome::Bribed.terminal(), Some(BattleOutcome::Bribed));
    }

    #[test]
    fn test_battle_state_resolution_flag() {
        let mut battle = BattleState {
            enemy: enemy(),
            phase: BattlePhase::AwaitingPlayer,
        };
        assert!(!battle.is_resolved());
        battle.phase = BattlePhase::Resolved(BattleOutcome::Escaped);
        assert!(battle.is_resolved());
    }
}
