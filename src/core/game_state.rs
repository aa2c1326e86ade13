//! The full game state: the snapshot every command replaces wholesale.
//!
//! Nothing outside `core` mutates a `GameState` directly. The session
//! clones the current snapshot, hands the clone to command logic, and
//! commits it only when the command succeeds, so a rejected command leaves
//! no trace. Serde derives define the snapshot's wire shape; the live
//! battle is deliberately transient.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::combat::types::{AmmoState, BattleState, PlayerFighter};
use crate::core::constants::{
    BASE_CAPACITY, BASE_PLAYER_DEFENSE, BATTLE_LOG_CAPACITY, EVENT_LOG_CAPACITY, MAX_HEALTH,
    STARTING_CASH, STARTING_HEALTH, UNARMED_DAMAGE,
};
use crate::core::progression::Rank;
use crate::events::types::RegionEvents;
use crate::heat::HeatMap;
use crate::market::types::{Headline, MarketSnapshot};
use crate::region::Region;
use crate::shop::{Armor, Weapon};

/// Which feed a log entry belongs to, for presentation filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogCategory {
    System,
    Market,
    Event,
    Trade,
    Travel,
    Combat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub category: LogCategory,
    pub message: String,
}

impl LogEntry {
    pub fn new(category: LogCategory, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            category,
            message: message.into(),
        }
    }
}

/// One inventory line. Cost basis tracks what was actually paid so profit
/// can be reported per commodity; sells reduce it proportionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub quantity: u32,
    pub total_cost_basis: u64,
}

// ── The snapshot ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub days_passed: u32,
    pub cash: u32,
    pub health: u32,
    pub reputation: i32,
    pub rank: Rank,
    pub current_region: Region,
    pub max_capacity: u32,
    /// Commodity name -> holding; entries removed at quantity 0.
    pub inventory: BTreeMap<String, InventoryEntry>,
    pub heat: HeatMap,
    /// Latest composed market per region.
    pub markets: BTreeMap<Region, MarketSnapshot>,
    /// Exactly one generation back, kept for direction tagging only.
    pub previous_markets: BTreeMap<Region, MarketSnapshot>,
    pub headlines: BTreeMap<Region, Vec<Headline>>,
    /// Today's event per region; replaced, never merged, each tick.
    pub active_events: RegionEvents,
    /// Regions the player traded in since the last day tick.
    pub traded_regions: BTreeSet<Region>,
    pub equipped_weapon: Option<Weapon>,
    pub equipped_armor: Option<Armor>,
    /// Present iff the equipped weapon is a firearm.
    pub weapon_ammo: Option<AmmoState>,
    pub purchased_armor_ids: BTreeSet<String>,
    pub purchased_upgrade_ids: BTreeSet<String>,
    pub event_log: VecDeque<LogEntry>,
    pub battle_log: VecDeque<LogEntry>,
    pub game_over: bool,
    /// Live battle; never written to disk, a session restart starts clean.
    #[serde(skip, default)]
    pub battle: Option<BattleState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            days_passed: 0,
            cash: STARTING_CASH,
            health: STARTING_HEALTH,
            reputation: 0,
            rank: Rank::Rookie,
            current_region: Region::Downtown,
            max_capacity: BASE_CAPACITY,
            inventory: BTreeMap::new(),
            heat: HeatMap::new(),
            markets: BTreeMap::new(),
            previous_markets: BTreeMap::new(),
            headlines: BTreeMap::new(),
            active_events: RegionEvents::new(),
            traded_regions: BTreeSet::new(),
            equipped_weapon: None,
            equipped_armor: None,
            weapon_ammo: None,
            purchased_armor_ids: BTreeSet::new(),
            purchased_upgrade_ids: BTreeSet::new(),
            event_log: VecDeque::new(),
            battle_log: VecDeque::new(),
            game_over: false,
            battle: None,
        }
    }

    // ── Derived stats ────────────────────────────────────────────────────

    pub fn attack_power(&self) -> u32 {
        self.equipped_weapon
            .as_ref()
            .map(|w| w.damage)
            .unwrap_or(UNARMED_DAMAGE)
    }

    pub fn defense(&self) -> u32 {
        BASE_PLAYER_DEFENSE
            + self
                .equipped_armor
                .as_ref()
                .map(|a| a.defense)
                .unwrap_or(0)
    }

    pub fn inventory_units(&self) -> u32 {
        self.inventory.values().map(|e| e.quantity).sum()
    }

    pub fn free_capacity(&self) -> u32 {
        self.max_capacity.saturating_sub(self.inventory_units())
    }

    /// Today's market in the player's region; empty before the first fetch.
    pub fn local_market(&self) -> MarketSnapshot {
        self.markets
            .get(&self.current_region)
            .cloned()
            .unwrap_or_else(|| MarketSnapshot::empty(self.current_region, self.days_passed))
    }

    // ── Combat views ─────────────────────────────────────────────────────

    /// Copy the player's combat-relevant stats out of the snapshot.
    pub fn fighter(&self) -> PlayerFighter {
        PlayerFighter {
            health: self.health,
            max_health: MAX_HEALTH,
            attack_power: self.attack_power(),
            defense: self.defense(),
            cash: self.cash,
        }
    }

    /// Write a turn's fighter back. Health 0 is the single game-over
    /// trigger, checked here so no caller can forget it.
    pub fn apply_fighter(&mut self, fighter: &PlayerFighter) {
        self.health = fighter.health.min(MAX_HEALTH);
        self.cash = fighter.cash;
        if self.health == 0 {
            self.game_over = true;
        }
    }

    // ── Mutation helpers ─────────────────────────────────────────────────

    /// Signed health change, clamped into [0, 100]; 0 flips game over.
    pub fn adjust_health(&mut self, delta: i32) {
        let next = (self.health as i64 + delta as i64).clamp(0, MAX_HEALTH as i64);
        self.health = next as u32;
        if self.health == 0 {
            self.game_over = true;
        }
    }

    /// Signed cash change; shortfalls clamp to exactly zero.
    pub fn adjust_cash(&mut self, delta: i64) {
        let next = (self.cash as i64 + delta).max(0);
        self.cash = next.min(u32::MAX as i64) as u32;
    }

    pub fn record_trade(&mut self, region: Region) {
        self.traded_regions.insert(region);
    }

    pub fn log_event(&mut self, category: LogCategory, message: impl Into<String>) {
        push_capped(
            &mut self.event_log,
            LogEntry::new(category, message),
            EVENT_LOG_CAPACITY,
        );
    }

    pub fn log_battle(&mut self, message: impl Into<String>) {
        push_capped(
            &mut self.battle_log,
            LogEntry::new(LogCategory::Combat, message),
            BATTLE_LOG_CAPACITY,
        );
    }
}

fn push_capped(log: &mut VecDeque<LogEntry>, entry: LogEntry, cap: usize) {
    log.push_back(entry);
    while log.len() > cap {
        log.pop_front();
    }
}
