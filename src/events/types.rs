//! Event value objects.
//!
//! Events live exactly one day. They are replaced wholesale on the next
//! tick, never merged; the only thing an event leaves behind is whatever
//! its heat delta did to the region's heat level.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::region::Region;

/// Price modifiers an event applies in its region, in fixed order:
/// commodity-specific factor first, then category factor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceEffects {
    /// Commodity name -> multiplicative factor.
    pub commodity_factors: BTreeMap<String, f64>,
    /// Category name -> multiplicative factor.
    pub category_factors: BTreeMap<String, f64>,
}

impl PriceEffects {
    pub fn is_empty(&self) -> bool {
        self.commodity_factors.is_empty() && self.category_factors.is_empty()
    }
}

/// Direct consequences for the player, applied only when the event fires
/// in the player's current region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerImpact {
    pub message: String,
    pub health_delta: i32,
    pub cash_delta: i64,
    pub reputation_delta: i32,
    /// Forces a combat encounter this tick.
    pub triggers_combat: bool,
}

/// A single-day regional event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    pub id: String,
    pub name: String,
    pub text: String,
    pub price_effects: PriceEffects,
    /// Applied to the region's heat, clamped into [0,5].
    pub heat_delta: i8,
    pub player_impact: Option<PlayerImpact>,
}

/// The day's event per region; `None` means the region stayed quiet.
pub type RegionEvents = BTreeMap<Region, Option<GameEvent>>;
