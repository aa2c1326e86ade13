//! The daily event draw.
//!
//! Each region rolls independently: 75% chance to pick one event uniformly
//! from its combined pool, otherwise the region stays quiet. Draws are
//! stateless; nothing about yesterday's selection matters beyond what heat
//! already recorded.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::constants::EVENT_CHANCE_PER_REGION;
use crate::events::pool::combined_pool;
use crate::events::types::{GameEvent, RegionEvents};
use crate::heat::HeatMap;
use crate::region::Region;

/// Roll one region's event for the day.
pub fn roll_region_event(region: Region, rng: &mut impl Rng) -> Option<GameEvent> {
    if !rng.gen_bool(EVENT_CHANCE_PER_REGION) {
        return None;
    }
    combined_pool(region).choose(rng).cloned()
}

/// Roll every region's event for the day. Heat is accepted for interface
/// parity with the feed contract; the draw itself is heat-independent.
pub fn roll_todays_events(_day: u32, _heat: &HeatMap, rng: &mut impl Rng) -> RegionEvents {
    Region::ALL
        .iter()
        .map(|&region| (region, roll_region_event(region, rng)))
        .collect()
}
