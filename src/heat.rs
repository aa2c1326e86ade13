//! Per-region heat tracking.
//!
//! Heat is an integer in [0,5] per region representing police attention. It
//! rises when the player trades in a region, decays when they don't, and
//! feeds the encounter probability roll. Only the day-loop orchestrator and
//! the event engine may write it; everything else reads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::constants::{HEAT_MAX, HEAT_MIN};
use crate::region::Region;

/// Heat level for every region. Persists across days unchanged unless
/// explicitly stepped or nudged by an event delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatMap {
    levels: BTreeMap<Region, u8>,
}

impl Default for HeatMap {
    fn default() -> Self {
        Self::new()
    }
}

impl HeatMap {
    /// All regions start cold.
    pub fn new() -> Self {
        Self {
            levels: Region::ALL.iter().map(|&r| (r, HEAT_MIN)).collect(),
        }
    }

    pub fn get(&self, region: Region) -> u8 {
        self.levels.get(&region).copied().unwrap_or(HEAT_MIN)
    }

    /// Daily activity step: +1 if the player traded in the region on the
    /// prior day, -1 otherwise. Runs before any event delta.
    pub fn apply_activity(&mut self, region: Region, traded: bool) {
        let current = self.get(region);
        let next = if traded {
            (current + 1).min(HEAT_MAX)
        } else {
            current.saturating_sub(1)
        };
        self.levels.insert(region, next);
    }

    /// Event heat delta, clamped into [0,5] independently of the activity
    /// step that preceded it.
    pub fn apply_delta(&mut self, region: Region, delta: i8) {
        let current = self.get(region) as i16;
        let next = (current + delta as i16).clamp(HEAT_MIN as i16, HEAT_MAX as i16);
        self.levels.insert(region, next as u8);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Region, u8)> + '_ {
        self.levels.iter().map(|(&r, &h)| (r, h))
    }
}
