//! The five fixed city regions a player can travel between.
//!
//! Each region owns its own market, heat level, and event slot. Regions are
//! a closed set: everything that is keyed per-region uses [`Region::ALL`].

use serde::{Deserialize, Serialize};

/// One of the five travelable city regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    Downtown,
    Uptown,
    Riverside,
    Industrial,
    Southside,
}

impl Region {
    /// All regions, in display order.
    pub const ALL: [Region; 5] = [
        Region::Downtown,
        Region::Uptown,
        Region::Riverside,
        Region::Industrial,
        Region::Southside,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Region::Downtown => "Downtown",
            Region::Uptown => "Uptown",
            Region::Riverside => "Riverside",
            Region::Industrial => "Industrial",
            Region::Southside => "Southside",
        }
    }

    /// Fixed regional price multiplier. Wealthy regions run above base,
    /// peripheral regions below.
    pub fn price_multiplier(self) -> f64 {
        match self {
            Region::Downtown => 1.10,
            Region::Uptown => 1.20,
            Region::Riverside => 0.95,
            Region::Industrial => 0.90,
            Region::Southside => 0.85,
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_regions_listed_once() {
        let mut seen = std::collections::BTreeSet::new();
        for region in Region::ALL {
            assert!(seen.insert(region), "{region} listed twice");
        }
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_multipliers_are_positive() {
        for region in Region::ALL {
            assert!(region.price_multiplier() > 0.0);
        }
    }

    #[test]
    fn test_uptown_runs_rich_southside_runs_cheap() {
        assert!(Region::Uptown.price_multiplier() > 1.0);
        assert!(Region::Southside.price_multiplier() < 1.0);
    }
}
