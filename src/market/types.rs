//! Market data types shared across pricing, headlines, and composition.

use serde::{Deserialize, Serialize};

use crate::region::Region;

/// Direction of a quote relative to the prior snapshot for the same
/// commodity in the same region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceDirection {
    Up,
    Down,
    Same,
    New,
}

/// A raw generated price, before headlines and events are layered on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawQuote {
    pub commodity: String,
    pub price: u32,
    pub volatility: f64,
}

/// One displayed market line: final price plus direction tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub commodity: String,
    pub price: u32,
    pub volatility: f64,
    pub direction: PriceDirection,
}

/// The full market for one region on one day. Regenerated on every day
/// tick and on travel; exactly one prior generation is retained for
/// direction comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub region: Region,
    pub day: u32,
    pub quotes: Vec<Quote>,
}

impl MarketSnapshot {
    pub fn empty(region: Region, day: u32) -> Self {
        Self {
            region,
            day,
            quotes: Vec::new(),
        }
    }

    pub fn price_of(&self, commodity: &str) -> Option<u32> {
        self.quotes
            .iter()
            .find(|q| q.commodity == commodity)
            .map(|q| q.price)
    }
}

/// What a headline applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadlineTarget {
    Commodity(String),
    /// Matches any commodity whose category appears in the list.
    Categories(Vec<String>),
    /// Untargeted headlines move every price in the region.
    General,
}

/// A regional news item layered multiplicatively on top of raw prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Headline {
    pub headline: String,
    /// Multiplies matching prices by `1 + price_impact`.
    pub price_impact: f64,
    pub target: HeadlineTarget,
}
