//! The external data boundary.
//!
//! Market prices, headlines, and events arrive through `DataFeed`. The
//! built-in `LocalFeed` runs the in-crate generators; a server-backed
//! implementation would slot in behind the same trait. Feed failures are
//! non-fatal by contract: the orchestrator logs them and keeps stale or
//! empty data.

use rand::Rng;

use crate::error::FeedError;
use crate::events::engine::roll_todays_events;
use crate::events::types::RegionEvents;
use crate::heat::HeatMap;
use crate::market::headlines::generate_headlines;
use crate::market::pricing::generate_market;
use crate::market::types::{Headline, RawQuote};
use crate::region::Region;

/// Retrieval contract for everything the simulation does not generate
/// in-line. Day and heat are passed where a remote implementation would
/// want them; `LocalFeed` ignores what its generators don't need.
pub trait DataFeed {
    fn market_prices(
        &mut self,
        region: Region,
        day: u32,
        heat: &HeatMap,
    ) -> Result<Vec<RawQuote>, FeedError>;

    fn headlines(&mut self, region: Region) -> Result<Vec<Headline>, FeedError>;

    fn events(&mut self, day: u32, heat: &HeatMap) -> Result<RegionEvents, FeedError>;
}

/// Feed backed by the in-crate generators; owns its own randomness so the
/// session's command RNG and the market RNG stay independent streams.
pub struct LocalFeed<R: Rng> {
    rng: R,
}

impl<R: Rng> LocalFeed<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DataFeed for LocalFeed<R> {
    fn market_prices(
        &mut self,
        region: Region,
        _day: u32,
        _heat: &HeatMap,
    ) -> Result<Vec<RawQuote>, FeedError> {
        Ok(generate_market(region, &mut self.rng))
    }

    fn headlines(&mut self, region: Region) -> Result<Vec<Headline>, FeedError> {
        Ok(generate_headlines(region, &mut self.rng))
    }

    fn events(&mut self, day: u32, heat: &HeatMap) -> Result<RegionEvents, FeedError> {
        Ok(roll_todays_events(day, heat, &mut self.rng))
    }
}
