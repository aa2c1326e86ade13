//! Error taxonomy for the simulation core.
//!
//! Two failure classes exist: command rejections (synchronous, state
//! unchanged, user-visible) and data-feed failures (caught at the
//! orchestrator, never fatal to a day advance). A player reaching 0 health
//! is a normal terminal state, not an error, and never surfaces here.

use thiserror::Error;

use crate::region::Region;

/// A player command was rejected. State is guaranteed unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("not enough cash: need {needed}, have {available}")]
    InsufficientCash { needed: u32, available: u32 },

    #[error("not enough stock: tried to sell {requested} of {commodity}, holding {held}")]
    InsufficientStock {
        commodity: String,
        requested: u32,
        held: u32,
    },

    #[error("not enough room: {requested} units won't fit, {free} slots free")]
    InsufficientCapacity { requested: u32, free: u32 },

    #[error("quantity must be at least 1")]
    NonPositiveQuantity,

    #[error("{commodity} is not on the market here today")]
    CommodityUnavailable { commodity: String },

    #[error("price for {commodity} is stale: quoted {quoted}, market says {current}")]
    StalePrice {
        commodity: String,
        quoted: u32,
        current: u32,
    },

    #[error("unknown catalog item: {id}")]
    UnknownItem { id: String },

    #[error("already own {id}")]
    AlreadyOwned { id: String },

    #[error("no firearm equipped")]
    NoFirearmEquipped,

    #[error("already in {0}")]
    AlreadyInRegion(Region),

    #[error("a battle is in progress")]
    BattleInProgress,

    #[error("no battle is active")]
    NoActiveBattle,

    #[error("this opponent can't be bought off")]
    NotBribable,

    #[error("the game is over; reset the session to play again")]
    GameOver,

    #[error("another command is still being processed")]
    CommandInFlight,
}

/// A data fetch from the feed boundary failed. Non-fatal by contract:
/// the orchestrator logs it and keeps stale or empty data.
#[derive(Debug, Clone, Error)]
pub enum FeedError {
    #[error("market price fetch failed for {region}: {reason}")]
    Market { region: Region, reason: String },

    #[error("headline fetch failed for {region}: {reason}")]
    Headlines { region: Region, reason: String },

    #[error("event fetch failed: {reason}")]
    Events { reason: String },
}
