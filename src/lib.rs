//! Simulation core for a region-trading street game.
//!
//! Five city regions, each with its own randomized market, daily events,
//! news headlines, and police heat. The player buys low, sells high,
//! travels, and occasionally fights their way out of trouble. Everything
//! user-facing goes through [`core::session::Session`]; the rest of the
//! crate is the machinery behind it.

pub mod combat;
pub mod core;
pub mod error;
pub mod events;
pub mod feed;
pub mod heat;
pub mod market;
pub mod region;
pub mod shop;
pub mod simulator;
