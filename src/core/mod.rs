//! Engine core: balance constants, the game-state snapshot, rank
//! progression, the day-advance orchestrator, and the session command
//! surface.

pub mod constants;
pub mod day_tick;
pub mod game_state;
pub mod progression;
pub mod session;
