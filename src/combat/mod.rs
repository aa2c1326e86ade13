//! Combat subsystem: pure roll math, enemy generation, and the turn-based
//! battle state machine.

pub mod generation;
pub mod logic;
pub mod math;
pub mod types;
