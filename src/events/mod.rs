//! Regional event subsystem: at most one random event per region per day,
//! drawn from a per-region weighted pool plus a shared generic pool.

pub mod engine;
pub mod pool;
pub mod types;
