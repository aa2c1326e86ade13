//! Balance constants for the whole simulation.
//!
//! All tunable numbers live here. Change once, test everywhere.

// Player baseline
pub const MAX_HEALTH: u32 = 100;
pub const STARTING_CASH: u32 = 2_000;
pub const STARTING_HEALTH: u32 = 100;
pub const BASE_CAPACITY: u32 = 100;
pub const UNARMED_DAMAGE: u32 = 8;
pub const BASE_PLAYER_DEFENSE: u32 = 2;

// Market
pub const VOLATILITY_SCALE: f64 = 0.5;
pub const MARKET_SUBSET_MIN: usize = 15;
pub const MARKET_SUBSET_MAX: usize = 20;
pub const MIN_PRICE: u32 = 1;

// Headlines
pub const HEADLINES_PER_REGION_MAX: usize = 3;
pub const HEADLINE_CHANCE: f64 = 0.45;

// Events
pub const EVENT_CHANCE_PER_REGION: f64 = 0.75;

// Heat
pub const HEAT_MIN: u8 = 0;
pub const HEAT_MAX: u8 = 5;

// Encounters
pub const ENCOUNTER_GRACE_DAYS: u32 = 2;
pub const ENCOUNTER_BASE_CHANCE: f64 = 0.05;
pub const ENCOUNTER_CHANCE_PER_HEAT: f64 = 0.09;
pub const POLICE_WEIGHT_BASE: f64 = 0.20;
pub const POLICE_WEIGHT_PER_HEAT: f64 = 0.10;
pub const GANG_WEIGHT_BASE: f64 = 0.35;
pub const GANG_WEIGHT_PER_HEAT: f64 = -0.05;
pub const GANG_WEIGHT_FLOOR: f64 = 0.05;
pub const FIEND_WEIGHT: f64 = 0.45;

// Enemy difficulty ramp: 1 + max(0, days - 3) / 75
pub const DIFFICULTY_RAMP_START_DAY: u32 = 3;
pub const DIFFICULTY_RAMP_DIVISOR: f64 = 75.0;

// Combat rolls
pub const MISS_CHANCE: f64 = 0.15;
pub const CRIT_CHANCE: f64 = 0.10;
pub const CRIT_MULTIPLIER: f64 = 1.5;
pub const FIRST_STRIKE_CHANCE: f64 = 0.30;

// Flee
pub const FLEE_BASE_CHANCE: f64 = 0.33;
pub const FLEE_LOW_HEALTH_BONUS: f64 = 0.25;
pub const FLEE_LOW_HEALTH_FRACTION: f64 = 0.30;
pub const FLEE_OUTMATCHED_PENALTY: f64 = 0.15;
pub const FLEE_OUTMATCHED_RATIO: f64 = 1.2;
pub const FLEE_MIN_CHANCE: f64 = 0.10;
pub const FLEE_MAX_CHANCE: f64 = 0.90;

// Bribes
pub const POLICE_BRIBE_SUCCESS_RATE: f64 = 0.70;
pub const GANG_BRIBE_SUCCESS_RATE: f64 = 0.50;
pub const GANG_BRIBABLE_CHANCE: f64 = 0.50;

// Defeat penalties
pub const DEFEAT_CASH_LOSS_MIN: f64 = 0.10;
pub const DEFEAT_CASH_LOSS_MAX: f64 = 0.25;
pub const DEFEAT_REP_LOSS_MIN: i32 = 5;
pub const DEFEAT_REP_LOSS_MAX: i32 = 15;

// Log ring buffers
pub const EVENT_LOG_CAPACITY: usize = 100;
pub const BATTLE_LOG_CAPACITY: usize = 20;
