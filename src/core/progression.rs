//! Rank progression.
//!
//! Seven tiers driven purely by cash thresholds. Promotion only: once a
//! rank is reached it sticks, even when the bankroll later craters.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Rookie,
    Peddler,
    Dealer,
    Supplier,
    Distributor,
    Baron,
    Kingpin,
}

/// Cash thresholds, ascending; index parallels the rank order above
/// (Rookie has no threshold).
const THRESHOLDS: [(Rank, u32); 6] = [
    (Rank::Peddler, 5_000),
    (Rank::Dealer, 20_000),
    (Rank::Supplier, 75_000),
    (Rank::Distributor, 250_000),
    (Rank::Baron, 750_000),
    (Rank::Kingpin, 2_000_000),
];

impl Rank {
    pub fn name(self) -> &'static str {
        match self {
            Rank::Rookie => "Rookie",
            Rank::Peddler => "Peddler",
            Rank::Dealer => "Dealer",
            Rank::Supplier => "Supplier",
            Rank::Distributor => "Distributor",
            Rank::Baron => "Baron",
            Rank::Kingpin => "Kingpin",
        }
    }

    /// The rank a given cash balance qualifies for, ignoring history.
    pub fn for_cash(cash: u32) -> Rank {
        THRESHOLDS
            .iter()
            .rev()
            .find(|(_, threshold)| cash >= *threshold)
            .map(|(rank, _)| *rank)
            .unwrap_or(Rank::Rookie)
    }

    /// Promote if the balance qualifies for something higher; never demote.
    pub fn promoted(self, cash: u32) -> Rank {
        self.max(Rank::for_cash(cash))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
