//! Headless balance simulator.
//!
//! Drives many seeded sessions with a simple bot policy (buy bargains,
//! sell at a profit, fight when cornered) and aggregates survival and
//! bankroll statistics. Used from `bin/simulate.rs` to sanity-check
//! balance changes without playing a hundred runs by hand.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::combat::types::BattleAction;
use crate::core::session::Session;
use crate::feed::LocalFeed;
use crate::market::catalog::commodity_by_name;
use crate::region::Region;

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub num_runs: u32,
    pub target_days: u32,
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 200,
            target_days: 30,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SimReport {
    pub runs: u32,
    pub survived: u32,
    pub total_final_cash: u64,
    pub total_days_survived: u64,
    pub battles_fought: u32,
    pub final_ranks: BTreeMap<String, u32>,
}

impl SimReport {
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let survival = self.survived as f64 / self.runs.max(1) as f64 * 100.0;
        let avg_cash = self.total_final_cash / self.runs.max(1) as u64;
        let avg_days = self.total_days_survived as f64 / self.runs.max(1) as f64;
        let _ = writeln!(out, "Runs:            {}", self.runs);
        let _ = writeln!(out, "Survival rate:   {survival:.1}%");
        let _ = writeln!(out, "Avg final cash:  ${avg_cash}");
        let _ = writeln!(out, "Avg days alive:  {avg_days:.1}");
        let _ = writeln!(out, "Battles fought:  {}", self.battles_fought);
        let _ = writeln!(out, "Final ranks:");
        for (rank, count) in &self.final_ranks {
            let _ = writeln!(out, "  {rank:<12} {count}");
        }
        out
    }
}

/// Run the full batch. Each run gets its own derived seed so a fixed
/// top-level seed reproduces the whole batch.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let base_seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut report = SimReport {
        runs: config.num_runs,
        ..SimReport::default()
    };

    for run in 0..config.num_runs {
        let seed = base_seed.wrapping_add(run as u64);
        run_one(seed, config.target_days, &mut report);
    }
    report
}

fn run_one(seed: u64, target_days: u32, report: &mut SimReport) {
    let feed = LocalFeed::new(ChaCha8Rng::seed_from_u64(seed));
    let mut session = Session::new(feed, ChaCha8Rng::seed_from_u64(seed ^ 0x5eed));

    for _ in 0..target_days {
        if session.advance_day().is_err() {
            break;
        }
        if session.state().battle.is_some() {
            report.battles_fought += 1;
            fight_out(&mut session);
        }
        if session.state().game_over {
            break;
        }
        trade(&mut session);
    }

    let state = session.state();
    if !state.game_over {
        report.survived += 1;
    }
    report.total_final_cash += state.cash as u64;
    report.total_days_survived += state.days_passed as u64;
    *report
        .final_ranks
        .entry(state.rank.name().to_string())
        .or_insert(0) += 1;
}

/// Attack until it's over, flee when badly hurt.
fn fight_out(session: &mut Session<LocalFeed<ChaCha8Rng>, ChaCha8Rng>) {
    while session.state().battle.is_some() && !session.state().game_over {
        let action = if session.state().health < 30 {
            BattleAction::Flee
        } else {
            BattleAction::Attack
        };
        if session.submit_battle_action(action).is_err() {
            break;
        }
    }
}

/// Naive trading policy: sell anything quoted above its average cost,
/// then spend up to half the bankroll on today's best bargain.
fn trade(session: &mut Session<LocalFeed<ChaCha8Rng>, ChaCha8Rng>) {
    let state = session.state();
    let market = state.local_market();

    let mut sells = Vec::new();
    for (name, entry) in &state.inventory {
        if let Some(price) = market.price_of(name) {
            let avg_cost = entry.total_cost_basis / entry.quantity.max(1) as u64;
            if price as u64 > avg_cost {
                sells.push((name.clone(), entry.quantity, price));
            }
        }
    }
    for (name, quantity, price) in sells {
        let _ = session.sell_commodity(&name, quantity, price);
    }

    // Best bargain: lowest quote relative to catalog base price.
    let state = session.state();
    let market = state.local_market();
    let bargain = market
        .quotes
        .iter()
        .filter_map(|q| {
            commodity_by_name(&q.commodity)
                .map(|def| (q.commodity.clone(), q.price, q.price as f64 / def.base_price as f64))
        })
        .filter(|(_, price, _)| *price <= state.cash / 2)
        .min_by(|a, b| a.2.total_cmp(&b.2));

    if let Some((name, price, _)) = bargain {
        if price > 0 {
            let budget = state.cash / 2;
            let quantity = (budget / price).min(state.free_capacity());
            if quantity > 0 {
                let _ = session.buy_commodity(&name, quantity, price);
            }
        }
    }

    // Wander occasionally so heat and regional events matter.
    let day = session.state().days_passed;
    if day % 4 == 0 {
        let next = Region::ALL[(day as usize / 4) % Region::ALL.len()];
        let _ = session.travel_to(next);
    }
}
