//! The day-advance sequence.
//!
//! One invocation moves the world forward one day, in fixed order: day
//! counter, heat, events, player impact, market, encounter roll, rank.
//! The sequence mutates the snapshot clone the session hands it; commit
//! or discard is the session's job. The only early exit is the player
//! dying to an event impact.

use rand::Rng;

use crate::combat::generation::{encounter_chance, generate_enemy, in_grace_period, roll_category};
use crate::combat::logic::{begin_battle, defeat_penalty};
use crate::combat::types::TurnOutcome;
use crate::core::game_state::{GameState, LogCategory};
use crate::core::progression::Rank;
use crate::events::types::RegionEvents;
use crate::feed::DataFeed;
use crate::market::composer::compose_snapshot;
use crate::region::Region;

// ── Day events ───────────────────────────────────────────────────────────

/// Everything notable that happened during one day advance, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum DayEvent {
    DayStarted { day: u32 },
    EventStruck { region: Region, name: String },
    PlayerImpacted { message: String },
    MarketRefreshed { region: Region, commodities: usize },
    MarketFetchFailed { region: Region },
    EncounterSuppressed,
    EncounterStarted { enemy: String },
    RankAdvanced { rank: Rank },
    GameOver,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayReport {
    pub day: u32,
    pub events: Vec<DayEvent>,
}

// ── The tick ─────────────────────────────────────────────────────────────

/// Advance the world one day. Feed failures are non-fatal: the affected
/// channel keeps stale or empty data and the day still completes.
pub fn advance_day(
    state: &mut GameState,
    feed: &mut impl DataFeed,
    rng: &mut impl Rng,
) -> DayReport {
    let mut events = Vec::new();

    // 1. Day counter.
    state.days_passed += 1;
    let day = state.days_passed;
    events.push(DayEvent::DayStarted { day });
    state.log_event(LogCategory::System, format!("Day {day} begins."));

    // 2. Heat from yesterday's activity, then reset the counters.
    for region in Region::ALL {
        let traded = state.traded_regions.contains(&region);
        state.heat.apply_activity(region, traded);
    }
    state.traded_regions.clear();

    // 3. Today's events, heat deltas on top.
    match feed.events(day, &state.heat) {
        Ok(drawn) => state.active_events = drawn,
        Err(err) => {
            tracing::warn!(%err, "event fetch failed; no events today");
            state.log_event(LogCategory::System, "The streets are eerily quiet today.");
            state.active_events = RegionEvents::new();
        }
    }
    for region in Region::ALL {
        if let Some(Some(event)) = state.active_events.get(&region) {
            state.heat.apply_delta(region, event.heat_delta);
            events.push(DayEvent::EventStruck {
                region,
                name: event.name.clone(),
            });
        }
    }

    // 4. Direct impact of the local event, if any.
    let mut combat_forced = false;
    let local_event = state
        .active_events
        .get(&state.current_region)
        .cloned()
        .flatten();
    if let Some(event) = &local_event {
        state.log_event(LogCategory::Event, event.text.clone());
        if let Some(impact) = &event.player_impact {
            state.adjust_health(impact.health_delta);
            state.adjust_cash(impact.cash_delta);
            state.reputation += impact.reputation_delta;
            combat_forced = impact.triggers_combat;
            events.push(DayEvent::PlayerImpacted {
                message: impact.message.clone(),
            });
            state.log_event(LogCategory::Event, impact.message.clone());
            if state.game_over {
                events.push(DayEvent::GameOver);
                state.log_event(LogCategory::System, "It all ends here.");
                return DayReport { day, events };
            }
        }
    }

    // 5. Refresh the local market.
    refresh_market(state, feed, &mut events);

    // 6. Encounter: event-forced, or rolled against local heat. Both are
    // suppressed during the opening grace period, suppression is logged.
    let heat_here = state.heat.get(state.current_region);
    let rolled = combat_forced || rng.gen_bool(encounter_chance(heat_here));
    if rolled {
        if in_grace_period(day) {
            events.push(DayEvent::EncounterSuppressed);
            state.log_event(
                LogCategory::Combat,
                "Someone eyes you from across the street, then moves on.",
            );
        } else {
            start_encounter(state, heat_here, rng, &mut events);
            if state.game_over {
                events.push(DayEvent::GameOver);
                return DayReport { day, events };
            }
        }
    }

    // 7. Rank, only when the day ended peacefully.
    if state.battle.is_none() {
        let promoted = state.rank.promoted(state.cash);
        if promoted != state.rank {
            state.rank = promoted;
            events.push(DayEvent::RankAdvanced { rank: promoted });
            state.log_event(
                LogCategory::System,
                format!("Word gets around. You're a {promoted} now."),
            );
        }
    }

    DayReport { day, events }
}

/// Fetch headlines and prices for the player's region and compose the
/// displayed snapshot. Shared with travel, which refreshes the destination
/// without advancing the day.
pub(crate) fn refresh_market(
    state: &mut GameState,
    feed: &mut impl DataFeed,
    events: &mut Vec<DayEvent>,
) {
    let region = state.current_region;
    let day = state.days_passed;

    match feed.headlines(region) {
        Ok(fresh) => {
            for headline in &fresh {
                state.log_event(LogCategory::Market, headline.headline.clone());
            }
            state.headlines.insert(region, fresh);
        }
        Err(err) => {
            tracing::warn!(%err, %region, "headline fetch failed; keeping stale headlines");
        }
    }

    match feed.market_prices(region, day, &state.heat) {
        Ok(raw) => {
            let previous = state.markets.get(&region).cloned();
            let headlines = state.headlines.get(&region).cloned().unwrap_or_default();
            let event = state.active_events.get(&region).cloned().flatten();
            let snapshot = compose_snapshot(
                region,
                day,
                raw,
                &headlines,
                event.as_ref(),
                previous.as_ref(),
            );
            events.push(DayEvent::MarketRefreshed {
                region,
                commodities: snapshot.quotes.len(),
            });
            if let Some(previous) = previous {
                state.previous_markets.insert(region, previous);
            }
            state.markets.insert(region, snapshot);
        }
        Err(err) => {
            tracing::warn!(%err, %region, "market fetch failed; prices are stale");
            events.push(DayEvent::MarketFetchFailed { region });
            state.log_event(
                LogCategory::Market,
                "No word from your contacts; yesterday's prices stand.",
            );
        }
    }
}

fn start_encounter(
    state: &mut GameState,
    heat: u8,
    rng: &mut impl Rng,
    events: &mut Vec<DayEvent>,
) {
    let category = roll_category(heat, rng);
    let enemy = generate_enemy(category, state.days_passed, rng);
    events.push(DayEvent::EncounterStarted {
        enemy: enemy.name.clone(),
    });

    let mut fighter = state.fighter();
    let (battle, report) = begin_battle(enemy, &mut fighter, rng);
    state.apply_fighter(&fighter);
    for event in &report.events {
        state.log_battle(event.describe());
    }
    // A first strike can end it before the player ever acts; a resolved
    // battle never goes into the snapshot.
    if report.outcome == TurnOutcome::Defeat {
        let (cash_loss, rep_loss) = defeat_penalty(state.cash, rng);
        state.adjust_cash(-(cash_loss as i64));
        state.reputation -= rep_loss;
        state.log_battle(format!("You lose ${cash_loss} and {rep_loss} reputation."));
    } else {
        state.battle = Some(battle);
    }
}
