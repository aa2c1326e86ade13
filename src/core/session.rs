//! The command surface: one session, one player, one snapshot at a time.
//!
//! Every command follows the same shape: guard, clone the snapshot, run
//! the command logic against the clone, commit only on success. A rejected
//! command therefore leaves the committed snapshot untouched, and
//! rejections are idempotent. Commands are serialized through `&mut self`;
//! the in-flight flag additionally rejects reentrant calls and is cleared
//! even when the command fails.

use rand::Rng;

use crate::combat::logic::{defeat_penalty, resolve_turn};
use crate::combat::types::{BattleAction, TurnOutcome, TurnReport};
use crate::core::constants::MAX_HEALTH;
use crate::core::day_tick::{advance_day, refresh_market, DayReport};
use crate::core::game_state::{GameState, InventoryEntry, LogCategory};
use crate::error::CommandError;
use crate::feed::DataFeed;
use crate::region::Region;
use crate::shop::{armor_by_id, capacity_upgrade_by_id, healing_item_by_id, weapon_by_id};

pub struct Session<F: DataFeed, R: Rng> {
    state: GameState,
    feed: F,
    rng: R,
    in_flight: bool,
}

impl<F: DataFeed, R: Rng> Session<F, R> {
    pub fn new(feed: F, rng: R) -> Self {
        Self {
            state: GameState::new(),
            feed,
            rng,
            in_flight: false,
        }
    }

    /// The committed snapshot. Read-only; commands are the only writers.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    // ── Guard plumbing ───────────────────────────────────────────────────

    fn begin(&mut self) -> Result<(), CommandError> {
        if self.in_flight {
            return Err(CommandError::CommandInFlight);
        }
        self.in_flight = true;
        Ok(())
    }

    fn finish<T>(&mut self, result: Result<T, CommandError>) -> Result<T, CommandError> {
        self.in_flight = false;
        result
    }

    // ── Trading ──────────────────────────────────────────────────────────

    pub fn buy_commodity(
        &mut self,
        commodity: &str,
        quantity: u32,
        quoted_price: u32,
    ) -> Result<(), CommandError> {
        self.begin()?;
        let mut next = self.state.clone();
        let result = do_buy(&mut next, commodity, quantity, quoted_price);
        if result.is_ok() {
            self.state = next;
        }
        self.finish(result)
    }

    pub fn sell_commodity(
        &mut self,
        commodity: &str,
        quantity: u32,
        quoted_price: u32,
    ) -> Result<(), CommandError> {
        self.begin()?;
        let mut next = self.state.clone();
        let result = do_sell(&mut next, commodity, quantity, quoted_price);
        if result.is_ok() {
            self.state = next;
        }
        self.finish(result)
    }

    // ── Shop ─────────────────────────────────────────────────────────────

    pub fn buy_weapon(&mut self, id: &str) -> Result<(), CommandError> {
        self.begin()?;
        let mut next = self.state.clone();
        let result = do_buy_weapon(&mut next, id);
        if result.is_ok() {
            self.state = next;
        }
        self.finish(result)
    }

    pub fn buy_armor(&mut self, id: &str) -> Result<(), CommandError> {
        self.begin()?;
        let mut next = self.state.clone();
        let result = do_buy_armor(&mut next, id);
        if result.is_ok() {
            self.state = next;
        }
        self.finish(result)
    }

    pub fn buy_healing_item(&mut self, id: &str) -> Result<(), CommandError> {
        self.begin()?;
        let mut next = self.state.clone();
        let result = do_buy_healing(&mut next, id);
        if result.is_ok() {
            self.state = next;
        }
        self.finish(result)
    }

    pub fn buy_capacity_upgrade(&mut self, id: &str) -> Result<(), CommandError> {
        self.begin()?;
        let mut next = self.state.clone();
        let result = do_buy_upgrade(&mut next, id);
        if result.is_ok() {
            self.state = next;
        }
        self.finish(result)
    }

    pub fn buy_ammo(&mut self) -> Result<(), CommandError> {
        self.begin()?;
        let mut next = self.state.clone();
        let result = do_buy_ammo(&mut next);
        if result.is_ok() {
            self.state = next;
        }
        self.finish(result)
    }

    // ── Movement and time ────────────────────────────────────────────────

    /// Move to another region and refresh its market. No day passes.
    pub fn travel_to(&mut self, region: Region) -> Result<(), CommandError> {
        self.begin()?;
        let mut next = self.state.clone();
        let result = (|| {
            playable(&next)?;
            if next.current_region == region {
                return Err(CommandError::AlreadyInRegion(region));
            }
            next.current_region = region;
            next.log_event(LogCategory::Travel, format!("You head to {region}."));
            let mut events = Vec::new();
            refresh_market(&mut next, &mut self.feed, &mut events);
            Ok(())
        })();
        if result.is_ok() {
            self.state = next;
        }
        self.finish(result)
    }

    pub fn advance_day(&mut self) -> Result<DayReport, CommandError> {
        self.begin()?;
        let mut next = self.state.clone();
        let result = match playable(&next) {
            Ok(()) => Ok(advance_day(&mut next, &mut self.feed, &mut self.rng)),
            Err(err) => Err(err),
        };
        if result.is_ok() {
            self.state = next;
        }
        self.finish(result)
    }

    // ── Combat ───────────────────────────────────────────────────────────

    pub fn submit_battle_action(
        &mut self,
        action: BattleAction,
    ) -> Result<TurnReport, CommandError> {
        self.begin()?;
        let mut next = self.state.clone();
        let result = do_battle_action(&mut next, action, &mut self.rng);
        if result.is_ok() {
            self.state = next;
        }
        self.finish(result)
    }

    // ── Lifecycle ────────────────────────────────────────────────────────

    /// Throw everything away and start over. The one command a finished
    /// game still accepts.
    pub fn reset_session(&mut self) {
        self.state = GameState::new();
        self.in_flight = false;
    }
}

// ── Command logic ────────────────────────────────────────────────────────
// Free functions over the snapshot clone, so each is testable without a
// session and cannot touch the committed state.

/// Common preconditions for everything except battle actions and reset.
fn playable(state: &GameState) -> Result<(), CommandError> {
    if state.game_over {
        return Err(CommandError::GameOver);
    }
    if state.battle.is_some() {
        return Err(CommandError::BattleInProgress);
    }
    Ok(())
}

fn quoted_or_reject(
    state: &GameState,
    commodity: &str,
    quoted_price: u32,
) -> Result<u32, CommandError> {
    let current = state
        .local_market()
        .price_of(commodity)
        .ok_or_else(|| CommandError::CommodityUnavailable {
            commodity: commodity.to_string(),
        })?;
    if current != quoted_price {
        return Err(CommandError::StalePrice {
            commodity: commodity.to_string(),
            quoted: quoted_price,
            current,
        });
    }
    Ok(current)
}

fn do_buy(
    state: &mut GameState,
    commodity: &str,
    quantity: u32,
    quoted_price: u32,
) -> Result<(), CommandError> {
    playable(state)?;
    if quantity == 0 {
        return Err(CommandError::NonPositiveQuantity);
    }
    let price = quoted_or_reject(state, commodity, quoted_price)?;

    let free = state.free_capacity();
    if quantity > free {
        return Err(CommandError::InsufficientCapacity {
            requested: quantity,
            free,
        });
    }
    let cost = quantity as u64 * price as u64;
    if cost > state.cash as u64 {
        return Err(CommandError::InsufficientCash {
            needed: cost.min(u32::MAX as u64) as u32,
            available: state.cash,
        });
    }

    state.cash -= cost as u32;
    let entry = state
        .inventory
        .entry(commodity.to_string())
        .or_insert(InventoryEntry {
            quantity: 0,
            total_cost_basis: 0,
        });
    entry.quantity += quantity;
    entry.total_cost_basis += cost;
    state.record_trade(state.current_region);
    state.log_event(
        LogCategory::Trade,
        format!("Bought {quantity} {commodity} at ${price}."),
    );
    Ok(())
}

fn do_sell(
    state: &mut GameState,
    commodity: &str,
    quantity: u32,
    quoted_price: u32,
) -> Result<(), CommandError> {
    playable(state)?;
    if quantity == 0 {
        return Err(CommandError::NonPositiveQuantity);
    }
    let held = state
        .inventory
        .get(commodity)
        .map(|e| e.quantity)
        .unwrap_or(0);
    if quantity > held {
        return Err(CommandError::InsufficientStock {
            commodity: commodity.to_string(),
            requested: quantity,
            held,
        });
    }
    let price = quoted_or_reject(state, commodity, quoted_price)?;

    let proceeds = quantity as u64 * price as u64;
    state.adjust_cash(proceeds as i64);

    let entry = state
        .inventory
        .get_mut(commodity)
        .expect("held > 0 checked above");
    // Cost basis leaves proportionally with the units sold.
    let basis_removed = entry.total_cost_basis * quantity as u64 / held as u64;
    entry.quantity -= quantity;
    entry.total_cost_basis -= basis_removed;
    if entry.quantity == 0 {
        state.inventory.remove(commodity);
    }

    state.record_trade(state.current_region);
    state.log_event(
        LogCategory::Trade,
        format!("Sold {quantity} {commodity} at ${price}."),
    );
    Ok(())
}

fn charge(state: &mut GameState, price: u32) -> Result<(), CommandError> {
    if state.cash < price {
        return Err(CommandError::InsufficientCash {
            needed: price,
            available: state.cash,
        });
    }
    state.cash -= price;
    Ok(())
}

fn do_buy_weapon(state: &mut GameState, id: &str) -> Result<(), CommandError> {
    playable(state)?;
    let weapon = weapon_by_id(id).ok_or_else(|| CommandError::UnknownItem { id: id.to_string() })?;
    if state
        .equipped_weapon
        .as_ref()
        .is_some_and(|w| w.id == weapon.id)
    {
        return Err(CommandError::AlreadyOwned { id: id.to_string() });
    }
    charge(state, weapon.price)?;
    // Firearms arrive loaded with one spare clip.
    state.weapon_ammo = weapon.firearm.then_some(crate::combat::types::AmmoState {
        in_clip: weapon.clip_size,
        reserve: weapon.clip_size,
    });
    state.log_event(LogCategory::Trade, format!("Picked up a {}.", weapon.name));
    state.equipped_weapon = Some(weapon);
    Ok(())
}

fn do_buy_armor(state: &mut GameState, id: &str) -> Result<(), CommandError> {
    playable(state)?;
    let armor = armor_by_id(id).ok_or_else(|| CommandError::UnknownItem { id: id.to_string() })?;
    if state.purchased_armor_ids.contains(&armor.id) {
        return Err(CommandError::AlreadyOwned { id: id.to_string() });
    }
    charge(state, armor.price)?;
    state.purchased_armor_ids.insert(armor.id.clone());
    state.log_event(LogCategory::Trade, format!("Strapped on a {}.", armor.name));
    state.equipped_armor = Some(armor);
    Ok(())
}

fn do_buy_healing(state: &mut GameState, id: &str) -> Result<(), CommandError> {
    playable(state)?;
    let item =
        healing_item_by_id(id).ok_or_else(|| CommandError::UnknownItem { id: id.to_string() })?;
    charge(state, item.price)?;
    state.health = (state.health + item.heal).min(MAX_HEALTH);
    state.log_event(
        LogCategory::Trade,
        format!("Patched up with {}. Health {}.", item.name, state.health),
    );
    Ok(())
}

fn do_buy_upgrade(state: &mut GameState, id: &str) -> Result<(), CommandError> {
    playable(state)?;
    let upgrade =
        capacity_upgrade_by_id(id).ok_or_else(|| CommandError::UnknownItem { id: id.to_string() })?;
    if state.purchased_upgrade_ids.contains(&upgrade.id) {
        return Err(CommandError::AlreadyOwned { id: id.to_string() });
    }
    charge(state, upgrade.price)?;
    state.purchased_upgrade_ids.insert(upgrade.id.clone());
    state.max_capacity += upgrade.extra_capacity;
    state.log_event(
        LogCategory::Trade,
        format!("A {} buys you {} more slots.", upgrade.name, upgrade.extra_capacity),
    );
    Ok(())
}

fn do_buy_ammo(state: &mut GameState) -> Result<(), CommandError> {
    playable(state)?;
    let weapon = state
        .equipped_weapon
        .as_ref()
        .filter(|w| w.firearm)
        .cloned()
        .ok_or(CommandError::NoFirearmEquipped)?;
    charge(state, weapon.ammo_cost)?;
    let ammo = state
        .weapon_ammo
        .get_or_insert(crate::combat::types::AmmoState {
            in_clip: 0,
            reserve: 0,
        });
    ammo.reserve += weapon.clip_size;
    state.log_event(
        LogCategory::Trade,
        format!("Bought a clip for the {}.", weapon.name),
    );
    Ok(())
}

fn do_battle_action(
    state: &mut GameState,
    action: BattleAction,
    rng: &mut impl Rng,
) -> Result<TurnReport, CommandError> {
    if state.game_over {
        return Err(CommandError::GameOver);
    }
    let mut battle = state.battle.take().ok_or(CommandError::NoActiveBattle)?;

    let mut fighter = state.fighter();
    let mut ammo = state.weapon_ammo;
    let clip_size = state
        .equipped_weapon
        .as_ref()
        .map(|w| w.clip_size)
        .unwrap_or(0);

    let report = match resolve_turn(&mut battle, action, &mut fighter, &mut ammo, clip_size, rng) {
        Ok(report) => report,
        Err(err) => {
            // Rejected action: battle stays active, nothing changed.
            state.battle = Some(battle);
            return Err(err);
        }
    };

    state.weapon_ammo = ammo;
    state.apply_fighter(&fighter);
    for event in &report.events {
        state.log_battle(event.describe());
    }

    match report.outcome {
        TurnOutcome::Continue => {
            state.battle = Some(battle);
        }
        TurnOutcome::Victory => {
            state.adjust_cash(battle.enemy.cash_reward as i64);
            state.reputation += battle.enemy.reputation_reward;
            state.battle = None;
        }
        TurnOutcome::Defeat => {
            let (cash_loss, rep_loss) = defeat_penalty(state.cash, rng);
            state.adjust_cash(-(cash_loss as i64));
            state.reputation -= rep_loss;
            state.log_battle(format!("You lose ${cash_loss} and {rep_loss} reputation."));
            state.battle = None;
        }
        TurnOutcome::Escaped | TurnOutcome::Bribed => {
            state.battle = None;
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{BASE_CAPACITY, STARTING_CASH};
    use crate::market::types::{MarketSnapshot, PriceDirection, Quote};
    use crate::feed::LocalFeed;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    type TestSession = Session<LocalFeed<ChaCha8Rng>, ChaCha8Rng>;

    fn session() -> TestSession {
        Session::new(
            LocalFeed::new(ChaCha8Rng::seed_from_u64(100)),
            ChaCha8Rng::seed_from_u64(200),
        )
    }

    /// Plant a fixed local market so price checks are deterministic.
    fn set_local_price(session: &mut TestSession, commodity: &str, price: u32) {
        let region = session.state.current_region;
        let snapshot = MarketSnapshot {
            region,
            day: session.state.days_passed,
            quotes: vec![Quote {
                commodity: commodity.to_string(),
                price,
                volatility: 0.5,
                direction: PriceDirection::New,
            }],
        };
        session.state.markets.insert(region, snapshot);
    }

    #[test]
    fn test_buy_then_sell_tracks_cash_and_cost_basis() {
        let mut s = session();
        s.state.cash = 1_000;
        set_local_price(&mut s, "Speed", 50);

        s.buy_commodity("Speed", 10, 50).unwrap();
        assert_eq!(s.state.cash, 500);
        assert_eq!(
            s.state.inventory["Speed"],
            InventoryEntry {
                quantity: 10,
                total_cost_basis: 500
            }
        );

        set_local_price(&mut s, "Speed", 60);
        s.sell_commodity("Speed", 4, 60).unwrap();
        assert_eq!(s.state.cash, 740);
        assert_eq!(
            s.state.inventory["Speed"],
            InventoryEntry {
                quantity: 6,
                total_cost_basis: 300
            }
        );
    }

    #[test]
    fn test_selling_out_removes_the_entry() {
        let mut s = session();
        set_local_price(&mut s, "Hash", 20);
        s.buy_commodity("Hash", 5, 20).unwrap();
        s.sell_commodity("Hash", 5, 20).unwrap();
        assert!(!s.state.inventory.contains_key("Hash"));
    }

    #[test]
    fn test_rejections_leave_state_untouched_and_are_idempotent() {
        let mut s = session();
        s.state.cash = 100;
        set_local_price(&mut s, "Cocaine", 1_000);

        let before = s.state.clone();
        let first = s.buy_commodity("Cocaine", 1, 1_000).unwrap_err();
        let second = s.buy_commodity("Cocaine", 1, 1_000).unwrap_err();
        assert_eq!(first, second);
        assert!(matches!(first, CommandError::InsufficientCash { .. }));
        assert_eq!(s.state, before);
    }

    #[test]
    fn test_stale_quote_rejected() {
        let mut s = session();
        set_local_price(&mut s, "Speed", 55);
        let err = s.buy_commodity("Speed", 1, 50).unwrap_err();
        assert!(matches!(
            err,
            CommandError::StalePrice {
                quoted: 50,
                current: 55,
                ..
            }
        ));
    }

    #[test]
    fn test_absent_commodity_untradable() {
        let mut s = session();
        set_local_price(&mut s, "Speed", 50);
        let err = s.buy_commodity("Opium", 1, 50).unwrap_err();
        assert!(matches!(err, CommandError::CommodityUnavailable { .. }));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut s = session();
        set_local_price(&mut s, "Speed", 50);
        assert!(matches!(
            s.buy_commodity("Speed", 0, 50).unwrap_err(),
            CommandError::NonPositiveQuantity
        ));
        assert!(matches!(
            s.sell_commodity("Speed", 0, 50).unwrap_err(),
            CommandError::NonPositiveQuantity
        ));
    }

    #[test]
    fn test_capacity_limit_enforced() {
        let mut s = session();
        s.state.cash = 1_000_000;
        set_local_price(&mut s, "Ludes", 1);
        let err = s.buy_commodity("Ludes", BASE_CAPACITY + 1, 1).unwrap_err();
        assert!(matches!(err, CommandError::InsufficientCapacity { .. }));

        s.buy_commodity("Ludes", BASE_CAPACITY, 1).unwrap();
        assert_eq!(s.state.free_capacity(), 0);
    }

    #[test]
    fn test_overselling_rejected() {
        let mut s = session();
        set_local_price(&mut s, "Speed", 50);
        s.buy_commodity("Speed", 3, 50).unwrap();
        let err = s.sell_commodity("Speed", 4, 50).unwrap_err();
        assert!(matches!(
            err,
            CommandError::InsufficientStock {
                requested: 4,
                held: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_travel_switches_region_and_refreshes_market() {
        let mut s = session();
        assert!(matches!(
            s.travel_to(Region::Downtown).unwrap_err(),
            CommandError::AlreadyInRegion(Region::Downtown)
        ));

        s.travel_to(Region::Uptown).unwrap();
        assert_eq!(s.state.current_region, Region::Uptown);
        assert!(
            !s.state.local_market().quotes.is_empty(),
            "destination market regenerated on arrival"
        );
        // Travel takes no time.
        assert_eq!(s.state.days_passed, 0);
    }

    #[test]
    fn test_weapon_purchase_equips_and_loads() {
        let mut s = session();
        s.state.cash = 10_000;
        s.buy_weapon("pistol").unwrap();
        assert_eq!(s.state.equipped_weapon.as_ref().unwrap().id, "pistol");
        assert_eq!(
            s.state.weapon_ammo,
            Some(crate::combat::types::AmmoState {
                in_clip: 8,
                reserve: 8
            })
        );
        assert_eq!(s.state.cash, 10_000 - 1_200);

        // Rebuying the equipped weapon is pointless and rejected.
        assert!(matches!(
            s.buy_weapon("pistol").unwrap_err(),
            CommandError::AlreadyOwned { .. }
        ));

        // Switching to a melee weapon drops the ammo state.
        s.buy_weapon("switchblade").unwrap();
        assert!(s.state.weapon_ammo.is_none());
    }

    #[test]
    fn test_ammo_requires_a_firearm() {
        let mut s = session();
        s.state.cash = 10_000;
        assert!(matches!(
            s.buy_ammo().unwrap_err(),
            CommandError::NoFirearmEquipped
        ));

        s.buy_weapon("pistol").unwrap();
        s.buy_ammo().unwrap();
        assert_eq!(s.state.weapon_ammo.unwrap().reserve, 16);
        assert_eq!(s.state.cash, 10_000 - 1_200 - 60);
    }

    #[test]
    fn test_healing_clamps_at_max() {
        let mut s = session();
        s.state.health = 95;
        s.buy_healing_item("first_aid").unwrap();
        assert_eq!(s.state.health, 100);
        assert_eq!(s.state.cash, STARTING_CASH - 350);
    }

    #[test]
    fn test_armor_and_upgrades_are_one_shot() {
        let mut s = session();
        s.state.cash = 50_000;

        s.buy_armor("kevlar").unwrap();
        assert!(matches!(
            s.buy_armor("kevlar").unwrap_err(),
            CommandError::AlreadyOwned { .. }
        ));

        s.buy_capacity_upgrade("duffel").unwrap();
        assert_eq!(s.state.max_capacity, BASE_CAPACITY + 20);
        assert!(matches!(
            s.buy_capacity_upgrade("duffel").unwrap_err(),
            CommandError::AlreadyOwned { .. }
        ));
    }

    #[test]
    fn test_unknown_item_rejected() {
        let mut s = session();
        assert!(matches!(
            s.buy_weapon("railgun").unwrap_err(),
            CommandError::UnknownItem { .. }
        ));
    }

    #[test]
    fn test_battle_blocks_everything_but_battle_actions() {
        let mut s = session();
        s.state.battle = Some(crate::combat::types::BattleState {
            enemy: crate::combat::types::Enemy {
                name: "Twitchy Fiend".to_string(),
                category: crate::combat::types::EnemyCategory::Fiend,
                health: 30,
                max_health: 30,
                attack: 10,
                defense: 2,
                cash_reward: 20,
                reputation_reward: 5,
                bribable: false,
                bribe_cost: 0,
                bribe_success_rate: 0.0,
            },
            phase: crate::combat::types::BattlePhase::AwaitingPlayer,
        });
        set_local_price(&mut s, "Speed", 50);

        assert!(matches!(
            s.buy_commodity("Speed", 1, 50).unwrap_err(),
            CommandError::BattleInProgress
        ));
        assert!(matches!(
            s.advance_day().unwrap_err(),
            CommandError::BattleInProgress
        ));
        assert!(matches!(
            s.travel_to(Region::Uptown).unwrap_err(),
            CommandError::BattleInProgress
        ));

        // The battle action itself goes through.
        s.submit_battle_action(BattleAction::Attack).unwrap();
    }

    #[test]
    fn test_battle_action_without_battle_rejected() {
        let mut s = session();
        assert!(matches!(
            s.submit_battle_action(BattleAction::Attack).unwrap_err(),
            CommandError::NoActiveBattle
        ));
    }

    #[test]
    fn test_game_over_blocks_all_but_reset() {
        let mut s = session();
        s.state.game_over = true;
        set_local_price(&mut s, "Speed", 50);

        assert!(matches!(
            s.buy_commodity("Speed", 1, 50).unwrap_err(),
            CommandError::GameOver
        ));
        assert!(matches!(s.advance_day().unwrap_err(), CommandError::GameOver));

        s.reset_session();
        assert!(!s.state.game_over);
        assert_eq!(s.state.cash, STARTING_CASH);
        assert_eq!(s.state.days_passed, 0);
    }

    #[test]
    fn test_battle_runs_to_completion_through_the_session() {
        let mut s = session();
        s.state.battle = Some(crate::combat::types::BattleState {
            enemy: crate::combat::types::Enemy {
                name: "Twitchy Fiend".to_string(),
                category: crate::combat::types::EnemyCategory::Fiend,
                health: 25,
                max_health: 25,
                attack: 8,
                defense: 1,
                cash_reward: 30,
                reputation_reward: 5,
                bribable: false,
                bribe_cost: 0,
                bribe_success_rate: 0.0,
            },
            phase: crate::combat::types::BattlePhase::AwaitingPlayer,
        });
        let cash_before = s.state.cash;

        for _ in 0..50 {
            let report = s.submit_battle_action(BattleAction::Attack).unwrap();
            match report.outcome {
                TurnOutcome::Continue => continue,
                TurnOutcome::Victory => {
                    assert_eq!(s.state.cash, cash_before + 30);
                    assert_eq!(s.state.reputation, 5);
                    assert!(s.state.battle.is_none());
                    return;
                }
                TurnOutcome::Defeat => {
                    assert!(s.state.game_over);
                    assert!(s.state.cash <= cash_before);
                    return;
                }
                other => panic!("unexpected outcome {other:?} from attacking"),
            }
        }
        panic!("battle never resolved");
    }
}
