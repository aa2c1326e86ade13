//! Event pools: region-specific flavors plus a shared generic pool.
//!
//! A region's effective pool is its own events concatenated with the
//! generic pool; the engine draws uniformly from that combined list.

use std::collections::BTreeMap;

use crate::events::types::{GameEvent, PlayerImpact, PriceEffects};
use crate::market::catalog::{CATEGORY_HERB, CATEGORY_PARTY, CATEGORY_PHARMA, CATEGORY_UPPERS};
use crate::region::Region;

fn event(id: &str, name: &str, text: &str, heat_delta: i8) -> GameEvent {
    GameEvent {
        id: id.to_string(),
        name: name.to_string(),
        text: text.to_string(),
        price_effects: PriceEffects::default(),
        heat_delta,
        player_impact: None,
    }
}

fn commodity_factor(mut ev: GameEvent, commodity: &str, factor: f64) -> GameEvent {
    ev.price_effects
        .commodity_factors
        .insert(commodity.to_string(), factor);
    ev
}

fn category_factor(mut ev: GameEvent, category: &str, factor: f64) -> GameEvent {
    ev.price_effects
        .category_factors
        .insert(category.to_string(), factor);
    ev
}

fn impact(
    mut ev: GameEvent,
    message: &str,
    health_delta: i32,
    cash_delta: i64,
    reputation_delta: i32,
    triggers_combat: bool,
) -> GameEvent {
    ev.player_impact = Some(PlayerImpact {
        message: message.to_string(),
        health_delta,
        cash_delta,
        reputation_delta,
        triggers_combat,
    });
    ev
}

/// Events that can fire anywhere.
pub fn generic_pool() -> Vec<GameEvent> {
    vec![
        commodity_factor(
            event(
                "supply-drought",
                "Supply Drought",
                "Word is the big shipments never landed this week.",
                0,
            ),
            "Heroin",
            1.8,
        ),
        category_factor(
            event(
                "precinct-sweep",
                "Precinct Sweep",
                "Uniforms are shaking down every corner in sight.",
                2,
            ),
            CATEGORY_UPPERS,
            1.4,
        ),
        category_factor(
            event(
                "glut",
                "Market Glut",
                "Somebody flooded the streets. Prices are in the gutter.",
                -1,
            ),
            CATEGORY_HERB,
            0.55,
        ),
        impact(
            event(
                "pickpocket",
                "Pickpocketed",
                "A kid bumps your shoulder. Your roll is lighter.",
                0,
            ),
            "A pickpocket lifted part of your roll.",
            0,
            -250,
            0,
            false,
        ),
        impact(
            event(
                "old-friend",
                "Old Friend",
                "An old contact settles a debt you'd written off.",
                0,
            ),
            "An old friend pays you back with interest.",
            0,
            400,
            2,
            false,
        ),
        impact(
            event(
                "mugging",
                "Mugging",
                "Footsteps close in fast behind you.",
                1,
            ),
            "Someone wants your pockets, not a conversation.",
            0,
            0,
            0,
            true,
        ),
    ]
}

/// Events specific to one region.
pub fn region_pool(region: Region) -> Vec<GameEvent> {
    match region {
        Region::Downtown => vec![
            category_factor(
                event(
                    "club-raid",
                    "Club Raid",
                    "Vice kicked the doors in on the strip clubs downtown.",
                    2,
                ),
                CATEGORY_PARTY,
                1.6,
            ),
            impact(
                event(
                    "convention",
                    "Convention Crowd",
                    "A sales convention means deep pockets and bad judgment.",
                    0,
                ),
                "Conventioneers overpay without blinking.",
                0,
                300,
                1,
                false,
            ),
        ],
        Region::Uptown => vec![
            commodity_factor(
                event(
                    "society-scandal",
                    "Society Scandal",
                    "A tabloid bust has uptown buyers paying for discretion.",
                    1,
                ),
                "Cocaine",
                1.7,
            ),
            impact(
                event(
                    "private-security",
                    "Private Security",
                    "A rent-a-cop crew is tailing anyone who looks wrong.",
                    1,
                ),
                "Private security hassles you and calls it in.",
                0,
                0,
                -1,
                false,
            ),
        ],
        Region::Riverside => vec![
            commodity_factor(
                event(
                    "dockside-landing",
                    "Dockside Landing",
                    "A freighter slipped something past customs last night.",
                    -1,
                ),
                "Opium",
                0.5,
            ),
            impact(
                event(
                    "dock-brawl",
                    "Dock Brawl",
                    "A deal by the water goes loud.",
                    1,
                ),
                "You catch a bottle across the ear leaving the docks.",
                -8,
                0,
                0,
                false,
            ),
        ],
        Region::Industrial => vec![
            category_factor(
                event(
                    "warehouse-lab",
                    "Warehouse Lab",
                    "A new cook set up in the old battery plant; product is everywhere.",
                    0,
                ),
                CATEGORY_UPPERS,
                0.6,
            ),
            impact(
                event(
                    "turf-dispute",
                    "Turf Dispute",
                    "Two crews both think this block is theirs.",
                    2,
                ),
                "You're standing on somebody's turf line.",
                0,
                0,
                0,
                true,
            ),
        ],
        Region::Southside => vec![
            category_factor(
                event(
                    "clinic-closure",
                    "Clinic Closure",
                    "The free clinic lost funding; scripts just got precious.",
                    0,
                ),
                CATEGORY_PHARMA,
                1.5,
            ),
            impact(
                event(
                    "block-party",
                    "Block Party",
                    "The whole block is out and everybody knows your name.",
                    -1,
                ),
                "You move product like lemonade in July.",
                0,
                500,
                3,
                false,
            ),
        ],
    }
}

/// Combined pool the engine draws from for a region.
pub fn combined_pool(region: Region) -> Vec<GameEvent> {
    let mut pool = region_pool(region);
    pool.extend(generic_pool());
    pool
}

/// Lookup across all pools, mainly for tests and tooling.
pub fn all_events() -> BTreeMap<String, GameEvent> {
    let mut map = BTreeMap::new();
    for region in Region::ALL {
        for ev in region_pool(region) {
            map.insert(ev.id.clone(), ev);
        }
    }
    for ev in generic_pool() {
        map.insert(ev.id.clone(), ev);
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_ids_unique() {
        let mut ids: Vec<String> = Region::ALL
            .iter()
            .flat_map(|&r| region_pool(r))
            .map(|e| e.id)
            .collect();
        ids.extend(generic_pool().into_iter().map(|e| e.id));
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total, "duplicate event id");
    }

    #[test]
    fn test_combined_pool_includes_both_sources() {
        for region in Region::ALL {
            let combined = combined_pool(region);
            assert_eq!(
                combined.len(),
                region_pool(region).len() + generic_pool().len()
            );
        }
    }

    #[test]
    fn test_price_factors_positive() {
        for (id, ev) in all_events() {
            for factor in ev
                .price_effects
                .commodity_factors
                .values()
                .chain(ev.price_effects.category_factors.values())
            {
                assert!(*factor > 0.0, "{id} has non-positive factor");
            }
        }
    }

    #[test]
    fn test_heat_deltas_stay_sane() {
        for (id, ev) in all_events() {
            assert!(
                (-5..=5).contains(&ev.heat_delta),
                "{id} delta {} out of range",
                ev.heat_delta
            );
        }
    }

    #[test]
    fn test_some_event_triggers_combat() {
        assert!(all_events()
            .values()
            .any(|e| e.player_impact.as_ref().is_some_and(|i| i.triggers_combat)));
    }
}
