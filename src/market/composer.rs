//! Market composition: raw prices + headlines + the region's active event,
//! merged in fixed order into the displayed snapshot.
//!
//! Order matters and is part of the contract: generator output first, then
//! every matching headline (`1 + price_impact` each), then the event's
//! commodity factor, then its category factor. Rounding and the price floor
//! happen once, after all multiplications.

use crate::core::constants::MIN_PRICE;
use crate::events::types::GameEvent;
use crate::market::catalog::category_of;
use crate::market::types::{
    Headline, HeadlineTarget, MarketSnapshot, PriceDirection, Quote, RawQuote,
};
use crate::region::Region;

/// Whether a headline moves a given commodity's price.
fn headline_matches(headline: &Headline, commodity: &str) -> bool {
    match &headline.target {
        HeadlineTarget::Commodity(name) => name == commodity,
        HeadlineTarget::Categories(categories) => category_of(commodity)
            .map_or(false, |category| categories.iter().any(|c| c == category)),
        HeadlineTarget::General => true,
    }
}

/// Event factor for a commodity: the commodity-specific factor applied
/// first, then the category factor, multiplicatively.
fn event_factor(event: &GameEvent, commodity: &str) -> f64 {
    let mut factor = 1.0;
    if let Some(f) = event.price_effects.commodity_factors.get(commodity) {
        factor *= f;
    }
    if let Some(category) = category_of(commodity) {
        if let Some(f) = event.price_effects.category_factors.get(category) {
            factor *= f;
        }
    }
    factor
}

fn direction_vs(previous: Option<&MarketSnapshot>, commodity: &str, price: u32) -> PriceDirection {
    match previous.and_then(|snap| snap.price_of(commodity)) {
        None => PriceDirection::New,
        Some(old) if price > old => PriceDirection::Up,
        Some(old) if price < old => PriceDirection::Down,
        Some(_) => PriceDirection::Same,
    }
}

/// Build the final displayed snapshot for one region.
pub fn compose_snapshot(
    region: Region,
    day: u32,
    raw: Vec<RawQuote>,
    headlines: &[Headline],
    event: Option<&GameEvent>,
    previous: Option<&MarketSnapshot>,
) -> MarketSnapshot {
    let quotes = raw
        .into_iter()
        .map(|rq| {
            let mut price = rq.price as f64;
            for headline in headlines.iter().filter(|h| headline_matches(h, &rq.commodity)) {
                price *= 1.0 + headline.price_impact;
            }
            if let Some(event) = event {
                price *= event_factor(event, &rq.commodity);
            }
            let price = (price.round() as i64).max(MIN_PRICE as i64) as u32;
            Quote {
                direction: direction_vs(previous, &rq.commodity, price),
                commodity: rq.commodity,
                price,
                volatility: rq.volatility,
            }
        })
        .collect();

    MarketSnapshot {
        region,
        day,
        quotes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::types::PriceEffects;
    use crate::market::catalog::{CATEGORY_HERB, CATEGORY_UPPERS};

    fn raw(commodity: &str, price: u32) -> RawQuote {
        RawQuote {
            commodity: commodity.to_string(),
            price,
            volatility: 0.5,
        }
    }

    fn headline(impact: f64, target: HeadlineTarget) -> Headline {
        Headline {
            headline: "test".to_string(),
            price_impact: impact,
            target,
        }
    }

    fn event_with(effects: PriceEffects) -> GameEvent {
        GameEvent {
            id: "ev".to_string(),
            name: "Event".to_string(),
            text: String::new(),
            price_effects: effects,
            heat_delta: 0,
            player_impact: None,
        }
    }

    #[test]
    fn test_no_modifiers_passes_raw_through() {
        let snap = compose_snapshot(
            Region::Downtown,
            1,
            vec![raw("Speed", 320)],
            &[],
            None,
            None,
        );
        assert_eq!(snap.price_of("Speed"), Some(320));
        assert_eq!(snap.quotes[0].direction, PriceDirection::New);
    }

    #[test]
    fn test_commodity_headline_applies_only_to_named() {
        let headlines = [headline(0.5, HeadlineTarget::Commodity("Speed".to_string()))];
        let snap = compose_snapshot(
            Region::Downtown,
            1,
            vec![raw("Speed", 100), raw("Hash", 100)],
            &headlines,
            None,
            None,
        );
        assert_eq!(snap.price_of("Speed"), Some(150));
        assert_eq!(snap.price_of("Hash"), Some(100));
    }

    #[test]
    fn test_category_headline_hits_members() {
        // Speed and Cocaine are uppers; Hash is herb.
        let headlines = [headline(
            0.2,
            HeadlineTarget::Categories(vec![CATEGORY_UPPERS.to_string()]),
        )];
        let snap = compose_snapshot(
            Region::Downtown,
            1,
            vec![raw("Speed", 100), raw("Cocaine", 1000), raw("Hash", 100)],
            &headlines,
            None,
            None,
        );
        assert_eq!(snap.price_of("Speed"), Some(120));
        assert_eq!(snap.price_of("Cocaine"), Some(1200));
        assert_eq!(snap.price_of("Hash"), Some(100));
    }

    #[test]
    fn test_multi_category_headline_hits_every_listed_category() {
        // Speed is uppers, Hash is herb, Ludes is downers.
        let headlines = [headline(
            0.2,
            HeadlineTarget::Categories(vec![
                CATEGORY_UPPERS.to_string(),
                CATEGORY_HERB.to_string(),
            ]),
        )];
        let snap = compose_snapshot(
            Region::Downtown,
            1,
            vec![raw("Speed", 100), raw("Hash", 100), raw("Ludes", 100)],
            &headlines,
            None,
            None,
        );
        assert_eq!(snap.price_of("Speed"), Some(120));
        assert_eq!(snap.price_of("Hash"), Some(120));
        assert_eq!(snap.price_of("Ludes"), Some(100));
    }

    #[test]
    fn test_general_headline_hits_everything() {
        let headlines = [headline(0.1, HeadlineTarget::General)];
        let snap = compose_snapshot(
            Region::Downtown,
            1,
            vec![raw("Speed", 100), raw("Hash", 200)],
            &headlines,
            None,
            None,
        );
        assert_eq!(snap.price_of("Speed"), Some(110));
        assert_eq!(snap.price_of("Hash"), Some(220));
    }

    #[test]
    fn test_event_commodity_then_category_stack() {
        let mut effects = PriceEffects::default();
        effects.commodity_factors.insert("Speed".to_string(), 2.0);
        effects
            .category_factors
            .insert(CATEGORY_UPPERS.to_string(), 1.5);
        let event = event_with(effects);

        let snap = compose_snapshot(
            Region::Downtown,
            1,
            vec![raw("Speed", 100)],
            &[],
            Some(&event),
            None,
        );
        // 100 * 2.0 * 1.5
        assert_eq!(snap.price_of("Speed"), Some(300));
    }

    #[test]
    fn test_floor_survives_crushing_modifiers() {
        let headlines = [headline(-0.99, HeadlineTarget::General)];
        let mut effects = PriceEffects::default();
        effects.commodity_factors.insert("Ludes".to_string(), 0.01);
        let event = event_with(effects);

        let snap = compose_snapshot(
            Region::Downtown,
            1,
            vec![raw("Ludes", 5)],
            &headlines,
            Some(&event),
            None,
        );
        assert_eq!(snap.price_of("Ludes"), Some(MIN_PRICE));
    }

    #[test]
    fn test_direction_tagging_against_previous() {
        let previous = compose_snapshot(
            Region::Downtown,
            1,
            vec![raw("Speed", 100), raw("Hash", 200), raw("Opium", 500)],
            &[],
            None,
            None,
        );
        let snap = compose_snapshot(
            Region::Downtown,
            2,
            vec![
                raw("Speed", 150),
                raw("Hash", 120),
                raw("Opium", 500),
                raw("Ketamine", 600),
            ],
            &[],
            None,
            Some(&previous),
        );

        let dir = |name: &str| {
            snap.quotes
                .iter()
                .find(|q| q.commodity == name)
                .unwrap()
                .direction
        };
        assert_eq!(dir("Speed"), PriceDirection::Up);
        assert_eq!(dir("Hash"), PriceDirection::Down);
        assert_eq!(dir("Opium"), PriceDirection::Same);
        assert_eq!(dir("Ketamine"), PriceDirection::New);
    }

    #[test]
    fn test_headlines_stack_multiplicatively() {
        let headlines = [
            headline(0.5, HeadlineTarget::Commodity("Speed".to_string())),
            headline(0.1, HeadlineTarget::General),
        ];
        let snap = compose_snapshot(
            Region::Downtown,
            1,
            vec![raw("Speed", 100)],
            &headlines,
            None,
            None,
        );
        // 100 * 1.5 * 1.1 = 165
        assert_eq!(snap.price_of("Speed"), Some(165));
    }
}
