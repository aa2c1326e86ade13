//! Regional news headline generation.
//!
//! Headlines are flavor items with a price impact, distinct from events:
//! several can be live in one region at once and they stack
//! multiplicatively in the composer. A headline targets one commodity, a
//! set of categories, or everything.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::constants::{HEADLINES_PER_REGION_MAX, HEADLINE_CHANCE};
use crate::market::catalog::{
    CATEGORY_HERB, CATEGORY_PARTY, CATEGORY_PHARMA, CATEGORY_PSYCHEDELICS, CATEGORY_UPPERS,
};
use crate::market::types::{Headline, HeadlineTarget};
use crate::region::Region;

struct HeadlineDef {
    text: &'static str,
    price_impact: f64,
    target: fn() -> HeadlineTarget,
}

fn pool() -> Vec<HeadlineDef> {
    vec![
        HeadlineDef {
            text: "Port seizure chokes cocaine supply",
            price_impact: 0.60,
            target: || HeadlineTarget::Commodity("Cocaine".to_string()),
        },
        HeadlineDef {
            text: "Pill mill bust dries up pharmacy backchannels",
            price_impact: 0.45,
            target: || HeadlineTarget::Categories(vec![CATEGORY_PHARMA.to_string()]),
        },
        HeadlineDef {
            text: "Bumper grow season floods the city with bud",
            price_impact: -0.35,
            target: || HeadlineTarget::Categories(vec![CATEGORY_HERB.to_string()]),
        },
        HeadlineDef {
            text: "Festival weekend sends party demand through the roof",
            price_impact: 0.50,
            target: || {
                HeadlineTarget::Categories(vec![
                    CATEGORY_PARTY.to_string(),
                    CATEGORY_PSYCHEDELICS.to_string(),
                ])
            },
        },
        HeadlineDef {
            text: "Lab explosion takes a major speed cook offline",
            price_impact: 0.40,
            target: || HeadlineTarget::Categories(vec![CATEGORY_UPPERS.to_string()]),
        },
        HeadlineDef {
            text: "College kids discover microdosing, again",
            price_impact: 0.25,
            target: || HeadlineTarget::Categories(vec![CATEGORY_PSYCHEDELICS.to_string()]),
        },
        HeadlineDef {
            text: "Heroin shipment slips past the harbor patrol",
            price_impact: -0.30,
            target: || HeadlineTarget::Commodity("Heroin".to_string()),
        },
        HeadlineDef {
            text: "City-wide crackdown rattles every corner",
            price_impact: 0.15,
            target: || HeadlineTarget::General,
        },
        HeadlineDef {
            text: "Recession bites; buyers haggle everything down",
            price_impact: -0.10,
            target: || HeadlineTarget::General,
        },
        HeadlineDef {
            text: "Rival crew dumps cheap acid to move inventory",
            price_impact: -0.40,
            target: || HeadlineTarget::Commodity("Acid Tabs".to_string()),
        },
    ]
}

/// Roll the day's headlines for one region: zero to three, each drawn
/// independently without replacement.
pub fn generate_headlines(_region: Region, rng: &mut impl Rng) -> Vec<Headline> {
    let defs = pool();
    let mut picked: Vec<&HeadlineDef> = Vec::new();
    for def in defs.choose_multiple(rng, HEADLINES_PER_REGION_MAX) {
        if rng.gen_bool(HEADLINE_CHANCE) {
            picked.push(def);
        }
    }
    picked
        .into_iter()
        .map(|def| Headline {
            headline: def.text.to_string(),
            price_impact: def.price_impact,
            target: (def.target)(),
        })
        .collect()
}
