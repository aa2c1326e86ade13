//! Raw price generation.
//!
//! Prices are a multiplicative normal perturbation of a commodity's base
//! price, scaled by the region's fixed multiplier. The normal sample comes
//! from a Box-Muller transform so a single uniform source drives everything.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::constants::{MARKET_SUBSET_MAX, MARKET_SUBSET_MIN, MIN_PRICE, VOLATILITY_SCALE};
use crate::market::catalog::{CommodityDef, CATALOG};
use crate::market::types::RawQuote;
use crate::region::Region;

/// One standard-normal sample via Box-Muller from two uniform draws.
pub fn standard_normal(rng: &mut impl Rng) -> f64 {
    // 1 - u keeps the first draw in (0, 1] so ln() never sees zero.
    let u1 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}

/// Generate one price: `base * (1 + z * volatility * 0.5)`, regional
/// multiplier applied, rounded, floored at 1.
pub fn generate_price(
    base_price: u32,
    volatility: f64,
    region: Region,
    rng: &mut impl Rng,
) -> u32 {
    let z = standard_normal(rng);
    let perturbed = base_price as f64 * (1.0 + z * volatility * VOLATILITY_SCALE);
    let regional = perturbed * region.price_multiplier();
    (regional.round() as i64).max(MIN_PRICE as i64) as u32
}

/// Draw the day's tradable subset: 15-20 distinct commodities.
pub fn daily_subset(rng: &mut impl Rng) -> Vec<&'static CommodityDef> {
    let count = rng.gen_range(MARKET_SUBSET_MIN..=MARKET_SUBSET_MAX);
    CATALOG.choose_multiple(rng, count).collect()
}

/// Generate the raw market for a region: a random commodity subset with a
/// freshly rolled price each.
pub fn generate_market(region: Region, rng: &mut impl Rng) -> Vec<RawQuote> {
    daily_subset(rng)
        .into_iter()
        .map(|def| RawQuote {
            commodity: def.name.to_string(),
            price: generate_price(def.base_price, def.volatility, region, rng),
            volatility: def.volatility,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_standard_normal_is_roughly_centered() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let n = 10_000;
        let mean: f64 = (0..n).map(|_| standard_normal(&mut rng)).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.05, "mean drifted to {mean}");
    }

    #[test]
    fn test_price_never_below_floor() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..5_000 {
            let price = generate_price(2, 1.0, Region::Southside, &mut rng);
            assert!(price >= MIN_PRICE);
        }
    }

    #[test]
    fn test_regional_multiplier_shifts_average() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let n = 4_000;
        let avg = |region: Region, rng: &mut ChaCha8Rng| -> f64 {
            (0..n)
                .map(|_| generate_price(1_000, 0.3, region, rng) as f64)
                .sum::<f64>()
                / n as f64
        };
        let uptown = avg(Region::Uptown, &mut rng);
        let southside = avg(Region::Southside, &mut rng);
        assert!(
            uptown > southside,
            "uptown {uptown} should average above southside {southside}"
        );
    }

    #[test]
    fn test_daily_subset_size_and_uniqueness() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..100 {
            let subset = daily_subset(&mut rng);
            assert!(subset.len() >= MARKET_SUBSET_MIN && subset.len() <= MARKET_SUBSET_MAX);
            let mut names: Vec<&str> = subset.iter().map(|d| d.name).collect();
            names.sort();
            names.dedup();
            assert_eq!(names.len(), subset.len(), "duplicate commodity in subset");
        }
    }

    #[test]
    fn test_same_seed_same_market() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        assert_eq!(
            generate_market(Region::Downtown, &mut a),
            generate_market(Region::Downtown, &mut b)
        );
    }

    proptest! {
        #[test]
        fn prop_price_floor_holds_for_any_input(
            base in 1u32..200_000,
            volatility in 0.01f64..1.0,
            seed in any::<u64>(),
        ) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            for region in Region::ALL {
                let price = generate_price(base, volatility, region, &mut rng);
                prop_assert!(price >= MIN_PRICE);
            }
        }
    }
}
