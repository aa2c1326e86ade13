//! The full commodity catalog.
//!
//! A day's market carries a random 15-20 commodity subset of this list;
//! anything not drawn simply can't be traded in that region that day.
//! Categories group commodities for headline and event price effects.

/// A tradable commodity definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommodityDef {
    pub name: &'static str,
    pub base_price: u32,
    /// Volatility coefficient in (0, 1]. Higher swings harder.
    pub volatility: f64,
    pub category: &'static str,
}

pub const CATEGORY_DOWNERS: &str = "downers";
pub const CATEGORY_UPPERS: &str = "uppers";
pub const CATEGORY_PSYCHEDELICS: &str = "psychedelics";
pub const CATEGORY_HERB: &str = "herb";
pub const CATEGORY_PHARMA: &str = "pharma";
pub const CATEGORY_PARTY: &str = "party";

const fn def(
    name: &'static str,
    base_price: u32,
    volatility: f64,
    category: &'static str,
) -> CommodityDef {
    CommodityDef {
        name,
        base_price,
        volatility,
        category,
    }
}

/// Every commodity in the game, base prices roughly ordered cheap to dear.
pub static CATALOG: [CommodityDef; 24] = [
    def("Ludes", 15, 0.55, CATEGORY_DOWNERS),
    def("Paracetamol Stash", 25, 0.30, CATEGORY_PHARMA),
    def("Bathtub Speed", 40, 0.60, CATEGORY_UPPERS),
    def("Shrooms", 90, 0.50, CATEGORY_PSYCHEDELICS),
    def("Ditchweed", 110, 0.45, CATEGORY_HERB),
    def("Codeine Syrup", 140, 0.40, CATEGORY_PHARMA),
    def("Hash", 190, 0.45, CATEGORY_HERB),
    def("Benzos", 230, 0.35, CATEGORY_PHARMA),
    def("Poppers", 260, 0.55, CATEGORY_PARTY),
    def("Speed", 320, 0.60, CATEGORY_UPPERS),
    def("Acid Tabs", 450, 0.70, CATEGORY_PSYCHEDELICS),
    def("Skunk", 520, 0.50, CATEGORY_HERB),
    def("Ketamine", 600, 0.55, CATEGORY_PARTY),
    def("Mescaline", 700, 0.60, CATEGORY_PSYCHEDELICS),
    def("MDMA", 950, 0.65, CATEGORY_PARTY),
    def("Opium", 1_100, 0.50, CATEGORY_DOWNERS),
    def("Oxy", 1_400, 0.45, CATEGORY_PHARMA),
    def("Crack", 1_800, 0.80, CATEGORY_UPPERS),
    def("PCP", 2_300, 0.75, CATEGORY_PSYCHEDELICS),
    def("Hydroponic Bud", 3_000, 0.55, CATEGORY_HERB),
    def("Heroin", 5_500, 0.70, CATEGORY_DOWNERS),
    def("Cocaine", 8_000, 0.65, CATEGORY_UPPERS),
    def("Fentanyl Patches", 12_000, 0.85, CATEGORY_PHARMA),
    def("Pure Snow", 18_000, 0.75, CATEGORY_UPPERS),
];

pub fn commodity_by_name(name: &str) -> Option<&'static CommodityDef> {
    CATALOG.iter().find(|c| c.name == name)
}

/// Category a commodity belongs to, if the commodity exists at all.
pub fn category_of(name: &str) -> Option<&'static str> {
    commodity_by_name(name).map(|c| c.category)
}
