//! Static shop catalogs: weapons, armor, healing items, capacity upgrades.
//!
//! Catalog items are plain values; an equipped item is a copy of the catalog
//! entry, not a reference into it. Prices are flat and never fluctuate with
//! the market.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub id: String,
    pub name: String,
    /// Attack power while this weapon is equipped.
    pub damage: u32,
    pub price: u32,
    /// Firearms consume ammo; melee weapons never do.
    pub firearm: bool,
    /// Rounds per clip. Zero for melee weapons.
    pub clip_size: u32,
    /// Price of one clip of ammo. Zero for melee weapons.
    pub ammo_cost: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Armor {
    pub id: String,
    pub name: String,
    pub defense: u32,
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealingItem {
    pub id: String,
    pub name: String,
    /// Health restored, clamped at max health on use.
    pub heal: u32,
    pub price: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityUpgrade {
    pub id: String,
    pub name: String,
    pub extra_capacity: u32,
    pub price: u32,
}

fn melee(id: &str, name: &str, damage: u32, price: u32) -> Weapon {
    Weapon {
        id: id.to_string(),
        name: name.to_string(),
        damage,
        price,
        firearm: false,
        clip_size: 0,
        ammo_cost: 0,
    }
}

fn firearm(id: &str, name: &str, damage: u32, price: u32, clip_size: u32, ammo_cost: u32) -> Weapon {
    Weapon {
        id: id.to_string(),
        name: name.to_string(),
        damage,
        price,
        firearm: true,
        clip_size,
        ammo_cost,
    }
}

pub fn weapons() -> Vec<Weapon> {
    vec![
        melee("knuckles", "Brass Knuckles", 10, 150),
        melee("switchblade", "Switchblade", 13, 350),
        firearm("pistol", "9mm Pistol", 18, 1_200, 8, 60),
        firearm("shotgun", "Sawed-Off Shotgun", 26, 3_500, 2, 90),
        firearm("smg", "Compact SMG", 34, 9_000, 30, 220),
    ]
}

pub fn armors() -> Vec<Armor> {
    vec![
        Armor {
            id: "jacket".to_string(),
            name: "Padded Jacket".to_string(),
            defense: 3,
            price: 400,
        },
        Armor {
            id: "kevlar".to_string(),
            name: "Kevlar Vest".to_string(),
            defense: 7,
            price: 2_200,
        },
        Armor {
            id: "tactical".to_string(),
            name: "Tactical Plate".to_string(),
            defense: 12,
            price: 8_000,
        },
    ]
}

pub fn healing_items() -> Vec<HealingItem> {
    vec![
        HealingItem {
            id: "bandages".to_string(),
            name: "Bandages".to_string(),
            heal: 15,
            price: 80,
        },
        HealingItem {
            id: "first_aid".to_string(),
            name: "First Aid Kit".to_string(),
            heal: 40,
            price: 350,
        },
        HealingItem {
            id: "street_doc".to_string(),
            name: "Street Doc Visit".to_string(),
            heal: 100,
            price: 1_200,
        },
    ]
}

pub fn capacity_upgrades() -> Vec<CapacityUpgrade> {
    vec![
        CapacityUpgrade {
            id: "duffel".to_string(),
            name: "Duffel Bag".to_string(),
            extra_capacity: 20,
            price: 600,
        },
        CapacityUpgrade {
            id: "lined_coat".to_string(),
            name: "Lined Coat".to_string(),
            extra_capacity: 35,
            price: 2_500,
        },
        CapacityUpgrade {
            id: "false_floor".to_string(),
            name: "False-Floor Trunk".to_string(),
            extra_capacity: 60,
            price: 9_500,
        },
    ]
}

pub fn weapon_by_id(id: &str) -> Option<Weapon> {
    weapons().into_iter().find(|w| w.id == id)
}

pub fn armor_by_id(id: &str) -> Option<Armor> {
    armors().into_iter().find(|a| a.id == id)
}

pub fn healing_item_by_id(id: &str) -> Option<HealingItem> {
    healing_items().into_iter().find(|h| h.id == id)
}

pub fn capacity_upgrade_by_id(id: &str) -> Option<CapacityUpgrade> {
    capacity_upgrades().into_iter().find(|c| c.id == id)
}
