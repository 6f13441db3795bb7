//! Starting packages
//!
//! A package is the list of template ids a new character of a given
//! profession starts with, before any item is instantiated.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::context::{CharacterContext, CulturalZone, HistoricalEra, WealthTier};
use crate::items::EquipSlot;

/// Sentinel accepted in hand-written package data for a contextual weapon
pub const CONTEXTUAL_SENTINEL: &str = "*CONTEXTUAL*";

/// What a package puts in an equipment slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotEntry {
    /// A fixed template id
    Item(String),
    /// Let the weapon generator pick from profession, era, culture and privilege
    Contextual,
}

impl SlotEntry {
    /// Parse a raw id, mapping the sentinel to [`SlotEntry::Contextual`]
    pub fn from_id(id: &str) -> Self {
        if id == CONTEXTUAL_SENTINEL {
            SlotEntry::Contextual
        } else {
            SlotEntry::Item(id.to_string())
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StartingPackage {
    pub inventory: Vec<String>,
    #[serde(default)]
    pub equipment: BTreeMap<EquipSlot, SlotEntry>,
    #[serde(default)]
    pub companions: Vec<String>,
}

/// Predefined packages keyed by lowercase profession
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageTable {
    pub packages: HashMap<String, StartingPackage>,
}

impl PackageTable {
    pub fn get(&self, profession: &str) -> Option<&StartingPackage> {
        self.packages.get(&profession.trim().to_lowercase())
    }
}

fn staple_food(culture: Option<CulturalZone>) -> &'static str {
    match culture {
        Some(CulturalZone::Mesoamerican) | Some(CulturalZone::NorthAmerican) => "maize_cakes",
        Some(CulturalZone::Andean) => "dried_potatoes",
        Some(CulturalZone::Amazonian) => "cassava_bread",
        Some(CulturalZone::EastAsian) | Some(CulturalZone::SoutheastAsian) => "rice_balls",
        Some(CulturalZone::MiddleEastern) | Some(CulturalZone::NorthAfrican) => "dates",
        Some(CulturalZone::SouthAsian) => "flatbread",
        Some(CulturalZone::Steppe) => "jerky",
        Some(CulturalZone::Oceanian) => "dried_fish",
        Some(CulturalZone::SubSaharanAfrican) => "millet_cakes",
        _ => "bread",
    }
}

fn garment(culture: Option<CulturalZone>) -> &'static str {
    match culture {
        Some(CulturalZone::Mesoamerican) => "cotton_tunic",
        Some(CulturalZone::Andean) => "wool_poncho",
        Some(CulturalZone::Steppe) => "felt_robe",
        Some(CulturalZone::EastAsian) => "linen_robe",
        Some(CulturalZone::SouthAsian) | Some(CulturalZone::SubSaharanAfrican) => "cotton_tunic",
        Some(CulturalZone::Amazonian) | Some(CulturalZone::Oceanian) => "bark_cloth_wrap",
        _ => "linen_tunic",
    }
}

fn footwear(culture: Option<CulturalZone>) -> Option<&'static str> {
    match culture {
        Some(CulturalZone::Amazonian) | Some(CulturalZone::Oceanian) => None,
        Some(CulturalZone::NorthAmerican) => Some("hide_moccasins"),
        Some(CulturalZone::Steppe) | Some(CulturalZone::European) => Some("leather_boots"),
        _ => Some("leather_sandals"),
    }
}

fn money(culture: Option<CulturalZone>, era: Option<HistoricalEra>, wealth: WealthTier) -> Option<&'static str> {
    let coinless = era.is_some_and(|e| e < HistoricalEra::Ancient);
    match culture {
        Some(CulturalZone::Mesoamerican) => Some("cacao_beans"),
        Some(zone) if zone.is_pre_columbian_american() => None,
        Some(CulturalZone::Oceanian) => None,
        _ if coinless => Some("cowrie_shells"),
        _ => match wealth {
            WealthTier::Poor => None,
            WealthTier::Modest => Some("copper_coins"),
            WealthTier::Wealthy | WealthTier::Elite => Some("silver_coins"),
        },
    }
}

/// Build a plausible package for a profession with no predefined one
pub fn contextual_package(ctx: &CharacterContext) -> StartingPackage {
    let wealth = ctx.wealth_tier();
    let mut inventory = vec![staple_food(ctx.culture).to_string(), staple_food(ctx.culture).to_string()];

    inventory.push(match ctx.culture {
        Some(zone) if zone.is_pre_columbian_american() => "gourd_canteen".to_string(),
        _ => "waterskin".to_string(),
    });
    inventory.push("iron_knife".to_string());

    if let Some(coins) = money(ctx.culture, ctx.era, wealth) {
        inventory.push(coins.to_string());
    }
    if wealth >= WealthTier::Wealthy {
        inventory.push("letter_of_introduction".to_string());
    }
    if wealth == WealthTier::Poor {
        inventory.push("hemp_rope".to_string());
    }

    let mut equipment = BTreeMap::new();
    equipment.insert(EquipSlot::Body, SlotEntry::Item(garment(ctx.culture).to_string()));
    if let Some(shoes) = footwear(ctx.culture) {
        equipment.insert(EquipSlot::Feet, SlotEntry::Item(shoes.to_string()));
    }
    if wealth >= WealthTier::Modest {
        equipment.insert(EquipSlot::MainHand, SlotEntry::Contextual);
    }

    StartingPackage {
        inventory,
        equipment,
        companions: Vec::new(),
    }
}

fn package(
    inventory: &[&str],
    equipment: &[(EquipSlot, &str)],
    companions: &[&str],
) -> StartingPackage {
    StartingPackage {
        inventory: inventory.iter().map(|s| s.to_string()).collect(),
        equipment: equipment
            .iter()
            .map(|(slot, id)| (*slot, SlotEntry::from_id(id)))
            .collect(),
        companions: companions.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn default_packages() -> PackageTable {
    use EquipSlot::*;

    let entries = [
        ("farmer", package(
            &["bread", "bread", "iron_sickle", "hemp_rope", "waterskin", "barley_seeds"],
            &[(Body, "linen_tunic"), (Head, "straw_hat"), (Feet, "leather_sandals")],
            &[],
        )),
        ("hunter", package(
            &["jerky", "jerky", "iron_knife", "waterskin", "leather_pouch", "animal_snare"],
            &[(MainHand, CONTEXTUAL_SENTINEL), (Body, "leather_vest"), (Feet, "leather_boots"), (Back, "wool_cloak")],
            &["dog"],
        )),
        ("soldier", package(
            &["bread", "hard_cheese", "waterskin", "whetstone", "healing_herbs"],
            &[(MainHand, CONTEXTUAL_SENTINEL), (OffHand, "wooden_shield"), (Body, "padded_armor"), (Feet, "leather_boots")],
            &[],
        )),
        ("merchant", package(
            &["bread", "dates", "silver_coins", "silver_coins", "ledger", "leather_pouch", "linen_cloth"],
            &[(Body, "wool_tunic"), (Back, "wool_cloak"), (Feet, "leather_boots"), (Waist, "leather_belt")],
            &["mule"],
        )),
        ("shepherd", package(
            &["bread", "hard_cheese", "waterskin", "wool_yarn"],
            &[(MainHand, "shepherds_crook"), (Body, "wool_tunic"), (Back, "wool_cloak")],
            &["sheepdog", "sheep"],
        )),
        ("scribe", package(
            &["bread", "reed_quill", "ink_pot", "parchment_scroll", "tallow_candles"],
            &[(Body, "linen_robe"), (Feet, "leather_sandals")],
            &["cat"],
        )),
        ("priest", package(
            &["bread", "healing_herbs", "prayer_book", "incense", "tallow_candles"],
            &[(Body, "wool_robe"), (Feet, "leather_sandals")],
            &[],
        )),
        ("fisher", package(
            &["dried_fish", "dried_fish", "fishing_net", "iron_knife", "woven_basket"],
            &[(Body, "linen_tunic"), (Head, "straw_hat")],
            &[],
        )),
        ("healer", package(
            &["healing_herbs", "healing_herbs", "clay_jug", "bone_needle", "linen_cloth", "herbal_salve"],
            &[(Body, "linen_robe"), (Feet, "leather_sandals")],
            &[],
        )),
        ("blacksmith", package(
            &["bread", "smithing_hammer", "iron_tongs", "iron_ingot", "iron_ingot", "waterskin"],
            &[(MainHand, "smithing_hammer"), (Body, "leather_apron"), (Feet, "leather_boots")],
            &[],
        )),
        ("noble", package(
            &["hard_cheese", "wine_flask", "silver_coins", "silver_coins", "letter_of_introduction"],
            &[(MainHand, CONTEXTUAL_SENTINEL), (Body, "silk_robe"), (Back, "wool_cloak"), (Feet, "leather_boots")],
            &["horse"],
        )),
        ("woodcutter", package(
            &["bread", "oak_log", "oak_log", "hemp_rope", "whetstone"],
            &[(MainHand, "felling_axe"), (Body, "wool_tunic"), (Feet, "leather_boots")],
            &[],
        )),
    ];

    PackageTable {
        packages: entries
            .into_iter()
            .map(|(name, package)| (name.to_string(), package))
            .collect(),
    }
}
