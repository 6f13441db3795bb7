//! Historical and cultural item rules
//!
//! Which items exist in which era, which cultures would plausibly own them,
//! and how regional materials change an item's make-up.

use serde::{Deserialize, Serialize};

use super::context::{CulturalZone, HistoricalEra};
use crate::items::{ItemCategory, Item, Material};

/// Era availability of item templates
pub trait EraRules {
    fn is_item_available_in_era(&self, base_id: &str, era: HistoricalEra) -> bool;
    fn get_era_appropriate_substitute(&self, base_id: &str, era: HistoricalEra) -> Option<String>;
}

/// Cultural plausibility and regional variation of item templates
pub trait CultureRules {
    fn is_item_culturally_appropriate(&self, base_id: &str, culture: CulturalZone) -> bool;
    fn apply_regional_material(&self, item: Item, culture: CulturalZone) -> Item;
}

/// When an item template exists, and what replaces it outside that window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EraWindow {
    pub base_id: String,
    #[serde(default)]
    pub earliest: Option<HistoricalEra>,
    #[serde(default)]
    pub latest: Option<HistoricalEra>,
    /// Used when the requested era is before `earliest`
    #[serde(default)]
    pub substitute_before: Option<String>,
    /// Used when the requested era is after `latest`
    #[serde(default)]
    pub substitute_after: Option<String>,
}

impl EraWindow {
    fn contains(&self, era: HistoricalEra) -> bool {
        self.earliest.map_or(true, |e| era >= e) && self.latest.map_or(true, |l| era <= l)
    }
}

/// Zones an item template is restricted to or forbidden in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CultureRestriction {
    pub base_id: String,
    /// Empty means "anywhere not excluded"
    #[serde(default)]
    pub only_in: Vec<CulturalZone>,
    #[serde(default)]
    pub never_in: Vec<CulturalZone>,
}

/// Material swap applied to items made in a given zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalMaterial {
    pub zone: CulturalZone,
    pub from: Material,
    pub to: Material,
    /// Limit the swap to these categories; empty means any
    #[serde(default)]
    pub categories: Vec<ItemCategory>,
    #[serde(default = "one")]
    pub value_multiplier: f32,
    #[serde(default = "one")]
    pub weight_multiplier: f32,
}

fn one() -> f32 {
    1.0
}

/// Table-driven implementation of both rule traits
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoricalRules {
    #[serde(default)]
    pub era_windows: Vec<EraWindow>,
    #[serde(default)]
    pub culture_restrictions: Vec<CultureRestriction>,
    #[serde(default)]
    pub regional_materials: Vec<RegionalMaterial>,
}

impl HistoricalRules {
    fn window(&self, base_id: &str) -> Option<&EraWindow> {
        self.era_windows.iter().find(|w| w.base_id == base_id)
    }
}

impl EraRules for HistoricalRules {
    fn is_item_available_in_era(&self, base_id: &str, era: HistoricalEra) -> bool {
        self.window(base_id).map_or(true, |w| w.contains(era))
    }

    fn get_era_appropriate_substitute(&self, base_id: &str, era: HistoricalEra) -> Option<String> {
        let window = self.window(base_id)?;
        if window.earliest.is_some_and(|e| era < e) {
            window.substitute_before.clone()
        } else if window.latest.is_some_and(|l| era > l) {
            window.substitute_after.clone()
        } else {
            None
        }
    }
}

impl CultureRules for HistoricalRules {
    fn is_item_culturally_appropriate(&self, base_id: &str, culture: CulturalZone) -> bool {
        self.culture_restrictions
            .iter()
            .filter(|r| r.base_id == base_id)
            .all(|r| {
                (r.only_in.is_empty() || r.only_in.contains(&culture)) && !r.never_in.contains(&culture)
            })
    }

    fn apply_regional_material(&self, mut item: Item, culture: CulturalZone) -> Item {
        let Some(current) = item.material else {
            return item;
        };
        let swap = self.regional_materials.iter().find(|r| {
            r.zone == culture
                && r.from == current
                && (r.categories.is_empty() || r.categories.contains(&item.category))
        });
        if let Some(swap) = swap {
            let old_word = current.to_string();
            if item.name.contains(&old_word) {
                item.name = item.name.replacen(&old_word, &swap.to.to_string(), 1);
            }
            item.material = Some(swap.to);
            item.value = (item.value as f32 * swap.value_multiplier).round() as u32;
            item.weight *= swap.weight_multiplier;
            item.cultural_variant = Some(culture);
        }
        item
    }
}

fn window(
    base_id: &str,
    earliest: Option<HistoricalEra>,
    latest: Option<HistoricalEra>,
    before: Option<&str>,
    after: Option<&str>,
) -> EraWindow {
    EraWindow {
        base_id: base_id.to_string(),
        earliest,
        latest,
        substitute_before: before.map(String::from),
        substitute_after: after.map(String::from),
    }
}

fn restrict(base_id: &str, only_in: &[CulturalZone], never_in: &[CulturalZone]) -> CultureRestriction {
    CultureRestriction {
        base_id: base_id.to_string(),
        only_in: only_in.to_vec(),
        never_in: never_in.to_vec(),
    }
}

fn swap(zone: CulturalZone, from: Material, to: Material, categories: &[ItemCategory], value: f32) -> RegionalMaterial {
    RegionalMaterial {
        zone,
        from,
        to,
        categories: categories.to_vec(),
        value_multiplier: value,
        weight_multiplier: 1.0,
    }
}

pub fn default_rules() -> HistoricalRules {
    use CulturalZone::*;
    use HistoricalEra::*;

    let americas = [NorthAmerican, Mesoamerican, Andean, Amazonian];
    let blades = [ItemCategory::Weapon, ItemCategory::Tool];

    HistoricalRules {
        era_windows: vec![
            window("steel_sword", Some(Classical), None, Some("bronze_sword"), None),
            window("iron_sword", Some(Classical), None, Some("bronze_sword"), None),
            window("iron_spear", Some(Ancient), None, Some("flint_spear"), None),
            window("iron_knife", Some(Ancient), None, Some("flint_knife"), None),
            window("iron_sickle", Some(Ancient), None, None, None),
            window("steel_dao", Some(EarlyMedieval), None, Some("iron_sword"), None),
            window("iron_scimitar", Some(HighMedieval), None, Some("iron_sword"), None),
            window("bronze_sword", Some(Ancient), Some(Classical), Some("flint_spear"), Some("iron_sword")),
            window("bronze_spear", Some(Ancient), Some(Classical), Some("flint_spear"), Some("iron_spear")),
            window("silver_coins", Some(Ancient), None, Some("cowrie_shells"), None),
            window("copper_coins", Some(Ancient), None, Some("cowrie_shells"), None),
            window("letter_of_introduction", Some(Ancient), None, None, None),
            window("reed_quill", Some(Ancient), None, None, None),
        ],
        culture_restrictions: vec![
            // No iron-working or Old World coinage in the pre-contact Americas
            restrict("iron_sword", &[], &americas),
            restrict("steel_sword", &[], &americas),
            restrict("iron_spear", &[], &americas),
            restrict("iron_scimitar", &[], &americas),
            restrict("bronze_sword", &[], &americas),
            restrict("copper_coins", &[], &americas),
            restrict("silver_coins", &[], &americas),
            restrict("hard_cheese", &[], &americas),
            restrict("bread", &[], &[Mesoamerican, Andean, Amazonian]),
            restrict("cacao_beans", &[Mesoamerican], &[]),
            restrict("maize_cakes", &americas, &[]),
            restrict("obsidian_club", &[Mesoamerican], &[]),
            restrict("steel_dao", &[EastAsian, SoutheastAsian], &[]),
            restrict("iron_scimitar", &[MiddleEastern, NorthAfrican, SouthAsian, Steppe], &[]),
            restrict("rice_balls", &[EastAsian, SoutheastAsian], &[]),
            restrict("dates", &[MiddleEastern, NorthAfrican, Mediterranean, SouthAsian], &[]),
            restrict("wool_trousers", &[], &[Mesoamerican, Amazonian, Oceanian]),
        ],
        regional_materials: vec![
            swap(Mesoamerican, Material::Iron, Material::Obsidian, &blades, 1.0),
            swap(Mesoamerican, Material::Flint, Material::Obsidian, &blades, 1.2),
            swap(Andean, Material::Iron, Material::Bronze, &blades, 1.0),
            swap(Andean, Material::Wool, Material::Felt, &[], 1.0),
            swap(EastAsian, Material::Linen, Material::Silk, &[ItemCategory::Apparel], 2.0),
            swap(EastAsian, Material::Wood, Material::Bamboo, &[], 0.8),
            swap(SoutheastAsian, Material::Wood, Material::Bamboo, &[], 0.8),
            swap(SouthAsian, Material::Linen, Material::Cotton, &[], 1.0),
            swap(SubSaharanAfrican, Material::Linen, Material::Cotton, &[], 1.0),
            swap(Steppe, Material::Wool, Material::Felt, &[], 1.0),
            swap(Steppe, Material::Linen, Material::Felt, &[ItemCategory::Apparel], 1.0),
            swap(Oceanian, Material::Leather, Material::Reed, &[ItemCategory::Apparel], 0.5),
        ],
    }
}
