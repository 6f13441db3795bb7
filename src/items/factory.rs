//! Item instance creation
//!
//! Turns a template id plus era and culture into a concrete [`Item`].

use super::classify::Classifier;
use super::item::{next_item_id, Item};
use super::synthesis::synthesize_definition;
use crate::data::catalog::ItemCatalog;
use crate::data::context::{CulturalZone, HistoricalEra};
use crate::data::rules::{CultureRules, EraRules};

/// Dye words recognised as a leading `colour_` token on an id
pub const COLOR_PREFIXES: &[&str] = &[
    "red", "blue", "green", "yellow", "black", "white", "brown", "grey", "gray", "purple",
    "orange", "crimson", "scarlet", "indigo", "ochre", "saffron",
];

/// Split "red_wool_cloak" into ("red", "wool_cloak")
pub fn strip_color_prefix(base_id: &str) -> (Option<&'static str>, &str) {
    if let Some((head, rest)) = base_id.split_once('_') {
        if !rest.is_empty() {
            if let Some(color) = COLOR_PREFIXES.iter().find(|c| **c == head) {
                return (Some(*color), rest);
            }
        }
    }
    (None, base_id)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Creates item instances from the catalog, falling back to synthesis
pub struct ItemFactory<'a> {
    catalog: &'a dyn ItemCatalog,
    era_rules: &'a dyn EraRules,
    culture_rules: &'a dyn CultureRules,
    classifier: &'a dyn Classifier,
}

impl<'a> ItemFactory<'a> {
    pub fn new(
        catalog: &'a dyn ItemCatalog,
        era_rules: &'a dyn EraRules,
        culture_rules: &'a dyn CultureRules,
        classifier: &'a dyn Classifier,
    ) -> Self {
        Self {
            catalog,
            era_rules,
            culture_rules,
            classifier,
        }
    }

    /// Create a fresh instance of `base_id`.
    ///
    /// Returns `None` only when the (era-adjusted) item is culturally
    /// inappropriate for `culture`. Callers drop such items silently.
    pub fn create_item_instance(
        &self,
        base_id: &str,
        era: Option<HistoricalEra>,
        culture: Option<CulturalZone>,
    ) -> Option<Item> {
        let (color, cleaned) = strip_color_prefix(base_id);
        let mut resolved = cleaned.to_string();

        if let Some(era) = era {
            if !self.era_rules.is_item_available_in_era(&resolved, era) {
                match self.era_rules.get_era_appropriate_substitute(&resolved, era) {
                    Some(substitute) => {
                        log::debug!("{} not available in {:?}, using {}", resolved, era, substitute);
                        resolved = substitute;
                    }
                    None => log::debug!("{} not available in {:?} and has no substitute", resolved, era),
                }
            }
        }

        if let Some(culture) = culture {
            if !self.culture_rules.is_item_culturally_appropriate(&resolved, culture) {
                log::debug!("{} is not appropriate for {:?}, omitting", resolved, culture);
                return None;
            }
        }

        let mut item = match self.catalog.get_item_definition(&resolved) {
            Some(def) => Item::from_definition(next_item_id(), def),
            None => {
                let def = synthesize_definition(&resolved, self.classifier);
                Item::from_definition(next_item_id(), &def)
            }
        };

        if let Some(culture) = culture {
            item = self.culture_rules.apply_regional_material(item, culture);
        }

        if let Some(color) = color {
            let keeps_own_color = item.material.is_some_and(|m| m.is_color_bearing());
            if !keeps_own_color {
                item.name = format!("{} {}", capitalize(color), item.name);
            }
        }

        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog::{default_item_templates, ItemTable};
    use crate::data::rules::default_rules;
    use crate::items::classify::KeywordClassifier;
    use crate::items::item::{ItemCategory, Material};

    fn fixtures() -> (ItemTable, crate::data::rules::HistoricalRules) {
        (ItemTable::from(default_item_templates()), default_rules())
    }

    #[test]
    fn test_strip_color_prefix() {
        assert_eq!(strip_color_prefix("red_wool_cloak"), (Some("red"), "wool_cloak"));
        assert_eq!(strip_color_prefix("wool_cloak"), (None, "wool_cloak"));
        assert_eq!(strip_color_prefix("red"), (None, "red"));
        assert_eq!(strip_color_prefix("red_"), (None, "red_"));
    }

    #[test]
    fn test_catalog_item_is_pristine() {
        let (catalog, rules) = fixtures();
        let factory = ItemFactory::new(&catalog, &rules, &rules, &KeywordClassifier);
        let item = factory.create_item_instance("iron_sword", None, None).unwrap();

        assert_eq!(item.base_id, "iron_sword");
        assert_eq!(item.name, "Iron Sword");
        assert_eq!(item.quantity, 1);
        assert_eq!(item.condition, 100.0);
        assert_eq!(item.age, 0);
    }

    #[test]
    fn test_each_instance_gets_a_new_id() {
        let (catalog, rules) = fixtures();
        let factory = ItemFactory::new(&catalog, &rules, &rules, &KeywordClassifier);
        let a = factory.create_item_instance("bread", None, None).unwrap();
        let b = factory.create_item_instance("bread", None, None).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_era_substitution() {
        let (catalog, rules) = fixtures();
        let factory = ItemFactory::new(&catalog, &rules, &rules, &KeywordClassifier);
        let item = factory
            .create_item_instance("steel_sword", Some(HistoricalEra::Ancient), None)
            .unwrap();
        assert_eq!(item.base_id, "bronze_sword");
    }

    #[test]
    fn test_unavailable_without_substitute_keeps_original() {
        let (catalog, rules) = fixtures();
        let factory = ItemFactory::new(&catalog, &rules, &rules, &KeywordClassifier);
        let item = factory
            .create_item_instance("iron_sickle", Some(HistoricalEra::Prehistoric), None)
            .unwrap();
        assert_eq!(item.base_id, "iron_sickle");
    }

    #[test]
    fn test_cultural_mismatch_returns_none() {
        let (catalog, rules) = fixtures();
        let factory = ItemFactory::new(&catalog, &rules, &rules, &KeywordClassifier);
        assert!(factory
            .create_item_instance("iron_sword", None, Some(CulturalZone::Andean))
            .is_none());
    }

    #[test]
    fn test_unknown_id_is_synthesized() {
        let (catalog, rules) = fixtures();
        let factory = ItemFactory::new(&catalog, &rules, &rules, &KeywordClassifier);
        let item = factory.create_item_instance("barley_porridge", None, None).unwrap();
        assert_eq!(item.name, "Barley Porridge");
        assert_eq!(item.category, ItemCategory::Food);
        assert_eq!(item.sustenance, Some(20));
    }

    #[test]
    fn test_color_prefix_on_dyeable_material() {
        let (catalog, rules) = fixtures();
        let factory = ItemFactory::new(&catalog, &rules, &rules, &KeywordClassifier);
        let cloak = factory.create_item_instance("red_wool_cloak", None, None).unwrap();
        assert_eq!(cloak.base_id, "wool_cloak");
        assert_eq!(cloak.name, "Red Wool Cloak");
    }

    #[test]
    fn test_color_prefix_skipped_for_leather() {
        let (catalog, rules) = fixtures();
        let factory = ItemFactory::new(&catalog, &rules, &rules, &KeywordClassifier);
        let boots = factory.create_item_instance("black_leather_boots", None, None).unwrap();
        assert_eq!(boots.material, Some(Material::Leather));
        assert_eq!(boots.name, "Leather Boots");
    }

    #[test]
    fn test_regional_variant_applied() {
        let (catalog, rules) = fixtures();
        let factory = ItemFactory::new(&catalog, &rules, &rules, &KeywordClassifier);
        let knife = factory
            .create_item_instance("iron_knife", None, Some(CulturalZone::Mesoamerican))
            .unwrap();
        assert_eq!(knife.name, "Obsidian Knife");
        assert_eq!(knife.base_id, "iron_knife");
    }
}
