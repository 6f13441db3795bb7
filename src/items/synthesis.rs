//! Procedural item templates
//!
//! Builds an [`ItemDefinition`] for any id the catalog does not know.
//! Synthesis is total: every id yields a usable template.

use super::classify::Classifier;
use super::item::{ItemCategory, ItemDefinition, Material, Rarity};

/// Per-category baseline stats for synthesized templates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryDefaults {
    pub value: u32,
    pub weight: f32,
    pub crafting_value: u32,
    pub attack: Option<i32>,
    pub sustenance: Option<u32>,
    pub wieldable: bool,
    pub throwable: bool,
}

pub fn category_defaults(category: ItemCategory) -> CategoryDefaults {
    let base = CategoryDefaults {
        value: 1,
        weight: 1.0,
        crafting_value: 0,
        attack: None,
        sustenance: None,
        wieldable: false,
        throwable: false,
    };
    match category {
        ItemCategory::Food => CategoryDefaults {
            value: 5,
            weight: 0.5,
            crafting_value: 1,
            sustenance: Some(20),
            ..base
        },
        ItemCategory::Material => CategoryDefaults { value: 3, weight: 1.0, crafting_value: 10, ..base },
        ItemCategory::Tool => CategoryDefaults {
            value: 15,
            weight: 2.0,
            crafting_value: 5,
            attack: Some(2),
            wieldable: true,
            ..base
        },
        ItemCategory::Weapon => CategoryDefaults {
            value: 20,
            weight: 1.5,
            crafting_value: 3,
            attack: Some(4),
            wieldable: true,
            throwable: true,
            ..base
        },
        ItemCategory::Apparel => CategoryDefaults { value: 10, weight: 1.0, crafting_value: 4, ..base },
        ItemCategory::Vessel => CategoryDefaults { value: 8, weight: 1.5, crafting_value: 2, ..base },
        ItemCategory::Special => CategoryDefaults { value: 25, weight: 0.2, ..base },
        ItemCategory::Document => CategoryDefaults { value: 12, weight: 0.1, ..base },
        ItemCategory::Consumable => CategoryDefaults {
            value: 6,
            weight: 0.3,
            crafting_value: 1,
            sustenance: Some(5),
            ..base
        },
        ItemCategory::Container => CategoryDefaults { value: 7, weight: 1.0, crafting_value: 2, ..base },
    }
}

/// "red_wool_cloak" -> "Red Wool Cloak"
pub fn display_name_from_id(base_id: &str) -> String {
    base_id
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn describe(category: ItemCategory, name: &str) -> String {
    let lower = name.to_lowercase();
    match category {
        ItemCategory::Food => format!("A portion of {}, fit to eat on the road.", lower),
        ItemCategory::Material => format!("A quantity of {}, useful for crafting.", lower),
        ItemCategory::Tool => format!("A {} for everyday work.", lower),
        ItemCategory::Weapon => format!("A {} for hunting or self-defense.", lower),
        ItemCategory::Apparel => format!("A {} worn against the elements.", lower),
        ItemCategory::Vessel => format!("A {} for carrying liquids.", lower),
        ItemCategory::Special => format!("A {} of uncertain significance.", lower),
        ItemCategory::Document => format!("A {}, carefully kept.", lower),
        ItemCategory::Consumable => format!("Some {}, used up with use.", lower),
        ItemCategory::Container => format!("A {} for holding smaller things.", lower),
    }
}

/// Fixed template for any `*_log` id
fn wood_log(base_id: &str, classifier: &dyn Classifier) -> ItemDefinition {
    let name = display_name_from_id(base_id);
    let material = classifier.material_from_name(&name).unwrap_or(Material::Wood);
    let description = format!("A rough-cut {} ready for splitting.", name.to_lowercase());
    ItemDefinition {
        description,
        weight: 10.0,
        value: 2,
        stackable: true,
        material: Some(material),
        emoji: "🪵".to_string(),
        crafting_value: 15,
        ..ItemDefinition::new(base_id, name, ItemCategory::Material)
    }
}

/// Build a template for an id with no catalog entry
pub fn synthesize_definition(base_id: &str, classifier: &dyn Classifier) -> ItemDefinition {
    if base_id.ends_with("_log") {
        return wood_log(base_id, classifier);
    }

    let name = display_name_from_id(base_id);
    let category = classifier.category_from_name(&name);
    let material = classifier.material_from_name(&name);
    let equipment_slot = classifier.equipment_slot(&name, category);
    let emoji = classifier.emoji_from_name(&name, category);
    let defaults = category_defaults(category);

    ItemDefinition {
        base_id: base_id.to_string(),
        description: describe(category, &name),
        category,
        weight: defaults.weight,
        value: defaults.value,
        stackable: category.stackable_by_default(),
        wearable: category == ItemCategory::Apparel && equipment_slot.is_some(),
        equipment_slot,
        material,
        rarity: Rarity::Common,
        emoji,
        attack: defaults.attack,
        defense: None,
        sustenance: defaults.sustenance,
        wieldable: defaults.wieldable,
        throwable: defaults.throwable,
        crafting_value: defaults.crafting_value,
        name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::classify::KeywordClassifier;
    use crate::items::item::EquipSlot;

    #[test]
    fn test_display_name_from_id() {
        assert_eq!(display_name_from_id("red_wool_cloak"), "Red Wool Cloak");
        assert_eq!(display_name_from_id("bread"), "Bread");
        assert_eq!(display_name_from_id("double__underscore"), "Double Underscore");
    }

    #[test]
    fn test_food_defaults() {
        let def = synthesize_definition("rye_bread", &KeywordClassifier);
        assert_eq!(def.category, ItemCategory::Food);
        assert_eq!(def.value, 5);
        assert_eq!(def.weight, 0.5);
        assert_eq!(def.sustenance, Some(20));
        assert!(def.stackable);
        assert_eq!(def.rarity, Rarity::Common);
    }

    #[test]
    fn test_weapon_defaults() {
        let def = synthesize_definition("flint_spear", &KeywordClassifier);
        assert_eq!(def.category, ItemCategory::Weapon);
        assert_eq!(def.value, 20);
        assert_eq!(def.weight, 1.5);
        assert_eq!(def.attack, Some(4));
        assert!(def.wieldable && def.throwable);
        assert!(!def.stackable);
        assert_eq!(def.material, Some(Material::Flint));
        assert_eq!(def.equipment_slot, Some(EquipSlot::MainHand));
    }

    #[test]
    fn test_apparel_is_wearable_and_unstackable() {
        let def = synthesize_definition("linen_tunic", &KeywordClassifier);
        assert_eq!(def.category, ItemCategory::Apparel);
        assert!(def.wearable);
        assert!(!def.stackable);
        assert_eq!(def.equipment_slot, Some(EquipSlot::Body));
    }

    #[test]
    fn test_log_special_case() {
        let def = synthesize_definition("oak_log", &KeywordClassifier);
        assert_eq!(def.name, "Oak Log");
        assert_eq!(def.category, ItemCategory::Material);
        assert_eq!(def.weight, 10.0);
        assert_eq!(def.material, Some(Material::Oak));
        assert!(def.stackable);
    }

    #[test]
    fn test_description_uses_category_template() {
        let def = synthesize_definition("clay_jug", &KeywordClassifier);
        assert_eq!(def.description, "A clay jug for carrying liquids.");
    }
}
