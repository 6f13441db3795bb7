//! Authored item templates
//!
//! The catalog resolves a `base_id` to its template. Ids it does not know are
//! synthesized by the item factory instead.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::items::{EquipSlot, ItemCategory, ItemDefinition, Material, Rarity};

/// Resolves template ids to definitions
pub trait ItemCatalog {
    fn get_item_definition(&self, base_id: &str) -> Option<&ItemDefinition>;
}

/// Serializable list form of the catalog (what lives in `items.ron`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemTemplates {
    pub templates: Vec<ItemDefinition>,
}

/// Hash-indexed catalog
#[derive(Debug, Clone, Default)]
pub struct ItemTable {
    by_id: HashMap<String, ItemDefinition>,
}

impl ItemTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, def: ItemDefinition) {
        self.by_id.insert(def.base_id.clone(), def);
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Back to list form, sorted by id for stable output
    pub fn to_templates(&self) -> ItemTemplates {
        let mut templates: Vec<ItemDefinition> = self.by_id.values().cloned().collect();
        templates.sort_by(|a, b| a.base_id.cmp(&b.base_id));
        ItemTemplates { templates }
    }
}

impl From<ItemTemplates> for ItemTable {
    fn from(list: ItemTemplates) -> Self {
        let mut table = ItemTable::new();
        for def in list.templates {
            table.insert(def);
        }
        table
    }
}

impl ItemCatalog for ItemTable {
    fn get_item_definition(&self, base_id: &str) -> Option<&ItemDefinition> {
        self.by_id.get(base_id)
    }
}

fn template(
    base_id: &str,
    name: &str,
    category: ItemCategory,
    material: Option<Material>,
    weight: f32,
    value: u32,
) -> ItemDefinition {
    let mut def = ItemDefinition::new(base_id, name, category);
    def.material = material;
    def.weight = weight;
    def.value = value;
    def
}

fn weapon(base_id: &str, name: &str, material: Material, weight: f32, value: u32, attack: i32) -> ItemDefinition {
    let mut def = template(base_id, name, ItemCategory::Weapon, Some(material), weight, value);
    def.equipment_slot = Some(EquipSlot::MainHand);
    def.attack = Some(attack);
    def.wieldable = true;
    def.emoji = "⚔".to_string();
    def
}

fn apparel(base_id: &str, name: &str, material: Material, slot: EquipSlot, weight: f32, value: u32) -> ItemDefinition {
    let mut def = template(base_id, name, ItemCategory::Apparel, Some(material), weight, value);
    def.equipment_slot = Some(slot);
    def.wearable = true;
    def.defense = Some(1);
    def.emoji = "👕".to_string();
    def
}

fn food(base_id: &str, name: &str, weight: f32, value: u32, sustenance: u32) -> ItemDefinition {
    let mut def = template(base_id, name, ItemCategory::Food, None, weight, value);
    def.sustenance = Some(sustenance);
    def.emoji = "🍲".to_string();
    def
}

/// Built-in templates for the most common starting items
pub fn default_item_templates() -> ItemTemplates {
    let mut templates = vec![
        // Weapons
        weapon("iron_sword", "Iron Sword", Material::Iron, 2.5, 60, 8),
        weapon("steel_sword", "Steel Sword", Material::Steel, 2.2, 120, 10),
        weapon("bronze_sword", "Bronze Sword", Material::Bronze, 2.8, 50, 7),
        weapon("iron_spear", "Iron Spear", Material::Iron, 2.0, 25, 6),
        weapon("bronze_spear", "Bronze Spear", Material::Bronze, 2.2, 20, 5),
        weapon("flint_spear", "Flint Spear", Material::Flint, 1.8, 8, 4),
        weapon("obsidian_club", "Obsidian Club", Material::Obsidian, 2.0, 30, 7),
        weapon("yew_bow", "Yew Bow", Material::Yew, 1.0, 40, 6),
        weapon("wooden_club", "Wooden Club", Material::Wood, 1.5, 3, 3),
        weapon("steel_dao", "Steel Dao", Material::Steel, 1.8, 90, 8),
        weapon("iron_scimitar", "Iron Scimitar", Material::Iron, 2.0, 70, 8),
        // Tools
        {
            let mut def = template("iron_knife", "Iron Knife", ItemCategory::Tool, Some(Material::Iron), 0.4, 12);
            def.attack = Some(2);
            def.wieldable = true;
            def.emoji = "🔪".to_string();
            def
        },
        {
            let mut def = template("flint_knife", "Flint Knife", ItemCategory::Tool, Some(Material::Flint), 0.3, 4);
            def.attack = Some(1);
            def.wieldable = true;
            def.emoji = "🔪".to_string();
            def
        },
        template("iron_sickle", "Iron Sickle", ItemCategory::Tool, Some(Material::Iron), 0.8, 10),
        template("bone_needle", "Bone Needle", ItemCategory::Tool, Some(Material::Bone), 0.05, 2),
        template("reed_quill", "Reed Quill", ItemCategory::Tool, Some(Material::Reed), 0.05, 3),
        template("shepherds_crook", "Shepherd's Crook", ItemCategory::Tool, Some(Material::Wood), 1.5, 4),
        // Apparel
        apparel("wool_cloak", "Wool Cloak", Material::Wool, EquipSlot::Back, 2.0, 15),
        apparel("linen_tunic", "Linen Tunic", Material::Linen, EquipSlot::Body, 0.8, 8),
        apparel("cotton_tunic", "Cotton Tunic", Material::Cotton, EquipSlot::Body, 0.7, 8),
        apparel("silk_robe", "Silk Robe", Material::Silk, EquipSlot::Body, 0.6, 80),
        apparel("leather_boots", "Leather Boots", Material::Leather, EquipSlot::Feet, 1.2, 14),
        apparel("leather_sandals", "Leather Sandals", Material::Leather, EquipSlot::Feet, 0.5, 6),
        apparel("straw_hat", "Straw Hat", Material::Straw, EquipSlot::Head, 0.2, 2),
        apparel("leather_belt", "Leather Belt", Material::Leather, EquipSlot::Waist, 0.3, 4),
        apparel("wool_trousers", "Wool Trousers", Material::Wool, EquipSlot::Legs, 0.9, 7),
        // Food
        food("bread", "Bread", 0.5, 2, 25),
        food("flatbread", "Flatbread", 0.3, 1, 20),
        food("hard_cheese", "Hard Cheese", 0.5, 4, 30),
        food("dried_fish", "Dried Fish", 0.3, 3, 25),
        food("maize_cakes", "Maize Cakes", 0.4, 1, 22),
        food("rice_balls", "Rice Balls", 0.3, 2, 22),
        food("dates", "Dates", 0.2, 3, 15),
        food("jerky", "Jerky", 0.2, 4, 30),
        // Vessels & containers
        template("waterskin", "Waterskin", ItemCategory::Vessel, Some(Material::Leather), 1.0, 5),
        template("clay_jug", "Clay Jug", ItemCategory::Vessel, Some(Material::Clay), 1.5, 3),
        template("gourd_canteen", "Gourd Canteen", ItemCategory::Vessel, None, 0.6, 2),
        template("leather_pouch", "Leather Pouch", ItemCategory::Container, Some(Material::Leather), 0.2, 3),
        template("woven_basket", "Woven Basket", ItemCategory::Container, Some(Material::Reed), 0.8, 2),
        // Materials
        template("linen_cloth", "Linen Cloth", ItemCategory::Material, Some(Material::Linen), 0.5, 4),
        template("hemp_rope", "Hemp Rope", ItemCategory::Material, None, 1.0, 3),
        template("wool_yarn", "Wool Yarn", ItemCategory::Material, Some(Material::Wool), 0.3, 2),
        // Consumables
        template("healing_herbs", "Healing Herbs", ItemCategory::Consumable, Some(Material::Herb), 0.1, 6),
        template("tallow_candles", "Tallow Candles", ItemCategory::Consumable, None, 0.2, 2),
        // Documents & specials
        template("letter_of_introduction", "Letter of Introduction", ItemCategory::Document, Some(Material::Parchment), 0.05, 10),
        template("copper_coins", "Copper Coins", ItemCategory::Special, Some(Material::Copper), 0.05, 1),
        template("silver_coins", "Silver Coins", ItemCategory::Special, Some(Material::Silver), 0.05, 10),
        template("cacao_beans", "Cacao Beans", ItemCategory::Special, None, 0.05, 2),
    ];

    for def in &mut templates {
        if def.category == ItemCategory::Material {
            def.crafting_value = 10;
        }
        if def.rarity == Rarity::Common && def.value >= 100 {
            def.rarity = Rarity::Uncommon;
        }
    }

    ItemTemplates { templates }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_lookup() {
        let table = ItemTable::from(default_item_templates());
        let sword = table.get_item_definition("iron_sword").unwrap();
        assert_eq!(sword.category, ItemCategory::Weapon);
        assert_eq!(sword.attack, Some(8));
        assert!(table.get_item_definition("no_such_thing").is_none());
    }

    #[test]
    fn test_templates_round_trip_through_table() {
        let templates = default_item_templates();
        let count = templates.templates.len();
        let table = ItemTable::from(templates);
        assert_eq!(table.len(), count);
        assert_eq!(table.to_templates().templates.len(), count);
    }
}
