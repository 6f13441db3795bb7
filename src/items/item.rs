//! Item definitions
//!
//! Core item types: categories, materials, slots, templates and instances.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::data::context::CulturalZone;

/// Unique item instance ID
pub type ItemId = u64;

/// Counter for generating unique item IDs
static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

/// Get next unique item ID
pub fn next_item_id() -> ItemId {
    NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed)
}

/// Main item categories
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
    Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum ItemCategory {
    Food,
    Material,
    Tool,
    Weapon,
    Apparel,
    Vessel,
    Special,
    Document,
    Consumable,
    Container,
}

impl ItemCategory {
    /// Whether items of this category may share an inventory slot at all
    pub fn can_stack(&self) -> bool {
        matches!(
            self,
            ItemCategory::Food | ItemCategory::Material | ItemCategory::Tool | ItemCategory::Consumable
        )
    }

    /// Default for the `stackable` flag on synthesized templates
    pub fn stackable_by_default(&self) -> bool {
        !matches!(self, ItemCategory::Apparel | ItemCategory::Tool | ItemCategory::Weapon)
    }
}

/// Item rarity tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// Workmanship grade carried by some instances (mostly materials)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemQuality {
    Crude,
    Standard,
    Fine,
    Masterwork,
}

/// What an item is made of
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Material {
    // Hides and fibres that carry their own colour
    Leather,
    Hide,
    Fur,
    Straw,
    // Metals
    Iron,
    Steel,
    Bronze,
    Copper,
    Silver,
    Gold,
    Tin,
    // Woods
    Wood,
    Oak,
    Pine,
    Cedar,
    Yew,
    Ash,
    // Textiles
    Wool,
    Linen,
    Cotton,
    Silk,
    Felt,
    Cloth,
    // Everything else
    Bamboo,
    Stone,
    Flint,
    Obsidian,
    Bone,
    Horn,
    Shell,
    Clay,
    Glass,
    Jade,
    Paper,
    Parchment,
    Reed,
    Feather,
    Beeswax,
    Herb,
    Grain,
}

impl Material {
    pub fn is_metal(&self) -> bool {
        matches!(
            self,
            Material::Iron | Material::Steel | Material::Bronze | Material::Copper
                | Material::Silver | Material::Gold | Material::Tin
        )
    }

    pub fn is_wood(&self) -> bool {
        matches!(
            self,
            Material::Wood | Material::Oak | Material::Pine | Material::Cedar | Material::Yew | Material::Ash
        )
    }

    /// Materials whose natural colour makes a dye prefix meaningless
    pub fn is_color_bearing(&self) -> bool {
        matches!(self, Material::Leather | Material::Hide | Material::Fur | Material::Straw)
            || self.is_metal()
            || self.is_wood()
    }
}

/// Equipment slot for wearable items
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
    Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum EquipSlot {
    MainHand,
    OffHand,
    Head,
    Body,
    Legs,
    Feet,
    Hands,
    Back,
    Waist,
    Neck,
    Ring,
    Accessory,
}

/// Immutable item template shared by every instance of a `base_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub base_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: ItemCategory,
    /// Physical weight per unit
    pub weight: f32,
    pub value: u32,
    pub stackable: bool,
    #[serde(default)]
    pub wearable: bool,
    #[serde(default)]
    pub equipment_slot: Option<EquipSlot>,
    #[serde(default)]
    pub material: Option<Material>,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub attack: Option<i32>,
    #[serde(default)]
    pub defense: Option<i32>,
    #[serde(default)]
    pub sustenance: Option<u32>,
    #[serde(default)]
    pub wieldable: bool,
    #[serde(default)]
    pub throwable: bool,
    #[serde(default)]
    pub crafting_value: u32,
}

impl ItemDefinition {
    /// Create a bare template; remaining fields keep their zero defaults
    pub fn new(base_id: impl Into<String>, name: impl Into<String>, category: ItemCategory) -> Self {
        Self {
            base_id: base_id.into(),
            name: name.into(),
            description: String::new(),
            category,
            weight: 1.0,
            value: 1,
            stackable: category.stackable_by_default(),
            wearable: false,
            equipment_slot: None,
            material: None,
            rarity: Rarity::Common,
            emoji: String::new(),
            attack: None,
            defense: None,
            sustenance: None,
            wieldable: false,
            throwable: false,
            crafting_value: 0,
        }
    }
}

/// A concrete item owned by a character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique instance ID
    pub id: ItemId,
    /// Template this instance was made from, never changes
    pub base_id: String,
    pub name: String,
    pub description: String,
    pub category: ItemCategory,
    pub weight: f32,
    pub value: u32,
    pub stackable: bool,
    pub wearable: bool,
    pub equipment_slot: Option<EquipSlot>,
    pub material: Option<Material>,
    pub rarity: Rarity,
    pub emoji: String,
    pub attack: Option<i32>,
    pub defense: Option<i32>,
    pub sustenance: Option<u32>,
    pub wieldable: bool,
    pub throwable: bool,
    pub crafting_value: u32,

    /// Units held in this slot, at least 1
    pub quantity: u32,
    /// 100 = pristine, 0 = broken
    pub condition: f32,
    /// Days since creation
    pub age: u32,
    #[serde(default)]
    pub quality: Option<ItemQuality>,
    /// Zone whose regional variant was applied, if any
    #[serde(default)]
    pub cultural_variant: Option<CulturalZone>,
}

impl Item {
    /// Instantiate a fresh, pristine copy of a template
    pub fn from_definition(id: ItemId, def: &ItemDefinition) -> Self {
        Self {
            id,
            base_id: def.base_id.clone(),
            name: def.name.clone(),
            description: def.description.clone(),
            category: def.category,
            weight: def.weight,
            value: def.value,
            stackable: def.stackable,
            wearable: def.wearable,
            equipment_slot: def.equipment_slot,
            material: def.material,
            rarity: def.rarity,
            emoji: def.emoji.clone(),
            attack: def.attack,
            defense: def.defense,
            sustenance: def.sustenance,
            wieldable: def.wieldable,
            throwable: def.throwable,
            crafting_value: def.crafting_value,
            quantity: 1,
            condition: 100.0,
            age: 0,
            quality: None,
            cultural_variant: None,
        }
    }

    /// Weight of the whole stack
    pub fn stack_weight(&self) -> f32 {
        self.weight * self.quantity as f32
    }

    pub fn is_broken(&self) -> bool {
        self.condition <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_ids_are_unique() {
        let a = next_item_id();
        let b = next_item_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_instance_starts_pristine() {
        let mut def = ItemDefinition::new("iron_knife", "Iron Knife", ItemCategory::Tool);
        def.material = Some(Material::Iron);
        let item = Item::from_definition(7, &def);

        assert_eq!(item.base_id, "iron_knife");
        assert_eq!(item.quantity, 1);
        assert_eq!(item.condition, 100.0);
        assert_eq!(item.age, 0);
        assert!(!item.is_broken());
        assert!(!item.stackable);
    }

    #[test]
    fn test_color_bearing_materials() {
        assert!(Material::Leather.is_color_bearing());
        assert!(Material::Bronze.is_color_bearing());
        assert!(Material::Cedar.is_color_bearing());
        assert!(!Material::Wool.is_color_bearing());
        assert!(!Material::Linen.is_color_bearing());
    }

    #[test]
    fn test_category_parses_case_insensitively() {
        assert_eq!("food".parse::<ItemCategory>().ok(), Some(ItemCategory::Food));
        assert_eq!("Container".parse::<ItemCategory>().ok(), Some(ItemCategory::Container));
    }
}
