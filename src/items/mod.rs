//! Item system

pub mod item;
pub mod classify;
pub mod synthesis;
pub mod factory;
pub mod inventory;
pub mod equipment;
pub mod encumbrance;
pub mod degradation;
pub mod selection;

pub use item::{Item, ItemId, ItemDefinition, ItemCategory, ItemQuality, Material, Rarity, EquipSlot, next_item_id};
pub use classify::{Classifier, KeywordClassifier};
pub use synthesis::{synthesize_definition, display_name_from_id, category_defaults};
pub use factory::ItemFactory;
pub use inventory::{can_items_stack, add_item_to_inventory, remove_item_from_inventory, Removal};
pub use equipment::Equipment;
pub use encumbrance::{calculate_encumbrance, EncumbranceReport};
pub use degradation::{degrade_item, degrade_in_inventory, age_items, base_degradation_rate};
pub use selection::{select_weighted, select_random_accessory, Weighted};
