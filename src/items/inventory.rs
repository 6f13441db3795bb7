//! Inventory stacking
//!
//! An inventory is an ordered list of item stacks. Every operation here
//! returns a new list and leaves its input untouched.

use serde::{Deserialize, Serialize};

use super::item::{Item, ItemCategory, ItemId};

/// Whether two instances may share one inventory slot
pub fn can_items_stack(a: &Item, b: &Item) -> bool {
    if !a.stackable || !b.stackable || a.base_id != b.base_id {
        return false;
    }

    match a.category {
        ItemCategory::Food => (a.condition - b.condition).abs() <= 20.0 && a.age.abs_diff(b.age) <= 2,
        ItemCategory::Material => a.material == b.material && a.quality == b.quality,
        ItemCategory::Tool => (a.condition - b.condition).abs() <= 30.0,
        ItemCategory::Consumable => (a.condition - b.condition).abs() <= 10.0,
        ItemCategory::Weapon
        | ItemCategory::Apparel
        | ItemCategory::Document
        | ItemCategory::Special
        | ItemCategory::Vessel
        | ItemCategory::Container => false,
    }
}

/// Merge `item` into the first compatible stack, or append it
pub fn add_item_to_inventory(inventory: &[Item], item: Item) -> Vec<Item> {
    let mut result = inventory.to_vec();
    match result.iter().position(|existing| can_items_stack(existing, &item)) {
        Some(index) => {
            let mut merged = result[index].clone();
            merged.quantity = merged.quantity.saturating_add(item.quantity);
            result[index] = merged;
        }
        None => result.push(item),
    }
    result
}

/// Outcome of a removal by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Removal {
    pub inventory: Vec<Item>,
    /// Stacks that were removed entirely; partially reduced stacks are not listed
    pub removed_ids: Vec<ItemId>,
    /// Units that could not be removed because not enough were held
    pub shortfall: u32,
}

/// Remove `quantity` units of items named `name`, newest stacks first
pub fn remove_item_from_inventory(inventory: &[Item], name: &str, quantity: u32) -> Removal {
    let mut result = inventory.to_vec();
    let mut remaining = quantity;
    let mut removed_ids = Vec::new();
    let wanted = name.to_lowercase();

    for index in (0..result.len()).rev() {
        if remaining == 0 {
            break;
        }
        if result[index].name.to_lowercase() != wanted {
            continue;
        }
        if result[index].quantity <= remaining {
            remaining -= result[index].quantity;
            removed_ids.push(result[index].id);
        } else {
            result[index].quantity -= remaining;
            remaining = 0;
        }
    }

    result.retain(|item| !removed_ids.contains(&item.id));

    Removal {
        inventory: result,
        removed_ids,
        shortfall: remaining,
    }
}

/// Stacks whose name matches case-insensitively
pub fn find_by_name<'a>(inventory: &'a [Item], name: &str) -> Vec<&'a Item> {
    let wanted = name.to_lowercase();
    inventory
        .iter()
        .filter(|item| item.name.to_lowercase() == wanted)
        .collect()
}

/// Units held across every stack with this name
pub fn total_quantity(inventory: &[Item], name: &str) -> u32 {
    find_by_name(inventory, name).iter().map(|item| item.quantity).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::item::{next_item_id, ItemDefinition, ItemQuality, Material};

    fn make_item(base_id: &str, name: &str, category: ItemCategory) -> Item {
        let mut def = ItemDefinition::new(base_id, name, category);
        def.stackable = true;
        Item::from_definition(next_item_id(), &def)
    }

    fn cloth(quantity: u32) -> Item {
        let mut item = make_item("linen_cloth", "Linen Cloth", ItemCategory::Material);
        item.material = Some(Material::Linen);
        item.quality = Some(ItemQuality::Standard);
        item.quantity = quantity;
        item
    }

    #[test]
    fn test_materials_merge() {
        let inv = add_item_to_inventory(&[], cloth(2));
        let inv = add_item_to_inventory(&inv, cloth(3));
        assert_eq!(inv.len(), 1);
        assert_eq!(inv[0].quantity, 5);
    }

    #[test]
    fn test_materials_with_different_quality_stay_apart() {
        let mut fine = cloth(1);
        fine.quality = Some(ItemQuality::Fine);
        let inv = add_item_to_inventory(&[cloth(1)], fine);
        assert_eq!(inv.len(), 2);
    }

    #[test]
    fn test_weapons_and_apparel_never_merge() {
        for category in [ItemCategory::Weapon, ItemCategory::Apparel] {
            let a = make_item("thing", "Thing", category);
            let mut b = a.clone();
            b.id = next_item_id();
            assert!(!can_items_stack(&a, &b));
            assert_eq!(add_item_to_inventory(&[a], b).len(), 2);
        }
    }

    #[test]
    fn test_unstackable_flag_blocks_merge() {
        let mut a = make_item("bread", "Bread", ItemCategory::Food);
        a.stackable = false;
        let b = make_item("bread", "Bread", ItemCategory::Food);
        assert!(!can_items_stack(&a, &b));
    }

    #[test]
    fn test_food_condition_and_age_limits() {
        let a = make_item("bread", "Bread", ItemCategory::Food);
        let mut b = make_item("bread", "Bread", ItemCategory::Food);
        b.condition = 80.0;
        b.age = 2;
        assert!(can_items_stack(&a, &b));

        b.age = 3;
        assert!(!can_items_stack(&a, &b));

        b.age = 0;
        b.condition = 79.0;
        assert!(!can_items_stack(&a, &b));
    }

    #[test]
    fn test_tool_and_consumable_condition_limits() {
        let a = make_item("awl", "Awl", ItemCategory::Tool);
        let mut b = make_item("awl", "Awl", ItemCategory::Tool);
        b.condition = 70.0;
        assert!(can_items_stack(&a, &b));
        b.condition = 69.0;
        assert!(!can_items_stack(&a, &b));

        let c = make_item("salve", "Salve", ItemCategory::Consumable);
        let mut d = make_item("salve", "Salve", ItemCategory::Consumable);
        d.condition = 90.0;
        assert!(can_items_stack(&c, &d));
        d.condition = 89.5;
        assert!(!can_items_stack(&c, &d));
    }

    #[test]
    fn test_different_base_ids_never_merge() {
        let a = make_item("bread", "Bread", ItemCategory::Food);
        let b = make_item("flatbread", "Bread", ItemCategory::Food);
        assert!(!can_items_stack(&a, &b));
    }

    #[test]
    fn test_add_does_not_mutate_input() {
        let original = vec![cloth(1)];
        let _ = add_item_to_inventory(&original, cloth(4));
        assert_eq!(original[0].quantity, 1);
    }

    #[test]
    fn test_merge_saturates_quantity() {
        let mut full = cloth(1);
        full.quantity = u32::MAX;
        let merged = add_item_to_inventory(&[full], cloth(5));
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].quantity, u32::MAX);
    }

    #[test]
    fn test_remove_is_lifo_and_case_insensitive() {
        let mut first = make_item("bread", "Bread", ItemCategory::Food);
        first.quantity = 2;
        let mut second = make_item("bread", "Bread", ItemCategory::Food);
        second.age = 10;
        second.quantity = 3;
        let inv = vec![first.clone(), second.clone()];

        let removal = remove_item_from_inventory(&inv, "bREAD", 4);
        assert_eq!(removal.removed_ids, vec![second.id]);
        assert_eq!(removal.inventory.len(), 1);
        assert_eq!(removal.inventory[0].id, first.id);
        assert_eq!(removal.inventory[0].quantity, 1);
        assert_eq!(removal.shortfall, 0);
    }

    #[test]
    fn test_remove_partial_stack_not_reported() {
        let inv = vec![cloth(5)];
        let removal = remove_item_from_inventory(&inv, "Linen Cloth", 2);
        assert!(removal.removed_ids.is_empty());
        assert_eq!(removal.inventory[0].quantity, 3);
    }

    #[test]
    fn test_remove_more_than_held() {
        let inv = vec![cloth(2)];
        let removal = remove_item_from_inventory(&inv, "linen cloth", 5);
        assert!(removal.inventory.is_empty());
        assert_eq!(removal.shortfall, 3);
    }

    #[test]
    fn test_add_then_remove_restores_inventory() {
        let knife = make_item("knife", "Knife", ItemCategory::Tool);
        let base = vec![cloth(2), knife];
        let added = cloth(3);
        let name = added.name.clone();
        let qty = added.quantity;

        let grown = add_item_to_inventory(&base, added);
        let removal = remove_item_from_inventory(&grown, &name, qty);
        assert_eq!(removal.inventory, base);
    }

    #[test]
    fn test_total_quantity() {
        let inv = vec![cloth(2), make_item("knife", "Knife", ItemCategory::Tool), cloth(4)];
        assert_eq!(total_quantity(&inv, "linen cloth"), 6);
        assert_eq!(find_by_name(&inv, "KNIFE").len(), 1);
    }
}
