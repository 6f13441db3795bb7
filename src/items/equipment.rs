//! Equipment system
//!
//! Manages equipped items, one per slot.

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use super::item::{Item, EquipSlot};

/// Character equipment slots
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    /// Items in each slot
    slots: BTreeMap<EquipSlot, Item>,
}

impl Equipment {
    pub fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }

    /// Equip an item into its own slot, returning the previously equipped item if any
    pub fn equip(&mut self, item: Item) -> Option<Item> {
        if let Some(slot) = item.equipment_slot {
            self.slots.insert(slot, item)
        } else {
            None // Item not equippable
        }
    }

    /// Put an item into a specific slot regardless of its own slot
    pub fn equip_in(&mut self, slot: EquipSlot, item: Item) -> Option<Item> {
        self.slots.insert(slot, item)
    }

    /// Get item in a slot
    pub fn get(&self, slot: EquipSlot) -> Option<&Item> {
        self.slots.get(&slot)
    }

    /// Check if a slot is empty
    pub fn is_empty(&self, slot: EquipSlot) -> bool {
        !self.slots.contains_key(&slot)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Get all equipped items
    pub fn all_items(&self) -> impl Iterator<Item = &Item> {
        self.slots.values()
    }

    /// Slot/item pairs in slot order
    pub fn iter(&self) -> impl Iterator<Item = (&EquipSlot, &Item)> {
        self.slots.iter()
    }

    /// Weight of everything worn or wielded
    pub fn total_weight(&self) -> f32 {
        self.slots.values().map(|item| item.stack_weight()).sum()
    }

    /// Combined defense of equipped items
    pub fn total_defense(&self) -> i32 {
        self.slots.values().filter_map(|item| item.defense).sum()
    }

    /// Attack of the main hand item (or 1 if unarmed)
    pub fn weapon_attack(&self) -> i32 {
        self.get(EquipSlot::MainHand)
            .and_then(|w| w.attack)
            .unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::item::{next_item_id, ItemCategory, ItemDefinition};

    fn make_gear(name: &str, slot: Option<EquipSlot>, weight: f32) -> Item {
        let mut def = ItemDefinition::new(name.to_lowercase(), name, ItemCategory::Apparel);
        def.equipment_slot = slot;
        def.weight = weight;
        def.defense = Some(2);
        Item::from_definition(next_item_id(), &def)
    }

    #[test]
    fn test_equip_replaces_previous() {
        let mut eq = Equipment::new();
        assert!(eq.equip(make_gear("Hat", Some(EquipSlot::Head), 0.2)).is_none());
        let old = eq.equip(make_gear("Hood", Some(EquipSlot::Head), 0.3));
        assert_eq!(old.map(|i| i.name), Some("Hat".to_string()));
        assert_eq!(eq.len(), 1);
    }

    #[test]
    fn test_unslotted_item_is_refused() {
        let mut eq = Equipment::new();
        assert!(eq.equip(make_gear("Pebble", None, 0.1)).is_none());
        assert_eq!(eq.len(), 0);
    }

    #[test]
    fn test_totals() {
        let mut eq = Equipment::new();
        eq.equip(make_gear("Boots", Some(EquipSlot::Feet), 1.5));
        eq.equip(make_gear("Cloak", Some(EquipSlot::Back), 2.0));
        assert_eq!(eq.total_weight(), 3.5);
        assert_eq!(eq.total_defense(), 4);
        assert_eq!(eq.weapon_attack(), 1);
        assert!(eq.is_empty(EquipSlot::Neck));
    }
}
