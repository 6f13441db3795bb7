//! Item wear and breakage
//!
//! Condition only ever goes down here. Reaching zero turns an item into its
//! "Broken" variant, which is terminal.

use super::item::{Item, ItemCategory, ItemId};

/// Condition lost per unit of usage and harshness
pub fn base_degradation_rate(category: ItemCategory) -> f32 {
    match category {
        ItemCategory::Weapon => 0.5,
        ItemCategory::Tool => 0.3,
        ItemCategory::Apparel => 0.2,
        ItemCategory::Food => 2.0,
        ItemCategory::Material => 0.1,
        ItemCategory::Document => 0.4,
        ItemCategory::Special => 0.05,
        ItemCategory::Consumable => 1.0,
        ItemCategory::Vessel => 0.15,
        ItemCategory::Container => 0.2,
    }
}

fn scale_quarter(stat: Option<i32>) -> Option<i32> {
    stat.map(|s| (s as f32 * 0.25).floor() as i32)
}

/// Wear an item down. Broken items come back unchanged.
pub fn degrade_item(item: &Item, usage_intensity: f32, environment_harshness: f32) -> Item {
    if item.is_broken() {
        return item.clone();
    }

    let degradation = base_degradation_rate(item.category)
        * usage_intensity.max(0.0)
        * environment_harshness.max(0.0);
    let new_condition = (item.condition - degradation).max(0.0);

    if new_condition <= 0.0 {
        Item {
            name: format!("Broken {}", item.name),
            value: item.value / 10,
            attack: scale_quarter(item.attack),
            defense: scale_quarter(item.defense),
            condition: 0.0,
            ..item.clone()
        }
    } else {
        Item {
            condition: new_condition,
            ..item.clone()
        }
    }
}

/// Degrade one stack in place, keeping its position in the list
pub fn degrade_in_inventory(
    inventory: &[Item],
    id: ItemId,
    usage_intensity: f32,
    environment_harshness: f32,
) -> Vec<Item> {
    inventory
        .iter()
        .map(|item| {
            if item.id == id {
                let degraded = degrade_item(item, usage_intensity, environment_harshness);
                if degraded.is_broken() && !item.is_broken() {
                    log::info!("{} broke", item.name);
                }
                degraded
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Advance the age of every stack by `days`
pub fn age_items(inventory: &[Item], days: u32) -> Vec<Item> {
    inventory
        .iter()
        .map(|item| Item {
            age: item.age.saturating_add(days),
            ..item.clone()
        })
        .collect()
}
