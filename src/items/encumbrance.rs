//! Carried weight and movement penalty

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::item::{Item, ItemCategory};

/// Weight units a character can carry per point of strength
pub const CAPACITY_PER_STRENGTH: f32 = 15.0;

/// Load ratio a character carries without slowing down
pub const FREE_LOAD_RATIO: f32 = 0.5;

/// Upper bound on the movement penalty
pub const MAX_MOVEMENT_PENALTY: f32 = 0.75;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncumbranceReport {
    pub total_weight: f32,
    pub weight_by_category: BTreeMap<ItemCategory, f32>,
    pub max_capacity: f32,
    /// Fraction of capacity in use; may exceed 1.0
    pub ratio: f32,
    /// 0.0 = unhindered, 0.75 = barely moving
    pub movement_penalty: f32,
}

impl EncumbranceReport {
    pub fn is_overloaded(&self) -> bool {
        self.ratio > 1.0
    }
}

pub fn movement_penalty(ratio: f32) -> f32 {
    if ratio <= FREE_LOAD_RATIO {
        0.0
    } else {
        (ratio - FREE_LOAD_RATIO).powi(2).min(MAX_MOVEMENT_PENALTY)
    }
}

/// Weigh everything in `items` against `strength`
pub fn calculate_encumbrance<'a>(
    items: impl IntoIterator<Item = &'a Item>,
    strength: f32,
) -> EncumbranceReport {
    let mut total_weight = 0.0;
    let mut weight_by_category = BTreeMap::new();

    for item in items {
        let weight = item.stack_weight();
        total_weight += weight;
        *weight_by_category.entry(item.category).or_insert(0.0) += weight;
    }

    let max_capacity = (strength * CAPACITY_PER_STRENGTH).max(0.0);
    let ratio = if max_capacity > 0.0 {
        total_weight / max_capacity
    } else if total_weight > 0.0 {
        f32::INFINITY
    } else {
        0.0
    };

    EncumbranceReport {
        total_weight,
        weight_by_category,
        max_capacity,
        ratio,
        movement_penalty: movement_penalty(ratio),
    }
}
