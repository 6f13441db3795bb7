//! Weighted random choice

use crate::data::accessories::AccessoryDefinition;

/// Anything with a selection probability mass
pub trait Weighted {
    fn selection_weight(&self) -> f64;
}

impl Weighted for AccessoryDefinition {
    fn selection_weight(&self) -> f64 {
        self.weight
    }
}

/// Pick one entry by weight using `seed` in `[0, 1)`.
///
/// Deterministic for a given seed. Falls back to the last entry when
/// rounding leaves a sliver of weight unconsumed.
pub fn select_weighted<T: Weighted>(items: &[T], seed: f64) -> Option<&T> {
    let total: f64 = items.iter().map(Weighted::selection_weight).sum();
    let mut remaining = seed * total;

    for item in items {
        remaining -= item.selection_weight();
        if remaining <= 0.0 {
            return Some(item);
        }
    }

    items.last()
}

pub fn select_random_accessory(items: &[AccessoryDefinition], seed: f64) -> Option<&AccessoryDefinition> {
    select_weighted(items, seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry(&'static str, f64);

    impl Weighted for Entry {
        fn selection_weight(&self) -> f64 {
            self.1
        }
    }

    fn table() -> Vec<Entry> {
        vec![Entry("a", 3.0), Entry("b", 3.0), Entry("c", 4.0)]
    }

    #[test]
    fn test_seed_zero_picks_first() {
        assert_eq!(select_weighted(&table(), 0.0).map(|e| e.0), Some("a"));
    }

    #[test]
    fn test_seed_near_one_picks_last() {
        assert_eq!(select_weighted(&table(), 0.999_999).map(|e| e.0), Some("c"));
    }

    #[test]
    fn test_boundaries() {
        // 0.3 * 10 = 3 exactly consumes the first entry
        assert_eq!(select_weighted(&table(), 0.3).map(|e| e.0), Some("a"));
        assert_eq!(select_weighted(&table(), 0.45).map(|e| e.0), Some("b"));
        assert_eq!(select_weighted(&table(), 0.61).map(|e| e.0), Some("c"));
    }

    #[test]
    fn test_empty_is_none() {
        let empty: Vec<Entry> = Vec::new();
        assert!(select_weighted(&empty, 0.5).is_none());
    }

    #[test]
    fn test_all_zero_weights_pick_first() {
        let zeroes = vec![Entry("x", 0.0), Entry("y", 0.0)];
        // total is zero, remaining is zero, first entry satisfies <= 0
        assert_eq!(select_weighted(&zeroes, 0.7).map(|e| e.0), Some("x"));
    }

    #[test]
    fn test_leftover_weight_falls_back_to_last() {
        let skewed = vec![Entry("x", 1.0), Entry("y", 1.0)];
        assert_eq!(select_weighted(&skewed, 1.0 + f64::EPSILON).map(|e| e.0), Some("y"));
    }
}
