//! Quality adjectives for accessories
//!
//! Richer characters get finer-sounding jewelry. An item whose name already
//! carries a quality word is left alone.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::context::WealthTier;
use crate::items::ItemQuality;

const POOR_WORDS: &[&str] = &["Worn", "Simple", "Plain", "Crude"];
const MODEST_WORDS: &[&str] = &["Sturdy", "Decent", "Serviceable", "Neat"];
const WEALTHY_WORDS: &[&str] = &["Fine", "Polished", "Elegant", "Handsome"];
const ELITE_WORDS: &[&str] = &["Exquisite", "Masterwork", "Resplendent", "Gilded"];

/// Words that already describe quality; never stacked with another adjective
pub const QUALITY_WORDS: &[&str] = &[
    "worn", "simple", "plain", "crude", "sturdy", "decent", "serviceable", "neat", "fine",
    "polished", "elegant", "handsome", "exquisite", "masterwork", "resplendent", "gilded",
    "broken", "fancy", "ornate", "rough", "quality", "superior", "rare",
];

/// Adjective pool for a privilege level (<0.2, <0.6, <0.9, otherwise)
pub fn adjective_pool(privilege: f64) -> &'static [&'static str] {
    if privilege < 0.2 {
        POOR_WORDS
    } else if privilege < 0.6 {
        MODEST_WORDS
    } else if privilege < 0.9 {
        WEALTHY_WORDS
    } else {
        ELITE_WORDS
    }
}

/// Craftsmanship matching the adjective tier
pub fn quality_for_privilege(privilege: f64) -> ItemQuality {
    match WealthTier::from_privilege(privilege) {
        WealthTier::Poor => ItemQuality::Crude,
        WealthTier::Modest => ItemQuality::Standard,
        WealthTier::Wealthy => ItemQuality::Fine,
        WealthTier::Elite => ItemQuality::Masterwork,
    }
}

pub fn has_quality_word(name: &str) -> bool {
    name.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .any(|w| QUALITY_WORDS.contains(&w.as_str()))
}

/// Prefix `name` with an adjective from the privilege tier, unless it already has one
pub fn apply_quality_adjective(name: &str, privilege: f64, rng: &mut impl Rng) -> String {
    if has_quality_word(name) {
        return name.to_string();
    }
    match adjective_pool(privilege).choose(rng) {
        Some(adjective) => format!("{} {}", adjective, name),
        None => name.to_string(),
    }
}
