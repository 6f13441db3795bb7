//! Heirloom - historical character outfitting
//!
//! Builds culturally and historically plausible starting kits, and manages
//! what happens to the items afterwards: stacking, encumbrance and wear.

pub mod items;
pub mod data;
pub mod outfit;
pub mod save;

// Re-export commonly used types
pub use data::{CharacterContext, CulturalZone, DataManager, Gender, HistoricalEra};
pub use items::{Item, ItemCategory, ItemDefinition, ItemFactory};
pub use outfit::{CharacterOutfitter, OutfitRequest, StartingKit, StartingKitAssembler};
