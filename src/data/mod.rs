//! Data loading and external game content
//!
//! This module holds the tables the outfitter consults (item templates,
//! historical rules, accessories, packages, odds) and loads them from
//! external RON files, allowing for data-driven content and easy modding.

pub mod context;
pub mod catalog;
pub mod rules;
pub mod accessories;
pub mod packages;
pub mod odds;
pub mod loader;

pub use context::{CharacterContext, CulturalZone, Gender, HistoricalEra, WealthTier};
pub use catalog::{ItemCatalog, ItemTable, ItemTemplates};
pub use rules::{CultureRules, EraRules, HistoricalRules};
pub use accessories::{AccessoryDefinition, AccessoryKind, AccessoryQuery, AccessoryTable};
pub use packages::{StartingPackage, SlotEntry, PackageTable, CONTEXTUAL_SENTINEL};
pub use odds::OddsConfig;
pub use loader::{DataManager, DataError};
