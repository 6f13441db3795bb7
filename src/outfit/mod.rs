//! Character outfitting
//!
//! Builds starting kits from packages, contextual weapons, accessories and
//! companion animals.

pub mod quality;
pub mod weapons;
pub mod companions;
pub mod assembler;

pub use quality::{apply_quality_adjective, QUALITY_WORDS};
pub use weapons::{contextual_weapon_ids, generate_contextual_weapon};
pub use companions::{Companion, CompanionCache, CompanionService, MemoryCompanionCache, Party};
pub use assembler::{CharacterOutfitter, OutfitRequest, StartingKit, StartingKitAssembler};
