//! Companion animals
//!
//! Registration goes through [`CompanionService`] so the assembler never
//! owns the party. The companion cache is a separate store that the
//! outfitter clears before a new character is assembled.

use serde::{Deserialize, Serialize};

/// Domesticated species unknown in the pre-contact Americas
pub const OLD_WORLD_SPECIES: &[&str] = &["sheep", "cow", "horse", "goat"];

/// (species key, display name, emoji)
const SPECIES: &[(&str, &str, &str)] = &[
    ("dog", "Dog", "🐕"),
    ("sheepdog", "Sheepdog", "🐕"),
    ("cat", "Cat", "🐈"),
    ("sheep", "Sheep", "🐑"),
    ("goat", "Goat", "🐐"),
    ("horse", "Horse", "🐎"),
    ("cow", "Cow", "🐄"),
    ("mule", "Mule", "🫏"),
    ("turkey", "Turkey", "🦃"),
    ("llama", "Llama", "🦙"),
    ("parrot", "Parrot", "🦜"),
];

/// A tamed animal travelling with the character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Companion {
    pub species: String,
    pub name: String,
    pub emoji: String,
}

impl Companion {
    /// Look up a species by key, case-insensitively
    pub fn tamed(species: &str) -> Option<Self> {
        let key = species.trim().to_lowercase();
        SPECIES
            .iter()
            .find(|(k, _, _)| *k == key)
            .map(|(k, name, emoji)| Self {
                species: k.to_string(),
                name: name.to_string(),
                emoji: emoji.to_string(),
            })
    }
}

pub fn is_old_world_species(species: &str) -> bool {
    OLD_WORLD_SPECIES.contains(&species.trim().to_lowercase().as_str())
}

/// Creates and registers companions
pub trait CompanionService {
    /// `None` when the species is unknown
    fn create_tamed_animal(&mut self, species: &str) -> Option<Companion>;
    fn add_to_party(&mut self, companion: Companion);
}

/// Persisted companions from a previous character
pub trait CompanionCache {
    fn clear(&mut self);
    fn store(&mut self, companions: &[Companion]);
}

/// The character's travelling party
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Party {
    members: Vec<Companion>,
}

impl Party {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn members(&self) -> &[Companion] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn has_species(&self, species: &str) -> bool {
        self.members.iter().any(|c| c.species == species)
    }
}

impl CompanionService for Party {
    fn create_tamed_animal(&mut self, species: &str) -> Option<Companion> {
        let companion = Companion::tamed(species);
        if companion.is_none() {
            log::warn!("Unknown companion species '{}', skipping", species);
        }
        companion
    }

    fn add_to_party(&mut self, companion: Companion) {
        log::info!("{} {} joins the party", companion.emoji, companion.name);
        self.members.push(companion);
    }
}

/// Companion cache kept in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryCompanionCache {
    pub companions: Vec<Companion>,
    /// Number of times the cache has been cleared
    pub clears: usize,
}

impl CompanionCache for MemoryCompanionCache {
    fn clear(&mut self) {
        self.companions.clear();
        self.clears += 1;
    }

    fn store(&mut self, companions: &[Companion]) {
        self.companions = companions.to_vec();
    }
}
