//! Character context
//!
//! Cultural zones, historical eras and the wealth scalar that gate what a
//! new character may start with.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Broad cultural region a character comes from
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CulturalZone {
    European,
    Mediterranean,
    MiddleEastern,
    NorthAfrican,
    SubSaharanAfrican,
    SouthAsian,
    EastAsian,
    SoutheastAsian,
    Steppe,
    NorthAmerican,
    Mesoamerican,
    Andean,
    Amazonian,
    Oceanian,
}

impl CulturalZone {
    /// Zones of the Americas before contact with Old World livestock
    pub fn is_pre_columbian_american(&self) -> bool {
        matches!(
            self,
            CulturalZone::NorthAmerican
                | CulturalZone::Mesoamerican
                | CulturalZone::Andean
                | CulturalZone::Amazonian
        )
    }
}

/// Historical period, ordered oldest first
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
    Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum HistoricalEra {
    Prehistoric,
    Ancient,
    Classical,
    EarlyMedieval,
    HighMedieval,
    LateMedieval,
    EarlyModern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Gender {
    Female,
    Male,
}

/// Wealth bracket derived from the privilege scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WealthTier {
    Poor,
    Modest,
    Wealthy,
    Elite,
}

impl WealthTier {
    /// Thresholds: <0.2, <0.6, <0.9, otherwise elite
    pub fn from_privilege(privilege: f64) -> Self {
        if privilege < 0.2 {
            WealthTier::Poor
        } else if privilege < 0.6 {
            WealthTier::Modest
        } else if privilege < 0.9 {
            WealthTier::Wealthy
        } else {
            WealthTier::Elite
        }
    }
}

/// Everything about a character that affects item eligibility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterContext {
    pub profession: String,
    pub culture: Option<CulturalZone>,
    pub era: Option<HistoricalEra>,
    /// 0.0 (destitute) to 1.0 (royalty)
    pub privilege: f64,
    pub gender: Option<Gender>,
}

impl CharacterContext {
    pub fn new(profession: impl Into<String>) -> Self {
        Self {
            profession: profession.into(),
            culture: None,
            era: None,
            privilege: 0.5,
            gender: None,
        }
    }

    pub fn with_culture(mut self, culture: CulturalZone) -> Self {
        self.culture = Some(culture);
        self
    }

    pub fn with_era(mut self, era: HistoricalEra) -> Self {
        self.era = Some(era);
        self
    }

    pub fn with_privilege(mut self, privilege: f64) -> Self {
        self.privilege = privilege.clamp(0.0, 1.0);
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn wealth_tier(&self) -> WealthTier {
        WealthTier::from_privilege(self.privilege)
    }

    /// Profession key used for table lookups
    pub fn profession_key(&self) -> String {
        self.profession.trim().to_lowercase()
    }
}
