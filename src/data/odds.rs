//! Accessory and companion odds
//!
//! Every probability used while outfitting a character lives here, grouped
//! by the entity it belongs to: culture, era or profession.

use serde::{Deserialize, Serialize};

use super::context::{CulturalZone, HistoricalEra};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CultureOdds {
    pub zone: CulturalZone,
    /// Base chance of starting with a necklace or amulet
    pub amulet_chance: f64,
    /// Base chance of a culture-specific accessory
    pub cultural_accessory_chance: f64,
    /// Chance of a cat following the character
    pub cat_chance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EraOdds {
    pub era: HistoricalEra,
    /// Added to the amulet chance
    pub amulet_modifier: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionOdds {
    pub profession: String,
    #[serde(default)]
    pub amulet_modifier: f64,
    /// Scales every pet roll
    #[serde(default = "one")]
    pub pet_multiplier: f64,
}

fn one() -> f64 {
    1.0
}

/// One independent chance at a starting pet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetRoll {
    pub species: String,
    pub chance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsConfig {
    pub cultures: Vec<CultureOdds>,
    pub eras: Vec<EraOdds>,
    pub professions: Vec<ProfessionOdds>,
    pub default_amulet_chance: f64,
    pub default_cultural_accessory_chance: f64,
    pub default_cat_chance: f64,
    /// Ring chance is `ring_base + ring_privilege * privilege`
    pub ring_base: f64,
    pub ring_privilege: f64,
    /// Added to the cultural accessory chance per unit of privilege
    pub cultural_privilege: f64,
    /// Cats are rolled separately via `cat_chance`
    pub pet_rolls: Vec<PetRoll>,
}

impl OddsConfig {
    fn culture(&self, zone: Option<CulturalZone>) -> Option<&CultureOdds> {
        let zone = zone?;
        self.cultures.iter().find(|c| c.zone == zone)
    }

    fn profession(&self, profession: &str) -> Option<&ProfessionOdds> {
        let key = profession.trim().to_lowercase();
        self.professions.iter().find(|p| p.profession == key)
    }

    pub fn amulet_chance(
        &self,
        zone: Option<CulturalZone>,
        era: Option<HistoricalEra>,
        profession: &str,
    ) -> f64 {
        let base = self.culture(zone).map_or(self.default_amulet_chance, |c| c.amulet_chance);
        let era_mod = era
            .and_then(|era| self.eras.iter().find(|e| e.era == era))
            .map_or(0.0, |e| e.amulet_modifier);
        let profession_mod = self.profession(profession).map_or(0.0, |p| p.amulet_modifier);
        (base + era_mod + profession_mod).clamp(0.0, 1.0)
    }

    pub fn ring_chance(&self, privilege: f64) -> f64 {
        (self.ring_base + self.ring_privilege * privilege).clamp(0.0, 1.0)
    }

    pub fn cultural_accessory_chance(&self, zone: Option<CulturalZone>, privilege: f64) -> f64 {
        let base = self
            .culture(zone)
            .map_or(self.default_cultural_accessory_chance, |c| c.cultural_accessory_chance);
        (base + self.cultural_privilege * privilege).clamp(0.0, 1.0)
    }

    pub fn pet_chance_multiplier(&self, profession: &str) -> f64 {
        self.profession(profession).map_or(1.0, |p| p.pet_multiplier)
    }

    pub fn base_cat_chance(&self, zone: Option<CulturalZone>) -> f64 {
        self.culture(zone).map_or(self.default_cat_chance, |c| c.cat_chance)
    }
}

impl Default for OddsConfig {
    fn default() -> Self {
        use CulturalZone::*;
        use HistoricalEra::*;

        let culture = |zone, amulet_chance, cultural_accessory_chance, cat_chance| CultureOdds {
            zone,
            amulet_chance,
            cultural_accessory_chance,
            cat_chance,
        };
        let era = |era, amulet_modifier| EraOdds { era, amulet_modifier };
        let profession = |name: &str, amulet_modifier, pet_multiplier| ProfessionOdds {
            profession: name.to_string(),
            amulet_modifier,
            pet_multiplier,
        };
        let pet = |species: &str, chance| PetRoll {
            species: species.to_string(),
            chance,
        };

        Self {
            cultures: vec![
                culture(European, 0.25, 0.15, 0.04),
                culture(Mediterranean, 0.30, 0.20, 0.05),
                culture(MiddleEastern, 0.35, 0.35, 0.08),
                culture(NorthAfrican, 0.35, 0.30, 0.10),
                culture(SubSaharanAfrican, 0.40, 0.45, 0.02),
                culture(SouthAsian, 0.45, 0.50, 0.03),
                culture(EastAsian, 0.20, 0.30, 0.04),
                culture(SoutheastAsian, 0.30, 0.35, 0.04),
                culture(Steppe, 0.30, 0.40, 0.01),
                culture(NorthAmerican, 0.40, 0.50, 0.0),
                culture(Mesoamerican, 0.45, 0.45, 0.0),
                culture(Andean, 0.40, 0.40, 0.0),
                culture(Amazonian, 0.45, 0.55, 0.0),
                culture(Oceanian, 0.45, 0.50, 0.0),
            ],
            eras: vec![
                era(Prehistoric, 0.10),
                era(Ancient, 0.05),
                era(Classical, 0.0),
                era(EarlyMedieval, 0.05),
                era(HighMedieval, 0.0),
                era(LateMedieval, -0.05),
                era(EarlyModern, -0.10),
            ],
            professions: vec![
                profession("priest", 0.30, 0.5),
                profession("healer", 0.20, 1.0),
                profession("noble", 0.20, 1.5),
                profession("merchant", 0.10, 1.0),
                profession("soldier", 0.10, 0.5),
                profession("hunter", 0.0, 2.5),
                profession("shepherd", 0.0, 3.0),
                profession("farmer", 0.0, 2.0),
                profession("scribe", 0.0, 1.5),
            ],
            default_amulet_chance: 0.25,
            default_cultural_accessory_chance: 0.2,
            default_cat_chance: 0.03,
            ring_base: 0.3,
            ring_privilege: 0.4,
            cultural_privilege: 0.2,
            pet_rolls: vec![
                pet("dog", 0.05),
                pet("goat", 0.02),
                pet("sheep", 0.01),
                pet("horse", 0.01),
                pet("cow", 0.005),
                pet("turkey", 0.01),
                pet("llama", 0.01),
                pet("parrot", 0.005),
            ],
        }
    }
}
