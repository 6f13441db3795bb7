//! Jewelry and cultural accessories
//!
//! Each definition names who may plausibly own it. The `weight` here is a
//! selection probability mass, not a physical weight.

use serde::{Deserialize, Serialize};

use super::context::{CulturalZone, Gender, HistoricalEra, WealthTier};
use crate::items::EquipSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessoryKind {
    Necklace,
    Ring,
    Cultural,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessoryDefinition {
    pub base_id: String,
    pub kind: AccessoryKind,
    /// Slot the accessory occupies when worn
    pub slot: EquipSlot,
    pub cultural_zones: Vec<CulturalZone>,
    /// `None` means every era
    #[serde(default)]
    pub eras: Option<Vec<HistoricalEra>>,
    pub wealth_levels: Vec<WealthTier>,
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Lowercase profession keys; `None` means any profession
    #[serde(default)]
    pub professions: Option<Vec<String>>,
    pub weight: f64,
}

/// Who is asking for accessories
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccessoryQuery<'a> {
    pub zone: CulturalZone,
    pub era: Option<HistoricalEra>,
    pub wealth: WealthTier,
    pub gender: Option<Gender>,
    pub profession: &'a str,
    pub kind: AccessoryKind,
}

impl AccessoryDefinition {
    pub fn is_eligible(&self, query: &AccessoryQuery<'_>) -> bool {
        if self.kind != query.kind || !self.cultural_zones.contains(&query.zone) {
            return false;
        }
        if !self.wealth_levels.contains(&query.wealth) {
            return false;
        }
        if let (Some(eras), Some(era)) = (&self.eras, query.era) {
            if !eras.contains(&era) {
                return false;
            }
        }
        if let (Some(required), Some(gender)) = (self.gender, query.gender) {
            if required != gender {
                return false;
            }
        }
        if let Some(professions) = &self.professions {
            let profession = query.profession.to_lowercase();
            if !professions.iter().any(|p| *p == profession) {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessoryTable {
    pub accessories: Vec<AccessoryDefinition>,
}

impl AccessoryTable {
    /// Every accessory the queried character could own, in table order
    pub fn accessories_for_character(&self, query: &AccessoryQuery<'_>) -> Vec<AccessoryDefinition> {
        self.accessories
            .iter()
            .filter(|a| a.is_eligible(query))
            .cloned()
            .collect()
    }
}

struct AccessoryEntry {
    base_id: &'static str,
    kind: AccessoryKind,
    slot: EquipSlot,
    zones: &'static [CulturalZone],
    eras: Option<&'static [HistoricalEra]>,
    wealth: &'static [WealthTier],
    gender: Option<Gender>,
    professions: Option<&'static [&'static str]>,
    weight: f64,
}

impl From<AccessoryEntry> for AccessoryDefinition {
    fn from(s: AccessoryEntry) -> Self {
        AccessoryDefinition {
            base_id: s.base_id.to_string(),
            kind: s.kind,
            slot: s.slot,
            cultural_zones: s.zones.to_vec(),
            eras: s.eras.map(|e| e.to_vec()),
            wealth_levels: s.wealth.to_vec(),
            gender: s.gender,
            professions: s.professions.map(|p| p.iter().map(|x| x.to_string()).collect()),
            weight: s.weight,
        }
    }
}

pub fn default_accessories() -> AccessoryTable {
    use AccessoryKind::*;
    use CulturalZone::*;
    use HistoricalEra::*;
    use WealthTier::*;

    const ALL_ZONES: &[CulturalZone] = &[
        European, Mediterranean, MiddleEastern, NorthAfrican, SubSaharanAfrican, SouthAsian,
        EastAsian, SoutheastAsian, Steppe, NorthAmerican, Mesoamerican, Andean, Amazonian, Oceanian,
    ];
    const OLD_WORLD: &[CulturalZone] = &[
        European, Mediterranean, MiddleEastern, NorthAfrican, SubSaharanAfrican, SouthAsian,
        EastAsian, SoutheastAsian, Steppe,
    ];
    const LOWER: &[WealthTier] = &[Poor, Modest];
    const UPPER: &[WealthTier] = &[Wealthy, Elite];
    const ANY_WEALTH: &[WealthTier] = &[Poor, Modest, Wealthy, Elite];

    let entries = vec![
        // Necklaces
        AccessoryEntry { base_id: "bone_necklace", kind: Necklace, slot: EquipSlot::Neck, zones: ALL_ZONES, eras: None, wealth: LOWER, gender: None, professions: None, weight: 3.0 },
        AccessoryEntry { base_id: "shell_necklace", kind: Necklace, slot: EquipSlot::Neck, zones: &[Oceanian, Mesoamerican, Amazonian, SoutheastAsian, Mediterranean], eras: None, wealth: LOWER, gender: None, professions: None, weight: 3.0 },
        AccessoryEntry { base_id: "copper_pendant", kind: Necklace, slot: EquipSlot::Neck, zones: OLD_WORLD, eras: Some(&[Ancient, Classical, EarlyMedieval, HighMedieval, LateMedieval, EarlyModern]), wealth: &[Modest, Wealthy], gender: None, professions: None, weight: 2.0 },
        AccessoryEntry { base_id: "silver_amulet", kind: Necklace, slot: EquipSlot::Neck, zones: OLD_WORLD, eras: None, wealth: UPPER, gender: None, professions: None, weight: 2.0 },
        AccessoryEntry { base_id: "gold_necklace", kind: Necklace, slot: EquipSlot::Neck, zones: ALL_ZONES, eras: None, wealth: &[Elite], gender: None, professions: None, weight: 1.0 },
        AccessoryEntry { base_id: "jade_pendant", kind: Necklace, slot: EquipSlot::Neck, zones: &[EastAsian, Mesoamerican], eras: None, wealth: UPPER, gender: None, professions: None, weight: 3.0 },
        AccessoryEntry { base_id: "wooden_rosary", kind: Necklace, slot: EquipSlot::Neck, zones: &[European, Mediterranean], eras: Some(&[HighMedieval, LateMedieval, EarlyModern]), wealth: ANY_WEALTH, gender: None, professions: Some(&["priest", "monk", "nun", "pilgrim"]), weight: 4.0 },
        // Rings
        AccessoryEntry { base_id: "bone_ring", kind: Ring, slot: EquipSlot::Ring, zones: ALL_ZONES, eras: None, wealth: LOWER, gender: None, professions: None, weight: 2.0 },
        AccessoryEntry { base_id: "copper_ring", kind: Ring, slot: EquipSlot::Ring, zones: OLD_WORLD, eras: None, wealth: &[Poor, Modest, Wealthy], gender: None, professions: None, weight: 3.0 },
        AccessoryEntry { base_id: "silver_ring", kind: Ring, slot: EquipSlot::Ring, zones: ALL_ZONES, eras: None, wealth: UPPER, gender: None, professions: None, weight: 3.0 },
        AccessoryEntry { base_id: "gold_signet_ring", kind: Ring, slot: EquipSlot::Ring, zones: OLD_WORLD, eras: None, wealth: &[Elite], gender: None, professions: None, weight: 2.0 },
        AccessoryEntry { base_id: "merchant_seal_ring", kind: Ring, slot: EquipSlot::Ring, zones: OLD_WORLD, eras: None, wealth: &[Modest, Wealthy, Elite], gender: None, professions: Some(&["merchant", "trader", "scribe"]), weight: 4.0 },
        // Cultural accessories
        AccessoryEntry { base_id: "feathered_headband", kind: Cultural, slot: EquipSlot::Head, zones: &[NorthAmerican, Amazonian], eras: None, wealth: ANY_WEALTH, gender: None, professions: None, weight: 3.0 },
        AccessoryEntry { base_id: "jade_earspools", kind: Cultural, slot: EquipSlot::Accessory, zones: &[Mesoamerican], eras: None, wealth: UPPER, gender: None, professions: None, weight: 3.0 },
        AccessoryEntry { base_id: "gold_earspools", kind: Cultural, slot: EquipSlot::Accessory, zones: &[Andean], eras: None, wealth: UPPER, gender: None, professions: None, weight: 2.0 },
        AccessoryEntry { base_id: "woven_sash", kind: Cultural, slot: EquipSlot::Waist, zones: &[Andean, Mesoamerican, SoutheastAsian], eras: None, wealth: ANY_WEALTH, gender: None, professions: None, weight: 2.0 },
        AccessoryEntry { base_id: "silk_headscarf", kind: Cultural, slot: EquipSlot::Head, zones: &[MiddleEastern, NorthAfrican, SouthAsian], eras: None, wealth: &[Modest, Wealthy, Elite], gender: Some(Gender::Female), professions: None, weight: 3.0 },
        AccessoryEntry { base_id: "cotton_turban", kind: Cultural, slot: EquipSlot::Head, zones: &[MiddleEastern, SouthAsian, NorthAfrican], eras: None, wealth: ANY_WEALTH, gender: Some(Gender::Male), professions: None, weight: 3.0 },
        AccessoryEntry { base_id: "silver_bangles", kind: Cultural, slot: EquipSlot::Accessory, zones: &[SouthAsian], eras: None, wealth: &[Modest, Wealthy, Elite], gender: None, professions: None, weight: 3.0 },
        AccessoryEntry { base_id: "bronze_torc", kind: Cultural, slot: EquipSlot::Neck, zones: &[European], eras: Some(&[Ancient, Classical]), wealth: UPPER, gender: None, professions: None, weight: 2.0 },
        AccessoryEntry { base_id: "felt_cap", kind: Cultural, slot: EquipSlot::Head, zones: &[Steppe], eras: None, wealth: ANY_WEALTH, gender: None, professions: None, weight: 3.0 },
        AccessoryEntry { base_id: "lacquered_hairpin", kind: Cultural, slot: EquipSlot::Accessory, zones: &[EastAsian], eras: None, wealth: &[Modest, Wealthy, Elite], gender: Some(Gender::Female), professions: None, weight: 3.0 },
        AccessoryEntry { base_id: "beaded_collar", kind: Cultural, slot: EquipSlot::Neck, zones: &[SubSaharanAfrican], eras: None, wealth: ANY_WEALTH, gender: None, professions: None, weight: 3.0 },
        AccessoryEntry { base_id: "shell_armband", kind: Cultural, slot: EquipSlot::Accessory, zones: &[Oceanian], eras: None, wealth: ANY_WEALTH, gender: None, professions: None, weight: 3.0 },
        AccessoryEntry { base_id: "pilgrim_badge", kind: Cultural, slot: EquipSlot::Accessory, zones: &[European], eras: Some(&[HighMedieval, LateMedieval]), wealth: ANY_WEALTH, gender: None, professions: None, weight: 1.0 },
    ];

    AccessoryTable {
        accessories: entries.into_iter().map(AccessoryDefinition::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(zone: CulturalZone, wealth: WealthTier, kind: AccessoryKind) -> AccessoryQuery<'static> {
        AccessoryQuery {
            zone,
            era: Some(HistoricalEra::HighMedieval),
            wealth,
            gender: None,
            profession: "farmer",
            kind,
        }
    }

    #[test]
    fn test_never_returns_foreign_zone() {
        let table = default_accessories();
        for zone in [CulturalZone::Mesoamerican, CulturalZone::European, CulturalZone::Steppe] {
            for kind in [AccessoryKind::Necklace, AccessoryKind::Ring, AccessoryKind::Cultural] {
                for wealth in [WealthTier::Poor, WealthTier::Modest, WealthTier::Wealthy, WealthTier::Elite] {
                    for acc in table.accessories_for_character(&query(zone, wealth, kind)) {
                        assert!(acc.cultural_zones.contains(&zone), "{} leaked into {:?}", acc.base_id, zone);
                    }
                }
            }
        }
    }

    #[test]
    fn test_wealth_filter() {
        let table = default_accessories();
        let rich = table.accessories_for_character(&query(CulturalZone::European, WealthTier::Elite, AccessoryKind::Ring));
        assert!(rich.iter().any(|a| a.base_id == "gold_signet_ring"));
        let poor = table.accessories_for_character(&query(CulturalZone::European, WealthTier::Poor, AccessoryKind::Ring));
        assert!(poor.iter().all(|a| a.base_id != "gold_signet_ring"));
    }

    #[test]
    fn test_profession_and_gender_filters() {
        let table = default_accessories();
        let mut q = query(CulturalZone::European, WealthTier::Modest, AccessoryKind::Necklace);
        assert!(table.accessories_for_character(&q).iter().all(|a| a.base_id != "wooden_rosary"));
        q.profession = "Priest";
        assert!(table.accessories_for_character(&q).iter().any(|a| a.base_id == "wooden_rosary"));

        let mut q = query(CulturalZone::MiddleEastern, WealthTier::Modest, AccessoryKind::Cultural);
        q.gender = Some(Gender::Male);
        let found = table.accessories_for_character(&q);
        assert!(found.iter().any(|a| a.base_id == "cotton_turban"));
        assert!(found.iter().all(|a| a.base_id != "silk_headscarf"));
    }

    #[test]
    fn test_era_filter() {
        let table = default_accessories();
        let mut q = query(CulturalZone::European, WealthTier::Elite, AccessoryKind::Cultural);
        assert!(table.accessories_for_character(&q).iter().all(|a| a.base_id != "bronze_torc"));
        q.era = Some(HistoricalEra::Classical);
        assert!(table.accessories_for_character(&q).iter().any(|a| a.base_id == "bronze_torc"));
    }
}
