//! Starting kit assembly
//!
//! Turns a profession and character context into a ready-to-play kit:
//! inventory, equipped items, optional jewelry and companion animals.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::companions::{is_old_world_species, CompanionCache, CompanionService};
use super::quality::{apply_quality_adjective, quality_for_privilege};
use super::weapons::generate_contextual_weapon;
use crate::data::accessories::{AccessoryKind, AccessoryQuery, AccessoryTable};
use crate::data::context::CharacterContext;
use crate::data::loader::DataManager;
use crate::data::odds::OddsConfig;
use crate::data::packages::{contextual_package, PackageTable, SlotEntry, StartingPackage};
use crate::items::encumbrance::{calculate_encumbrance, EncumbranceReport};
use crate::items::inventory::add_item_to_inventory;
use crate::items::selection::select_random_accessory;
use crate::items::{Classifier, Equipment, Item, ItemFactory};

/// What to assemble, and which optional extras to roll for
#[derive(Debug, Clone, PartialEq)]
pub struct OutfitRequest {
    pub character: CharacterContext,
    pub accessories: bool,
    pub companions: bool,
}

impl OutfitRequest {
    pub fn new(character: CharacterContext) -> Self {
        Self {
            character,
            accessories: true,
            companions: true,
        }
    }

    pub fn without_accessories(mut self) -> Self {
        self.accessories = false;
        self
    }

    pub fn without_companions(mut self) -> Self {
        self.companions = false;
        self
    }
}

/// Everything a new character starts with
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StartingKit {
    pub inventory: Vec<Item>,
    pub equipped_items: Equipment,
    /// Species keys registered with the companion service
    #[serde(default)]
    pub companions: Vec<String>,
}

impl StartingKit {
    /// Weight of carried and equipped items together
    pub fn carried_weight(&self) -> f32 {
        let carried: f32 = self.inventory.iter().map(Item::stack_weight).sum();
        carried + self.equipped_items.total_weight()
    }

    pub fn encumbrance(&self, strength: f32) -> EncumbranceReport {
        calculate_encumbrance(self.inventory.iter().chain(self.equipped_items.all_items()), strength)
    }
}

pub struct StartingKitAssembler<'a> {
    factory: ItemFactory<'a>,
    packages: &'a PackageTable,
    accessories: &'a AccessoryTable,
    odds: &'a OddsConfig,
}

impl<'a> StartingKitAssembler<'a> {
    pub fn new(
        factory: ItemFactory<'a>,
        packages: &'a PackageTable,
        accessories: &'a AccessoryTable,
        odds: &'a OddsConfig,
    ) -> Self {
        Self {
            factory,
            packages,
            accessories,
            odds,
        }
    }

    /// Wire an assembler to every table in `data`
    pub fn from_data(data: &'a DataManager, classifier: &'a dyn Classifier) -> Self {
        let factory = ItemFactory::new(&data.items, &data.rules, &data.rules, classifier);
        Self::new(factory, &data.packages, &data.accessories, &data.odds)
    }

    /// Assemble a starting kit. Items the culture rejects are dropped
    /// silently; unknown companion species are skipped.
    pub fn assemble_starting_package(
        &self,
        request: &OutfitRequest,
        service: &mut dyn CompanionService,
        rng: &mut impl Rng,
    ) -> StartingKit {
        let ctx = &request.character;
        let synthesized;
        let package = match self.packages.get(&ctx.profession) {
            Some(package) => package,
            None => {
                log::debug!("No package for '{}', building one from context", ctx.profession);
                synthesized = contextual_package(ctx);
                &synthesized
            }
        };

        let inventory = package
            .inventory
            .iter()
            .filter_map(|id| self.factory.create_item_instance(id, ctx.era, ctx.culture))
            .fold(Vec::new(), |inventory, item| add_item_to_inventory(&inventory, item));

        let mut equipped_items = self.equip_package(package, ctx);
        if request.accessories {
            self.add_accessories(ctx, &mut equipped_items, rng);
        }

        let companions = if request.companions {
            self.register_companions(ctx, package, service, rng)
        } else {
            Vec::new()
        };

        StartingKit {
            inventory,
            equipped_items,
            companions,
        }
    }

    fn equip_package(&self, package: &StartingPackage, ctx: &CharacterContext) -> Equipment {
        let mut equipment = Equipment::new();
        for (slot, entry) in &package.equipment {
            let item = match entry {
                SlotEntry::Item(id) => self.factory.create_item_instance(id, ctx.era, ctx.culture),
                SlotEntry::Contextual => generate_contextual_weapon(&self.factory, ctx),
            };
            if let Some(item) = item {
                equipment.equip_in(*slot, item);
            }
        }
        equipment
    }

    /// Roll for a necklace, a ring and a cultural accessory, each only into an empty slot
    fn add_accessories(&self, ctx: &CharacterContext, equipment: &mut Equipment, rng: &mut impl Rng) {
        let Some(zone) = ctx.culture else {
            log::debug!("No culture given, skipping accessories");
            return;
        };
        let profession = ctx.profession_key();
        let rolls = [
            (AccessoryKind::Necklace, self.odds.amulet_chance(ctx.culture, ctx.era, &profession)),
            (AccessoryKind::Ring, self.odds.ring_chance(ctx.privilege)),
            (AccessoryKind::Cultural, self.odds.cultural_accessory_chance(ctx.culture, ctx.privilege)),
        ];

        for (kind, chance) in rolls {
            if rng.gen::<f64>() >= chance {
                continue;
            }
            let query = AccessoryQuery {
                zone,
                era: ctx.era,
                wealth: ctx.wealth_tier(),
                gender: ctx.gender,
                profession: &profession,
                kind,
            };
            let candidates: Vec<_> = self
                .accessories
                .accessories_for_character(&query)
                .into_iter()
                .filter(|a| equipment.is_empty(a.slot))
                .collect();

            let Some(chosen) = select_random_accessory(&candidates, rng.gen()) else {
                continue;
            };
            let Some(mut item) = self.factory.create_item_instance(&chosen.base_id, ctx.era, ctx.culture) else {
                continue;
            };
            item.name = apply_quality_adjective(&item.name, ctx.privilege, rng);
            item.quality = Some(quality_for_privilege(ctx.privilege));
            log::debug!("Adding {} to {:?}", item.name, chosen.slot);
            equipment.equip_in(chosen.slot, item);
        }
    }

    fn register_companions(
        &self,
        ctx: &CharacterContext,
        package: &StartingPackage,
        service: &mut dyn CompanionService,
        rng: &mut impl Rng,
    ) -> Vec<String> {
        let multiplier = self.odds.pet_chance_multiplier(&ctx.profession);
        let mut wanted = package.companions.clone();
        for roll in &self.odds.pet_rolls {
            if rng.gen::<f64>() < (roll.chance * multiplier).clamp(0.0, 1.0) {
                wanted.push(roll.species.clone());
            }
        }
        if rng.gen::<f64>() < (self.odds.base_cat_chance(ctx.culture) * multiplier).clamp(0.0, 1.0) {
            wanted.push("cat".to_string());
        }

        let pre_columbian = ctx.culture.is_some_and(|z| z.is_pre_columbian_american());
        let mut registered: Vec<String> = Vec::new();
        for species in wanted {
            if pre_columbian && is_old_world_species(&species) {
                log::debug!("No {} in {:?}, skipping", species, ctx.culture);
                continue;
            }
            if registered.contains(&species) {
                continue;
            }
            if let Some(companion) = service.create_tamed_animal(&species) {
                service.add_to_party(companion);
                registered.push(species);
            }
        }
        registered
    }
}

/// Runs character creation: forgets the previous character's companions,
/// then assembles the new kit
pub struct CharacterOutfitter<'a, S, C> {
    assembler: StartingKitAssembler<'a>,
    companions: S,
    cache: C,
}

impl<'a, S: CompanionService, C: CompanionCache> CharacterOutfitter<'a, S, C> {
    pub fn new(assembler: StartingKitAssembler<'a>, companions: S, cache: C) -> Self {
        Self {
            assembler,
            companions,
            cache,
        }
    }

    pub fn outfit(&mut self, request: &OutfitRequest, rng: &mut impl Rng) -> StartingKit {
        self.cache.clear();
        self.assembler
            .assemble_starting_package(request, &mut self.companions, rng)
    }

    pub fn into_parts(self) -> (S, C) {
        (self.companions, self.cache)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::context::{CulturalZone, HistoricalEra};
    use crate::data::odds::PetRoll;
    use crate::items::{EquipSlot, ItemCategory, ItemQuality, KeywordClassifier};
    use crate::outfit::companions::{Companion, MemoryCompanionCache, Party};
    use crate::outfit::quality::adjective_pool;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn quiet_odds() -> OddsConfig {
        let mut odds = OddsConfig::default();
        odds.pet_rolls.clear();
        odds.default_cat_chance = 0.0;
        for culture in &mut odds.cultures {
            culture.cat_chance = 0.0;
        }
        odds
    }

    fn generous_odds() -> OddsConfig {
        let mut odds = quiet_odds();
        odds.cultures.clear();
        odds.eras.clear();
        odds.default_amulet_chance = 1.0;
        odds.default_cultural_accessory_chance = 1.0;
        odds.ring_base = 1.0;
        odds
    }

    fn assemble(data: &DataManager, request: &OutfitRequest) -> (StartingKit, Party) {
        let assembler = StartingKitAssembler::from_data(data, &KeywordClassifier);
        let mut party = Party::new();
        let mut rng = StdRng::seed_from_u64(11);
        let kit = assembler.assemble_starting_package(request, &mut party, &mut rng);
        (kit, party)
    }

    #[test]
    fn test_predefined_package() {
        let ctx = CharacterContext::new("farmer")
            .with_culture(CulturalZone::European)
            .with_era(HistoricalEra::HighMedieval);
        let request = OutfitRequest::new(ctx).without_accessories().without_companions();
        let (kit, party) = assemble(&DataManager::default(), &request);

        assert_eq!(kit.inventory.len(), 5);
        let bread: Vec<_> = kit.inventory.iter().filter(|i| i.base_id == "bread").collect();
        assert_eq!(bread.len(), 1);
        assert_eq!(bread[0].quantity, 2);
        assert_eq!(kit.equipped_items.len(), 3);
        assert!(kit.equipped_items.get(EquipSlot::Head).is_some());
        assert!(party.is_empty());
    }

    #[test]
    fn test_culture_drops_items_and_picks_weapon() {
        let ctx = CharacterContext::new("soldier").with_culture(CulturalZone::Mesoamerican);
        let request = OutfitRequest::new(ctx).without_accessories().without_companions();
        let (kit, _) = assemble(&DataManager::default(), &request);

        assert!(kit.inventory.iter().all(|i| i.base_id != "bread" && i.base_id != "hard_cheese"));
        assert_eq!(kit.inventory.len(), 3);
        let weapon = kit.equipped_items.get(EquipSlot::MainHand).unwrap();
        assert_eq!(weapon.base_id, "obsidian_club");
        assert_eq!(weapon.category, ItemCategory::Weapon);
    }

    #[test]
    fn test_unknown_profession_uses_contextual_package() {
        let ctx = CharacterContext::new("weaver")
            .with_culture(CulturalZone::EastAsian)
            .with_privilege(0.5);
        let request = OutfitRequest::new(ctx).without_accessories().without_companions();
        let (kit, _) = assemble(&DataManager::default(), &request);

        assert!(kit.inventory.iter().any(|i| i.base_id == "rice_balls"));
        assert!(kit.equipped_items.get(EquipSlot::Body).is_some());
        assert!(kit.equipped_items.get(EquipSlot::MainHand).is_some());
    }

    #[test]
    fn test_accessories_fill_empty_slots() {
        let mut data = DataManager::default();
        data.odds = generous_odds();
        let ctx = CharacterContext::new("farmer")
            .with_culture(CulturalZone::European)
            .with_privilege(0.95);
        let (kit, _) = assemble(&data, &OutfitRequest::new(ctx));

        for slot in [EquipSlot::Neck, EquipSlot::Ring, EquipSlot::Accessory] {
            let item = kit.equipped_items.get(slot).unwrap();
            let adjective = item.name.split_whitespace().next().unwrap();
            assert!(adjective_pool(0.95).contains(&adjective), "{} lacks an elite adjective", item.name);
            assert_eq!(item.quality, Some(ItemQuality::Masterwork));
        }
        assert_eq!(kit.equipped_items.get(EquipSlot::Head).unwrap().base_id, "straw_hat");
    }

    #[test]
    fn test_accessories_never_replace_package_items() {
        let mut data = DataManager::default();
        data.odds = generous_odds();
        let jeweller = StartingPackage {
            inventory: vec!["bread".to_string()],
            equipment: [
                (EquipSlot::Neck, SlotEntry::Item("wool_scarf".to_string())),
                (EquipSlot::Ring, SlotEntry::Item("iron_ring".to_string())),
            ]
            .into_iter()
            .collect(),
            companions: Vec::new(),
        };
        data.packages.packages.insert("jeweller".to_string(), jeweller);

        let ctx = CharacterContext::new("jeweller")
            .with_culture(CulturalZone::European)
            .with_privilege(0.5);
        let (kit, _) = assemble(&data, &OutfitRequest::new(ctx).without_companions());

        assert_eq!(kit.equipped_items.get(EquipSlot::Neck).unwrap().base_id, "wool_scarf");
        assert_eq!(kit.equipped_items.get(EquipSlot::Ring).unwrap().base_id, "iron_ring");
        assert_eq!(kit.equipped_items.get(EquipSlot::Accessory).unwrap().base_id, "pilgrim_badge");
    }

    #[test]
    fn test_no_accessories_without_culture() {
        let mut data = DataManager::default();
        data.odds = generous_odds();
        let (kit, _) = assemble(&data, &OutfitRequest::new(CharacterContext::new("farmer")));
        assert!(kit.equipped_items.get(EquipSlot::Ring).is_none());
    }

    #[test]
    fn test_package_companions_respect_region() {
        let mut data = DataManager::default();
        data.odds = quiet_odds();

        let ctx = CharacterContext::new("shepherd").with_culture(CulturalZone::European);
        let (kit, party) = assemble(&data, &OutfitRequest::new(ctx).without_accessories());
        assert_eq!(kit.companions, vec!["sheepdog", "sheep"]);
        assert_eq!(party.len(), 2);

        let ctx = CharacterContext::new("shepherd").with_culture(CulturalZone::Mesoamerican);
        let (kit, party) = assemble(&data, &OutfitRequest::new(ctx).without_accessories());
        assert_eq!(kit.companions, vec!["sheepdog"]);
        assert!(!party.has_species("sheep"));
    }

    #[test]
    fn test_pet_rolls_exclude_old_world_species() {
        let mut data = DataManager::default();
        data.odds = quiet_odds();
        data.odds.pet_rolls = vec![
            PetRoll { species: "horse".to_string(), chance: 1.0 },
            PetRoll { species: "llama".to_string(), chance: 1.0 },
        ];
        let ctx = CharacterContext::new("hunter").with_culture(CulturalZone::Andean);
        let (kit, party) = assemble(&data, &OutfitRequest::new(ctx).without_accessories());

        assert_eq!(kit.companions, vec!["dog", "llama"]);
        assert!(!party.has_species("horse"));
    }

    #[test]
    fn test_unknown_species_does_not_abort() {
        let mut data = DataManager::default();
        data.odds = quiet_odds();
        let menagerie = StartingPackage {
            inventory: vec!["bread".to_string()],
            equipment: Default::default(),
            companions: vec!["griffin".to_string(), "cat".to_string()],
        };
        data.packages.packages.insert("keeper".to_string(), menagerie);

        let (kit, party) = assemble(&data, &OutfitRequest::new(CharacterContext::new("keeper")));
        assert_eq!(kit.companions, vec!["cat"]);
        assert_eq!(party.len(), 1);
        assert_eq!(kit.inventory.len(), 1);
    }

    #[test]
    fn test_outfitter_clears_cache_first() {
        let mut data = DataManager::default();
        data.odds = quiet_odds();
        let assembler = StartingKitAssembler::from_data(&data, &KeywordClassifier);
        let mut cache = MemoryCompanionCache::default();
        cache.store(&[Companion::tamed("goat").unwrap()]);

        let mut outfitter = CharacterOutfitter::new(assembler, Party::new(), cache);
        let mut rng = StdRng::seed_from_u64(3);
        let request = OutfitRequest::new(CharacterContext::new("hunter")).without_accessories();
        let kit = outfitter.outfit(&request, &mut rng);

        assert_eq!(kit.companions, vec!["dog"]);
        let (party, cache) = outfitter.into_parts();
        assert_eq!(party.len(), 1);
        assert!(cache.companions.is_empty());
        assert_eq!(cache.clears, 1);
    }

    #[test]
    fn test_carried_weight_and_encumbrance() {
        let ctx = CharacterContext::new("blacksmith").with_era(HistoricalEra::LateMedieval);
        let request = OutfitRequest::new(ctx).without_accessories().without_companions();
        let (kit, _) = assemble(&DataManager::default(), &request);

        let expected: f32 = kit.inventory.iter().map(|i| i.stack_weight()).sum::<f32>()
            + kit.equipped_items.all_items().map(|i| i.stack_weight()).sum::<f32>();
        assert!((kit.carried_weight() - expected).abs() < 1e-4);

        let report = kit.encumbrance(10.0);
        assert_eq!(report.max_capacity, 150.0);
        assert!((report.total_weight - expected).abs() < 1e-4);
    }
}
