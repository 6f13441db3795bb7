//! Contextual weapons
//!
//! Picks a weapon for a `*CONTEXTUAL*` slot from profession, era, culture
//! and privilege. Candidates are tried in order until the factory accepts one.

use crate::data::context::{CharacterContext, CulturalZone, HistoricalEra, WealthTier};
use crate::items::{Item, ItemFactory};

fn stone_age_weapons(profession: &str) -> Vec<&'static str> {
    match profession {
        "hunter" => vec!["flint_spear", "flint_knife"],
        _ => vec!["flint_spear", "wooden_club"],
    }
}

fn american_weapons(culture: CulturalZone, profession: &str, wealth: WealthTier) -> Vec<&'static str> {
    let mut ids = Vec::new();
    if profession == "hunter" {
        ids.push("yew_bow");
    }
    if culture == CulturalZone::Mesoamerican && wealth >= WealthTier::Modest {
        ids.push("obsidian_club");
    }
    ids.extend(["flint_spear", "wooden_club"]);
    ids
}

fn blade_for(culture: Option<CulturalZone>, era: Option<HistoricalEra>, wealth: WealthTier) -> &'static str {
    let bronze_age = era.is_some_and(|e| e <= HistoricalEra::Classical);
    match culture {
        _ if bronze_age => "bronze_sword",
        Some(CulturalZone::EastAsian) => "steel_dao",
        Some(CulturalZone::MiddleEastern) | Some(CulturalZone::NorthAfrican) => "iron_scimitar",
        _ if wealth == WealthTier::Elite => "steel_sword",
        _ => "iron_sword",
    }
}

fn spear_for(era: Option<HistoricalEra>) -> &'static str {
    if era.is_some_and(|e| e <= HistoricalEra::Classical) {
        "bronze_spear"
    } else {
        "iron_spear"
    }
}

/// Candidate template ids for a contextual weapon, best fit first
pub fn contextual_weapon_ids(ctx: &CharacterContext) -> Vec<&'static str> {
    let profession = ctx.profession_key();
    let wealth = ctx.wealth_tier();

    if ctx.era == Some(HistoricalEra::Prehistoric) {
        return stone_age_weapons(&profession);
    }
    if let Some(zone) = ctx.culture.filter(|z| z.is_pre_columbian_american()) {
        return american_weapons(zone, &profession, wealth);
    }

    let blade = blade_for(ctx.culture, ctx.era, wealth);
    let spear = spear_for(ctx.era);
    let mut ids = match profession.as_str() {
        "hunter" => vec!["yew_bow", spear],
        "noble" => vec![blade],
        "soldier" if wealth >= WealthTier::Wealthy => vec![blade, spear],
        "soldier" => vec![spear, blade],
        _ => match wealth {
            WealthTier::Poor => vec!["wooden_club"],
            WealthTier::Modest => vec![spear, "iron_knife"],
            WealthTier::Wealthy | WealthTier::Elite => vec![blade],
        },
    };
    ids.push("wooden_club");
    ids.dedup();
    ids
}

/// Create the first candidate weapon the factory accepts for this character
pub fn generate_contextual_weapon(factory: &ItemFactory<'_>, ctx: &CharacterContext) -> Option<Item> {
    let weapon = contextual_weapon_ids(ctx)
        .into_iter()
        .find_map(|id| factory.create_item_instance(id, ctx.era, ctx.culture));
    if weapon.is_none() {
        log::warn!("No contextual weapon fits a {} ({:?}, {:?})", ctx.profession, ctx.culture, ctx.era);
    }
    weapon
}
