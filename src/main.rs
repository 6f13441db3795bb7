//! Heirloom - Entry Point
//!
//! Assembles a starting kit for one character and prints it as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use heirloom::data::loader::{export_default_data, DEFAULT_DATA_DIR};
use heirloom::items::encumbrance::EncumbranceReport;
use heirloom::items::KeywordClassifier;
use heirloom::outfit::{CompanionCache, Companion, Party};
use heirloom::save::{save_kit, FileCompanionCache};
use heirloom::{
    CharacterContext, CharacterOutfitter, CulturalZone, DataManager, Gender, HistoricalEra,
    OutfitRequest, StartingKit, StartingKitAssembler,
};

/// Outfit a new character for their time and place
#[derive(Parser, Debug)]
#[command(name = "heirloom")]
#[command(author, version, about = "Heirloom - starting kits for historical characters", long_about = None)]
struct Args {
    /// Profession (e.g. farmer, hunter, merchant)
    profession: String,

    /// Cultural zone (e.g. european, mesoamerican, east_asian)
    #[arg(short = 'c', long = "culture")]
    culture: Option<CulturalZone>,

    /// Historical era (e.g. ancient, high_medieval)
    #[arg(short = 'e', long = "era")]
    era: Option<HistoricalEra>,

    /// Wealth and status, 0.0 to 1.0
    #[arg(short = 'p', long = "privilege", default_value_t = 0.5)]
    privilege: f64,

    /// Gender (male/female)
    #[arg(short = 'g', long = "gender")]
    gender: Option<Gender>,

    /// Strength used for the encumbrance summary
    #[arg(long = "strength", default_value_t = 10.0)]
    strength: f32,

    /// Seed for reproducible kits
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Directory holding the RON data files
    #[arg(long = "data", default_value = DEFAULT_DATA_DIR)]
    data: PathBuf,

    /// Write the built-in data files to this directory and exit
    #[arg(long = "export-data")]
    export_data: Option<PathBuf>,

    /// Save the kit to this slot
    #[arg(long = "save")]
    save: Option<u8>,

    /// Skip jewelry and cultural accessories
    #[arg(long = "no-accessories")]
    no_accessories: bool,

    /// Skip companion animals
    #[arg(long = "no-companions")]
    no_companions: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    character: &'a CharacterContext,
    kit: &'a StartingKit,
    party: &'a [Companion],
    carried_weight: f32,
    encumbrance: EncumbranceReport,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Some(dir) = &args.export_data {
        export_default_data(dir).with_context(|| format!("exporting data to {}", dir.display()))?;
        return Ok(());
    }

    let data = DataManager::load_from_dir(&args.data);

    let mut character = CharacterContext::new(args.profession.as_str()).with_privilege(args.privilege);
    character.culture = args.culture;
    character.era = args.era;
    character.gender = args.gender;

    let mut request = OutfitRequest::new(character.clone());
    if args.no_accessories {
        request = request.without_accessories();
    }
    if args.no_companions {
        request = request.without_companions();
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let assembler = StartingKitAssembler::from_data(&data, &KeywordClassifier);
    let mut outfitter = CharacterOutfitter::new(assembler, Party::new(), FileCompanionCache::in_save_directory());
    let kit = outfitter.outfit(&request, &mut rng);
    let (party, mut cache) = outfitter.into_parts();
    cache.store(party.members());

    log::info!(
        "Outfitted a {} with {} items, {} equipped, {} companions",
        character.profession,
        kit.inventory.len(),
        kit.equipped_items.len(),
        party.len()
    );

    if let Some(slot) = args.save {
        match save_kit(&kit, &character, slot) {
            Ok(path) => eprintln!("Saved kit to {}", path.display()),
            Err(e) => {
                log::error!("Failed to save kit: {}", e);
                eprintln!("Error: could not save kit: {}", e);
            }
        }
    }

    let report = Report {
        character: &character,
        kit: &kit,
        party: party.members(),
        carried_weight: kit.carried_weight(),
        encumbrance: kit.encumbrance(args.strength),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
