//! Starting kit persistence
//!
//! Saves an assembled kit, together with the character it was made for, as
//! versioned JSON.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::context::CharacterContext;
use crate::outfit::{Companion, CompanionCache, StartingKit};

/// Kit file version for compatibility checking
const KIT_VERSION: u32 = 1;

const COMPANION_CACHE_FILE: &str = "companions.json";

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Kit version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> SaveError + '_ {
    move |source| SaveError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// On-disk layout of a saved kit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitFile {
    pub version: u32,
    pub character: CharacterContext,
    pub kit: StartingKit,
}

/// Get the save directory path
pub fn save_directory() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "heirloom", "Heirloom") {
        let mut path = proj_dirs.data_local_dir().to_path_buf();
        path.push("saves");
        path
    } else {
        // Fallback to current directory
        PathBuf::from("./saves")
    }
}

/// Get the path for a specific save slot
pub fn save_path(slot: u8) -> PathBuf {
    save_directory().join(format!("kit_{}.json", slot))
}

pub fn save_kit(kit: &StartingKit, character: &CharacterContext, slot: u8) -> Result<PathBuf, SaveError> {
    let path = save_path(slot);
    save_kit_to(&path, kit, character)?;
    log::info!("Kit saved to slot {}", slot);
    Ok(path)
}

/// Write a kit to an explicit path, creating parent directories
pub fn save_kit_to(path: &Path, kit: &StartingKit, character: &CharacterContext) -> Result<(), SaveError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(io_error(dir))?;
    }
    let file = KitFile {
        version: KIT_VERSION,
        character: character.clone(),
        kit: kit.clone(),
    };
    let json = serde_json::to_string_pretty(&file)?;
    fs::write(path, json).map_err(io_error(path))
}

pub fn load_kit_from(path: &Path) -> Result<KitFile, SaveError> {
    let data = fs::read_to_string(path).map_err(io_error(path))?;
    let file: KitFile = serde_json::from_str(&data)?;
    if file.version != KIT_VERSION {
        return Err(SaveError::VersionMismatch {
            expected: KIT_VERSION,
            found: file.version,
        });
    }
    Ok(file)
}

/// Companion cache stored as a JSON file next to the saves
#[derive(Debug, Clone)]
pub struct FileCompanionCache {
    path: PathBuf,
}

impl FileCompanionCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Cache in the default save directory
    pub fn in_save_directory() -> Self {
        Self::new(save_directory().join(COMPANION_CACHE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Companions currently cached; empty when nothing is stored
    pub fn load(&self) -> Result<Vec<Companion>, SaveError> {
        match fs::read_to_string(&self.path) {
            Ok(data) => Ok(serde_json::from_str(&data)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(io_error(&self.path)(e)),
        }
    }

    fn write(&self, companions: &[Companion]) -> Result<(), SaveError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(io_error(dir))?;
        }
        let json = serde_json::to_string_pretty(companions)?;
        fs::write(&self.path, json).map_err(io_error(&self.path))
    }
}

impl CompanionCache for FileCompanionCache {
    fn clear(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => log::debug!("Cleared companion cache {}", self.path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => log::warn!("Failed to clear companion cache {}: {}", self.path.display(), e),
        }
    }

    fn store(&mut self, companions: &[Companion]) {
        if let Err(e) = self.write(companions) {
            log::warn!("Failed to store companions: {}", e);
        }
    }
}
