//! RON data loader
//!
//! Loads outfitting data from external RON files, with fallback to hardcoded defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::accessories::{default_accessories, AccessoryTable};
use super::catalog::{default_item_templates, ItemTable, ItemTemplates};
use super::odds::OddsConfig;
use super::packages::{default_packages, PackageTable};
use super::rules::{default_rules, HistoricalRules};

/// Default location of the data files, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "assets/data";

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Manages all external outfitting data
#[derive(Debug, Clone)]
pub struct DataManager {
    /// Item templates
    pub items: ItemTable,
    /// Era windows, cultural restrictions and regional materials
    pub rules: HistoricalRules,
    /// Jewelry and cultural accessories
    pub accessories: AccessoryTable,
    /// Predefined starting packages
    pub packages: PackageTable,
    /// Accessory and pet probabilities
    pub odds: OddsConfig,
}

impl DataManager {
    /// Load every table from `base_path`; each missing or broken file falls back on its own
    pub fn load_from_dir(base_path: &Path) -> Self {
        let items: ItemTemplates = load_or_default(base_path, "items.ron", default_item_templates);
        Self {
            items: ItemTable::from(items),
            rules: load_or_default(base_path, "rules.ron", default_rules),
            accessories: load_or_default(base_path, "accessories.ron", default_accessories),
            packages: load_or_default(base_path, "packages.ron", default_packages),
            odds: load_or_default(base_path, "odds.ron", OddsConfig::default),
        }
    }
}

impl Default for DataManager {
    fn default() -> Self {
        Self {
            items: ItemTable::from(default_item_templates()),
            rules: default_rules(),
            accessories: default_accessories(),
            packages: default_packages(),
            odds: OddsConfig::default(),
        }
    }
}

/// Read and parse one RON file
pub fn load_ron<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&content).map_err(|e| DataError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn load_or_default<T: DeserializeOwned>(base_path: &Path, file: &str, default: fn() -> T) -> T {
    let path = base_path.join(file);
    if !path.exists() {
        log::debug!("{} not found, using built-in defaults", path.display());
        return default();
    }
    match load_ron(&path) {
        Ok(value) => {
            log::info!("Loaded {}", path.display());
            value
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            default()
        }
    }
}

fn write_ron<T: Serialize>(path: &Path, value: &T) -> Result<(), DataError> {
    let text = ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default()).map_err(|e| {
        DataError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;
    fs::write(path, text).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Export all default data to RON files for easy editing
pub fn export_default_data(base_path: &Path) -> Result<(), DataError> {
    fs::create_dir_all(base_path).map_err(|source| DataError::Io {
        path: base_path.to_path_buf(),
        source,
    })?;

    write_ron(&base_path.join("items.ron"), &default_item_templates())?;
    write_ron(&base_path.join("rules.ron"), &default_rules())?;
    write_ron(&base_path.join("accessories.ron"), &default_accessories())?;
    write_ron(&base_path.join("packages.ron"), &default_packages())?;
    write_ron(&base_path.join("odds.ron"), &OddsConfig::default())?;

    log::info!("Exported default data to {}", base_path.display());
    Ok(())
}
