//! Save/load system
//!
//! Handles saving and loading starting kits and the companion cache.

pub mod kit_file;

pub use kit_file::{
    KitFile, SaveError, FileCompanionCache,
    save_kit,
    save_kit_to, load_kit_from, save_path, save_directory,
};
