//! Profile persistence.
//!
//! Each player is stored in its own file, `<base_dir>/<name>.<extension>`,
//! holding a [`StoredProfile`] document.
//!
//! Two sets of operations are offered:
//!
//! - **`try_save` / `try_load`** return a [`Result`] that tells "not found",
//!   I/O failures, decode failures and unsupported versions apart. Profiles
//!   with NaN or infinite scores are refused before anything is written.
//! - **`save` / `load`** never fail: errors are logged, `save` returns nothing
//!   and `load` turns every failure into `None`.

mod config;
mod format;

pub use config::*;
pub use format::*;

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::error::{Error, Result};
use crate::profile::PlayerProfile;

pub struct ProfileStore {
    config: StoreConfig,
}

impl ProfileStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn base_dir(&self) -> &Path {
        &self.config.base_dir
    }

    /// File backing the given player name
    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        Ok(self
            .config
            .base_dir
            .join(format!("{}.{}", name, self.config.extension)))
    }

    /// Write the whole profile, replacing any previous file for the same name
    pub fn try_save(&self, profile: &PlayerProfile) -> Result<PathBuf> {
        let path = self.path_for(profile.name())?;
        let stored = StoredProfile::from(profile);
        stored.check_scores()?;

        fs::create_dir_all(&self.config.base_dir)?;
        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(&mut writer, &stored)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        writer.flush()?;

        Ok(path)
    }

    /// Save and log the outcome; failures are not reported to the caller
    pub fn save(&self, profile: &PlayerProfile) {
        match self.try_save(profile) {
            Ok(path) => info!("Saved profile '{}' to {}", profile.name(), path.display()),
            Err(e) => error!("Failed to save profile '{}': {:?}", profile.name(), e),
        }
    }

    pub fn try_load(&self, name: &str) -> Result<PlayerProfile> {
        let path = self.path_for(name)?;
        let file = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::ProfileNotFound(name.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let stored: StoredProfile = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| Error::Decode {
                path: path.clone(),
                source,
            })?;

        if stored.name != name {
            debug!(
                "Profile file {} holds name '{}', requested '{}'",
                path.display(),
                stored.name,
                name
            );
        }

        stored.into_profile()
    }

    /// Load a profile, or `None` if it is missing or unreadable
    pub fn load(&self, name: &str) -> Option<PlayerProfile> {
        match self.try_load(name) {
            Ok(profile) => {
                info!("Loaded profile '{}'", name);
                Some(profile)
            }
            Err(e) if e.is_not_found() => {
                debug!("No stored profile for '{}'", name);
                None
            }
            Err(e) => {
                error!("Failed to load profile '{}': {:?}", name, e);
                None
            }
        }
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).map(|p| p.is_file()).unwrap_or(false)
    }

    /// Remove the stored file. Returns false if there was nothing to remove.
    pub fn delete(&self, name: &str) -> Result<bool> {
        let path = self.path_for(name)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                info!("Deleted profile '{}'", name);
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Names of all stored profiles, sorted
    pub fn list_profiles(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.config.base_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(self.config.extension.as_str()) {
                continue;
            }
            match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => names.push(stem.to_string()),
                None => warn!("Skipping non UTF-8 profile file {}", path.display()),
            }
        }
        names.sort();
        Ok(names)
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

/// Player names become file names, so anything that could leave the base
/// directory is refused.
fn validate_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if invalid {
        return Err(Error::InvalidProfileName(name.to_string()));
    }
    Ok(())
}
