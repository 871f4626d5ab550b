//! Storage utilities for profile persistence
//!
//! Profiles are stored as a YAML list in `~/.config/par-term/profiles.yaml`.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::profile_types::{Profile, ProfileCollection};

/// Get the default profiles file path
pub fn profiles_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("par-term")
        .join("profiles.yaml")
}

/// Load profiles from a specific file
///
/// A missing or empty file yields an empty collection. When the file lists
/// the same GUID more than once the last entry wins.
pub fn load_profiles_from(path: impl AsRef<Path>) -> Result<ProfileCollection> {
    let path = path.as_ref();
    log::debug!("Loading profiles from {:?}", path);
    if !path.exists() {
        log::info!("No profiles file at {:?}, starting empty", path);
        return Ok(ProfileCollection::new());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read profiles from {:?}", path))?;
    if contents.trim().is_empty() {
        return Ok(ProfileCollection::new());
    }

    let profiles: Vec<Profile> = serde_yaml_ng::from_str(&contents)
        .with_context(|| format!("Failed to parse profiles from {:?}", path))?;

    let mut seen = HashSet::new();
    for p in &profiles {
        if !seen.insert(&p.guid) {
            log::warn!("Duplicate profile GUID {} in {:?}; keeping the last entry", p.guid, path);
        }
    }

    log::info!("Loaded {} profiles from {:?}", profiles.len(), path);
    Ok(ProfileCollection::from_profiles(profiles))
}

/// Save profiles to a specific file, creating parent directories as needed
pub fn save_profiles_to(collection: &ProfileCollection, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {:?}", parent))?;
    }

    let profiles = collection.to_vec();
    let contents = serde_yaml_ng::to_string(&profiles).context("Failed to serialize profiles")?;

    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write profiles to {:?}", path))?;

    log::info!("Saved {} profiles to {:?}", profiles.len(), path);
    Ok(())
}
