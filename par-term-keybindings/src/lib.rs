//! Session hotkey handling for par-term profiles.
//!
//! Features:
//! - Parsing of hotkey strings (Ctrl+Shift+T, CmdOrCtrl+1, F5, ...)
//! - Canonical formatting so equivalent spellings compare equal
//! - Conflict detection across the profiles of a collection

pub mod parser;

pub use parser::{Hotkey, HotkeyKey, HotkeyModifiers, HotkeyParseError, parse_hotkey};

use par_term_config::{ProfileCollection, ProfileGuid};
use std::collections::HashMap;
use thiserror::Error;

/// A hotkey is already bound to another profile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Hotkey {hotkey} is already used by profile {holder}")]
pub struct HotkeyConflict {
    /// Canonical form of the contested hotkey
    pub hotkey: String,
    /// Profile that currently owns the binding
    pub holder: ProfileGuid,
}

/// Registry mapping hotkeys to the profile that owns them.
#[derive(Debug, Default)]
pub struct HotkeyRegistry {
    bindings: HashMap<Hotkey, ProfileGuid>,
}

impl HotkeyRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from the hotkeys stored on a collection's profiles.
    ///
    /// Unparseable stored hotkeys are logged and skipped. When two profiles
    /// already share a binding, the one earlier in display order wins.
    pub fn from_collection(collection: &ProfileCollection) -> Self {
        let mut registry = Self::new();
        for profile in collection.profiles_ordered() {
            let Some(raw) = profile.hotkey.as_deref() else {
                continue;
            };
            match parser::parse_hotkey(raw) {
                Ok(hotkey) => {
                    if let Some(existing) = registry.bindings.get(&hotkey) {
                        log::warn!(
                            "Profiles {} and {} share hotkey {}",
                            existing,
                            profile.guid,
                            hotkey
                        );
                        continue;
                    }
                    registry.bindings.insert(hotkey, profile.guid.clone());
                }
                Err(e) => {
                    log::warn!(
                        "Invalid stored hotkey '{}' on profile {}: {}",
                        raw,
                        profile.guid,
                        e
                    );
                }
            }
        }
        log::debug!("Hotkey registry built with {} bindings", registry.len());
        registry
    }

    /// The profile bound to `hotkey`, if any.
    pub fn holder(&self, hotkey: &Hotkey) -> Option<&ProfileGuid> {
        self.bindings.get(hotkey)
    }

    /// Check that `hotkey` is free for `guid` (unbound, or already bound to it).
    pub fn check_available(&self, hotkey: &Hotkey, guid: &ProfileGuid) -> Result<(), HotkeyConflict> {
        match self.bindings.get(hotkey) {
            Some(holder) if holder != guid => Err(HotkeyConflict {
                hotkey: hotkey.to_string(),
                holder: holder.clone(),
            }),
            _ => Ok(()),
        }
    }

    /// Check if the registry has any bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Get the number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}
