//! Behaviour settings for the profile editor.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default capacity of the profile notification channel.
pub const DEFAULT_EVENT_BUFFER_CAPACITY: usize = 64;

/// What the editor does when asked to select a GUID that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionFallback {
    /// Keep the current selection (if it still resolves)
    #[default]
    KeepPrevious,
    /// Select the first profile in the collection
    FirstAvailable,
}

/// Profile editor settings, loaded from YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Policy for selecting an unknown GUID
    pub selection_fallback: SelectionFallback,

    /// Reject a hotkey edit when another profile already uses the binding
    pub reject_hotkey_conflicts: bool,

    /// Capacity of the notification broadcast channel
    pub event_buffer_capacity: usize,

    /// Animate window resizes when switching tabs
    pub animate_resize: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            selection_fallback: SelectionFallback::default(),
            reject_hotkey_conflicts: true,
            event_buffer_capacity: DEFAULT_EVENT_BUFFER_CAPACITY,
            animate_resize: true,
        }
    }
}

impl EditorConfig {
    /// Load settings from a YAML file. A missing or empty file yields defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No editor config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml_ng::from_str(&contents)?;
        config.validate()?;
        log::info!("Loaded editor config from {:?}", path);
        Ok(config)
    }

    /// Check field values that serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.event_buffer_capacity == 0 {
            return Err(ConfigError::Validation(
                "event_buffer_capacity must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = tempdir().unwrap();
        let config = EditorConfig::load_from(temp.path().join("editor.yaml")).unwrap();
        assert_eq!(config, EditorConfig::default());
        assert!(config.reject_hotkey_conflicts);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("editor.yaml");
        std::fs::write(&path, "selection_fallback: first_available\n").unwrap();

        let config = EditorConfig::load_from(&path).unwrap();
        assert_eq!(config.selection_fallback, SelectionFallback::FirstAvailable);
        assert_eq!(config.event_buffer_capacity, DEFAULT_EVENT_BUFFER_CAPACITY);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("editor.yaml");
        std::fs::write(&path, "event_buffer_capacity: 0\n").unwrap();

        let err = EditorConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_bad_yaml_is_parse_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("editor.yaml");
        std::fs::write(&path, "selection_fallback: sideways\n").unwrap();

        let err = EditorConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
