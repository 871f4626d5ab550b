//! Core `Profile` record and its `ProfileGuid` identifier.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a profile.
///
/// GUIDs are opaque strings. Freshly generated ones are upper-case UUID v4
/// text, but any string loaded from disk is accepted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileGuid(String);

impl ProfileGuid {
    /// Wrap an existing GUID string
    pub fn new(guid: impl Into<String>) -> Self {
        Self(guid.into())
    }

    /// Generate a new, unique GUID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string().to_uppercase())
    }

    /// The GUID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProfileGuid {
    fn from(guid: &str) -> Self {
        Self::new(guid)
    }
}

impl From<String> for ProfileGuid {
    fn from(guid: String) -> Self {
        Self(guid)
    }
}

/// A terminal session profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identifier for this profile
    pub guid: ProfileGuid,

    /// Display name for the profile
    pub name: String,

    /// Command to run instead of the default shell
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Arguments for the command
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_args: Option<Vec<String>>,

    /// Working directory for the session (if None, inherits)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,

    /// Shell to use for this profile (e.g. "/bin/zsh")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,

    /// Per-profile login shell override.
    /// None = inherit global setting, Some(true/false) = override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_shell: Option<bool>,

    /// Custom tab name (if None, uses default naming)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_name: Option<String>,

    /// Icon identifier for the profile (emoji or icon name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Display order in the profile list
    #[serde(default)]
    pub order: usize,

    /// Searchable tags to organize and filter profiles
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Session hotkey in canonical form (e.g. "Ctrl+Shift+T").
    /// Unique across the collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotkey: Option<String>,

    /// Font family used by sessions of this profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    /// Font size in points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,

    /// Per-profile badge text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_text: Option<String>,
}

impl Profile {
    /// Create a new profile with the given name and a fresh GUID
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_guid(ProfileGuid::generate(), name)
    }

    /// Create a profile with a specific GUID (for testing or deserialization)
    pub fn with_guid(guid: impl Into<ProfileGuid>, name: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
            command: None,
            command_args: None,
            working_directory: None,
            shell: None,
            login_shell: None,
            tab_name: None,
            icon: None,
            order: 0,
            tags: Vec::new(),
            hotkey: None,
            font_family: None,
            font_size: None,
            badge_text: None,
        }
    }

    /// Builder method to set command
    pub fn command(mut self, cmd: impl Into<String>) -> Self {
        self.command = Some(cmd.into());
        self
    }

    /// Builder method to set icon
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Builder method to set order
    pub fn order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    /// Builder method to set the session hotkey
    pub fn hotkey(mut self, hotkey: impl Into<String>) -> Self {
        self.hotkey = Some(hotkey.into());
        self
    }

    /// Builder method to set font family and size
    pub fn font(mut self, family: impl Into<String>, size: f32) -> Self {
        self.font_family = Some(family.into());
        self.font_size = Some(size);
        self
    }

    /// Get the display label (icon + name if icon exists)
    pub fn display_label(&self) -> String {
        if let Some(icon) = &self.icon {
            format!("{} {}", icon, self.name)
        } else {
            self.name.clone()
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new("New Profile")
    }
}
