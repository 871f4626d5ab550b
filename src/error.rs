//! Typed errors for committing profile edits.
//!
//! None of these are fatal. A rejected edit leaves the collection untouched
//! and publishes nothing; the field that produced the edit shows the message.

use par_term_config::ProfileGuid;
use par_term_keybindings::{HotkeyConflict, HotkeyParseError};
use thiserror::Error;

/// Reasons an edit commit was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// The editor has no selected profile.
    #[error("No profile is selected")]
    NoSelection,

    /// The selected profile was removed from the collection (or the
    /// collection's owner has gone away) since it was selected.
    #[error("Profile {0} no longer exists")]
    ProfileNotFound(ProfileGuid),

    /// The profile name is empty after trimming.
    #[error("Profile name is required")]
    EmptyName,

    /// The font size is zero, negative or not a number.
    #[error("Invalid font size: {0}")]
    InvalidFontSize(String),

    /// The hotkey string could not be parsed.
    #[error("Invalid hotkey: {0}")]
    InvalidHotkey(#[from] HotkeyParseError),

    /// The hotkey is already bound to a different profile.
    #[error(transparent)]
    HotkeyConflict(#[from] HotkeyConflict),

    /// A commit was requested but no edit is staged.
    #[error("No edit is staged")]
    NothingStaged,
}
