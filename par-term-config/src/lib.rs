//! Configuration and profile data for the par-term profile editor.
//!
//! This crate provides:
//!
//! - `Profile` records identified by `ProfileGuid`
//! - `ProfileCollection`, the ordered GUID-keyed store shared with editors
//! - YAML persistence for the profile list
//! - `EditorConfig`, the editor's behaviour settings

pub mod editor_config;
pub mod error;
pub mod profile_types;
pub mod storage;

pub use editor_config::{DEFAULT_EVENT_BUFFER_CAPACITY, EditorConfig, SelectionFallback};
pub use error::ConfigError;
pub use profile_types::{Profile, ProfileCollection, ProfileGuid, SharedProfileCollection};
