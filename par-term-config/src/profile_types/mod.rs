//! Profile types and the shared profile collection.
//!
//! ## Sub-modules
//!
//! - [`profile`]: `Profile` record and its `ProfileGuid` identifier
//! - [`collection`]: `ProfileCollection`, the ordered GUID-keyed store

pub mod collection;
pub mod profile;

pub use collection::{ProfileCollection, SharedProfileCollection};
pub use profile::{Profile, ProfileGuid};
