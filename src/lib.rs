// Library exports for testing and for hosts that embed the profile editor
//
// # Lock Usage
//
// The profile collection is shared as `Arc<parking_lot::RwLock<..>>`. The
// editor takes the lock only for the duration of one read or one commit and
// never holds it across a view render or a notification publish, so views and
// subscribers may read the collection from their callbacks.

/// Crate version, for hosts that report it
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod debug;
pub mod error;
pub mod events;
pub mod profile_editor;
pub mod traits;
pub mod ui_constants;

pub use error::EditError;
pub use events::{ProfileEventBus, ProfileEventEnvelope, ProfileNotification};
pub use par_term_config::{
    EditorConfig, Profile, ProfileCollection, ProfileGuid, SelectionFallback,
    SharedProfileCollection,
};
pub use profile_editor::{
    EditorComponent, EditorFrame, EditorMode, EditorSelection, EditorSize, FontSelection,
    ProfileEdit, ProfileEditor, ProfileTab,
};
pub use traits::{EditorView, HeadlessView, ProfileModelProvider};
