//! Profile "get info" editor controller.
//!
//! Tracks which profile is being edited (by GUID), which tab is showing and
//! whether a live session is being edited; writes committed edits back to the
//! shared collection and announces name and hotkey changes on the
//! [`ProfileEventBus`](crate::events::ProfileEventBus).

mod edits;
mod navigation;
mod selection;
mod state;

pub use edits::{FontSelection, ProfileEdit};
pub use state::{
    EditorComponent, EditorFrame, EditorMode, EditorSelection, EditorSize, ProfileEditor,
    ProfileTab,
};
