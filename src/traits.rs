//! Trait definitions for the profile editor's collaborators.
//!
//! The editor depends on two capabilities it does not implement itself:
//! access to the profile collection (provided by whoever owns storage) and
//! a presentation layer that draws frames and sizes the window.

use par_term_config::SharedProfileCollection;

use crate::profile_editor::{EditorFrame, EditorSize, ProfileTab};
use crate::ui_constants::{PROFILE_EDITOR_HEIGHT, PROFILE_EDITOR_WIDTH};

/// Profile model access.
///
/// Implemented by the component that owns the profile collection. The editor
/// asks for the handle each time it needs data and drops it before returning.
pub trait ProfileModelProvider {
    /// Handle to the current profile collection
    fn profile_model(&self) -> SharedProfileCollection;
}

/// Presentation layer for the editor.
///
/// Layout, fonts and animation are the view's business; the editor only
/// hands it complete frames and asks it for sizes.
pub trait EditorView {
    /// Draw one complete editor state
    fn render(&mut self, frame: &EditorFrame);

    /// Size the tab view wants when showing `tab`
    fn preferred_size(&self, tab: ProfileTab) -> EditorSize;

    /// Resize the window to `size`
    fn apply_size(&mut self, size: EditorSize, animated: bool);
}

/// View that draws nothing. Used when the editor runs without a window.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessView;

impl EditorView for HeadlessView {
    fn render(&mut self, _frame: &EditorFrame) {}

    fn preferred_size(&self, _tab: ProfileTab) -> EditorSize {
        EditorSize::new(PROFILE_EDITOR_WIDTH, PROFILE_EDITOR_HEIGHT)
    }

    fn apply_size(&mut self, _size: EditorSize, _animated: bool) {}
}
