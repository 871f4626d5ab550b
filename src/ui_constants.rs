//! Named constants for profile editor layout dimensions.
//!
//! Only layout constants (dimensions, sizes, spacing) belong here.

// ---------------------------------------------------------------------------
// Profile Editor  (src/profile_editor/)
// ---------------------------------------------------------------------------

/// Default width of the profile editor window.
pub const PROFILE_EDITOR_WIDTH: f32 = 550.0;
/// Default height of the profile editor window.
pub const PROFILE_EDITOR_HEIGHT: f32 = 580.0;
/// Smallest size the editor will be resized to, whatever the view asks for.
pub const PROFILE_EDITOR_MIN_WIDTH: f32 = 400.0;
/// See [`PROFILE_EDITOR_MIN_WIDTH`].
pub const PROFILE_EDITOR_MIN_HEIGHT: f32 = 300.0;
