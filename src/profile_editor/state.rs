//! Profile editor state definitions and model access helpers.

use std::collections::HashMap;
use std::sync::Weak;

use par_term_config::{EditorConfig, Profile, ProfileCollection, ProfileGuid};

use crate::events::ProfileEventBus;
use crate::traits::{EditorView, HeadlessView, ProfileModelProvider};
use crate::ui_constants::{PROFILE_EDITOR_MIN_HEIGHT, PROFILE_EDITOR_MIN_WIDTH};

use super::edits::ProfileEdit;

/// Tabs of the profile editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProfileTab {
    #[default]
    General,
    Appearance,
    Window,
    Terminal,
    Session,
    Hotkey,
    Advanced,
}

impl ProfileTab {
    /// Get the display name for this tab.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Appearance => "Appearance",
            Self::Window => "Window",
            Self::Terminal => "Terminal",
            Self::Session => "Session",
            Self::Hotkey => "Keys",
            Self::Advanced => "Advanced",
        }
    }

    /// Get all tabs in display order.
    pub fn all() -> &'static [Self] {
        &[
            Self::General,
            Self::Appearance,
            Self::Window,
            Self::Terminal,
            Self::Session,
            Self::Hotkey,
            Self::Advanced,
        ]
    }
}

/// What the editor is editing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// A saved profile picked from the profile list
    #[default]
    Standalone,
    /// The profile backing a live session ("Edit Session")
    EditCurrentSession,
}

/// Individually focusable fields, addressable by a string identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorComponent {
    Name,
    Command,
    WorkingDirectory,
    Shell,
    Icon,
    Tags,
    BadgeText,
    Font,
    TabName,
    Hotkey,
}

impl EditorComponent {
    const ALL: [Self; 10] = [
        Self::Name,
        Self::Command,
        Self::WorkingDirectory,
        Self::Shell,
        Self::Icon,
        Self::Tags,
        Self::BadgeText,
        Self::Font,
        Self::TabName,
        Self::Hotkey,
    ];

    /// Identifier hosts use to ask for this field
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Command => "command",
            Self::WorkingDirectory => "working_directory",
            Self::Shell => "shell",
            Self::Icon => "icon",
            Self::Tags => "tags",
            Self::BadgeText => "badge_text",
            Self::Font => "font",
            Self::TabName => "tab_name",
            Self::Hotkey => "hotkey",
        }
    }

    /// Look up a component by identifier. Case and `-`/`_` are ignored.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        let wanted: String = identifier
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL
            .into_iter()
            .find(|c| c.identifier().replace('_', "") == wanted)
    }

    /// Tab that hosts this field
    pub fn tab(&self) -> ProfileTab {
        match self {
            Self::Name
            | Self::Command
            | Self::WorkingDirectory
            | Self::Shell
            | Self::Icon
            | Self::Tags
            | Self::BadgeText => ProfileTab::General,
            Self::Font => ProfileTab::Appearance,
            Self::TabName => ProfileTab::Window,
            Self::Hotkey => ProfileTab::Hotkey,
        }
    }
}

/// Size of the editor's tab view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorSize {
    pub width: f32,
    pub height: f32,
}

impl EditorSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Raise each dimension to the editor minimum
    pub(super) fn clamped(self) -> Self {
        Self {
            width: self.width.max(PROFILE_EDITOR_MIN_WIDTH),
            height: self.height.max(PROFILE_EDITOR_MIN_HEIGHT),
        }
    }
}

/// The editor's own state. Holds a GUID, never a profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorSelection {
    pub selected_guid: Option<ProfileGuid>,
    pub mode: EditorMode,
    pub active_tab: ProfileTab,
}

/// Everything the view needs to draw one state of the editor.
///
/// `profile` is a snapshot resolved when the frame was built; `None` means
/// the empty state (nothing selected or the selection vanished).
#[derive(Debug, Clone, PartialEq)]
pub struct EditorFrame {
    pub profile: Option<Profile>,
    pub active_tab: ProfileTab,
    pub mode: EditorMode,
    pub visible_tabs: Vec<ProfileTab>,
    /// Field that should take keyboard focus
    pub focus: Option<EditorComponent>,
    /// Edits apply to a running session straight away
    pub applies_immediately: bool,
}

/// Controller for the profile "get info" editor.
///
/// The editor keeps only the selected profile's GUID. Every read goes back to
/// the collection through the delegate, so profiles added, removed or
/// reordered elsewhere between event-loop turns are always seen as they are
/// now.
pub struct ProfileEditor {
    /// Owner of the profile collection
    pub(super) delegate: Weak<dyn ProfileModelProvider>,
    pub(super) view: Box<dyn EditorView>,
    pub(super) bus: ProfileEventBus,
    pub(super) config: EditorConfig,

    pub(super) selection: EditorSelection,
    /// Whether the edited session is a tmux session
    pub(super) tmux_session: bool,
    /// Whether the editor window is open
    pub(super) open: bool,
    /// Field to focus on the next frame
    pub(super) focus: Option<EditorComponent>,
    /// In-progress edit, not yet committed
    pub(super) staged: Option<ProfileEdit>,
    /// Tab view sizes already computed, per tab
    pub(super) saved_sizes: HashMap<ProfileTab, EditorSize>,
}

impl ProfileEditor {
    /// Create an editor that draws nothing (see [`HeadlessView`]).
    pub fn new(
        delegate: Weak<dyn ProfileModelProvider>,
        bus: ProfileEventBus,
        config: EditorConfig,
    ) -> Self {
        Self::with_view(delegate, Box::new(HeadlessView), bus, config)
    }

    /// Create an editor that presents through `view`.
    pub fn with_view(
        delegate: Weak<dyn ProfileModelProvider>,
        view: Box<dyn EditorView>,
        bus: ProfileEventBus,
        config: EditorConfig,
    ) -> Self {
        Self {
            delegate,
            view,
            bus,
            config,
            selection: EditorSelection::default(),
            tmux_session: false,
            open: false,
            focus: None,
            staged: None,
            saved_sizes: HashMap::new(),
        }
    }

    /// Replace the delegate (e.g. after the owning window is rebuilt)
    pub fn set_delegate(&mut self, delegate: Weak<dyn ProfileModelProvider>) {
        self.delegate = delegate;
    }

    /// The notification bus this editor publishes on
    pub fn event_bus(&self) -> &ProfileEventBus {
        &self.bus
    }

    /// Whether the editor window is open
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current selection state
    pub fn selection(&self) -> &EditorSelection {
        &self.selection
    }

    /// Current mode
    pub fn mode(&self) -> EditorMode {
        self.selection.mode
    }

    /// Active tab
    pub fn active_tab(&self) -> ProfileTab {
        self.selection.active_tab
    }

    /// Whether the edited session is a tmux session
    pub fn is_tmux_session(&self) -> bool {
        self.tmux_session
    }

    /// Whether changes take effect on the live session immediately
    pub fn applies_immediately(&self) -> bool {
        self.selection.mode == EditorMode::EditCurrentSession
    }

    /// Tabs shown for the current mode.
    ///
    /// tmux owns the session settings of its panes, so the Session tab is
    /// hidden for tmux sessions.
    pub fn visible_tabs(&self) -> Vec<ProfileTab> {
        ProfileTab::all()
            .iter()
            .copied()
            .filter(|tab| !(self.tmux_session && *tab == ProfileTab::Session))
            .collect()
    }

    /// Run `f` against the current collection. Returns None when the delegate
    /// is gone. The model handle is dropped before this returns.
    pub(super) fn with_model<R>(&self, f: impl FnOnce(&ProfileCollection) -> R) -> Option<R> {
        let delegate = self.delegate.upgrade()?;
        let model = delegate.profile_model();
        let guard = model.read();
        Some(f(&guard))
    }

    /// Mutable counterpart of [`Self::with_model`].
    pub(super) fn with_model_mut<R>(
        &self,
        f: impl FnOnce(&mut ProfileCollection) -> R,
    ) -> Option<R> {
        let delegate = self.delegate.upgrade()?;
        let model = delegate.profile_model();
        let mut guard = model.write();
        Some(f(&mut guard))
    }

    /// Whether `guid` currently resolves
    pub(super) fn exists(&self, guid: &ProfileGuid) -> bool {
        self.with_model(|m| m.contains(guid)).unwrap_or(false)
    }

    /// Build the frame for the current state
    pub fn current_frame(&self) -> EditorFrame {
        EditorFrame {
            profile: self.selected_profile(),
            active_tab: self.selection.active_tab,
            mode: self.selection.mode,
            visible_tabs: self.visible_tabs(),
            focus: self.focus,
            applies_immediately: self.applies_immediately(),
        }
    }

    /// Hand the current state to the view. Does nothing while closed.
    pub(super) fn render(&mut self) {
        if !self.open {
            return;
        }
        let frame = self.current_frame();
        self.view.render(&frame);
    }

    /// Move off a tab that is no longer visible
    pub(super) fn ensure_tab_visible(&mut self) {
        if !self.visible_tabs().contains(&self.selection.active_tab) {
            log::debug!(
                "Tab {} hidden in current mode, switching to General",
                self.selection.active_tab.display_name()
            );
            self.selection.active_tab = ProfileTab::General;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_identifiers_are_lenient() {
        assert_eq!(
            EditorComponent::from_identifier("Working-Directory"),
            Some(EditorComponent::WorkingDirectory)
        );
        assert_eq!(
            EditorComponent::from_identifier(" HOTKEY "),
            Some(EditorComponent::Hotkey)
        );
        assert_eq!(EditorComponent::from_identifier("badgetext"), Some(EditorComponent::BadgeText));
        assert_eq!(EditorComponent::from_identifier("colors"), None);
    }

    #[test]
    fn test_every_component_round_trips_its_identifier() {
        for component in EditorComponent::ALL {
            assert_eq!(
                EditorComponent::from_identifier(component.identifier()),
                Some(component)
            );
        }
    }

    #[test]
    fn test_component_tabs() {
        assert_eq!(EditorComponent::Hotkey.tab(), ProfileTab::Hotkey);
        assert_eq!(EditorComponent::Font.tab(), ProfileTab::Appearance);
        assert_eq!(EditorComponent::Name.tab(), ProfileTab::General);
    }

    #[test]
    fn test_size_clamped_to_minimum() {
        let size = EditorSize::new(10.0, 900.0).clamped();
        assert_eq!(size.width, PROFILE_EDITOR_MIN_WIDTH);
        assert_eq!(size.height, 900.0);
    }
}
