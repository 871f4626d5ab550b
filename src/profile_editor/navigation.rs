//! Host entry points: opening, closing, tabs, mode and window sizing.
//!
//! Each public operation renders at most once, after all of its state
//! changes, so the view never sees a half-applied transition (for example
//! the right profile on the wrong tab).

use par_term_config::ProfileGuid;

use super::state::{EditorComponent, EditorMode, EditorSize, ProfileEditor, ProfileTab};

impl ProfileEditor {
    /// Open the editor on `guid`, or on the first profile when `guid` is
    /// None or unknown.
    pub fn open_to_profile(&mut self, guid: Option<&ProfileGuid>, select_general_tab: bool) {
        self.begin_open(guid);
        if select_general_tab {
            self.selection.active_tab = ProfileTab::General;
        }
        self.ensure_tab_visible();
        self.render();
    }

    /// Open the editor on `guid` with the hotkey field focused.
    pub fn open_to_profile_and_edit_hotkey(&mut self, guid: &ProfileGuid) {
        self.begin_open(Some(guid));
        self.focus_component(EditorComponent::Hotkey);
        self.render();
    }

    /// Open the editor on `guid` with the field named `identifier` focused.
    ///
    /// Unknown identifiers open the General tab with nothing focused.
    pub fn open_to_profile_and_edit_component(&mut self, guid: &ProfileGuid, identifier: &str) {
        self.begin_open(Some(guid));
        match EditorComponent::from_identifier(identifier) {
            Some(component) => self.focus_component(component),
            None => {
                log::warn!("Unknown profile editor component '{}'", identifier);
                self.selection.active_tab = ProfileTab::General;
            }
        }
        self.render();
    }

    /// Close the editor. Staged edits are dropped, not committed, and the
    /// per-session state (tmux flag, cached sizes) is reset.
    pub fn close(&mut self) {
        if let Some(edit) = self.staged.take() {
            log::debug!(
                "Dropping uncommitted {} edit on close",
                edit.component().identifier()
            );
        }
        self.open = false;
        self.focus = None;
        self.selection = Default::default();
        self.tmux_session = false;
        self.saved_sizes.clear();
        log::info!("Profile editor closed");
    }

    /// Switch to the General tab, whatever the mode.
    pub fn select_general_tab(&mut self) {
        self.selection.active_tab = ProfileTab::General;
        self.focus = None;
        self.render();
    }

    /// Switch to `tab`. Returns false (and changes nothing) if the tab is
    /// hidden in the current mode.
    pub fn select_tab(&mut self, tab: ProfileTab) -> bool {
        if !self.visible_tabs().contains(&tab) {
            return false;
        }
        self.selection.active_tab = tab;
        self.focus = None;
        self.render();
        true
    }

    /// Switch to "Edit Session" mode for the profile backing a live session.
    pub fn layout_for_edit_current_session(&mut self) {
        self.selection.mode = EditorMode::EditCurrentSession;
        self.saved_sizes.clear();
        self.ensure_tab_visible();
        self.render();
    }

    /// Mark the edited session as a tmux session (hides the Session tab).
    pub fn set_tmux_session(&mut self, tmux_session: bool) {
        if self.tmux_session == tmux_session {
            return;
        }
        self.tmux_session = tmux_session;
        self.saved_sizes.clear();
        self.ensure_tab_visible();
        self.render();
    }

    /// Redraw from the collection's current state. A selection whose profile
    /// has been removed falls back to the first profile (or the empty state).
    pub fn refresh(&mut self) {
        self.repair_selection();
        if self.selection.selected_guid.is_none() {
            self.select_first_quietly();
        }
        self.render();
    }

    /// Size of the tab view for the active tab
    pub fn size(&self) -> EditorSize {
        let tab = self.selection.active_tab;
        self.saved_sizes
            .get(&tab)
            .copied()
            .unwrap_or_else(|| self.view.preferred_size(tab).clamped())
    }

    /// Resize the window to fit the active tab, reusing a size computed
    /// earlier for the same tab.
    pub fn resize_window_for_current_tab(&mut self, animated: bool) {
        let size = self.size();
        self.saved_sizes.insert(self.selection.active_tab, size);
        self.view
            .apply_size(size, animated && self.config.animate_resize);
    }

    /// Forget computed sizes so the next resize asks the view again.
    pub fn invalidate_saved_size(&mut self) {
        self.saved_sizes.clear();
    }

    /// Shared first half of the open-to operations: mark open, reset
    /// transient state, select. Does not render.
    fn begin_open(&mut self, guid: Option<&ProfileGuid>) {
        self.open = true;
        self.focus = None;
        if self.staged.take().is_some() {
            log::debug!("Dropping uncommitted edit from previous profile");
        }
        if let Some(guid) = guid {
            self.select_guid_quietly(guid);
        }
        self.repair_selection();
        self.select_first_quietly();
        log::info!(
            "Profile editor opened on {}",
            self.selection
                .selected_guid
                .as_ref()
                .map_or("<no profile>".to_string(), |g| g.to_string())
        );
    }

    fn focus_component(&mut self, component: EditorComponent) {
        self.selection.active_tab = component.tab();
        self.focus = Some(component);
        self.ensure_tab_visible();
    }
}
