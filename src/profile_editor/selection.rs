//! Selection and GUID resolution.
//!
//! Selection stores a GUID only. `selected_profile` resolves it on every call,
//! and every path that changes the selection leaves it either unset or
//! pointing at a profile that exists at that moment.

use par_term_config::{Profile, ProfileGuid, SelectionFallback};

use super::state::ProfileEditor;

impl ProfileEditor {
    /// The selected GUID as stored. It may have stopped resolving since it
    /// was selected; use [`Self::selected_profile`] for the live record.
    pub fn selected_guid(&self) -> Option<&ProfileGuid> {
        self.selection.selected_guid.as_ref()
    }

    /// Snapshot of the selected profile as it is in the collection now.
    ///
    /// Returns None when nothing is selected, the profile was removed, or
    /// the collection's owner is gone.
    pub fn selected_profile(&self) -> Option<Profile> {
        let guid = self.selection.selected_guid.as_ref()?;
        self.with_model(|m| m.get(guid).cloned()).flatten()
    }

    /// Select the profile with `guid`.
    ///
    /// An unknown GUID leaves the current selection alone, unless the
    /// editor is configured to fall back to the first profile or the current
    /// selection itself no longer resolves. Returns true if `guid` was
    /// selected.
    pub fn select_guid(&mut self, guid: &ProfileGuid) -> bool {
        let selected = self.select_guid_quietly(guid);
        self.render();
        selected
    }

    /// Select the first profile in collection order when nothing (or nothing
    /// that still exists) is selected. An empty collection leaves the editor
    /// in its empty state.
    pub fn select_first_profile_if_necessary(&mut self) {
        if self.select_first_quietly() {
            self.render();
        }
    }

    pub(super) fn select_guid_quietly(&mut self, guid: &ProfileGuid) -> bool {
        if self.exists(guid) {
            log::debug!("Selected profile {}", guid);
            self.selection.selected_guid = Some(guid.clone());
            return true;
        }

        let current_resolves = self
            .selection
            .selected_guid
            .as_ref()
            .is_some_and(|current| self.exists(current));
        log::debug!(
            "Profile {} not found (current selection {})",
            guid,
            if current_resolves { "kept" } else { "stale or unset" }
        );

        match self.config.selection_fallback {
            SelectionFallback::FirstAvailable => {
                self.selection.selected_guid = None;
                self.select_first_quietly();
            }
            SelectionFallback::KeepPrevious => {
                if self.selection.selected_guid.is_some() && !current_resolves {
                    self.selection.selected_guid = None;
                    self.select_first_quietly();
                }
            }
        }
        false
    }

    /// Returns true if the selection changed.
    pub(super) fn select_first_quietly(&mut self) -> bool {
        if self.selected_profile().is_some() {
            return false;
        }

        let first = self.with_model(|m| m.first().map(|p| p.guid.clone())).flatten();
        let changed = self.selection.selected_guid != first;
        match &first {
            Some(guid) => log::debug!("Selecting first available profile {}", guid),
            None => log::debug!("No profiles available, editor is empty"),
        }
        self.selection.selected_guid = first;
        changed
    }

    /// Clear a selection that no longer resolves and fall back to the first
    /// profile. Returns true if the selection changed.
    pub(super) fn repair_selection(&mut self) -> bool {
        match &self.selection.selected_guid {
            Some(guid) if !self.exists(guid) => {
                log::warn!("Selected profile {} disappeared from the collection", guid);
                self.selection.selected_guid = None;
                self.select_first_quietly();
                true
            }
            _ => false,
        }
    }
}
