//! Edit staging, validation, write-back and notification.
//!
//! Fields stage values while the user types; nothing reaches the collection
//! until the field commits. A commit validates the value, writes it into the
//! selected profile and, for the name and hotkey fields, publishes a
//! notification carrying the profile's GUID.

use par_term_config::{Profile, ProfileCollection, ProfileGuid};
use par_term_keybindings::{HotkeyRegistry, parse_hotkey};

use crate::error::EditError;
use crate::events::ProfileNotification;

use super::state::{EditorComponent, ProfileEditor};

/// Font chosen in the external font panel
#[derive(Debug, Clone, PartialEq)]
pub struct FontSelection {
    pub family: String,
    pub size: f32,
}

impl FontSelection {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

/// A single field change for the selected profile.
///
/// `None` / empty values clear optional fields.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileEdit {
    Name(String),
    Hotkey(Option<String>),
    Command(Option<String>),
    WorkingDirectory(Option<String>),
    Shell(Option<String>),
    TabName(Option<String>),
    Icon(Option<String>),
    Tags(Vec<String>),
    BadgeText(Option<String>),
    Font(FontSelection),
}

impl ProfileEdit {
    /// The field this edit belongs to
    pub fn component(&self) -> EditorComponent {
        match self {
            Self::Name(_) => EditorComponent::Name,
            Self::Hotkey(_) => EditorComponent::Hotkey,
            Self::Command(_) => EditorComponent::Command,
            Self::WorkingDirectory(_) => EditorComponent::WorkingDirectory,
            Self::Shell(_) => EditorComponent::Shell,
            Self::TabName(_) => EditorComponent::TabName,
            Self::Icon(_) => EditorComponent::Icon,
            Self::Tags(_) => EditorComponent::Tags,
            Self::BadgeText(_) => EditorComponent::BadgeText,
            Self::Font(_) => EditorComponent::Font,
        }
    }

    /// Notification published after this edit is written back, if any
    fn notification(&self, guid: &ProfileGuid) -> Option<ProfileNotification> {
        match self {
            Self::Name(_) => Some(ProfileNotification::NameEditEnded(guid.clone())),
            Self::Hotkey(_) => Some(ProfileNotification::HotkeyChanged(guid.clone())),
            _ => None,
        }
    }

    /// Check and normalise the value against the collection it will be
    /// written into.
    fn validated(
        self,
        guid: &ProfileGuid,
        model: &ProfileCollection,
        reject_hotkey_conflicts: bool,
    ) -> Result<Self, EditError> {
        Ok(match self {
            Self::Name(name) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(EditError::EmptyName);
                }
                Self::Name(name.to_string())
            }
            Self::Hotkey(raw) => match non_empty(raw) {
                None => Self::Hotkey(None),
                Some(raw) => {
                    let hotkey = parse_hotkey(&raw)?;
                    let registry = HotkeyRegistry::from_collection(model);
                    if let Err(conflict) = registry.check_available(&hotkey, guid) {
                        if reject_hotkey_conflicts {
                            return Err(conflict.into());
                        }
                        log::warn!("Allowing shared hotkey: {}", conflict);
                    }
                    Self::Hotkey(Some(hotkey.to_string()))
                }
            },
            Self::Font(font) => {
                if !font.size.is_finite() || font.size <= 0.0 {
                    return Err(EditError::InvalidFontSize(font.size.to_string()));
                }
                Self::Font(FontSelection {
                    family: font.family.trim().to_string(),
                    size: font.size,
                })
            }
            Self::Tags(tags) => Self::Tags(
                tags.into_iter()
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .collect(),
            ),
            Self::Command(v) => Self::Command(non_empty(v)),
            Self::WorkingDirectory(v) => Self::WorkingDirectory(non_empty(v)),
            Self::Shell(v) => Self::Shell(non_empty(v)),
            Self::TabName(v) => Self::TabName(non_empty(v)),
            Self::Icon(v) => Self::Icon(non_empty(v)),
            Self::BadgeText(v) => Self::BadgeText(non_empty(v)),
        })
    }

    fn apply_to(self, profile: &mut Profile) {
        match self {
            Self::Name(name) => profile.name = name,
            Self::Hotkey(hotkey) => profile.hotkey = hotkey,
            Self::Command(v) => profile.command = v,
            Self::WorkingDirectory(v) => profile.working_directory = v,
            Self::Shell(v) => profile.shell = v,
            Self::TabName(v) => profile.tab_name = v,
            Self::Icon(v) => profile.icon = v,
            Self::Tags(tags) => profile.tags = tags,
            Self::BadgeText(v) => profile.badge_text = v,
            Self::Font(font) => {
                profile.font_family = Some(font.family).filter(|f| !f.is_empty());
                profile.font_size = Some(font.size);
            }
        }
    }
}

/// Trimmed value, or None when blank
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ProfileEditor {
    /// Record an in-progress value. Nothing is written or published.
    pub fn stage_edit(&mut self, edit: ProfileEdit) {
        self.staged = Some(edit);
    }

    /// The in-progress value, if any
    pub fn staged_edit(&self) -> Option<&ProfileEdit> {
        self.staged.as_ref()
    }

    /// Drop the in-progress value without committing it
    pub fn discard_staged_edit(&mut self) -> Option<ProfileEdit> {
        self.staged.take()
    }

    /// Commit the staged value. On rejection the value stays staged so the
    /// field can be corrected and committed again.
    pub fn commit_staged_edit(&mut self) -> Result<(), EditError> {
        let edit = self.staged.take().ok_or(EditError::NothingStaged)?;
        let result = self.commit_edit(edit.clone());
        if result.is_err() {
            self.staged = Some(edit);
        }
        result
    }

    /// The name field finished editing.
    pub fn commit_name_edit(&mut self, name: &str) -> Result<(), EditError> {
        self.commit_edit(ProfileEdit::Name(name.to_string()))
    }

    /// The hotkey field committed a new binding (`None` clears it).
    pub fn commit_hotkey_edit(&mut self, hotkey: Option<&str>) -> Result<(), EditError> {
        self.commit_edit(ProfileEdit::Hotkey(hotkey.map(str::to_string)))
    }

    /// The font panel reported a new font for the selected profile.
    pub fn change_font(&mut self, font: FontSelection) -> Result<(), EditError> {
        self.commit_edit(ProfileEdit::Font(font))
    }

    /// Validate `edit` and write it into the selected profile.
    ///
    /// The selection is resolved again here, so an edit can never land on a
    /// profile other than the one whose GUID is selected, and an edit for a
    /// profile deleted in the meantime is rejected instead of resurrecting it.
    pub fn commit_edit(&mut self, edit: ProfileEdit) -> Result<(), EditError> {
        let guid = self
            .selection
            .selected_guid
            .clone()
            .ok_or(EditError::NoSelection)?;
        let component = edit.component();
        let notification = edit.notification(&guid);
        let reject_conflicts = self.config.reject_hotkey_conflicts;

        let written = self.with_model_mut(|model| {
            if !model.contains(&guid) {
                return Err(EditError::ProfileNotFound(guid.clone()));
            }
            let edit = edit.validated(&guid, model, reject_conflicts)?;
            if let Some(profile) = model.get_mut(&guid) {
                edit.apply_to(profile);
            }
            Ok(())
        });

        let result = match written {
            None => Err(EditError::ProfileNotFound(guid.clone())),
            Some(result) => result,
        };
        result.inspect_err(|e| {
            log::warn!(
                "Rejected {} edit for profile {}: {}",
                component.identifier(),
                guid,
                e
            );
        })?;

        if self
            .staged
            .as_ref()
            .is_some_and(|staged| staged.component() == component)
        {
            self.staged = None;
        }

        log::info!("Committed {} edit for profile {}", component.identifier(), guid);
        if let Some(notification) = notification {
            self.bus.publish(notification);
        }
        self.render();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> ProfileCollection {
        ProfileCollection::from_profiles(vec![
            Profile::with_guid("A", "Alpha").hotkey("Ctrl+Alt+A"),
            Profile::with_guid("B", "Beta"),
        ])
    }

    #[test]
    fn test_name_is_trimmed_and_required() {
        let m = model();
        let guid = ProfileGuid::from("B");
        assert_eq!(
            ProfileEdit::Name("  Work  ".into()).validated(&guid, &m, true),
            Ok(ProfileEdit::Name("Work".into()))
        );
        assert_eq!(
            ProfileEdit::Name("   ".into()).validated(&guid, &m, true),
            Err(EditError::EmptyName)
        );
    }

    #[test]
    fn test_hotkey_is_canonicalised() {
        let m = model();
        let edit = ProfileEdit::Hotkey(Some("shift+ctrl+b".into()))
            .validated(&"B".into(), &m, true)
            .unwrap();
        assert_eq!(edit, ProfileEdit::Hotkey(Some("Ctrl+Shift+B".into())));
    }

    #[test]
    fn test_hotkey_conflict_respects_policy() {
        let m = model();
        let taken = || ProfileEdit::Hotkey(Some("alt+ctrl+a".into()));
        assert!(matches!(
            taken().validated(&"B".into(), &m, true),
            Err(EditError::HotkeyConflict(_))
        ));
        assert!(taken().validated(&"B".into(), &m, false).is_ok());
        // Re-committing a profile's own binding is not a conflict
        assert!(taken().validated(&"A".into(), &m, true).is_ok());
    }

    #[test]
    fn test_blank_optional_values_clear_the_field() {
        let mut profile = Profile::with_guid("B", "Beta").command("htop");
        ProfileEdit::Command(Some("   ".into()))
            .validated(&"B".into(), &model(), true)
            .unwrap()
            .apply_to(&mut profile);
        assert!(profile.command.is_none());
    }

    #[test]
    fn test_font_size_must_be_positive() {
        let m = model();
        for size in [0.0, -3.0, f32::NAN] {
            assert!(matches!(
                ProfileEdit::Font(FontSelection::new("Menlo", size)).validated(&"B".into(), &m, true),
                Err(EditError::InvalidFontSize(_))
            ));
        }
    }

    #[test]
    fn test_tags_drop_blanks() {
        let mut profile = Profile::with_guid("B", "Beta");
        ProfileEdit::Tags(vec![" work ".into(), "".into(), "ssh".into()])
            .validated(&"B".into(), &model(), true)
            .unwrap()
            .apply_to(&mut profile);
        assert_eq!(profile.tags, vec!["work", "ssh"]);
    }
}
