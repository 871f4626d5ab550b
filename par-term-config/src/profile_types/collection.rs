//! Ordered, GUID-keyed profile collection.
//!
//! `ProfileCollection` is the shared store every part of the application
//! edits in place. Consumers that outlive a single event-loop turn should keep
//! a [`ProfileGuid`] and look the record up again rather than hold on to a
//! `Profile`.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::profile::{Profile, ProfileGuid};

/// Handle to a collection shared between the host and its editors.
pub type SharedProfileCollection = Arc<RwLock<ProfileCollection>>;

/// Manages a collection of profiles
#[derive(Debug, Clone, Default)]
pub struct ProfileCollection {
    /// All profiles indexed by GUID
    profiles: HashMap<ProfileGuid, Profile>,

    /// Ordered list of GUIDs for display
    order: Vec<ProfileGuid>,
}

impl ProfileCollection {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self {
            profiles: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Create a collection from a list of profiles, honouring their `order` field
    pub fn from_profiles(profiles: Vec<Profile>) -> Self {
        let mut collection = Self::new();
        for profile in profiles {
            collection.add(profile);
        }
        collection.sort_by_order();
        collection
    }

    /// Wrap this collection in a shared handle
    pub fn into_shared(self) -> SharedProfileCollection {
        Arc::new(RwLock::new(self))
    }

    /// Add a profile. A profile with the same GUID is replaced in place.
    pub fn add(&mut self, profile: Profile) {
        let guid = profile.guid.clone();
        if !self.order.contains(&guid) {
            self.order.push(guid.clone());
        }
        self.profiles.insert(guid, profile);
    }

    /// Get a profile by GUID
    pub fn get(&self, guid: &ProfileGuid) -> Option<&Profile> {
        self.profiles.get(guid)
    }

    /// Get a mutable reference to a profile by GUID
    pub fn get_mut(&mut self, guid: &ProfileGuid) -> Option<&mut Profile> {
        self.profiles.get_mut(guid)
    }

    /// Whether a profile with this GUID currently exists
    pub fn contains(&self, guid: &ProfileGuid) -> bool {
        self.profiles.contains_key(guid)
    }

    /// Remove a profile by GUID
    pub fn remove(&mut self, guid: &ProfileGuid) -> Option<Profile> {
        self.order.retain(|g| g != guid);
        self.profiles.remove(guid)
    }

    /// The first profile in display order
    pub fn first(&self) -> Option<&Profile> {
        self.order.iter().find_map(|g| self.profiles.get(g))
    }

    /// Get all profiles in display order
    pub fn profiles_ordered(&self) -> Vec<&Profile> {
        self.order
            .iter()
            .filter_map(|g| self.profiles.get(g))
            .collect()
    }

    /// Get all profiles as a vector (for serialization)
    pub fn to_vec(&self) -> Vec<Profile> {
        self.profiles_ordered().into_iter().cloned().collect()
    }

    /// Get the number of profiles
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Check if there are no profiles
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Iterate over all GUIDs in display order
    pub fn guids(&self) -> impl Iterator<Item = &ProfileGuid> {
        self.order.iter()
    }

    /// Move a profile earlier in the order (towards index 0)
    pub fn move_up(&mut self, guid: &ProfileGuid) {
        if let Some(pos) = self.order.iter().position(|g| g == guid)
            && pos > 0
        {
            self.order.swap(pos, pos - 1);
            self.update_orders();
        }
    }

    /// Move a profile later in the order (towards the end)
    pub fn move_down(&mut self, guid: &ProfileGuid) {
        if let Some(pos) = self.order.iter().position(|g| g == guid)
            && pos + 1 < self.order.len()
        {
            self.order.swap(pos, pos + 1);
            self.update_orders();
        }
    }

    /// Copy a profile under a freshly generated GUID ("save as new").
    ///
    /// The copy is placed right after its source. Its hotkey is cleared so
    /// bindings stay unique. Returns the new GUID, or None if `guid` is unknown.
    pub fn duplicate(&mut self, guid: &ProfileGuid) -> Option<ProfileGuid> {
        let source = self.profiles.get(guid)?;
        let mut copy = source.clone();
        copy.guid = ProfileGuid::generate();
        copy.name = format!("{} (copy)", source.name);
        copy.hotkey = None;

        let new_guid = copy.guid.clone();
        let pos = self
            .order
            .iter()
            .position(|g| g == guid)
            .map_or(self.order.len(), |p| p + 1);
        self.order.insert(pos, new_guid.clone());
        self.profiles.insert(new_guid.clone(), copy);
        self.update_orders();

        log::info!("Duplicated profile {} as {}", guid, new_guid);
        Some(new_guid)
    }

    /// Sort GUIDs by their profile's order field
    fn sort_by_order(&mut self) {
        self.order
            .sort_by_key(|g| self.profiles.get(g).map(|p| p.order).unwrap_or(usize::MAX));
    }

    /// Update the order field of all profiles to match their position
    fn update_orders(&mut self) {
        for (i, guid) in self.order.iter().enumerate() {
            if let Some(profile) = self.profiles.get_mut(guid) {
                profile.order = i;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProfileCollection {
        ProfileCollection::from_profiles(vec![
            Profile::with_guid("B", "Beta").order(1),
            Profile::with_guid("A", "Alpha").order(0),
            Profile::with_guid("C", "Gamma").order(2).hotkey("Ctrl+Shift+G"),
        ])
    }

    fn names(c: &ProfileCollection) -> Vec<String> {
        c.profiles_ordered().iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_from_profiles_sorts_by_order() {
        let c = sample();
        assert_eq!(names(&c), vec!["Alpha", "Beta", "Gamma"]);
        assert_eq!(c.first().map(|p| p.guid.as_str()), Some("A"));
    }

    #[test]
    fn test_remove_drops_from_order() {
        let mut c = sample();
        assert!(c.remove(&"A".into()).is_some());
        assert!(!c.contains(&"A".into()));
        assert_eq!(c.first().map(|p| p.name.as_str()), Some("Beta"));
        assert!(c.remove(&"A".into()).is_none());
    }

    #[test]
    fn test_move_up_and_down_renumber() {
        let mut c = sample();
        c.move_down(&"A".into());
        assert_eq!(names(&c), vec!["Beta", "Alpha", "Gamma"]);
        assert_eq!(c.get(&"A".into()).map(|p| p.order), Some(1));
        c.move_up(&"C".into());
        assert_eq!(names(&c), vec!["Beta", "Gamma", "Alpha"]);
        // Boundaries are no-ops
        c.move_up(&"B".into());
        c.move_down(&"A".into());
        assert_eq!(names(&c), vec!["Beta", "Gamma", "Alpha"]);
    }

    #[test]
    fn test_duplicate_gets_new_guid_and_drops_hotkey() {
        let mut c = sample();
        let copy = c.duplicate(&"C".into()).expect("source exists");
        assert_ne!(copy.as_str(), "C");
        let dup = c.get(&copy).expect("copy stored");
        assert_eq!(dup.name, "Gamma (copy)");
        assert!(dup.hotkey.is_none());
        assert_eq!(names(&c), vec!["Alpha", "Beta", "Gamma", "Gamma (copy)"]);
        assert!(c.duplicate(&"missing".into()).is_none());
    }
}
