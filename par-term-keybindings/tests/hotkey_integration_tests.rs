//! Integration tests for par-term-keybindings.
//!
//! These exercise the parse → registry → conflict-check pipeline against a
//! real `ProfileCollection`, including collections that change between checks.

use par_term_config::{Profile, ProfileCollection};
use par_term_keybindings::{HotkeyKey, HotkeyRegistry, parse_hotkey};
use winit::keyboard::NamedKey;

fn collection() -> ProfileCollection {
    ProfileCollection::from_profiles(vec![
        Profile::with_guid("A", "Shell").order(0).hotkey("Ctrl+Alt+1"),
        Profile::with_guid("B", "Build").order(1).hotkey("F5"),
        Profile::with_guid("C", "Notes").order(2),
    ])
}

// ---------------------------------------------------------------------------
// Registry construction
// ---------------------------------------------------------------------------

#[test]
fn registry_counts_bound_profiles_only() {
    let registry = HotkeyRegistry::from_collection(&collection());
    assert_eq!(registry.len(), 2);
}

#[test]
fn registry_from_empty_collection() {
    let registry = HotkeyRegistry::from_collection(&ProfileCollection::new());
    assert!(registry.is_empty());
}

// ---------------------------------------------------------------------------
// Conflict detection
// ---------------------------------------------------------------------------

#[test]
fn equivalent_spelling_conflicts() {
    let registry = HotkeyRegistry::from_collection(&collection());
    let hotkey = parse_hotkey("option+control+1").unwrap();

    let conflict = registry
        .check_available(&hotkey, &"C".into())
        .unwrap_err();
    assert_eq!(conflict.holder.as_str(), "A");
    assert!(conflict.to_string().contains("Ctrl+Alt+1"));
}

#[test]
fn holder_lookup_matches_any_spelling() {
    let profiles = ProfileCollection::from_profiles(vec![
        Profile::with_guid("A", "Shell").hotkey("Ctrl+Alt+G"),
    ]);
    let registry = HotkeyRegistry::from_collection(&profiles);

    for spelling in ["Ctrl+Alt+G", "Alt+Ctrl+G", "Control+Option+G", "alt + ctrl + g"] {
        let hotkey = parse_hotkey(spelling).unwrap();
        assert_eq!(
            registry.holder(&hotkey).map(|g| g.as_str()),
            Some("A"),
            "{spelling}"
        );
    }
}

#[test]
fn free_hotkey_is_available() {
    let registry = HotkeyRegistry::from_collection(&collection());
    let hotkey = parse_hotkey("Ctrl+Alt+2").unwrap();
    assert!(registry.check_available(&hotkey, &"C".into()).is_ok());
}

#[test]
fn removing_holder_frees_the_binding() {
    let mut profiles = collection();
    let hotkey = parse_hotkey("F5").unwrap();
    assert_eq!(hotkey.key, HotkeyKey::Named(NamedKey::F5));

    profiles.remove(&"B".into());
    let registry = HotkeyRegistry::from_collection(&profiles);
    assert!(registry.holder(&hotkey).is_none());
    assert!(registry.check_available(&hotkey, &"C".into()).is_ok());
}

#[test]
fn duplicated_profile_does_not_inherit_binding() {
    let mut profiles = collection();
    let copy = profiles.duplicate(&"A".into()).unwrap();
    let registry = HotkeyRegistry::from_collection(&profiles);
    let hotkey = parse_hotkey("Ctrl+Alt+1").unwrap();

    assert_eq!(registry.holder(&hotkey).map(|g| g.as_str()), Some("A"));
    assert!(registry.check_available(&hotkey, &copy).is_err());
}
