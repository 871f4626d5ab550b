//! Shared integration test helpers for the profile editor.
//!
//! Include with `mod common;` at the top of a test file. The
//! `#[allow(dead_code)]` below suppresses warnings when a file uses only a
//! subset of helpers.

#![allow(dead_code)]

use std::sync::{Arc, Weak};

use par_term_profile_editor::{
    EditorConfig, EditorFrame, EditorSize, EditorView, Profile, ProfileCollection, ProfileEditor,
    ProfileEventBus, ProfileModelProvider, ProfileTab, SharedProfileCollection,
};
use parking_lot::Mutex;

/// Owner of the profile collection, as a window controller would be
pub struct TestHost {
    pub model: SharedProfileCollection,
}

impl ProfileModelProvider for TestHost {
    fn profile_model(&self) -> SharedProfileCollection {
        Arc::clone(&self.model)
    }
}

/// Everything the view was asked to do, shared with the test
#[derive(Default)]
pub struct ViewLog {
    pub frames: Vec<EditorFrame>,
    pub sizes: Vec<(EditorSize, bool)>,
    pub size_queries: Vec<ProfileTab>,
}

/// View that records frames and resize requests
pub struct RecordingView {
    pub log: Arc<Mutex<ViewLog>>,
    /// Preferred size reported for every tab
    pub preferred: EditorSize,
}

impl EditorView for RecordingView {
    fn render(&mut self, frame: &EditorFrame) {
        self.log.lock().frames.push(frame.clone());
    }

    fn preferred_size(&self, tab: ProfileTab) -> EditorSize {
        self.log.lock().size_queries.push(tab);
        self.preferred
    }

    fn apply_size(&mut self, size: EditorSize, animated: bool) {
        self.log.lock().sizes.push((size, animated));
    }
}

/// Preferred size the recording view reports
pub const PREFERRED_SIZE: EditorSize = EditorSize {
    width: 620.0,
    height: 480.0,
};

/// Profiles A "Alpha", B "Beta", C "Gamma" in that order; A has a hotkey.
pub fn abc_profiles() -> ProfileCollection {
    ProfileCollection::from_profiles(vec![
        Profile::with_guid("A", "Alpha").order(0).hotkey("Ctrl+Alt+A"),
        Profile::with_guid("B", "Beta").order(1),
        Profile::with_guid("C", "Gamma").order(2),
    ])
}

/// An editor wired to a host and a recording view.
///
/// Keep `host` alive for as long as the editor should see the collection;
/// dropping it simulates the owning window going away.
pub struct Fixture {
    pub host: Option<Arc<TestHost>>,
    pub model: SharedProfileCollection,
    pub editor: ProfileEditor,
    pub bus: ProfileEventBus,
    pub view: Arc<Mutex<ViewLog>>,
}

impl Fixture {
    pub fn new(collection: ProfileCollection) -> Self {
        Self::with_config(collection, EditorConfig::default())
    }

    pub fn with_config(collection: ProfileCollection, config: EditorConfig) -> Self {
        let model = collection.into_shared();
        let host = Arc::new(TestHost {
            model: Arc::clone(&model),
        });
        let view = Arc::new(Mutex::new(ViewLog::default()));
        let bus = ProfileEventBus::new(config.event_buffer_capacity);
        let provider: Arc<dyn ProfileModelProvider> = host.clone();
        let delegate: Weak<dyn ProfileModelProvider> = Arc::downgrade(&provider);
        let editor = ProfileEditor::with_view(
            delegate,
            Box::new(RecordingView {
                log: Arc::clone(&view),
                preferred: PREFERRED_SIZE,
            }),
            bus.clone(),
            config,
        );
        Self {
            host: Some(host),
            model,
            editor,
            bus,
            view,
        }
    }

    /// Drop the host so the editor's delegate no longer upgrades
    pub fn drop_host(&mut self) {
        self.host = None;
    }

    /// Number of frames rendered so far
    pub fn frame_count(&self) -> usize {
        self.view.lock().frames.len()
    }

    /// The most recent frame
    pub fn last_frame(&self) -> Option<EditorFrame> {
        self.view.lock().frames.last().cloned()
    }

    pub fn clear_frames(&self) {
        self.view.lock().frames.clear();
    }

    /// A profile straight from the collection
    pub fn profile(&self, guid: &str) -> Option<Profile> {
        self.model.read().get(&guid.into()).cloned()
    }

    /// Remove a profile behind the editor's back
    pub fn remove(&self, guid: &str) {
        self.model.write().remove(&guid.into());
    }
}
