//! Test harness for isolated store execution.
//!
//! `TestHarness` wires a real `JobStore` to JSON-file persistence and a
//! photo library inside a temporary directory, with a collecting
//! analytics double so tests can assert on emitted events.

#![allow(dead_code)]

pub mod builders;

use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use punchlist::{AnalyticsSink, JobEvent, JobStore, JsonStore, Persistence, PhotoLibrary};

/// Analytics double that records every event it receives.
#[derive(Default)]
pub struct CollectingAnalytics {
    events: Mutex<Vec<JobEvent>>,
}

impl AnalyticsSink for CollectingAnalytics {
    fn record(&self, event: &JobEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

impl CollectingAnalytics {
    pub fn events(&self) -> Vec<JobEvent> {
        self.events.lock().unwrap().clone()
    }
}

/// Isolated environment: data directory, photo root and store all live
/// in one temporary directory that disappears with the harness.
pub struct TestHarness {
    temp: TempDir,
    pub persistence: Arc<JsonStore>,
    pub analytics: Arc<CollectingAnalytics>,
    pub store: JobStore,
}

impl TestHarness {
    /// Creates a harness with an uninitialized store; call
    /// `store.initialize()` (or use [`initialized`](Self::initialized))
    /// to load or seed.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("create temp dir");
        let persistence = Arc::new(JsonStore::new(temp.path().join("data")));
        let analytics = Arc::new(CollectingAnalytics::default());
        let store = JobStore::new(
            persistence.clone(),
            PhotoLibrary::new(temp.path().join("photos")),
            analytics.clone(),
        );
        Self {
            temp,
            persistence,
            analytics,
            store,
        }
    }

    /// Creates a harness whose store starts from an empty, persisted
    /// collection (no sample seeding).
    pub fn initialized() -> Self {
        let mut harness = Self::new();
        harness
            .persistence
            .save_jobs(&[])
            .expect("persist empty collection");
        harness.store.initialize().expect("initialize store");
        harness
    }

    /// A second photo library handle over the same root, for asserting
    /// on files the store's cascade touched.
    pub fn photos(&self) -> PhotoLibrary {
        PhotoLibrary::new(self.temp.path().join("photos"))
    }

    /// Creates an image file outside the photo library to use as a
    /// save_photo source.
    pub fn image_source(&self, name: &str) -> std::path::PathBuf {
        let sources = self.temp.path().join("sources");
        std::fs::create_dir_all(&sources).expect("create sources dir");
        let path = sources.join(name);
        std::fs::write(&path, b"not really a jpeg, nobody decodes it").expect("write source");
        path
    }

    /// A scratch path inside the harness for export output.
    pub fn out_path(&self, name: &str) -> std::path::PathBuf {
        self.temp.path().join(name)
    }

    pub fn events(&self) -> Vec<JobEvent> {
        self.analytics.events()
    }
}
