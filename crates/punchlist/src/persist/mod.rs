//! Persistence of the job collection, template catalog and preferences.
//!
//! The store collaborates with a [`Persistence`] implementation rather
//! than touching the filesystem itself, so tests (and alternative
//! backends) swap in [`MemoryStore`]. The production backend is
//! [`JsonStore`]: one JSON document per collection in the application
//! data directory, written atomically.
//!
//! Loading distinguishes "never saved" (`Ok(None)`, the first-run
//! signal that triggers sample seeding) from a real I/O or parse
//! failure (`Err`), so a transient disk error cannot masquerade as a
//! fresh install and silently discard data.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Preferences;
use crate::error::PersistError;
use crate::model::{Job, JobTemplate};

const JOBS_FILE: &str = "jobs.json";
const TEMPLATES_FILE: &str = "templates.json";
const PREFERENCES_FILE: &str = "preferences.json";

/// Storage collaborator consumed by the store components.
///
/// `load_*` returns `Ok(None)` when the collection has never been
/// saved; implementations must not map I/O failures onto `None`.
pub trait Persistence: Send + Sync {
    fn load_jobs(&self) -> Result<Option<Vec<Job>>, PersistError>;
    fn save_jobs(&self, jobs: &[Job]) -> Result<(), PersistError>;

    fn load_templates(&self) -> Result<Option<Vec<JobTemplate>>, PersistError>;
    fn save_templates(&self, templates: &[JobTemplate]) -> Result<(), PersistError>;

    fn load_preferences(&self) -> Result<Option<Preferences>, PersistError>;
    fn save_preferences(&self, preferences: &Preferences) -> Result<(), PersistError>;
}

/// Returns the canonical application data directory, e.g.
/// `~/Library/Application Support/Punchlist` on macOS.
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("Punchlist"))
}

/// JSON-file persistence rooted at a data directory.
///
/// Each collection is one pretty-printed JSON document using the record
/// field names; there is no versioning scheme. Writes go through a
/// temporary file followed by a rename, so readers never observe a
/// half-written document.
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn read<T: DeserializeOwned>(&self, file: &str) -> Result<Option<T>, PersistError> {
        let path = self.data_dir.join(file);
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).map_err(|e| PersistError::Io {
            path: path.clone(),
            source: e,
        })?;
        let value = serde_json::from_str(&content)
            .map_err(|e| PersistError::Parse { path, source: e })?;
        Ok(Some(value))
    }

    fn write<T: Serialize>(&self, file: &str, value: &T) -> Result<(), PersistError> {
        std::fs::create_dir_all(&self.data_dir).map_err(|e| PersistError::Io {
            path: self.data_dir.clone(),
            source: e,
        })?;

        let json = serde_json::to_string_pretty(value).map_err(PersistError::Serialize)?;

        // Temp file + rename: the final path is either the old document
        // or the complete new one, never a partial write.
        let path = self.data_dir.join(file);
        let tmp_path = self.data_dir.join(format!("{}.tmp", file));
        std::fs::write(&tmp_path, json).map_err(|e| PersistError::Io {
            path: tmp_path.clone(),
            source: e,
        })?;
        std::fs::rename(&tmp_path, &path).map_err(|e| PersistError::Io { path, source: e })?;

        Ok(())
    }
}

impl Persistence for JsonStore {
    fn load_jobs(&self) -> Result<Option<Vec<Job>>, PersistError> {
        self.read(JOBS_FILE)
    }

    fn save_jobs(&self, jobs: &[Job]) -> Result<(), PersistError> {
        self.write(JOBS_FILE, &jobs)
    }

    fn load_templates(&self) -> Result<Option<Vec<JobTemplate>>, PersistError> {
        self.read(TEMPLATES_FILE)
    }

    fn save_templates(&self, templates: &[JobTemplate]) -> Result<(), PersistError> {
        self.write(TEMPLATES_FILE, &templates)
    }

    fn load_preferences(&self) -> Result<Option<Preferences>, PersistError> {
        self.read(PREFERENCES_FILE)
    }

    fn save_preferences(&self, preferences: &Preferences) -> Result<(), PersistError> {
        self.write(PREFERENCES_FILE, preferences)
    }
}

/// In-process persistence for tests and previews. Nothing touches disk;
/// contents die with the value.
#[derive(Default)]
pub struct MemoryStore {
    jobs: Mutex<Option<Vec<Job>>>,
    templates: Mutex<Option<Vec<JobTemplate>>>,
    preferences: Mutex<Option<Preferences>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock<T>(slot: &Mutex<T>) -> MutexGuard<'_, T> {
        // A panic while holding the lock poisons it; the data itself is
        // still coherent, so recover rather than propagate.
        slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Persistence for MemoryStore {
    fn load_jobs(&self) -> Result<Option<Vec<Job>>, PersistError> {
        Ok(Self::lock(&self.jobs).clone())
    }

    fn save_jobs(&self, jobs: &[Job]) -> Result<(), PersistError> {
        *Self::lock(&self.jobs) = Some(jobs.to_vec());
        Ok(())
    }

    fn load_templates(&self) -> Result<Option<Vec<JobTemplate>>, PersistError> {
        Ok(Self::lock(&self.templates).clone())
    }

    fn save_templates(&self, templates: &[JobTemplate]) -> Result<(), PersistError> {
        *Self::lock(&self.templates) = Some(templates.to_vec());
        Ok(())
    }

    fn load_preferences(&self) -> Result<Option<Preferences>, PersistError> {
        Ok(Self::lock(&self.preferences).clone())
    }

    fn save_preferences(&self, preferences: &Preferences) -> Result<(), PersistError> {
        *Self::lock(&self.preferences) = Some(preferences.clone());
        Ok(())
    }
}
