//! Photo asset library — job-scoped storage for site photos.
//!
//! Each job's photos live in a directory named by the job id under the
//! library root. The library owns the files on behalf of the job that
//! references them: a stored path is only valid while its job exists
//! and still lists it. Deletion is best-effort throughout; a photo
//! file that cannot be removed is logged and forgotten, never surfaced
//! to the flow that triggered it.

use std::path::{Path, PathBuf};

use crate::error::PhotoError;

pub struct PhotoLibrary {
    root: PathBuf,
}

impl PhotoLibrary {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Copies an externally-selected image into the job's directory and
    /// returns the stored path. The job record is not touched; the
    /// caller appends the returned path to `photo_paths` and pushes the
    /// job through the store.
    pub fn save_photo(&self, source: &Path, job_id: &str) -> Result<String, PhotoError> {
        if !source.exists() {
            return Err(PhotoError::SourceMissing(source.to_path_buf()));
        }
        if !is_image(source) {
            return Err(PhotoError::NotAnImage(source.to_path_buf()));
        }

        let job_dir = self.root.join(job_id);
        std::fs::create_dir_all(&job_dir).map_err(|e| PhotoError::CreateDirectory {
            path: job_dir.clone(),
            source: e,
        })?;

        let filename = source
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("photo.jpg");
        let dest = resolve_conflict(&job_dir, filename)?;

        std::fs::copy(source, &dest).map_err(|e| PhotoError::CopyPhoto {
            from: source.to_path_buf(),
            to: dest.clone(),
            source: e,
        })?;

        Ok(dest.to_string_lossy().into_owned())
    }

    /// Removes a single stored photo. Best-effort: failures are logged,
    /// and paths outside the library root are refused.
    pub fn delete_photo(&self, path: &str) {
        let path = Path::new(path);
        if !path.starts_with(&self.root) {
            log::warn!(
                "Refusing to delete photo outside library root: {}",
                path.display()
            );
            return;
        }

        if let Err(e) = std::fs::remove_file(path) {
            log::warn!("Failed to delete photo {}: {}", path.display(), e);
        }
    }

    /// Removes a job's entire photo directory. Invoked by the job store
    /// when the job is deleted; best-effort.
    pub fn delete_all_for_job(&self, job_id: &str) {
        let job_dir = self.root.join(job_id);
        if !job_dir.exists() {
            return;
        }

        match std::fs::remove_dir_all(&job_dir) {
            Ok(()) => log::info!("Deleted photo directory for job {}", job_id),
            Err(e) => log::warn!(
                "Failed to delete photo directory {}: {}",
                job_dir.display(),
                e
            ),
        }
    }

    /// All stored photos for a job, sorted by path. Empty when the job
    /// has no directory yet.
    pub fn photos_for_job(&self, job_id: &str) -> Vec<PathBuf> {
        let job_dir = self.root.join(job_id);
        let mut photos: Vec<PathBuf> = walkdir::WalkDir::new(&job_dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .map(|e| e.path().to_path_buf())
            .collect();
        photos.sort();
        photos
    }
}

fn is_image(path: &Path) -> bool {
    mime_guess::from_path(path)
        .first()
        .map(|mime| mime.type_() == mime_guess::mime::IMAGE)
        .unwrap_or(false)
}

/// Finds an available filename in `directory`, appending `_2`, `_3`, ...
/// before the extension when the name is taken.
fn resolve_conflict(directory: &Path, filename: &str) -> Result<PathBuf, PhotoError> {
    let path = directory.join(filename);
    if std::fs::symlink_metadata(&path).is_err() {
        return Ok(path);
    }

    let (base, ext) = match filename.rfind('.') {
        Some(dot) => (&filename[..dot], Some(&filename[dot..])),
        None => (filename, None),
    };

    for counter in 2..=1000 {
        let candidate = match ext {
            Some(ext) => format!("{}_{}{}", base, counter, ext),
            None => format!("{}_{}", base, counter),
        };
        let candidate_path = directory.join(&candidate);
        if std::fs::symlink_metadata(&candidate_path).is_err() {
            return Ok(candidate_path);
        }
    }

    Err(PhotoError::FileExists(path))
}
