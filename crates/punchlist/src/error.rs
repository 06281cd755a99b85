use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PunchlistError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Persistence error: {0}")]
    Persist(#[from] PersistError),

    #[error("Photo library error: {0}")]
    Photo(#[from] PhotoError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

/// Errors from the job store's mutation gateway.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The referenced job is not in the collection. Mutations surface
    /// this instead of silently ignoring the call.
    #[error("No job with id '{id}'")]
    JobNotFound { id: String },

    /// The referenced payment is not on the job.
    #[error("No payment with id '{payment_id}' on job '{job_id}'")]
    PaymentNotFound { job_id: String, payment_id: String },

    /// The referenced template is not in the catalog.
    #[error("No template with id '{id}'")]
    TemplateNotFound { id: String },

    #[error("Persistence error: {0}")]
    Persist(#[from] PersistError),
}

/// Errors from reading or writing the persisted record collections.
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("IO error for path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse records from '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize records: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Errors from the photo asset library.
#[derive(Error, Debug)]
pub enum PhotoError {
    #[error("Source file not found: {0}")]
    SourceMissing(PathBuf),

    #[error("Not an image file: {0}")]
    NotAnImage(PathBuf),

    #[error("Failed to create directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy photo from '{from}' to '{to}': {source}")]
    CopyPhoto {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not find an available filename for: {0}")]
    FileExists(PathBuf),
}

/// Errors from report export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error for path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
}

pub type Result<T> = std::result::Result<T, PunchlistError>;
