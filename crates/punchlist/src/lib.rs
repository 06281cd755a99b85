//! Punchlist core — the job ledger behind a contractor estimating app.
//!
//! This crate owns everything below the presentation layer: the
//! Job/Payment/Template value records and their derived financial
//! arithmetic, the [`JobStore`] that mediates every mutation of the job
//! collection (persist-on-mutation, cascading photo cleanup, analytics
//! notifications), the job-scoped [`PhotoLibrary`], JSON-file
//! persistence, and read-only CSV/PDF report exporters.
//!
//! The desktop shell injects the collaborators at construction:
//!
//! ```no_run
//! use std::sync::Arc;
//! use punchlist::{default_data_dir, JobStore, JsonStore, LogAnalytics, PhotoLibrary};
//!
//! let data_dir = default_data_dir().expect("platform data directory");
//! let mut store = JobStore::new(
//!     Arc::new(JsonStore::new(&data_dir)),
//!     PhotoLibrary::new(data_dir.join("photos")),
//!     Arc::new(LogAnalytics),
//! );
//! store.initialize().expect("load jobs");
//! ```

pub mod analytics;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod persist;
pub mod photo;
pub mod store;

pub use analytics::{AnalyticsSink, JobEvent, LogAnalytics, NoopAnalytics};
pub use config::Preferences;
pub use error::{
    ExportError, PersistError, PhotoError, PunchlistError, Result, StoreError,
};
pub use model::{ContractorType, Job, JobTemplate, Payment, PaymentMethod};
pub use persist::{default_data_dir, JsonStore, MemoryStore, Persistence};
pub use photo::PhotoLibrary;
pub use store::{JobStore, TemplateCatalog};
