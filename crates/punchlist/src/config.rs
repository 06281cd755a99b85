//! User preferences persisted alongside the job collection.
//!
//! These are the contractor-facing settings the core needs: report
//! headers and the default materials/labor split. Window state, theme
//! and other UI preferences belong to the shell, not here.

use serde::{Deserialize, Serialize};

use crate::model::DEFAULT_MATERIALS_SHARE;

/// Business-level preferences. Every field carries a serde default so
/// older preference files keep loading after new fields are added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    /// Business name shown on report headers.
    #[serde(default)]
    pub company_name: String,
    /// Business phone shown on report headers.
    #[serde(default)]
    pub company_phone: String,
    /// Materials share used when deriving templates from jobs.
    #[serde(default = "default_materials_share")]
    pub default_materials_share: f64,
}

fn default_materials_share() -> f64 {
    DEFAULT_MATERIALS_SHARE
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            company_phone: String::new(),
            default_materials_share: DEFAULT_MATERIALS_SHARE,
        }
    }
}
