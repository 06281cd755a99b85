//! Job templates — reusable cost/description presets for new estimates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::job::{ContractorType, Job};

/// Default share of a job's cost attributed to materials when deriving
/// a template from it; the remainder is labor.
pub const DEFAULT_MATERIALS_SHARE: f64 = 0.6;

/// A reusable preset that pre-fills new job creation. Templates are
/// read-mostly: a small user-managed catalog plus the immutable
/// built-in defaults. A job keeps no reference back to the template it
/// was created from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobTemplate {
    /// Unique template identifier.
    pub id: String,
    /// Display name ("Kitchen Remodel").
    pub name: String,
    /// Trade category.
    pub contractor_type: ContractorType,
    /// Scope description copied into new jobs.
    pub description: String,
    /// Total quoted cost. Always `materials_cost + labor_cost`.
    pub estimated_cost: f64,
    /// Materials portion of the cost.
    pub materials_cost: f64,
    /// Labor portion of the cost.
    pub labor_cost: f64,
    /// Typical days to completion.
    pub estimated_days: u32,
    /// Free-text notes copied into new jobs.
    pub notes: String,
    /// When the template was created.
    pub created_date: DateTime<Utc>,
}

impl JobTemplate {
    /// Derives a template from an existing job using the default 60/40
    /// materials/labor split.
    pub fn from_job(job: &Job, name: &str) -> Self {
        Self::from_job_with_split(job, name, DEFAULT_MATERIALS_SHARE)
    }

    /// Derives a template from an existing job, attributing
    /// `materials_share` of the effective cost to materials and the
    /// remainder to labor. The share is clamped to [0, 1].
    pub fn from_job_with_split(job: &Job, name: &str, materials_share: f64) -> Self {
        let share = materials_share.clamp(0.0, 1.0);
        let cost = job.effective_cost();
        let materials = cost * share;

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            contractor_type: job.contractor_type,
            description: job.description.clone(),
            estimated_cost: cost,
            materials_cost: materials,
            labor_cost: cost - materials,
            estimated_days: job.duration_days().max(0) as u32,
            notes: job.notes.clone(),
            created_date: Utc::now(),
        }
    }

    /// The built-in template catalog: eight defaults spanning common
    /// trades. Built-ins are immutable and are not persisted with the
    /// user's custom catalog.
    pub fn builtin_catalog() -> Vec<JobTemplate> {
        fn builtin(
            id: &str,
            name: &str,
            contractor_type: ContractorType,
            description: &str,
            materials_cost: f64,
            labor_cost: f64,
            estimated_days: u32,
        ) -> JobTemplate {
            JobTemplate {
                id: id.to_string(),
                name: name.to_string(),
                contractor_type,
                description: description.to_string(),
                estimated_cost: materials_cost + labor_cost,
                materials_cost,
                labor_cost,
                estimated_days,
                notes: String::new(),
                created_date: Utc::now(),
            }
        }

        vec![
            builtin(
                "builtin-kitchen-remodel",
                "Kitchen Remodel",
                ContractorType::GeneralContractor,
                "Full kitchen remodel: demo, cabinets, counters, fixtures, finish work.",
                15000.0,
                10000.0,
                21,
            ),
            builtin(
                "builtin-bathroom-remodel",
                "Bathroom Remodel",
                ContractorType::GeneralContractor,
                "Bathroom gut and remodel: tile, vanity, tub/shower, fixtures.",
                7200.0,
                4800.0,
                10,
            ),
            builtin(
                "builtin-panel-upgrade",
                "Electrical Panel Upgrade",
                ContractorType::Electrician,
                "Replace main panel with 200A service, new breakers, permit and inspection.",
                1400.0,
                1800.0,
                2,
            ),
            builtin(
                "builtin-water-heater",
                "Water Heater Replacement",
                ContractorType::Plumber,
                "Remove old tank, install 50-gallon gas water heater, haul away.",
                1100.0,
                700.0,
                1,
            ),
            builtin(
                "builtin-interior-paint",
                "Interior Painting",
                ContractorType::Painter,
                "Paint interior walls and trim, two coats, patch and prep included.",
                1500.0,
                3000.0,
                5,
            ),
            builtin(
                "builtin-roof-replacement",
                "Roof Replacement",
                ContractorType::Roofer,
                "Tear off and replace asphalt shingle roof, new underlayment and flashing.",
                8000.0,
                6000.0,
                4,
            ),
            builtin(
                "builtin-deck-build",
                "Deck Construction",
                ContractorType::Carpenter,
                "Build 12x16 pressure-treated deck with railing and stairs.",
                5500.0,
                4000.0,
                7,
            ),
            builtin(
                "builtin-ac-install",
                "Central AC Installation",
                ContractorType::Hvac,
                "Install 3-ton central air system with new lineset and thermostat.",
                5000.0,
                2800.0,
                3,
            ),
        ]
    }
}
