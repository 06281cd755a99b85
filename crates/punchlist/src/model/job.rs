//! Job records and the ledger arithmetic derived from them.
//!
//! A `Job` is a plain value record. Every financial figure beyond the
//! stored cost fields (total paid, remaining balance, payment progress)
//! is computed on demand from the payment list, never cached, so reads
//! are always consistent with the latest mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::payment::Payment;
use crate::model::template::JobTemplate;

/// Trade category of a job.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContractorType {
    GeneralContractor,
    Electrician,
    Plumber,
    Carpenter,
    Painter,
    Roofer,
    Landscaper,
    Hvac,
    Flooring,
    Masonry,
    Drywall,
    Handyman,
}

impl ContractorType {
    /// Every trade, in the order category pickers present them.
    pub const ALL: [ContractorType; 12] = [
        ContractorType::GeneralContractor,
        ContractorType::Electrician,
        ContractorType::Plumber,
        ContractorType::Carpenter,
        ContractorType::Painter,
        ContractorType::Roofer,
        ContractorType::Landscaper,
        ContractorType::Hvac,
        ContractorType::Flooring,
        ContractorType::Masonry,
        ContractorType::Drywall,
        ContractorType::Handyman,
    ];
}

impl std::fmt::Display for ContractorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContractorType::GeneralContractor => write!(f, "General Contractor"),
            ContractorType::Electrician => write!(f, "Electrician"),
            ContractorType::Plumber => write!(f, "Plumber"),
            ContractorType::Carpenter => write!(f, "Carpenter"),
            ContractorType::Painter => write!(f, "Painter"),
            ContractorType::Roofer => write!(f, "Roofer"),
            ContractorType::Landscaper => write!(f, "Landscaper"),
            ContractorType::Hvac => write!(f, "HVAC"),
            ContractorType::Flooring => write!(f, "Flooring"),
            ContractorType::Masonry => write!(f, "Masonry"),
            ContractorType::Drywall => write!(f, "Drywall"),
            ContractorType::Handyman => write!(f, "Handyman"),
        }
    }
}

/// A single contractor engagement, tracked from estimate through
/// completion and payment.
///
/// Jobs are immutable by convention: flows that change one build a new
/// value (or clone and edit) and hand it to the store, which replaces
/// the record by id. `progress` is a work-completion fraction in
/// [0, 1], maintained by the editing forms; `completion_date` is only
/// meaningful while `is_completed` is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Job {
    /// Unique job identifier.
    pub id: String,
    /// Client contact details.
    pub client_name: String,
    pub client_phone: String,
    pub client_email: String,
    /// Site address.
    pub address: String,
    /// Trade category.
    pub contractor_type: ContractorType,
    /// Free-text scope description.
    pub description: String,
    /// Quoted cost at estimate time.
    pub estimated_cost: f64,
    /// Final cost, set on completion.
    pub actual_cost: Option<f64>,
    /// Work-completion fraction in [0, 1].
    pub progress: f64,
    /// When work started (or the estimate was written).
    pub start_date: DateTime<Utc>,
    /// When work finished, if it has.
    pub completion_date: Option<DateTime<Utc>>,
    /// Stored paths of the job's photos, in capture order.
    pub photo_paths: Vec<String>,
    /// Whether the job is finished.
    pub is_completed: bool,
    /// Free-text notes.
    pub notes: String,
    /// Payments received against this job, in recording order.
    pub payments: Vec<Payment>,
}

impl Job {
    /// Creates a fresh estimate for a client, started now.
    pub fn new(client_name: &str, contractor_type: ContractorType, estimated_cost: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            client_name: client_name.to_string(),
            client_phone: String::new(),
            client_email: String::new(),
            address: String::new(),
            contractor_type,
            description: String::new(),
            estimated_cost,
            actual_cost: None,
            progress: 0.0,
            start_date: Utc::now(),
            completion_date: None,
            photo_paths: Vec::new(),
            is_completed: false,
            notes: String::new(),
            payments: Vec::new(),
        }
    }

    /// Creates a job pre-filled from a template. Client fields are left
    /// empty for the estimate form to fill in; the template is not
    /// referenced afterwards.
    pub fn from_template(template: &JobTemplate) -> Self {
        let mut job = Job::new("", template.contractor_type, template.estimated_cost);
        job.description = template.description.clone();
        job.notes = template.notes.clone();
        job
    }

    /// The cost every balance computation is based on: the actual cost
    /// once recorded, the estimate before that.
    pub fn effective_cost(&self) -> f64 {
        self.actual_cost.unwrap_or(self.estimated_cost)
    }

    /// Sum of all recorded payments. Zero for an empty payment list.
    pub fn total_paid(&self) -> f64 {
        self.payments.iter().map(|p| p.amount).sum()
    }

    /// Outstanding balance, never negative; overpayment clamps to zero.
    pub fn remaining_balance(&self) -> f64 {
        (self.effective_cost() - self.total_paid()).max(0.0)
    }

    /// Fraction of the effective cost received so far, in [0, 1].
    /// Defined as 0 when the effective cost is zero (or negative), and
    /// capped at 1 even when overpaid.
    pub fn payment_progress(&self) -> f64 {
        let cost = self.effective_cost();
        if cost <= 0.0 {
            return 0.0;
        }
        (self.total_paid() / cost).min(1.0)
    }

    /// Whether nothing is outstanding.
    pub fn is_fully_paid(&self) -> bool {
        self.remaining_balance() <= 0.0
    }

    /// Whole days since the start date.
    pub fn days_in_progress(&self) -> i64 {
        (Utc::now() - self.start_date).num_days()
    }

    /// Whole days from start to completion; 0 when the completion date
    /// is missing.
    pub fn duration_days(&self) -> i64 {
        self.completion_date
            .map(|done| (done - self.start_date).num_days())
            .unwrap_or(0)
    }

    /// Returns a new job with the payment appended. Copy-on-write: the
    /// receiver is consumed, never mutated in place, so concurrent
    /// readers of the old value are unaffected.
    pub fn with_payment(mut self, payment: Payment) -> Self {
        self.payments.push(payment);
        self
    }

    /// Returns a new job with the matching payment removed. A logical
    /// no-op when the id is not present.
    pub fn without_payment(mut self, payment_id: &str) -> Self {
        self.payments.retain(|p| p.id != payment_id);
        self
    }

    /// Whether the job owns a payment with the given id.
    pub fn has_payment(&self, payment_id: &str) -> bool {
        self.payments.iter().any(|p| p.id == payment_id)
    }
}
