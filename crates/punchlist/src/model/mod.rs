//! Value records for the job ledger: jobs, payments, and templates.

mod job;
mod payment;
mod template;

pub use job::{ContractorType, Job};
pub use payment::{Payment, PaymentMethod};
pub use template::{JobTemplate, DEFAULT_MATERIALS_SHARE};
