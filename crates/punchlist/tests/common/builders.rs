//! Builders for creating test jobs without repetitive boilerplate.

#![allow(dead_code)]

use chrono::{Duration, Utc};

use punchlist::{ContractorType, Job, Payment, PaymentMethod};

/// Builder for `Job` values.
pub struct JobBuilder {
    job: Job,
}

impl JobBuilder {
    /// Starts a job for the given client with sensible defaults.
    pub fn new(client_name: &str) -> Self {
        Self {
            job: Job::new(client_name, ContractorType::GeneralContractor, 10000.0),
        }
    }

    pub fn trade(mut self, contractor_type: ContractorType) -> Self {
        self.job.contractor_type = contractor_type;
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.job.description = description.to_string();
        self
    }

    pub fn estimated(mut self, cost: f64) -> Self {
        self.job.estimated_cost = cost;
        self
    }

    pub fn actual(mut self, cost: f64) -> Self {
        self.job.actual_cost = Some(cost);
        self
    }

    pub fn progress(mut self, progress: f64) -> Self {
        self.job.progress = progress;
        self
    }

    pub fn started_days_ago(mut self, days: i64) -> Self {
        self.job.start_date = Utc::now() - Duration::days(days);
        self
    }

    /// Marks the job completed `days` after its start date.
    pub fn completed_after_days(mut self, days: i64) -> Self {
        self.job.is_completed = true;
        self.job.progress = 1.0;
        self.job.completion_date = Some(self.job.start_date + Duration::days(days));
        self
    }

    /// Marks the job completed without a completion date.
    pub fn completed_undated(mut self) -> Self {
        self.job.is_completed = true;
        self
    }

    pub fn payment(mut self, amount: f64, method: PaymentMethod, note: &str) -> Self {
        self.job.payments.push(Payment::new(amount, method, note));
        self
    }

    pub fn photo_path(mut self, path: &str) -> Self {
        self.job.photo_paths.push(path.to_string());
        self
    }

    pub fn notes(mut self, notes: &str) -> Self {
        self.job.notes = notes.to_string();
        self
    }

    pub fn build(self) -> Job {
        self.job
    }
}
