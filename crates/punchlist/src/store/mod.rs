//! The job store — sole owner and mutation gateway for the job
//! collection.
//!
//! Every create/update/delete flows through this component so that
//! persistence and cascading side effects stay consistent: a mutation
//! is saved through the persistence collaborator first and only then
//! committed to the in-memory collection, so readers never observe
//! state that is not on disk, and a failed save leaves the collection
//! untouched. Mutations take `&mut self`, which makes the single-writer
//! contract a compile-time property; a multi-threaded embedding wraps
//! the store in its own synchronization.
//!
//! Readers get cloned snapshots. The derived views and aggregate sums
//! are computed from the live collection on every call, never cached.

mod samples;
mod templates;

pub use templates::TemplateCatalog;

use std::sync::Arc;

use crate::analytics::{AnalyticsSink, JobEvent};
use crate::error::StoreError;
use crate::model::{Job, Payment};
use crate::persist::Persistence;
use crate::photo::PhotoLibrary;

pub struct JobStore {
    jobs: Vec<Job>,
    persistence: Arc<dyn Persistence>,
    photos: PhotoLibrary,
    analytics: Arc<dyn AnalyticsSink>,
}

impl JobStore {
    /// Creates an empty store wired to its collaborators. Call
    /// [`initialize`](Self::initialize) before use.
    pub fn new(
        persistence: Arc<dyn Persistence>,
        photos: PhotoLibrary,
        analytics: Arc<dyn AnalyticsSink>,
    ) -> Self {
        Self {
            jobs: Vec::new(),
            persistence,
            photos,
            analytics,
        }
    }

    /// Loads the persisted collection. On first run (nothing persisted
    /// yet) the store seeds a demonstration set spanning all job states
    /// and persists it; existing data is used as-is. Load and save
    /// failures propagate; a disk error is not a fresh install.
    pub fn initialize(&mut self) -> Result<(), StoreError> {
        match self.persistence.load_jobs()? {
            Some(jobs) => {
                log::info!("Loaded {} jobs", jobs.len());
                self.jobs = jobs;
            }
            None => {
                let seeded = samples::sample_jobs();
                log::info!("First run: seeding {} sample jobs", seeded.len());
                self.persistence.save_jobs(&seeded)?;
                self.jobs = seeded;
            }
        }
        Ok(())
    }

    // ─── Mutations ──────────────────────────────────────────────────

    /// Appends a job and persists the collection.
    pub fn add_job(&mut self, job: Job) -> Result<(), StoreError> {
        let event = JobEvent::Created {
            job_id: job.id.clone(),
            contractor_type: job.contractor_type,
            estimated_cost: job.estimated_cost,
        };

        let mut next = self.jobs.clone();
        next.push(job);
        self.commit(next)?;

        self.analytics.record(&event);
        Ok(())
    }

    /// Replaces the job with the same id and persists the collection.
    /// A false→true completion transition emits exactly one completion
    /// event carrying the job duration in whole days.
    pub fn update_job(&mut self, job: Job) -> Result<(), StoreError> {
        let index = self
            .jobs
            .iter()
            .position(|j| j.id == job.id)
            .ok_or_else(|| StoreError::JobNotFound { id: job.id.clone() })?;

        // The prior completion flag decides which event fires, so it
        // must be read before the replacement is committed.
        let was_completed = self.jobs[index].is_completed;
        let event = if !was_completed && job.is_completed {
            JobEvent::Completed {
                job_id: job.id.clone(),
                duration_days: job.duration_days(),
                final_cost: job.effective_cost(),
            }
        } else {
            JobEvent::Updated {
                job_id: job.id.clone(),
            }
        };

        let mut next = self.jobs.clone();
        next[index] = job;
        self.commit(next)?;

        self.analytics.record(&event);
        Ok(())
    }

    /// Removes the job, persists the collection, then deletes the
    /// job's photo files. Photo deletion is best-effort and never rolls
    /// back the job deletion.
    pub fn delete_job(&mut self, job_id: &str) -> Result<(), StoreError> {
        let index = self
            .jobs
            .iter()
            .position(|j| j.id == job_id)
            .ok_or_else(|| StoreError::JobNotFound {
                id: job_id.to_string(),
            })?;

        let mut next = self.jobs.clone();
        next.remove(index);
        self.commit(next)?;

        self.photos.delete_all_for_job(job_id);
        self.analytics.record(&JobEvent::Deleted {
            job_id: job_id.to_string(),
        });
        Ok(())
    }

    /// Records a payment against a job: the ledger's copy-on-write
    /// append followed by a replace-by-id update.
    pub fn record_payment(&mut self, job_id: &str, payment: Payment) -> Result<(), StoreError> {
        let job = self.job(job_id).ok_or_else(|| StoreError::JobNotFound {
            id: job_id.to_string(),
        })?;
        self.update_job(job.with_payment(payment))
    }

    /// Removes a recorded payment from a job.
    pub fn remove_payment(&mut self, job_id: &str, payment_id: &str) -> Result<(), StoreError> {
        let job = self.job(job_id).ok_or_else(|| StoreError::JobNotFound {
            id: job_id.to_string(),
        })?;
        if !job.has_payment(payment_id) {
            return Err(StoreError::PaymentNotFound {
                job_id: job_id.to_string(),
                payment_id: payment_id.to_string(),
            });
        }
        self.update_job(job.without_payment(payment_id))
    }

    /// Saves the prospective collection, then swaps it in. On failure
    /// the in-memory collection is unchanged.
    fn commit(&mut self, next: Vec<Job>) -> Result<(), StoreError> {
        self.persistence.save_jobs(&next)?;
        self.jobs = next;
        Ok(())
    }

    // ─── Views ──────────────────────────────────────────────────────

    /// Snapshot of the whole collection, in insertion order.
    pub fn jobs(&self) -> Vec<Job> {
        self.jobs.clone()
    }

    /// Snapshot of a single job.
    pub fn job(&self, job_id: &str) -> Option<Job> {
        self.jobs.iter().find(|j| j.id == job_id).cloned()
    }

    /// Jobs still in progress.
    pub fn active_jobs(&self) -> Vec<Job> {
        self.jobs.iter().filter(|j| !j.is_completed).cloned().collect()
    }

    /// Finished jobs.
    pub fn completed_jobs(&self) -> Vec<Job> {
        self.jobs.iter().filter(|j| j.is_completed).cloned().collect()
    }

    // ─── Aggregates ─────────────────────────────────────────────────

    /// Sum of effective cost over completed jobs.
    pub fn completed_revenue(&self) -> f64 {
        self.jobs
            .iter()
            .filter(|j| j.is_completed)
            .map(|j| j.effective_cost())
            .sum()
    }

    /// Sum of estimated cost over active jobs.
    pub fn active_estimated_value(&self) -> f64 {
        self.jobs
            .iter()
            .filter(|j| !j.is_completed)
            .map(|j| j.estimated_cost)
            .sum()
    }

    /// Funds received across all jobs.
    pub fn total_collected(&self) -> f64 {
        self.jobs.iter().map(|j| j.total_paid()).sum()
    }

    /// Outstanding balance across all jobs.
    pub fn total_outstanding(&self) -> f64 {
        self.jobs.iter().map(|j| j.remaining_balance()).sum()
    }

    /// Funds received on completed jobs.
    pub fn completed_collected(&self) -> f64 {
        self.jobs
            .iter()
            .filter(|j| j.is_completed)
            .map(|j| j.total_paid())
            .sum()
    }
}
