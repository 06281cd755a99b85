//! End-to-end store lifecycle tests against real JSON-file persistence.

mod common;

use std::path::Path;
use std::sync::Arc;

use common::builders::JobBuilder;
use common::{CollectingAnalytics, TestHarness};
use punchlist::{
    ContractorType, Job, JobEvent, JobStore, JobTemplate, PaymentMethod, PersistError,
    Persistence, PhotoLibrary, Preferences, StoreError,
};

#[test]
fn test_first_run_seeds_then_reloads_without_modification() {
    let mut harness = TestHarness::new();
    harness.store.initialize().unwrap();

    let seeded = harness.store.jobs();
    assert_eq!(seeded.len(), 5);

    // A fresh store over the same data directory loads the seeded
    // collection field-for-field, with no second seeding pass.
    let mut second = JobStore::new(
        harness.persistence.clone(),
        harness.photos(),
        Arc::new(CollectingAnalytics::default()),
    );
    second.initialize().unwrap();
    assert_eq!(second.jobs(), seeded);
}

#[test]
fn test_mutations_round_trip_through_persistence() {
    let mut harness = TestHarness::initialized();

    let jobs = vec![
        JobBuilder::new("No Payments").estimated(6000.0).build(),
        JobBuilder::new("Partial")
            .trade(ContractorType::Electrician)
            .estimated(3200.0)
            .payment(1000.0, PaymentMethod::Check, "deposit")
            .build(),
        JobBuilder::new("Paid Up")
            .trade(ContractorType::Plumber)
            .estimated(1800.0)
            .actual(1950.0)
            .started_days_ago(20)
            .completed_after_days(2)
            .payment(1000.0, PaymentMethod::Cash, "")
            .payment(950.0, PaymentMethod::Venmo, "final")
            .build(),
    ];
    for job in &jobs {
        harness.store.add_job(job.clone()).unwrap();
    }

    // Reload from disk: identical collection, identical derived values.
    let mut reloaded = JobStore::new(
        harness.persistence.clone(),
        harness.photos(),
        Arc::new(CollectingAnalytics::default()),
    );
    reloaded.initialize().unwrap();

    assert_eq!(reloaded.jobs(), harness.store.jobs());
    let paid_up = reloaded
        .jobs()
        .into_iter()
        .find(|j| j.client_name == "Paid Up")
        .unwrap();
    assert_eq!(paid_up.total_paid(), 1950.0);
    assert!(paid_up.is_fully_paid());
    assert_eq!(paid_up.duration_days(), 2);
}

#[test]
fn test_delete_job_removes_views_and_photo_files() {
    let mut harness = TestHarness::initialized();
    let photos = harness.photos();

    let mut job = JobBuilder::new("Demolition Co").estimated(4000.0).build();
    let source = harness.image_source("before.jpg");
    let stored_a = photos.save_photo(&source, &job.id).unwrap();
    let stored_b = photos.save_photo(&source, &job.id).unwrap();
    job.photo_paths = vec![stored_a.clone(), stored_b.clone()];
    harness.store.add_job(job.clone()).unwrap();

    harness.store.delete_job(&job.id).unwrap();

    assert!(harness.store.job(&job.id).is_none());
    assert!(harness.store.active_jobs().iter().all(|j| j.id != job.id));
    assert!(harness.store.completed_jobs().iter().all(|j| j.id != job.id));
    assert!(!Path::new(&stored_a).exists());
    assert!(!Path::new(&stored_b).exists());
    assert!(photos.photos_for_job(&job.id).is_empty());

    // Gone from disk too.
    let persisted = harness.persistence.load_jobs().unwrap().unwrap();
    assert!(persisted.iter().all(|j| j.id != job.id));
}

#[test]
fn test_completion_transition_notifies_once_with_duration() {
    let mut harness = TestHarness::initialized();

    let job = JobBuilder::new("Finish Line")
        .trade(ContractorType::Hvac)
        .estimated(7800.0)
        .started_days_ago(10)
        .build();
    harness.store.add_job(job.clone()).unwrap();

    let mut done = job.clone();
    done.is_completed = true;
    done.progress = 1.0;
    done.completion_date = Some(job.start_date + chrono::Duration::days(8));
    harness.store.update_job(done.clone()).unwrap();

    // A later edit must not re-notify completion.
    let mut touched = done;
    touched.notes = "sent invoice".to_string();
    harness.store.update_job(touched).unwrap();

    let completions: Vec<JobEvent> = harness
        .events()
        .into_iter()
        .filter(|e| matches!(e, JobEvent::Completed { .. }))
        .collect();
    assert_eq!(completions.len(), 1);
    assert!(matches!(
        completions[0],
        JobEvent::Completed { duration_days: 8, .. }
    ));
}

#[test]
fn test_unknown_ids_surface_not_found() {
    let mut harness = TestHarness::initialized();
    let ghost = JobBuilder::new("Ghost").build();

    assert!(matches!(
        harness.store.update_job(ghost.clone()),
        Err(StoreError::JobNotFound { .. })
    ));
    assert!(matches!(
        harness.store.delete_job(&ghost.id),
        Err(StoreError::JobNotFound { .. })
    ));
    assert!(harness.store.jobs().is_empty());
}

/// Persistence double whose saves always fail.
struct BrokenDisk;

impl Persistence for BrokenDisk {
    fn load_jobs(&self) -> Result<Option<Vec<Job>>, PersistError> {
        Ok(Some(Vec::new()))
    }

    fn save_jobs(&self, _jobs: &[Job]) -> Result<(), PersistError> {
        Err(PersistError::Io {
            path: "/dev/full".into(),
            source: std::io::Error::other("disk full"),
        })
    }

    fn load_templates(&self) -> Result<Option<Vec<JobTemplate>>, PersistError> {
        Ok(None)
    }

    fn save_templates(&self, _templates: &[JobTemplate]) -> Result<(), PersistError> {
        Ok(())
    }

    fn load_preferences(&self) -> Result<Option<Preferences>, PersistError> {
        Ok(None)
    }

    fn save_preferences(&self, _preferences: &Preferences) -> Result<(), PersistError> {
        Ok(())
    }
}

#[test]
fn test_failed_save_surfaces_and_leaves_collection_unchanged() {
    let temp = tempfile::tempdir().unwrap();
    let mut store = JobStore::new(
        Arc::new(BrokenDisk),
        PhotoLibrary::new(temp.path().join("photos")),
        Arc::new(CollectingAnalytics::default()),
    );
    store.initialize().unwrap();

    let result = store.add_job(JobBuilder::new("Unlucky").build());
    assert!(matches!(
        result,
        Err(StoreError::Persist(PersistError::Io { .. }))
    ));
    // The failed mutation is not visible to readers.
    assert!(store.jobs().is_empty());
}

#[test]
fn test_payment_flow_updates_balances() {
    let mut harness = TestHarness::initialized();
    let job = JobBuilder::new("Staged Payments")
        .estimated(6000.0)
        .build();
    harness.store.add_job(job.clone()).unwrap();

    harness
        .store
        .record_payment(&job.id, punchlist::Payment::new(4000.0, PaymentMethod::Check, ""))
        .unwrap();
    harness
        .store
        .record_payment(&job.id, punchlist::Payment::new(2000.0, PaymentMethod::Cash, ""))
        .unwrap();

    let current = harness.store.job(&job.id).unwrap();
    assert_eq!(current.total_paid(), 6000.0);
    assert_eq!(current.remaining_balance(), 0.0);
    assert!(current.is_fully_paid());
    assert_eq!(current.payment_progress(), 1.0);

    // Balance figures survive the disk round trip.
    let mut reloaded = JobStore::new(
        harness.persistence.clone(),
        harness.photos(),
        Arc::new(CollectingAnalytics::default()),
    );
    reloaded.initialize().unwrap();
    assert_eq!(reloaded.job(&job.id).unwrap().total_paid(), 6000.0);
}
