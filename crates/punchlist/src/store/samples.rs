//! Demonstration jobs seeded on first run.

use chrono::{Duration, Utc};

use crate::model::{ContractorType, Job, Payment, PaymentMethod};

/// Five sample jobs spanning all states: a fresh estimate, work in
/// progress with and without payments, a completed-and-paid job, and a
/// completed job with an outstanding balance.
pub(crate) fn sample_jobs() -> Vec<Job> {
    let now = Utc::now();

    let mut estimate = Job::new("Maria Santos", ContractorType::GeneralContractor, 25000.0);
    estimate.client_phone = "555-0142".to_string();
    estimate.address = "18 Birchwood Lane".to_string();
    estimate.description = "Kitchen remodel: cabinets, quartz counters, new lighting.".to_string();
    estimate.start_date = now - Duration::days(2);

    let mut underway = Job::new("Tom Okafor", ContractorType::Roofer, 14000.0);
    underway.client_phone = "555-0178".to_string();
    underway.address = "402 Hillcrest Ave".to_string();
    underway.description = "Tear-off and asphalt shingle replacement, garage included.".to_string();
    underway.progress = 0.4;
    underway.start_date = now - Duration::days(9);
    let underway = underway.with_payment(Payment::new(
        4000.0,
        PaymentMethod::Check,
        "Deposit on signing",
    ));

    let mut nearly_done = Job::new("Priya Raman", ContractorType::Painter, 4500.0);
    nearly_done.client_email = "priya@example.com".to_string();
    nearly_done.address = "77 Field St, Unit 3".to_string();
    nearly_done.description = "Interior repaint, two coats, full trim.".to_string();
    nearly_done.progress = 0.9;
    nearly_done.start_date = now - Duration::days(6);
    let nearly_done = nearly_done
        .with_payment(Payment::new(1500.0, PaymentMethod::Venmo, "Deposit"))
        .with_payment(Payment::new(1500.0, PaymentMethod::Venmo, "Progress payment"));

    let mut paid_off = Job::new("Glen Whitfield", ContractorType::Plumber, 1800.0);
    paid_off.client_phone = "555-0111".to_string();
    paid_off.address = "9 Canal Rd".to_string();
    paid_off.description = "Water heater replacement, 50-gallon gas.".to_string();
    paid_off.progress = 1.0;
    paid_off.is_completed = true;
    paid_off.actual_cost = Some(1950.0);
    paid_off.start_date = now - Duration::days(21);
    paid_off.completion_date = Some(now - Duration::days(20));
    paid_off.notes = "Old tank hauled to recycler.".to_string();
    let paid_off = paid_off.with_payment(Payment::new(
        1950.0,
        PaymentMethod::CreditCard,
        "Paid on completion",
    ));

    let mut owing = Job::new("Harbor Deli", ContractorType::Electrician, 3200.0);
    owing.client_phone = "555-0199".to_string();
    owing.address = "310 Harbor St".to_string();
    owing.description = "Panel upgrade to 200A, dedicated kitchen circuits.".to_string();
    owing.progress = 1.0;
    owing.is_completed = true;
    owing.actual_cost = Some(3600.0);
    owing.start_date = now - Duration::days(40);
    owing.completion_date = Some(now - Duration::days(35));
    owing.notes = "Balance due net 30.".to_string();
    let owing = owing.with_payment(Payment::new(1800.0, PaymentMethod::BankTransfer, "Deposit"));

    vec![estimate, underway, nearly_done, paid_off, owing]
}
