//! Payment records — a single funds receipt against a job's balance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a client payment was received.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Check,
    CreditCard,
    BankTransfer,
    Venmo,
    Zelle,
    Other,
}

impl PaymentMethod {
    /// Every method, in the order payment forms present them.
    pub const ALL: [PaymentMethod; 7] = [
        PaymentMethod::Cash,
        PaymentMethod::Check,
        PaymentMethod::CreditCard,
        PaymentMethod::BankTransfer,
        PaymentMethod::Venmo,
        PaymentMethod::Zelle,
        PaymentMethod::Other,
    ];
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "Cash"),
            PaymentMethod::Check => write!(f, "Check"),
            PaymentMethod::CreditCard => write!(f, "Credit Card"),
            PaymentMethod::BankTransfer => write!(f, "Bank Transfer"),
            PaymentMethod::Venmo => write!(f, "Venmo"),
            PaymentMethod::Zelle => write!(f, "Zelle"),
            PaymentMethod::Other => write!(f, "Other"),
        }
    }
}

/// A recorded client payment.
///
/// Payments are owned exclusively by the job they were recorded against
/// and are immutable once created; the only lifecycle operation after
/// creation is removal. The amount must be validated as strictly
/// positive by the recording form before it reaches the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    /// Unique payment identifier.
    pub id: String,
    /// Amount received, in the ledger currency.
    pub amount: f64,
    /// When the payment was received.
    pub date: DateTime<Utc>,
    /// How the payment was received.
    pub method: PaymentMethod,
    /// Free-text note ("final installment", check number, ...).
    pub note: String,
}

impl Payment {
    /// Creates a payment received now.
    pub fn new(amount: f64, method: PaymentMethod, note: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            amount,
            date: Utc::now(),
            method,
            note: note.to_string(),
        }
    }
}
