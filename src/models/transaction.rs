use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Categories the UI has icons for. Anything else is stored verbatim and
/// rendered with a generic icon.
pub const KNOWN_CATEGORIES: [&str; 10] = [
    "Food",
    "Travel",
    "Bills",
    "Shopping",
    "Pocket Money",
    "Internship",
    "Salary",
    "Entertainment",
    "Utilities",
    "Other",
];

pub fn is_known_category(category: &str) -> bool {
    KNOWN_CATEGORIES
        .iter()
        .any(|known| known.eq_ignore_ascii_case(category))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn parse(input: &str) -> Result<Self, LedgerError> {
        match input.to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(LedgerError::InvalidType(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMode {
    Online,
    Cash,
}

impl PaymentMode {
    pub fn parse(input: &str) -> Result<Self, LedgerError> {
        match input.to_lowercase().as_str() {
            "online" => Ok(PaymentMode::Online),
            "cash" => Ok(PaymentMode::Cash),
            other => Err(LedgerError::InvalidPaymentMode(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMode::Online => "online",
            PaymentMode::Cash => "cash",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub amount: Decimal,
    pub transaction_type: TransactionType,
    pub category: String,
    pub payment_mode: PaymentMode,
    pub date: NaiveDate,
    pub description: String,
}

/// A transaction before the ledger has accepted it: no id yet, and the date
/// may be left for the ledger to fill in with today.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftTransaction {
    pub amount: Decimal,
    pub transaction_type: TransactionType,
    pub category: String,
    pub payment_mode: PaymentMode,
    pub date: Option<NaiveDate>,
    pub description: String,
}
