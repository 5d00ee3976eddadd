use rust_decimal::Decimal;
use thiserror::Error;

/// Everything that can go wrong in the ledger core. Validation variants are
/// raised before any state is touched; storage variants are raised when the
/// blob store cannot be written (reads never fail, they degrade to empty).
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("amount must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),

    #[error("invalid amount '{0}': must be a decimal number")]
    InvalidAmount(String),

    #[error("invalid transaction type '{0}': use 'income' or 'expense'")]
    InvalidType(String),

    #[error("invalid payment mode '{0}': use 'online' or 'cash'")]
    InvalidPaymentMode(String),

    #[error("invalid date '{0}': use YYYY-MM-DD")]
    InvalidDate(String),

    #[error("expected {expected} comma-separated fields, got {got}")]
    MalformedDraft { expected: &'static str, got: usize },

    #[error("invalid transaction id '{0}'")]
    InvalidId(String),

    #[error("line {line}: {source}")]
    ImportRow {
        line: usize,
        source: Box<LedgerError>,
    },

    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize store contents: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
