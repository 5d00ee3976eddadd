use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::alerts::{self, Alert};
use crate::error::LedgerError;
use crate::models::transaction::{DraftTransaction, PaymentMode, Transaction, TransactionType};

/// Parses `amount, type, category, mode[, date[, description]]` into a draft.
/// Date and description are optional; a missing date means "today" and is
/// filled in by the ledger at append.
pub fn parse_draft(input: &str) -> Result<DraftTransaction, LedgerError> {
    let parts: Vec<&str> = input.split(',').map(|s| s.trim()).collect();
    if parts.len() < 4 || parts.len() > 6 {
        return Err(LedgerError::MalformedDraft {
            expected: "4 to 6",
            got: parts.len(),
        });
    }

    let amount = Decimal::from_str(parts[0])
        .map_err(|_| LedgerError::InvalidAmount(parts[0].to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount(amount));
    }

    let transaction_type = TransactionType::parse(parts[1])?;
    let category = parts[2].to_string();
    let payment_mode = PaymentMode::parse(parts[3])?;

    let date = match parts.get(4) {
        Some(raw) if !raw.is_empty() => Some(
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| LedgerError::InvalidDate(raw.to_string()))?,
        ),
        _ => None,
    };

    let description = parts.get(5).unwrap_or(&"").to_string();

    Ok(DraftTransaction {
        amount,
        transaction_type,
        category,
        payment_mode,
        date,
        description,
    })
}

/// Pre-commit review of a draft against the current snapshot. Only expenses
/// can warn; income drafts always pass silently.
pub fn review(draft: &DraftTransaction, snapshot: &[Transaction]) -> Vec<Alert> {
    match draft.transaction_type {
        TransactionType::Expense => alerts::review_expense(draft.amount, snapshot),
        TransactionType::Income => Vec::new(),
    }
}
