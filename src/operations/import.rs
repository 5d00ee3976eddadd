use std::fs::File;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::LedgerError;
use crate::models::transaction::{DraftTransaction, PaymentMode, TransactionType};
use crate::store::ledger::Ledger;

/// Reads CSV rows of `date, description, amount, type, category, mode` and
/// appends them through the ledger so ids stay monotonic. Every row is
/// validated before anything is appended; a bad row imports nothing.
pub fn import_csv(ledger: &mut Ledger, path: &str) -> Result<usize, LedgerError> {
    let file = File::open(path)?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .has_headers(false)
        .from_reader(file);

    let mut drafts = Vec::new();
    for (line_index, result) in reader.records().enumerate() {
        let line = line_index + 1;
        let record = result.map_err(|e| LedgerError::ImportRow {
            line,
            source: Box::new(e.into()),
        })?;

        let draft = parse_record(&record).map_err(|e| LedgerError::ImportRow {
            line,
            source: Box::new(e),
        })?;
        drafts.push(draft);
    }

    let mut count = 0;
    for draft in drafts {
        ledger.append(draft)?;
        count += 1;
    }
    Ok(count)
}

fn parse_record(record: &csv::StringRecord) -> Result<DraftTransaction, LedgerError> {
    if record.len() != 6 {
        return Err(LedgerError::MalformedDraft {
            expected: "6",
            got: record.len(),
        });
    }

    let raw_date = record.get(0).unwrap_or("");
    let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
        .map_err(|_| LedgerError::InvalidDate(raw_date.to_string()))?;

    let raw_amount = record.get(2).unwrap_or("");
    let amount = Decimal::from_str(raw_amount)
        .map_err(|_| LedgerError::InvalidAmount(raw_amount.to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount(amount));
    }

    Ok(DraftTransaction {
        amount,
        transaction_type: TransactionType::parse(record.get(3).unwrap_or(""))?,
        category: record.get(4).unwrap_or("").to_string(),
        payment_mode: PaymentMode::parse(record.get(5).unwrap_or(""))?,
        date: Some(date),
        description: record.get(1).unwrap_or("").to_string(),
    })
}
