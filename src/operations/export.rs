use crate::error::LedgerError;
use crate::models::transaction::Transaction;
use crate::operations::report::sorted_for_display;

/// Writes the full history as CSV rows of
/// `date, description, amount, type, category, mode`, newest first.
/// Ids are not exported; import assigns fresh ones.
pub fn export_csv(transactions: &[Transaction], path: &str) -> Result<usize, LedgerError> {
    let mut writer = csv::Writer::from_path(path)?;
    let mut count = 0;

    for transaction in sorted_for_display(transactions.to_vec()) {
        writer.write_record([
            transaction.date.to_string(),
            transaction.description.clone(),
            transaction.amount.to_string(),
            transaction.transaction_type.as_str().to_string(),
            transaction.category.clone(),
            transaction.payment_mode.as_str().to_string(),
        ])?;
        count += 1;
    }

    writer.flush()?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaction::{PaymentMode, TransactionType};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use tempfile::tempdir;

    #[test]
    fn test_export_writes_one_row_per_transaction() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let transactions = vec![
            Transaction {
                id: 1,
                amount: Decimal::new(350, 2),
                transaction_type: TransactionType::Expense,
                category: "Food".to_string(),
                payment_mode: PaymentMode::Cash,
                date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                description: "Coffee".to_string(),
            },
            Transaction {
                id: 2,
                amount: Decimal::from(1500),
                transaction_type: TransactionType::Income,
                category: "Salary".to_string(),
                payment_mode: PaymentMode::Online,
                date: NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
                description: String::new(),
            },
        ];

        let count = export_csv(&transactions, path.to_str().unwrap()).unwrap();
        assert_eq!(count, 2);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("2025-03-01,Coffee,3.50,expense,Food,cash"));
        assert!(contents.contains("2025-03-02,,1500,income,Salary,online"));
    }

    #[test]
    fn test_export_empty_ledger() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let count = export_csv(&[], path.to_str().unwrap()).unwrap();
        assert_eq!(count, 0);
    }
}
