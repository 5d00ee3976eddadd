use chrono::Local;
use rust_decimal::Decimal;

use crate::error::LedgerError;
use crate::models::transaction::{DraftTransaction, Transaction};
use crate::store::blob::BlobStore;

pub const LEDGER_KEY: &str = "transactions";

/// The single owner of all stored transactions. Ids are handed out by a
/// counter seeded above every id already in the blob, so they stay strictly
/// increasing across appends and across reopens of the same store.
pub struct Ledger {
    store: BlobStore,
    transactions: Vec<Transaction>,
    next_id: u64,
}

impl Ledger {
    pub fn open(store: BlobStore) -> Self {
        let transactions: Vec<Transaction> = store.read(LEDGER_KEY);
        let next_id = transactions.iter().map(|t| t.id).max().map_or(1, |max| max + 1);
        Ledger {
            store,
            transactions,
            next_id,
        }
    }

    /// Validates, assigns an id and a date (today when the draft has none),
    /// persists the whole collection, and returns the stored record.
    /// Validation failures happen before any state is touched.
    pub fn append(&mut self, draft: DraftTransaction) -> Result<Transaction, LedgerError> {
        if draft.amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount(draft.amount));
        }

        let transaction = Transaction {
            id: self.next_id,
            amount: draft.amount,
            transaction_type: draft.transaction_type,
            category: draft.category,
            payment_mode: draft.payment_mode,
            date: draft.date.unwrap_or_else(|| Local::now().date_naive()),
            description: draft.description,
        };

        self.transactions.push(transaction.clone());
        if let Err(err) = self.persist() {
            self.transactions.pop();
            return Err(err);
        }
        self.next_id += 1;
        Ok(transaction)
    }

    /// Full snapshot copy, order unspecified. Consumers wanting chronological
    /// order sort by date then id, both descending.
    pub fn list(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    /// Returns whether a removal occurred; an absent id is a no-op, not an
    /// error.
    pub fn delete(&mut self, id: u64) -> Result<bool, LedgerError> {
        let Some(pos) = self.transactions.iter().position(|t| t.id == id) else {
            return Ok(false);
        };
        let removed = self.transactions.remove(pos);
        if let Err(err) = self.persist() {
            self.transactions.insert(pos, removed);
            return Err(err);
        }
        Ok(true)
    }

    /// Drops everything. Irreversible.
    pub fn clear(&mut self) -> Result<(), LedgerError> {
        self.transactions.clear();
        self.persist()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    fn persist(&self) -> Result<(), LedgerError> {
        self.store.write(LEDGER_KEY, &self.transactions)
    }
}
