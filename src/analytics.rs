//! Pure derivations over a ledger snapshot. Nothing here mutates or retains
//! the slice it is given, and every function is deterministic for the same
//! input.

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::transaction::{Transaction, TransactionType};

/// Anomaly statistics need at least this much history to mean anything.
pub const MIN_ANOMALY_HISTORY: usize = 5;

const FORECAST_DAYS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

pub fn aggregate(transactions: &[Transaction]) -> Totals {
    let mut totals = Totals::default();
    for transaction in transactions {
        match transaction.transaction_type {
            TransactionType::Income => totals.income += transaction.amount,
            TransactionType::Expense => totals.expense += transaction.amount,
        }
    }
    totals.balance = totals.income - totals.expense;
    totals
}

/// Average expense per active day. The denominator counts distinct dates
/// carrying any transaction at all, income included, so a week with activity
/// on three days divides by 3, not 7.
pub fn burn_rate(transactions: &[Transaction]) -> Decimal {
    if transactions.is_empty() {
        return Decimal::ZERO;
    }
    let active_days: HashSet<NaiveDate> = transactions.iter().map(|t| t.date).collect();
    aggregate(transactions).expense / Decimal::from(active_days.len() as u64)
}

/// Fixed 30-day linear projection of the burn rate. An estimate, not a
/// calendar-accurate figure.
pub fn forecast(transactions: &[Transaction]) -> Decimal {
    burn_rate(transactions) * Decimal::from(FORECAST_DAYS)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpendingStats {
    pub mean: f64,
    pub std_dev: f64,
    pub threshold: f64,
}

/// Mean, population standard deviation (divide by n, not n-1) and the
/// `mean + 2*std_dev` threshold over the amounts of all transactions in the
/// snapshot, income included. `None` below [`MIN_ANOMALY_HISTORY`] entries.
///
/// Statistics are estimates, so they run in f64 rather than `Decimal`.
pub fn anomaly_threshold(transactions: &[Transaction]) -> Option<SpendingStats> {
    if transactions.len() < MIN_ANOMALY_HISTORY {
        return None;
    }

    let amounts: Vec<f64> = transactions
        .iter()
        .map(|t| t.amount.to_f64().unwrap_or(0.0))
        .collect();
    let count = amounts.len() as f64;

    let mean = amounts.iter().sum::<f64>() / count;
    let variance = amounts.iter().map(|a| (a - mean).powi(2)).sum::<f64>() / count;
    let std_dev = variance.sqrt();

    Some(SpendingStats {
        mean,
        std_dev,
        threshold: mean + 2.0 * std_dev,
    })
}

/// Checks a prospective amount against the existing history only; the
/// candidate never contributes to its own threshold.
pub fn is_anomaly(candidate_amount: Decimal, transactions: &[Transaction]) -> bool {
    match anomaly_threshold(transactions) {
        Some(stats) => candidate_amount.to_f64().unwrap_or(0.0) > stats.threshold,
        None => false,
    }
}

/// Expense as a fraction of income, or `None` when there is no income to
/// measure against (no signal, never zero or a division by zero).
pub fn budget_utilization(transactions: &[Transaction]) -> Option<Decimal> {
    let totals = aggregate(transactions);
    if totals.income > Decimal::ZERO {
        Some(totals.expense / totals.income)
    } else {
        None
    }
}
