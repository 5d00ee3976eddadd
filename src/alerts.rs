use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::analytics;
use crate::models::transaction::Transaction;

/// Budget warning fires when projected utilization exceeds 90% of income.
pub const BUDGET_WARNING_RATIO: Decimal = Decimal::from_parts(9, 0, 0, false, 1);

#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// The candidate amount exceeds the statistical spending threshold.
    HighSpending { threshold: f64 },
    /// Committing the candidate would push expense past 90% of income.
    BudgetExceeded { utilization: Decimal },
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alert::HighSpending { threshold } => write!(
                f,
                "High burn alert: this spending is unusually high for you (threshold {threshold:.2})"
            ),
            Alert::BudgetExceeded { utilization } => {
                let percent = (*utilization * Decimal::from(100)).round_dp(1);
                write!(
                    f,
                    "Critical: over 90% of income utilized ({percent}% after this expense)"
                )
            }
        }
    }
}

/// Reviews a prospective expense against the ledger as it stands, before the
/// candidate is committed. Returns advisory alerts only, anomaly first; the
/// caller decides whether to proceed regardless.
pub fn review_expense(amount: Decimal, transactions: &[Transaction]) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if let Some(stats) = analytics::anomaly_threshold(transactions) {
        if amount.to_f64().unwrap_or(0.0) > stats.threshold {
            alerts.push(Alert::HighSpending {
                threshold: stats.threshold,
            });
        }
    }

    let totals = analytics::aggregate(transactions);
    if totals.income > Decimal::ZERO {
        let projected = (totals.expense + amount) / totals.income;
        if projected > BUDGET_WARNING_RATIO {
            alerts.push(Alert::BudgetExceeded {
                utilization: projected,
            });
        }
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::transaction::{PaymentMode, TransactionType};
    use chrono::NaiveDate;

    fn tx(id: u64, amount: i64, transaction_type: TransactionType) -> Transaction {
        Transaction {
            id,
            amount: Decimal::from(amount),
            transaction_type,
            category: "Food".to_string(),
            payment_mode: PaymentMode::Online,
            date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            description: String::new(),
        }
    }

    #[test]
    fn test_budget_warning_fires_past_ninety_percent() {
        let transactions = vec![
            tx(1, 1000, TransactionType::Income),
            tx(2, 850, TransactionType::Expense),
        ];

        // 950 / 1000 = 0.95
        let alerts = review_expense(Decimal::from(100), &transactions);
        assert_eq!(alerts.len(), 1);
        assert!(matches!(alerts[0], Alert::BudgetExceeded { .. }));
    }

    #[test]
    fn test_budget_warning_quiet_below_ninety_percent() {
        let transactions = vec![
            tx(1, 1000, TransactionType::Income),
            tx(2, 850, TransactionType::Expense),
        ];

        // 870 / 1000 = 0.87
        assert!(review_expense(Decimal::from(20), &transactions).is_empty());
    }

    #[test]
    fn test_budget_warning_needs_income() {
        let transactions = vec![tx(1, 850, TransactionType::Expense)];
        assert!(review_expense(Decimal::from(100), &transactions).is_empty());
    }

    #[test]
    fn test_high_spending_alert_carries_threshold() {
        let transactions: Vec<Transaction> = [10, 10, 10, 10, 100]
            .iter()
            .enumerate()
            .map(|(i, &a)| tx(i as u64 + 1, a, TransactionType::Expense))
            .collect();

        let alerts = review_expense(Decimal::from(150), &transactions);
        assert_eq!(alerts, vec![Alert::HighSpending { threshold: 100.0 }]);
    }

    #[test]
    fn test_anomaly_suppressed_on_insufficient_history() {
        let transactions: Vec<Transaction> = (1..5)
            .map(|i| tx(i, 10, TransactionType::Expense))
            .collect();

        assert!(review_expense(Decimal::from(1_000_000), &transactions).is_empty());
    }

    #[test]
    fn test_both_alerts_in_order_anomaly_first() {
        // Amounts 1000, 10, 10, 10, 10: mean 208, population std dev 396,
        // threshold exactly 1000. A candidate of 1001 trips the anomaly and
        // pushes utilization to 1041 / 1000.
        let mut transactions = vec![tx(1, 1000, TransactionType::Income)];
        for i in 2..=5 {
            transactions.push(tx(i, 10, TransactionType::Expense));
        }

        let alerts = review_expense(Decimal::from(1001), &transactions);
        assert_eq!(alerts.len(), 2);
        assert!(matches!(alerts[0], Alert::HighSpending { .. }));
        assert!(matches!(alerts[1], Alert::BudgetExceeded { .. }));
    }

    #[test]
    fn test_alert_messages_render() {
        let high = Alert::HighSpending { threshold: 99.5 };
        assert!(high.to_string().contains("99.50"));

        let over = Alert::BudgetExceeded {
            utilization: Decimal::from_parts(95, 0, 0, false, 2),
        };
        assert!(over.to_string().contains("95"));
        assert!(over.to_string().contains("90%"));
    }
}
