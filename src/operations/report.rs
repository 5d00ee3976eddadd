use std::fmt::Write;

use rust_decimal::Decimal;

use crate::analytics;
use crate::models::profile::Profile;
use crate::models::transaction::{PaymentMode, Transaction, TransactionType};

const RECENT_LIMIT: usize = 5;

/// Display order contract: most recent date first, ties broken by newest id.
pub fn sorted_for_display(mut transactions: Vec<Transaction>) -> Vec<Transaction> {
    transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    transactions
}

fn category_icon(category: &str) -> &'static str {
    match category {
        "Food" => "🍔",
        "Travel" => "🚕",
        "Bills" => "🧾",
        "Shopping" => "🛍️",
        "Pocket Money" => "💰",
        "Internship" => "💼",
        "Salary" => "💵",
        "Entertainment" => "🎬",
        "Utilities" => "🔌",
        _ => "💸",
    }
}

fn format_line(transaction: &Transaction) -> String {
    let sign = match transaction.transaction_type {
        TransactionType::Income => '+',
        TransactionType::Expense => '-',
    };
    let mut line = format!(
        "  [{}] {} {} {} {} {}{}",
        transaction.id,
        category_icon(&transaction.category),
        transaction.category,
        transaction.date,
        transaction.payment_mode.as_str(),
        sign,
        transaction.amount,
    );
    if !transaction.description.is_empty() {
        line.push_str(" (");
        line.push_str(&transaction.description);
        line.push(')');
    }
    line
}

pub fn format_transactions(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No records found.\n".to_string();
    }
    let mut out = String::new();
    for transaction in sorted_for_display(transactions.to_vec()) {
        out.push_str(&format_line(&transaction));
        out.push('\n');
    }
    out
}

/// Net per wallet: income minus expense for each payment mode.
fn mode_net(transactions: &[Transaction], mode: PaymentMode) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.payment_mode == mode)
        .map(|t| match t.transaction_type {
            TransactionType::Income => t.amount,
            TransactionType::Expense => -t.amount,
        })
        .sum()
}

pub fn render(transactions: &[Transaction], profile: &Profile) -> String {
    let totals = analytics::aggregate(transactions);
    let burn = analytics::burn_rate(transactions).round_dp(2);
    let forecast = analytics::forecast(transactions).round_dp(2);

    let mut out = String::new();
    if profile.name.is_empty() {
        out.push_str("Dashboard\n");
    } else {
        let _ = writeln!(out, "Dashboard for {}", profile.name);
    }
    let _ = writeln!(out, "  Income:   +{}", totals.income);
    let _ = writeln!(out, "  Burned:   -{}", totals.expense);
    let _ = writeln!(out, "  Balance:  {}", totals.balance);
    let _ = writeln!(out, "  Burn rate: {} per active day", burn);
    let _ = writeln!(out, "  Forecast:  {} over the next 30 days", forecast);

    let _ = writeln!(
        out,
        "  Wallets:  online {} | cash {}",
        mode_net(transactions, PaymentMode::Online),
        mode_net(transactions, PaymentMode::Cash),
    );

    if let Some(budget) = profile.monthly_budget {
        if budget > Decimal::ZERO {
            let used = (totals.expense / budget * Decimal::from(100)).round_dp(1);
            let _ = writeln!(out, "  Monthly target: {} ({}% used)", budget, used);
        }
    }

    if let Some(utilization) = analytics::budget_utilization(transactions) {
        let percent = (utilization * Decimal::from(100)).round_dp(1);
        let _ = writeln!(out, "  Income utilized: {}%", percent);
    }

    out.push_str("Recent activity:\n");
    if transactions.is_empty() {
        out.push_str("  No activity yet.\n");
    } else {
        for transaction in sorted_for_display(transactions.to_vec())
            .iter()
            .take(RECENT_LIMIT)
        {
            out.push_str(&format_line(transaction));
            out.push('\n');
        }
    }
    out
}
