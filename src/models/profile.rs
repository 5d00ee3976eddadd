use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-device user settings, stored under their own key next to the ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub monthly_budget: Option<Decimal>,
}
