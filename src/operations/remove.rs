use crate::error::LedgerError;
use crate::store::ledger::Ledger;

/// Parses the raw id and asks the ledger to delete it. Returns whether a
/// removal occurred; an unknown id is not an error.
pub fn remove_transaction(ledger: &mut Ledger, raw_id: &str) -> Result<bool, LedgerError> {
    let raw_id = raw_id.trim();
    let id: u64 = raw_id
        .parse()
        .map_err(|_| LedgerError::InvalidId(raw_id.to_string()))?;
    ledger.delete(id)
}
