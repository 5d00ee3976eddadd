use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::LedgerError;

/// One JSON file per fixed storage key under a data directory. Reads never
/// fail: a missing or unparseable blob degrades to the default value so the
/// rest of the app keeps working with whatever data survived.
pub struct BlobStore {
    dir: PathBuf,
}

impl BlobStore {
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, LedgerError> {
        fs::create_dir_all(dir.as_ref())?;
        Ok(BlobStore {
            dir: dir.as_ref().to_path_buf(),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    pub fn read<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return T::default(),
            Err(err) => {
                tracing::warn!(key, %err, "failed to read blob, treating as empty");
                return T::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, %err, "corrupt blob, treating as empty");
                T::default()
            }
        }
    }

    /// Whole-value replace: the entire collection is rewritten on each save.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), LedgerError> {
        let raw = serde_json::to_string(value)?;
        fs::write(self.path_for(key), raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::Profile;
    use crate::models::transaction::Transaction;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tempfile::tempdir;

    #[test]
    fn test_read_missing_key_returns_default() {
        let dir = tempdir().unwrap();
        let store = BlobStore::open(dir.path()).unwrap();

        let transactions: Vec<Transaction> = store.read("transactions");
        assert!(transactions.is_empty());
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let dir = tempdir().unwrap();
        let store = BlobStore::open(dir.path()).unwrap();

        let profile = Profile {
            name: "Maya".to_string(),
            monthly_budget: Some(Decimal::from_str("5000").unwrap()),
        };
        store.write("profile", &profile).unwrap();

        let loaded: Profile = store.read("profile");
        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_corrupt_blob_degrades_to_default() {
        let dir = tempdir().unwrap();
        let store = BlobStore::open(dir.path()).unwrap();

        fs::write(dir.path().join("transactions.json"), "{not json!").unwrap();

        let transactions: Vec<Transaction> = store.read("transactions");
        assert!(transactions.is_empty());
    }
}
