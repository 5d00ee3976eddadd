use crate::error::LedgerError;
use crate::models::profile::Profile;
use crate::store::blob::BlobStore;

pub const PROFILE_KEY: &str = "profile";

pub fn load(store: &BlobStore) -> Profile {
    store.read(PROFILE_KEY)
}

pub fn save(store: &BlobStore, profile: &Profile) -> Result<(), LedgerError> {
    store.write(PROFILE_KEY, profile)
}
