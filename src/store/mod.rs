pub mod blob;
pub mod ledger;
pub mod profile;
