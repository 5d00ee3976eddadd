pub mod profile;
pub mod transaction;
