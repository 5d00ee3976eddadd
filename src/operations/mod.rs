pub mod add;
pub mod export;
pub mod import;
pub mod remove;
pub mod report;
