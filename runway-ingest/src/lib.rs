//! runway-ingest: ledger ingestion — CSV transaction loading into typed records.

pub mod loader;
pub mod types;

pub use loader::load_transactions;
pub use types::Transaction;
