//! Ledger domain models, persistence-friendly types, and helpers.

pub mod state;
pub mod transaction;

pub use state::LedgerState;
pub use transaction::{Transaction, TransactionKind};
