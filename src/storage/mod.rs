pub mod json_backend;

use crate::{errors::LedgerError, ledger::LedgerState};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends for the ledger record.
///
/// The design assumes a single process owning the store: every mutation is
/// followed by a full synchronous rewrite, and I/O failures propagate as
/// fatal to the caller.
pub trait StorageBackend: Send + Sync {
    /// Reads the durable record, returning a default zero-valued state when
    /// none exists yet.
    fn load(&self) -> Result<LedgerState>;

    /// Performs a full overwrite of the durable record.
    fn save(&self, state: &LedgerState) -> Result<()>;
}

pub use json_backend::JsonStore;
