use thiserror::Error;

/// Error type that captures ledger persistence failures.
///
/// The engine surfaces no recoverable errors of its own under well-formed
/// input; amount validation is a caller contract, not an engine error.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt store: {0}")]
    CorruptStore(#[from] serde_json::Error),
}
