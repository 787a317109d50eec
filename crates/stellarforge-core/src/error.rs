use thiserror::Error;

/// Errors for genuinely invalid input. Expected runtime conditions
/// (missing chunks, failed debits, vanished targets) are ordinary
/// values, never errors.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown block discriminant: {0}")]
    UnknownBlock(u8),

    #[error("failed to parse block registry RON: {0}")]
    RegistryParse(String),

    #[error("duplicate registry entry for block discriminant {0}")]
    DuplicateRegistryEntry(u8),
}
