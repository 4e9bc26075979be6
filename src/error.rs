use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Structurally invalid input, fatal to the single call. The engine's
    /// metrics are reset before validation, so a failed call leaves a
    /// zeroed snapshot rather than a corrupted one.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("metrics I/O failed")]
    Io(#[from] std::io::Error),
}
