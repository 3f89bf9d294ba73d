use thiserror::Error;

/// Errors that can occur when setting up a clipping operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The operation name does not match any of the supported ones.
    #[error("unsupported operation: {0:?}")]
    UnsupportedOperation(String),
}
