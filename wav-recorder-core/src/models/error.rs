use thiserror::Error;

/// Errors that can occur during recording operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecorderError {
    #[error("capture unavailable: {0}")]
    CaptureUnavailable(String),

    /// The capture collaborator broke the delivery contract: one chunk per
    /// channel, all the same length. Fatal for the running session;
    /// ingestion aborts rather than corrupting the buffers.
    #[error("chunk length mismatch: {0}")]
    ChunkLengthMismatch(String),

    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("storage error: {0}")]
    Storage(String),
}
