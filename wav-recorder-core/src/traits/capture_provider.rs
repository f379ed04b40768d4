use std::sync::Arc;

use crate::models::error::RecorderError;

/// Callback invoked once per captured chunk set.
///
/// `chunks` holds one same-length sample chunk per channel, planar:
/// `chunks[0]` is the left (or mono) channel, `chunks[1]` the right.
/// Samples are f32, nominally in [-1.0, 1.0] but not clamped at capture.
pub type ChunkCallback = Arc<dyn Fn(&[Vec<f32>]) + Send + Sync + 'static>;

/// Interface for platform-specific audio capture sources.
///
/// Backends (WASAPI, Core Audio, ALSA, ...) implement this and plug into
/// the generic `RecordingSession`. The backend owns device negotiation and
/// stream lifecycle; the session only consumes the chunk stream.
pub trait CaptureProvider: Send + Sync {
    /// Whether this capture source can currently supply a stream.
    fn is_available(&self) -> bool;

    /// Sample rate the device delivers chunks at, in Hz.
    ///
    /// Fixed for the lifetime of the provider; the session reads it once
    /// at creation.
    fn sample_rate(&self) -> f64;

    /// Start capturing, delivering one chunk per channel via `callback`.
    ///
    /// The callback fires on a dedicated audio thread — keep processing
    /// minimal. Fails with [`RecorderError::CaptureUnavailable`] when no
    /// device or permission is present.
    fn start(&mut self, callback: ChunkCallback) -> Result<(), RecorderError>;

    /// Stop capturing and release resources. Idempotent: stopping a
    /// provider that never started is a no-op.
    fn stop(&mut self) -> Result<(), RecorderError>;
}
