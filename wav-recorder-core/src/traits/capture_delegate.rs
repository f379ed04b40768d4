use crate::models::error::RecorderError;
use crate::models::levels::AudioLevels;
use crate::models::state::RecorderState;

/// Event delegate for recording session notifications.
///
/// Methods are called from whichever context mutated the session; for
/// progress and levels that is usually the capture thread. Implementations
/// should marshal to a UI thread if needed, and must not call back into
/// the session from these methods.
pub trait RecorderDelegate: Send + Sync {
    /// Called once per ingested chunk with the updated elapsed duration.
    fn on_progress(&self, elapsed_secs: f64);

    /// Called when the session state changes.
    fn on_state_changed(&self, state: &RecorderState);

    /// Called once per ingested chunk with fresh RMS/peak levels.
    fn on_levels_updated(&self, levels: &AudioLevels);

    /// Called when ingestion aborts on a capture contract violation.
    fn on_error(&self, error: &RecorderError);
}
