use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::models::config::RecorderConfig;
use crate::models::error::RecorderError;
use crate::models::levels::AudioLevels;
use crate::models::recording_result::RecordingResult;
use crate::models::state::RecorderState;
use crate::processing::chunk_buffer::ChannelBuffer;
use crate::processing::pcm;
use crate::processing::resampler::Resampler;
use crate::processing::seek;
use crate::processing::wav_format::WavFormat;
use crate::storage::wav_writer;
use crate::traits::capture_delegate::RecorderDelegate;
use crate::traits::capture_provider::{CaptureProvider, ChunkCallback};

/// Internal mutable session state, protected by `parking_lot::Mutex`.
///
/// Every buffer mutation (ingest append, seek truncation, clear) happens
/// under this one lock, which is all the mutual exclusion the capture
/// callback and the control side need. Channels are always mutated
/// together, so there is no per-channel locking.
struct SessionShared {
    state: RecorderState,
    buffers: Vec<ChannelBuffer>,
    elapsed_secs: f64,
    levels: AudioLevels,
    delegate: Option<Arc<dyn RecorderDelegate>>,
}

impl SessionShared {
    fn new(channels: u16) -> Self {
        Self {
            state: RecorderState::Idle,
            buffers: vec![ChannelBuffer::new(); channels as usize],
            elapsed_secs: 0.0,
            levels: AudioLevels::default(),
            delegate: None,
        }
    }

    fn reset_buffers(&mut self) {
        for buffer in &mut self.buffers {
            buffer.clear();
        }
        self.elapsed_secs = 0.0;
        self.levels = AudioLevels::default();
    }

    /// Append one chunk per channel.
    ///
    /// Returns `Ok(Some(elapsed))` when the chunks were buffered,
    /// `Ok(None)` when the session is not recording (chunks dropped), and
    /// an error, with no buffer touched, when the delivery violates the
    /// one-equal-length-chunk-per-channel contract.
    fn ingest(&mut self, chunks: &[Vec<f32>], input_rate: f64) -> Result<Option<f64>, RecorderError> {
        if !self.state.is_recording() {
            return Ok(None);
        }

        if chunks.len() != self.buffers.len() {
            return Err(RecorderError::ChunkLengthMismatch(format!(
                "delivered {} channel chunk(s), expected {}",
                chunks.len(),
                self.buffers.len()
            )));
        }
        let expected = chunks[0].len();
        for (channel, chunk) in chunks.iter().enumerate().skip(1) {
            if chunk.len() != expected {
                return Err(RecorderError::ChunkLengthMismatch(format!(
                    "channel {channel} delivered {} sample(s), channel 0 delivered {expected}",
                    chunk.len()
                )));
            }
        }

        for (buffer, chunk) in self.buffers.iter_mut().zip(chunks) {
            buffer.push(chunk.clone());
        }
        self.elapsed_secs += expected as f64 / input_rate;
        self.levels = AudioLevels::measure(chunks);
        Ok(Some(self.elapsed_secs))
    }
}

/// Run one chunk delivery through the shared state and emit the resulting
/// notifications outside the lock.
///
/// Used by both the capture callback and [`RecordingSession::ingest`]; a
/// contract violation moves the session to `Failed` so later deliveries
/// are dropped instead of corrupting the buffers.
fn deliver(
    shared: &Arc<Mutex<SessionShared>>,
    chunks: &[Vec<f32>],
    input_rate: f64,
) -> Result<(), RecorderError> {
    let mut guard = shared.lock();
    match guard.ingest(chunks, input_rate) {
        Ok(Some(elapsed)) => {
            let delegate = guard.delegate.clone();
            let levels = guard.levels;
            drop(guard);
            if let Some(delegate) = delegate {
                delegate.on_progress(elapsed);
                delegate.on_levels_updated(&levels);
            }
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(error) => {
            let failed = RecorderState::Failed(error.clone());
            guard.state = failed.clone();
            let delegate = guard.delegate.clone();
            drop(guard);
            log::error!("ingestion aborted: {error}");
            if let Some(delegate) = delegate {
                delegate.on_state_changed(&failed);
                delegate.on_error(&error);
            }
            Err(error)
        }
    }
}

/// Chunk-buffering WAV recorder, generic over the capture backend.
///
/// Owns one [`ChannelBuffer`] per channel and renders them on export:
/// ```text
/// [CaptureProvider] → ingest → [ChannelBuffer × channels]
///                                      ↓ export
///                        Resampler → PCM quantizer → RIFF container
/// ```
pub struct RecordingSession<P: CaptureProvider> {
    provider: P,
    config: RecorderConfig,
    input_sample_rate: f64,
    shared: Arc<Mutex<SessionShared>>,
}

impl<P: CaptureProvider> RecordingSession<P> {
    /// Create a session around `provider`, normalizing `config`.
    ///
    /// The input sample rate is read from the provider once, here, and
    /// stays fixed for the session's lifetime.
    pub fn new(provider: P, config: RecorderConfig) -> Self {
        let config = config.normalized();
        let input_sample_rate = provider.sample_rate();
        let shared = Arc::new(Mutex::new(SessionShared::new(config.channels)));
        Self {
            provider,
            config,
            input_sample_rate,
            shared,
        }
    }

    pub fn set_delegate(&self, delegate: Arc<dyn RecorderDelegate>) {
        self.shared.lock().delegate = Some(delegate);
    }

    pub fn state(&self) -> RecorderState {
        self.shared.lock().state.clone()
    }

    pub fn config(&self) -> &RecorderConfig {
        &self.config
    }

    /// Input rate reported by the capture provider, in Hz.
    pub fn input_sample_rate(&self) -> f64 {
        self.input_sample_rate
    }

    /// Seconds of audio currently buffered.
    pub fn elapsed_secs(&self) -> f64 {
        self.shared.lock().elapsed_secs
    }

    /// Samples currently buffered in each channel.
    pub fn buffered_samples(&self) -> usize {
        let guard = self.shared.lock();
        guard.buffers.first().map_or(0, ChannelBuffer::total_samples)
    }

    /// RMS/peak of the most recently ingested chunk.
    pub fn levels(&self) -> AudioLevels {
        self.shared.lock().levels
    }

    /// Rate declared in exported containers: the requested output rate,
    /// capped at the input rate (the resampler only decimates).
    pub fn declared_sample_rate(&self) -> u32 {
        self.requested_output_rate().min(self.input_sample_rate) as u32
    }

    /// Begin recording. Any previously captured audio is discarded.
    pub fn start(&mut self) -> Result<(), RecorderError> {
        {
            let guard = self.shared.lock();
            if guard.state.is_recording() || guard.state.is_paused() {
                return Err(RecorderError::InvalidState(
                    "cannot start while a recording is active".into(),
                ));
            }
        }
        if !self.provider.is_available() {
            return Err(RecorderError::CaptureUnavailable(
                "no capture device or permission".into(),
            ));
        }

        self.shared.lock().reset_buffers();

        let shared = Arc::clone(&self.shared);
        let input_rate = self.input_sample_rate;
        let callback: ChunkCallback = Arc::new(move |chunks| {
            // Failures are recorded in the session state; the audio thread
            // has nowhere to return them.
            let _ = deliver(&shared, chunks, input_rate);
        });
        self.provider.start(callback)?;

        self.transition(RecorderState::Recording);
        log::info!(
            "recording started: {} channel(s) at {} Hz",
            self.config.channels,
            self.input_sample_rate
        );
        Ok(())
    }

    /// Feed one chunk per channel.
    ///
    /// Same path the registered capture callback takes; collaborators that
    /// dispatch synchronously can call it directly. Chunks arriving while
    /// the session is not recording are dropped.
    pub fn ingest(&self, chunks: &[Vec<f32>]) -> Result<(), RecorderError> {
        deliver(&self.shared, chunks, self.input_sample_rate)
    }

    /// Pause ingestion. Captured audio is retained; the provider may keep
    /// delivering chunks, which are dropped until resume.
    pub fn pause(&self) {
        let mut guard = self.shared.lock();
        if !guard.state.is_recording() {
            log::warn!("pause ignored in state {:?}", guard.state);
            return;
        }
        guard.state = RecorderState::Paused;
        let delegate = guard.delegate.clone();
        drop(guard);
        self.notify_state(delegate, &RecorderState::Paused);
    }

    /// Resume ingestion, optionally rewinding to `seek_to` seconds first.
    ///
    /// Rewinding discards everything captured after the target timestamp,
    /// so subsequent chunks overwrite from that point; a target at or
    /// beyond the captured duration leaves the buffers untouched. A
    /// negative target only resumes. Seeking is also valid while already
    /// recording.
    pub fn resume(&self, seek_to: Option<f64>) {
        let mut guard = self.shared.lock();
        if !guard.state.is_recording() && !guard.state.is_paused() {
            log::warn!("resume ignored in state {:?}", guard.state);
            return;
        }

        if let Some(target_secs) = seek_to {
            if target_secs >= 0.0 {
                if let Some(total) =
                    seek::truncate_buffers(&mut guard.buffers, target_secs, self.input_sample_rate)
                {
                    guard.elapsed_secs = total as f64 / self.input_sample_rate;
                }
            }
        }

        let resumed = !guard.state.is_recording();
        guard.state = RecorderState::Recording;
        let delegate = if resumed { guard.delegate.clone() } else { None };
        drop(guard);
        self.notify_state(delegate, &RecorderState::Recording);
    }

    /// Stop capturing. Buffered audio is preserved for export.
    pub fn stop(&mut self) -> Result<(), RecorderError> {
        {
            let guard = self.shared.lock();
            if guard.state.is_idle() || guard.state.is_stopped() {
                log::warn!("stop ignored in state {:?}", guard.state);
                return Ok(());
            }
        }

        self.provider.stop()?;
        self.transition(RecorderState::Stopped);
        log::info!("recording stopped");
        Ok(())
    }

    /// Discard all captured audio, release the capture stream, and return
    /// to idle.
    pub fn clear(&mut self) -> Result<(), RecorderError> {
        self.provider.stop()?;
        self.shared.lock().reset_buffers();
        self.transition(RecorderState::Idle);
        Ok(())
    }

    /// Render the buffered audio to a complete in-memory WAV file.
    ///
    /// Valid whenever ingestion is not running. Never fails for
    /// well-formed buffers: an empty session yields a header-only
    /// container, and repeated calls without intervening ingestion produce
    /// byte-identical output.
    pub fn export_wav(&self) -> Result<Vec<u8>, RecorderError> {
        let guard = self.shared.lock();
        if guard.state.is_recording() {
            return Err(RecorderError::InvalidState(
                "cannot export while recording; pause or stop first".into(),
            ));
        }

        let left = guard.buffers[0].concat();
        let right = if guard.buffers.len() > 1 {
            guard.buffers[1].concat()
        } else {
            Vec::new()
        };
        drop(guard);

        let resampler = Resampler::new(self.input_sample_rate, self.requested_output_rate());
        let interleaved = resampler.interleave(&left, &right);
        let payload = pcm::quantize(&interleaved, self.config.bit_depth);
        Ok(self.wav_format().encode(&payload))
    }

    /// Export and persist to `path`, with a JSON metadata sidecar.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<RecordingResult, RecorderError> {
        let wav = self.export_wav()?;
        wav_writer::save_recording(path.as_ref(), &wav, self.elapsed_secs(), self.wav_format())
    }

    fn requested_output_rate(&self) -> f64 {
        self.config
            .sample_rate
            .map(f64::from)
            .unwrap_or(self.input_sample_rate)
    }

    fn wav_format(&self) -> WavFormat {
        WavFormat {
            sample_rate: self.declared_sample_rate(),
            bit_depth: self.config.bit_depth,
            channels: self.config.channels,
        }
    }

    fn transition(&self, state: RecorderState) {
        let mut guard = self.shared.lock();
        guard.state = state.clone();
        let delegate = guard.delegate.clone();
        drop(guard);
        self.notify_state(delegate, &state);
    }

    fn notify_state(&self, delegate: Option<Arc<dyn RecorderDelegate>>, state: &RecorderState) {
        if let Some(delegate) = delegate {
            delegate.on_state_changed(state);
        }
    }
}

impl<P: CaptureProvider> Drop for RecordingSession<P> {
    fn drop(&mut self) {
        let _ = self.provider.stop();
    }
}
