//! # wav-recorder-core
//!
//! Platform-agnostic WAV recorder core library.
//!
//! Buffers a callback-driven stream of fixed-size sample chunks in memory,
//! supports pause/resume with time-indexed rewind, and renders the
//! captured audio to a resampled, bit-depth-converted PCM stream inside a
//! RIFF/WAVE container. Platform-specific capture backends (WASAPI, Core
//! Audio, ALSA, ...) implement the `CaptureProvider` trait and plug into
//! the generic `RecordingSession`.
//!
//! ## Architecture
//!
//! ```text
//! wav-recorder-core (this crate)
//! ├── traits/       ← CaptureProvider, RecorderDelegate
//! ├── models/       ← RecorderError, RecorderState, RecorderConfig, AudioLevels
//! ├── processing/   ← ChannelBuffer, seek truncation, Resampler, PCM + WAV encoding
//! ├── session/      ← RecordingSession (generic orchestrator)
//! └── storage/      ← WAV file writer + metadata sidecar
//! ```

pub mod models;
pub mod processing;
pub mod session;
pub mod storage;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use models::config::RecorderConfig;
pub use models::error::RecorderError;
pub use models::levels::AudioLevels;
pub use models::recording_result::{RecordingMetadata, RecordingResult};
pub use models::state::RecorderState;
pub use processing::chunk_buffer::ChannelBuffer;
pub use processing::resampler::Resampler;
pub use processing::wav_format::{WavFormat, WAV_HEADER_SIZE};
pub use session::recorder::RecordingSession;
pub use traits::capture_delegate::RecorderDelegate;
pub use traits::capture_provider::{CaptureProvider, ChunkCallback};
