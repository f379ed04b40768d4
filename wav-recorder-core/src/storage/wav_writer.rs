use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::models::error::RecorderError;
use crate::models::recording_result::{RecordingMetadata, RecordingResult};
use crate::processing::wav_format::WavFormat;
use crate::storage::metadata;

/// Persist a rendered WAV blob in one shot.
///
/// Writes the complete file, computes its SHA-256 checksum, and drops a
/// `.metadata.json` sidecar next to it. The blob is already a finished
/// container when this runs; nothing is encoded incrementally.
pub fn save_recording(
    path: &Path,
    wav_bytes: &[u8],
    duration_secs: f64,
    format: WavFormat,
) -> Result<RecordingResult, RecorderError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| RecorderError::Storage(format!("failed to create directory: {e}")))?;
        }
    }
    fs::write(path, wav_bytes)
        .map_err(|e| RecorderError::Storage(format!("failed to write recording: {e}")))?;

    let checksum = sha256_hex(wav_bytes);
    let meta = RecordingMetadata::new(
        duration_secs,
        &path.to_string_lossy(),
        format.sample_rate,
        format.bit_depth,
        format.channels,
        &checksum,
    );
    metadata::write_metadata(&meta, path)?;

    log::info!("saved {} byte recording to {}", wav_bytes.len(), path.display());
    Ok(RecordingResult {
        file_path: path.to_path_buf(),
        duration_secs,
        metadata: meta,
        checksum,
    })
}

/// SHA-256 hex digest of a byte buffer.
pub fn sha256_hex(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("wav_recorder_test_{name}"))
    }

    #[test]
    fn saves_file_and_sidecar() {
        let path = temp_file_path("save.wav");
        let format = WavFormat {
            sample_rate: 44100,
            bit_depth: 16,
            channels: 1,
        };
        let wav = format.encode(&[0x01, 0x02, 0x03, 0x04]);

        let result = save_recording(&path, &wav, 2.5, format).unwrap();

        let written = fs::read(&path).unwrap();
        assert_eq!(written, wav);
        assert_eq!(result.checksum, sha256_hex(&written));
        assert_eq!(result.duration_secs, 2.5);

        let meta = metadata::read_metadata(&path).unwrap();
        assert_eq!(meta, result.metadata);
        assert_eq!(meta.sample_rate, 44100);
        assert_eq!(meta.bit_depth, 16);
        assert_eq!(meta.channels, 1);
        assert_eq!(meta.checksum, result.checksum);

        fs::remove_file(&path).ok();
        fs::remove_file(path.with_extension("metadata.json")).ok();
    }

    #[test]
    fn sha256_of_empty_input() {
        assert_eq!(
            sha256_hex(&[]),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
