use std::fs;
use std::path::Path;

use crate::models::error::RecorderError;
use crate::models::recording_result::RecordingMetadata;

/// Write recording metadata as a JSON sidecar file.
///
/// Creates `{recording}.metadata.json` alongside the recording.
pub fn write_metadata(metadata: &RecordingMetadata, recording_path: &Path) -> Result<(), RecorderError> {
    let metadata_path = recording_path.with_extension("metadata.json");
    let json = serde_json::to_string_pretty(metadata)
        .map_err(|e| RecorderError::Storage(format!("failed to serialize metadata: {e}")))?;
    fs::write(&metadata_path, json)
        .map_err(|e| RecorderError::Storage(format!("failed to write metadata: {e}")))?;
    Ok(())
}

/// Read recording metadata from a JSON sidecar file.
pub fn read_metadata(recording_path: &Path) -> Result<RecordingMetadata, RecorderError> {
    let metadata_path = recording_path.with_extension("metadata.json");
    let json = fs::read_to_string(&metadata_path)
        .map_err(|e| RecorderError::Storage(format!("failed to read metadata: {e}")))?;
    serde_json::from_str(&json).map_err(|e| RecorderError::Storage(format!("failed to parse metadata: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("wav_recorder_test_{name}"))
    }

    #[test]
    fn sidecar_round_trip() {
        let path = temp_file_path("sidecar.wav");
        let meta = RecordingMetadata::new(1.25, &path.to_string_lossy(), 22050, 8, 2, "abc123");

        write_metadata(&meta, &path).unwrap();
        let read_back = read_metadata(&path).unwrap();

        assert_eq!(read_back, meta);

        fs::remove_file(path.with_extension("metadata.json")).ok();
    }

    #[test]
    fn missing_sidecar_is_a_storage_error() {
        let path = temp_file_path("does_not_exist.wav");
        let err = read_metadata(&path).unwrap_err();
        assert!(matches!(err, RecorderError::Storage(_)));
    }
}
