//! RIFF/WAVE container encoding.
//!
//! The canonical 44-byte header with PCM format tag 1. Every multi-byte
//! field is written little-endian regardless of host byte order.

/// Size of the standard WAV RIFF header in bytes.
pub const WAV_HEADER_SIZE: usize = 44;

/// Declared format of one WAV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    pub sample_rate: u32,
    pub bit_depth: u16,
    pub channels: u16,
}

impl WavFormat {
    /// Bytes per second of audio: `sample_rate * block_align`.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }

    /// Bytes per sample frame: `channels * bit_depth / 8`.
    pub fn block_align(&self) -> u16 {
        self.channels * self.bit_depth / 8
    }

    /// Build the 44-byte header for a payload of `data_size` bytes.
    ///
    /// Layout:
    /// ```text
    /// [0-3]    "RIFF"
    /// [4-7]    36 + data_size
    /// [8-11]   "WAVE"
    /// [12-15]  "fmt "
    /// [16-19]  16 (PCM format chunk size)
    /// [20-21]  1 (PCM format code)
    /// [22-23]  channels
    /// [24-27]  sample_rate
    /// [28-31]  byte_rate
    /// [32-33]  block_align
    /// [34-35]  bit_depth
    /// [36-39]  "data"
    /// [40-43]  data_size
    /// ```
    pub fn header(&self, data_size: u32) -> [u8; WAV_HEADER_SIZE] {
        let mut header = [0u8; WAV_HEADER_SIZE];

        header[0..4].copy_from_slice(b"RIFF");
        header[4..8].copy_from_slice(&(36 + data_size).to_le_bytes());
        header[8..12].copy_from_slice(b"WAVE");

        header[12..16].copy_from_slice(b"fmt ");
        header[16..20].copy_from_slice(&16u32.to_le_bytes());
        header[20..22].copy_from_slice(&1u16.to_le_bytes());
        header[22..24].copy_from_slice(&self.channels.to_le_bytes());
        header[24..28].copy_from_slice(&self.sample_rate.to_le_bytes());
        header[28..32].copy_from_slice(&self.byte_rate().to_le_bytes());
        header[32..34].copy_from_slice(&self.block_align().to_le_bytes());
        header[34..36].copy_from_slice(&self.bit_depth.to_le_bytes());

        header[36..40].copy_from_slice(b"data");
        header[40..44].copy_from_slice(&data_size.to_le_bytes());

        header
    }

    /// Package a PCM payload into a complete in-memory WAV file.
    pub fn encode(&self, pcm: &[u8]) -> Vec<u8> {
        let mut file = Vec::with_capacity(WAV_HEADER_SIZE + pcm.len());
        file.extend_from_slice(&self.header(pcm.len() as u32));
        file.extend_from_slice(pcm);
        file
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CD_MONO: WavFormat = WavFormat {
        sample_rate: 44100,
        bit_depth: 16,
        channels: 1,
    };

    #[test]
    fn header_is_44_bytes() {
        assert_eq!(CD_MONO.header(0).len(), WAV_HEADER_SIZE);
    }

    #[test]
    fn header_magic_tags() {
        let header = CD_MONO.header(0);
        assert_eq!(&header[0..4], b"RIFF");
        assert_eq!(&header[8..12], b"WAVE");
        assert_eq!(&header[12..16], b"fmt ");
        assert_eq!(&header[36..40], b"data");
    }

    #[test]
    fn header_declares_pcm() {
        let header = CD_MONO.header(0);
        assert_eq!(u16::from_le_bytes([header[20], header[21]]), 1);
        assert_eq!(
            u32::from_le_bytes([header[16], header[17], header[18], header[19]]),
            16
        );
    }

    #[test]
    fn header_48khz_stereo_16bit() {
        let format = WavFormat {
            sample_rate: 48000,
            bit_depth: 16,
            channels: 2,
        };
        let header = format.header(9600);

        assert_eq!(u16::from_le_bytes([header[22], header[23]]), 2);
        assert_eq!(
            u32::from_le_bytes([header[24], header[25], header[26], header[27]]),
            48000
        );
        assert_eq!(
            u32::from_le_bytes([header[28], header[29], header[30], header[31]]),
            192000 // 48000 * 2 * 16/8
        );
        assert_eq!(u16::from_le_bytes([header[32], header[33]]), 4);
        assert_eq!(u16::from_le_bytes([header[34], header[35]]), 16);
        assert_eq!(
            u32::from_le_bytes([header[40], header[41], header[42], header[43]]),
            9600
        );
        assert_eq!(
            u32::from_le_bytes([header[4], header[5], header[6], header[7]]),
            36 + 9600
        );
    }

    #[test]
    fn eight_bit_mono_derived_fields() {
        let format = WavFormat {
            sample_rate: 8000,
            bit_depth: 8,
            channels: 1,
        };

        assert_eq!(format.block_align(), 1);
        assert_eq!(format.byte_rate(), 8000);
    }

    #[test]
    fn encode_prepends_header_to_payload() {
        let payload = [0x11u8, 0x22, 0x33, 0x44];
        let file = CD_MONO.encode(&payload);

        assert_eq!(file.len(), WAV_HEADER_SIZE + 4);
        assert_eq!(&file[44..], &payload);
        assert_eq!(u32::from_le_bytes([file[40], file[41], file[42], file[43]]), 4);
    }

    #[test]
    fn encode_empty_payload_is_header_only() {
        let file = CD_MONO.encode(&[]);

        assert_eq!(file.len(), WAV_HEADER_SIZE);
        assert_eq!(u32::from_le_bytes([file[4], file[5], file[6], file[7]]), 36);
        assert_eq!(u32::from_le_bytes([file[40], file[41], file[42], file[43]]), 0);
    }
}
