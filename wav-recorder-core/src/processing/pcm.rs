//! Quantization of float samples to integer PCM.
//!
//! Samples are clamped to [-1.0, 1.0] first; upstream producers do not
//! bound them. 16-bit output is signed with asymmetric scaling (negative
//! samples scale by 32768, positive by 32767, so both ends of the signed
//! range are reachable without overflow). 8-bit WAV PCM is conventionally
//! unsigned, centered at 128.

/// Quantize interleaved float samples to little-endian PCM bytes.
///
/// `bit_depth` is 8 or 16; the session normalizes its configuration before
/// this is reached.
pub fn quantize(samples: &[f32], bit_depth: u16) -> Vec<u8> {
    debug_assert!(matches!(bit_depth, 8 | 16));

    if bit_depth == 8 {
        samples.iter().map(|&s| quantize_u8(s)).collect()
    } else {
        let mut data = Vec::with_capacity(samples.len() * 2);
        for &sample in samples {
            data.extend_from_slice(&quantize_i16(sample).to_le_bytes());
        }
        data
    }
}

fn quantize_i16(sample: f32) -> i16 {
    let s = sample.clamp(-1.0, 1.0);
    if s < 0.0 {
        (s * 32768.0).round() as i16
    } else {
        (s * 32767.0).round() as i16
    }
}

fn quantize_u8(sample: f32) -> u8 {
    let s = sample.clamp(-1.0, 1.0);
    let scaled = if s < 0.0 {
        (s * 128.0).round()
    } else {
        (s * 127.0).round()
    };
    (scaled + 128.0).clamp(0.0, 255.0) as u8
}
