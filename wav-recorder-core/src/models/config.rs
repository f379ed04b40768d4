/// Configuration for a recording session.
///
/// Unsupported values are replaced with their defaults when the session is
/// created rather than rejected; see [`RecorderConfig::normalized`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecorderConfig {
    /// Number of capture channels (1 = mono, 2 = stereo; default 2).
    pub channels: u16,

    /// Bit depth for PCM output (8 or 16; default 16).
    pub bit_depth: u16,

    /// Target output sample rate in Hz, or `None` to keep the input rate.
    ///
    /// The exporter only decimates, so a rate above the input rate is
    /// effectively capped at the input rate.
    pub sample_rate: Option<u32>,
}

impl RecorderConfig {
    /// Output sample rates the encoder accepts.
    pub const SUPPORTED_SAMPLE_RATES: [u32; 7] = [8000, 11025, 16000, 22050, 24000, 44100, 48000];

    /// Replace unsupported values with their defaults.
    ///
    /// Lenient on purpose: a caller asking for, say, 24-bit output gets a
    /// 16-bit recording and a warning instead of an error.
    pub fn normalized(mut self) -> Self {
        if ![1, 2].contains(&self.channels) {
            log::warn!("unsupported channel count {}, falling back to 2", self.channels);
            self.channels = 2;
        }
        if ![8, 16].contains(&self.bit_depth) {
            log::warn!("unsupported bit depth {}, falling back to 16", self.bit_depth);
            self.bit_depth = 16;
        }
        if let Some(rate) = self.sample_rate {
            if !Self::SUPPORTED_SAMPLE_RATES.contains(&rate) {
                log::warn!("unsupported output sample rate {rate} Hz, falling back to the input rate");
                self.sample_rate = None;
            }
        }
        self
    }
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            channels: 2,
            bit_depth: 16,
            sample_rate: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RecorderConfig::default();
        assert_eq!(config.channels, 2);
        assert_eq!(config.bit_depth, 16);
        assert_eq!(config.sample_rate, None);
    }

    #[test]
    fn valid_values_pass_through() {
        let config = RecorderConfig {
            channels: 1,
            bit_depth: 8,
            sample_rate: Some(22050),
        }
        .normalized();

        assert_eq!(config.channels, 1);
        assert_eq!(config.bit_depth, 8);
        assert_eq!(config.sample_rate, Some(22050));
    }

    #[test]
    fn unsupported_channel_count_falls_back() {
        let config = RecorderConfig {
            channels: 6,
            ..Default::default()
        }
        .normalized();
        assert_eq!(config.channels, 2);
    }

    #[test]
    fn unsupported_bit_depth_falls_back() {
        let config = RecorderConfig {
            bit_depth: 24,
            ..Default::default()
        }
        .normalized();
        assert_eq!(config.bit_depth, 16);
    }

    #[test]
    fn unsupported_sample_rate_falls_back_to_input() {
        let config = RecorderConfig {
            sample_rate: Some(96000),
            ..Default::default()
        }
        .normalized();
        assert_eq!(config.sample_rate, None);
    }
}
