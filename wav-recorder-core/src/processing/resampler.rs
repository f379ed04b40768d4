/// Decimating resampler.
///
/// Selects input samples along a fractional stride. It never upsamples, so
/// the achievable output rate is capped at the input rate. Point sampling,
/// not a bandlimited resample: downsampling aliases, an accepted
/// limitation of this recorder.
#[derive(Debug, Clone, Copy)]
pub struct Resampler {
    ratio: f64,
}

impl Resampler {
    pub fn new(input_rate: f64, output_rate: f64) -> Self {
        Self {
            ratio: (input_rate / output_rate).max(1.0),
        }
    }

    /// Input-to-output stride (≥ 1.0).
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Walk both channels with one fractional cursor, emitting interleaved
    /// `L, R, L, R, …` output (`right` is empty for mono, giving plain
    /// `L, L, …`).
    ///
    /// The output length is fixed up front as
    /// `floor((left.len() + right.len()) / ratio)`, which also bounds every
    /// index read from the inputs; the cursor never lands past the end.
    pub fn interleave(&self, left: &[f32], right: &[f32]) -> Vec<f32> {
        debug_assert!(right.is_empty() || right.len() == left.len());

        let output_len = ((left.len() + right.len()) as f64 / self.ratio) as usize;
        let mut output = Vec::with_capacity(output_len);
        let mut cursor = 0.0f64;
        while output.len() < output_len {
            let pos = cursor as usize;
            output.push(left[pos]);
            if !right.is_empty() && output.len() < output_len {
                output.push(right[pos]);
            }
            cursor += self.ratio;
        }
        output
    }
}
