use super::chunk_buffer::ChannelBuffer;

/// Truncate every channel buffer to `target_seconds`, discarding the tail.
///
/// The target is converted to a sample position,
/// `round(target_seconds * input_sample_rate)`. Channel 0's chunk sequence
/// is the reference timeline; all channels share identical chunk
/// boundaries, so the cut located there applies verbatim to each of them.
///
/// A cut landing exactly on a chunk boundary keeps whole chunks; only a
/// strictly interior cut splits the containing chunk into its prefix. The
/// scan reads each chunk at most once and touches no buffer until the
/// containing chunk has been identified.
///
/// Returns the new per-channel sample count, or `None` when the target
/// lies at or beyond the end of the captured data (nothing to discard).
pub fn truncate_buffers(
    buffers: &mut [ChannelBuffer],
    target_seconds: f64,
    input_sample_rate: f64,
) -> Option<usize> {
    let reference = buffers.first()?;
    let target_index = (target_seconds * input_sample_rate).round() as usize;
    if target_index >= reference.total_samples() {
        return None;
    }

    let mut cut = None;
    let mut start = 0usize;
    for (i, chunk) in reference.chunks().iter().enumerate() {
        let end = start + chunk.len();
        if target_index < end {
            cut = Some((i, target_index - start));
            break;
        }
        start = end;
    }
    // target_index < total_samples, so a containing chunk always exists.
    let (chunk_index, keep) = cut?;

    log::debug!(
        "truncating {} channel(s) to sample {target_index} (chunk {chunk_index}, offset {keep})",
        buffers.len()
    );
    for buffer in buffers.iter_mut() {
        buffer.truncate_at(chunk_index, keep);
        debug_assert_eq!(buffer.total_samples(), target_index);
    }
    Some(target_index)
}
