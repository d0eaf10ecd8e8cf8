use std::ops::Range;

/// Indices updated by the stencil, boundaries excluded.
pub fn interior_range(n_r: usize) -> Range<usize> {
    debug_assert!(n_r >= 2);
    1..n_r - 1
}

/// Number of interior points in a buffer of `n_r` samples.
pub fn interior_len(n_r: usize) -> usize {
    n_r.saturating_sub(2)
}

/// World index of the first element of interior chunk `chunk`.
pub fn interior_chunk_start(chunk: usize, chunk_size: usize) -> usize {
    1 + chunk * chunk_size
}

/// Index of the row holding the current state after `round` rounds,
/// for two-row buffers.
pub fn parity_row(round: usize) -> usize {
    round % 2
}
