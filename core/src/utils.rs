// ## 📂 `src/utils.rs`

//! Index arithmetic shared by the planner and the slice workers.

/// Number of chunks needed to cover `size` bytes: `ceil(size / chunk_size)`.
///
/// `chunk_size` must be non-zero; the coordinator validates it before
/// any planning happens.
pub fn chunk_count(size: u64, chunk_size: u64) -> u64 {
    debug_assert!(chunk_size > 0, "chunk_size must be positive");
    if size == 0 {
        return 0;
    }
    (size - 1) / chunk_size + 1
}

/// Byte bounds `[start, end)` of chunk `index`.
///
/// The last chunk is clamped to `size`. Arithmetic saturates so that a bad
/// index produces an out-of-bounds range for the slicer to reject instead
/// of wrapping around.
pub fn chunk_bounds(index: u64, chunk_size: u64, size: u64) -> (u64, u64) {
    let start = index.saturating_mul(chunk_size);
    let end = start.saturating_add(chunk_size).min(size);
    (start, end)
}
