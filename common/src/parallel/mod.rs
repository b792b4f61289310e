//! Parallel-for over independent output units.
//!
//! An output buffer is viewed as a sequence of equally sized units (one cell per
//! row median, one image row per stack combine). Units are grouped into chunks,
//! and each chunk is handed to exactly one rayon task together with the index of
//! its first unit. Chunks never overlap, so every output cell is written by one
//! task only.

use rayon::prelude::*;


/// Multiplier for number of chunks relative to worker threads.
/// Using 3x threads provides good load balancing when some chunks finish faster.
pub const DEFAULT_CHUNKS_PER_THREAD: usize = 3;

/// Number of units per chunk for `units` units on the current rayon pool.
///
/// Evaluated against the pool the caller is running in, so calling it inside
/// `ThreadPool::install` sizes chunks for that pool. Minimum of 1 unit per chunk.
#[inline]
pub fn chunk_units(units: usize, chunks_per_thread: usize) -> usize {
    let num_chunks = rayon::current_num_threads() * chunks_per_thread.max(1);
    (units / num_chunks).max(1)
}

/// Split `data` into unit-aligned mutable chunks for parallel processing.
///
/// `data.len()` must be a multiple of `unit_len`. Yields `(first_unit, chunk)`
/// pairs where `chunk` holds whole units starting at unit index `first_unit`.
/// A `unit_len` of zero is treated as one.
pub fn par_units_mut<T: Send>(
    data: &mut [T],
    unit_len: usize,
    chunks_per_thread: usize,
) -> impl IndexedParallelIterator<Item = (usize, &mut [T])> {
    let unit_len = unit_len.max(1);
    assert_eq!(
        data.len() % unit_len,
        0,
        "buffer length {} is not a multiple of unit length {}",
        data.len(),
        unit_len
    );

    let units_per_chunk = chunk_units(data.len() / unit_len, chunks_per_thread);
    data.par_chunks_mut(unit_len * units_per_chunk)
        .enumerate()
        .map(move |(chunk_idx, chunk)| (chunk_idx * units_per_chunk, chunk))
}
