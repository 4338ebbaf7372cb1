//! Task partitioning.
//!
//! Splits `[0, chunk_count)` into contiguous, non-empty index ranges, one
//! per worker slot, with sizes differing by at most one.

use serde::{Deserialize, Serialize};

/// Half-open range of global chunk indices owned by one worker slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    pub worker_slot: usize,
    pub start_chunk: u64,
    pub end_chunk: u64,
}

impl Partition {
    pub fn len(&self) -> u64 {
        self.end_chunk - self.start_chunk
    }

    pub fn is_empty(&self) -> bool {
        self.start_chunk >= self.end_chunk
    }
}

/// Fair, deterministic assignment of chunk indices to worker slots.
///
/// The first `chunk_count % worker_count` slots get one extra chunk. Slots
/// past the last chunk get nothing, so at most `min(worker_count,
/// chunk_count)` partitions come back and none of them is empty.
pub fn partition(chunk_count: u64, worker_count: usize) -> Vec<Partition> {
    let workers = worker_count.max(1) as u64;
    let base = chunk_count / workers;
    let mut remainder = chunk_count % workers;

    let mut partitions = Vec::with_capacity(workers.min(chunk_count) as usize);
    let mut cursor = 0u64;

    for slot in 0..workers {
        if cursor >= chunk_count {
            break;
        }

        let mut take = base;
        if remainder > 0 {
            take += 1;
            remainder -= 1;
        }

        let end = (cursor + take).min(chunk_count);
        partitions.push(Partition {
            worker_slot: slot as usize,
            start_chunk: cursor,
            end_chunk: end,
        });
        cursor = end;
    }

    partitions
}
