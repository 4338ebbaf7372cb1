#[cfg(test)]
mod tests {
    use filecut_core::partition::{partition, Partition};
    use filecut_core::utils::{chunk_bounds, chunk_count};
    use proptest::prelude::*;

    fn sizes(parts: &[Partition]) -> Vec<u64> {
        parts.iter().map(|p| p.len()).collect()
    }

    #[test]
    fn ten_chunks_over_four_workers() {
        let parts = partition(10, 4);
        assert_eq!(sizes(&parts), vec![3, 3, 2, 2]);
        assert_eq!(parts[0].start_chunk, 0);
        assert_eq!(parts[3].end_chunk, 10);
    }

    #[test]
    fn more_workers_than_chunks() {
        let parts = partition(5, 100);
        assert_eq!(parts.len(), 5);
        assert!(parts.iter().all(|p| p.len() == 1));
        assert_eq!(parts.iter().map(|p| p.worker_slot).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn zero_chunks_yield_no_partitions() {
        assert!(partition(0, 4).is_empty());
    }

    #[test]
    fn single_worker_takes_everything() {
        let parts = partition(7, 1);
        assert_eq!(parts, vec![Partition { worker_slot: 0, start_chunk: 0, end_chunk: 7 }]);
    }

    #[test]
    fn zero_workers_treated_as_one() {
        let parts = partition(3, 0);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].len(), 3);
    }

    #[test]
    fn chunk_count_rounds_up() {
        assert_eq!(chunk_count(0, 1024), 0);
        assert_eq!(chunk_count(1, 1024), 1);
        assert_eq!(chunk_count(1024, 1024), 1);
        assert_eq!(chunk_count(1025, 1024), 2);
        assert_eq!(chunk_count(10_000_000, 1_048_576), 10);
    }

    #[test]
    fn last_chunk_is_clamped() {
        assert_eq!(chunk_bounds(9, 1_048_576, 10_000_000), (9_437_184, 10_000_000));
        assert_eq!(chunk_bounds(0, 4096, 100), (0, 100));
    }

    proptest! {
        #[test]
        fn partitions_cover_indices_fairly(chunks in 0u64..5_000, workers in 1usize..128) {
            let parts = partition(chunks, workers);

            prop_assert_eq!(parts.len() as u64, chunks.min(workers as u64));

            let mut cursor = 0u64;
            for p in &parts {
                prop_assert!(!p.is_empty());
                prop_assert_eq!(p.start_chunk, cursor);
                cursor = p.end_chunk;
            }
            prop_assert_eq!(cursor, chunks);

            if let (Some(max), Some(min)) = (parts.iter().map(|p| p.len()).max(), parts.iter().map(|p| p.len()).min()) {
                prop_assert!(max - min <= 1);
            }
        }

        #[test]
        fn bounds_tile_the_blob(size in 0u64..1_000_000, chunk_size in 1u64..65_536) {
            let count = chunk_count(size, chunk_size);
            let mut cursor = 0u64;
            for i in 0..count {
                let (start, end) = chunk_bounds(i, chunk_size, size);
                prop_assert_eq!(start, cursor);
                prop_assert!(end > start);
                prop_assert!(end - start <= chunk_size);
                cursor = end;
            }
            prop_assert_eq!(cursor, size);
        }
    }
}
