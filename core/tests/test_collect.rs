#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use filecut_core::dispatch::{ResultSlots, SlotWrite};
    use filecut_core::slicing::ChunkDescriptor;

    fn chunk(start: u64, fill: u8) -> ChunkDescriptor {
        ChunkDescriptor::new("c", start, start + 4, Bytes::from(vec![fill; 4])).unwrap()
    }

    #[test]
    fn out_of_order_writes_come_back_ordered() {
        let mut slots = ResultSlots::new(3);
        assert_eq!(slots.write(2, chunk(8, 2)), SlotWrite::Fresh);
        assert_eq!(slots.write(0, chunk(0, 0)), SlotWrite::Fresh);
        assert!(!slots.is_complete());
        assert_eq!(slots.write(1, chunk(4, 1)), SlotWrite::Fresh);
        assert!(slots.is_complete());

        let ordered = slots.into_ordered().unwrap();
        let starts: Vec<u64> = ordered.iter().map(|c| c.start()).collect();
        assert_eq!(starts, vec![0, 4, 8]);
    }

    #[test]
    fn duplicate_write_is_counted_once_and_latest_wins() {
        let mut slots = ResultSlots::new(2);
        assert_eq!(slots.write(0, chunk(0, 0xAA)), SlotWrite::Fresh);
        assert_eq!(slots.write(0, chunk(0, 0xBB)), SlotWrite::Overwritten);
        assert_eq!(slots.filled(), 1);

        slots.write(1, chunk(4, 0));
        let ordered = slots.into_ordered().unwrap();
        assert_eq!(ordered[0].data().as_ref(), &[0xBB; 4]);
    }

    #[test]
    fn write_past_end_is_rejected() {
        let mut slots = ResultSlots::new(1);
        assert_eq!(slots.write(1, chunk(4, 0)), SlotWrite::OutOfRange);
        assert_eq!(slots.filled(), 0);
    }

    #[test]
    fn incomplete_table_is_handed_back() {
        let mut slots = ResultSlots::new(2);
        slots.write(1, chunk(4, 0));

        let mut pending = slots.into_ordered().unwrap_err();
        assert_eq!(pending.filled(), 1);

        pending.write(0, chunk(0, 0));
        assert_eq!(pending.into_ordered().unwrap().len(), 2);
    }

    #[test]
    fn index_beyond_usize_is_out_of_range() {
        let mut slots = ResultSlots::new(1);
        assert_eq!(slots.write(u64::MAX, chunk(0, 0)), SlotWrite::OutOfRange);
    }

    #[test]
    fn empty_table_is_complete() {
        let slots = ResultSlots::new(0);
        assert!(slots.is_empty());
        assert!(slots.is_complete());
        assert_eq!(slots.into_ordered().unwrap().len(), 0);
    }
}
