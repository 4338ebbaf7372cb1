// ## 📂 `src/dispatch/collect.rs`

use crate::slicing::ChunkDescriptor;

/// Outcome of writing one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotWrite {
    Fresh,
    /// Slot was already filled; the new chunk replaced it.
    Overwritten,
    OutOfRange,
}

/// Pre-sized, index-addressed result table owned by the coordinator.
///
/// Output order comes from the slot index alone, so batches may arrive in
/// any order.
#[derive(Debug)]
pub struct ResultSlots {
    slots: Vec<Option<ChunkDescriptor>>,
    filled: u64,
}

impl ResultSlots {
    pub fn new(chunk_count: usize) -> Self {
        Self {
            slots: vec![None; chunk_count],
            filled: 0,
        }
    }

    pub fn write(&mut self, index: u64, chunk: ChunkDescriptor) -> SlotWrite {
        let Some(slot) = usize::try_from(index).ok().and_then(|i| self.slots.get_mut(i)) else {
            return SlotWrite::OutOfRange;
        };

        match slot.replace(chunk) {
            Some(_) => SlotWrite::Overwritten,
            None => {
                self.filled += 1;
                SlotWrite::Fresh
            }
        }
    }

    /// Distinct slots filled so far.
    pub fn filled(&self) -> u64 {
        self.filled
    }

    pub fn len(&self) -> u64 {
        self.slots.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.filled == self.len()
    }

    /// The ordered chunk list once every slot is filled.
    ///
    /// Hands the table back unchanged while any slot is still empty.
    pub fn into_ordered(self) -> Result<Vec<ChunkDescriptor>, Self> {
        if !self.is_complete() {
            return Err(self);
        }
        Ok(self.slots.into_iter().flatten().collect())
    }
}
