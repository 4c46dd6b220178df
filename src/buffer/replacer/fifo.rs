//! FIFO (First-In-First-Out) replacement policy.

use std::collections::VecDeque;

use crate::buffer::replacer::Replacer;
use crate::buffer::FrameTable;
use crate::common::FrameId;

/// Evicts slots in the order they were first filled.
///
/// The queue holds slot ids, not identities. A victim slot is rotated to
/// the rear after it is overwritten, so once the table is full the
/// replacement order cycles through slots in their original fill order.
/// Hits never reorder the queue.
#[derive(Debug, Default)]
pub struct FifoReplacer {
    /// Slot ids in insertion order (front = oldest).
    queue: VecDeque<FrameId>,
}

impl FifoReplacer {
    /// Create a new FIFO replacer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots being tracked.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether no slot has been filled yet.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Replacer for FifoReplacer {
    fn record_insert(&mut self, frame_id: FrameId) {
        self.queue.push_back(frame_id);
    }

    fn evict<K>(&mut self, _table: &mut FrameTable<K>) -> Option<FrameId> {
        let frame_id = self.queue.pop_front()?;
        // The slot is refilled immediately, so it rejoins at the rear
        self.queue.push_back(frame_id);
        Some(frame_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{Entry, Outcome};

    fn full_table(ids: &[char]) -> FrameTable<char> {
        let mut table = FrameTable::new(ids.len());
        for (i, &id) in ids.iter().enumerate() {
            table.set(FrameId::new(i), Entry::new(id, i as u64, 1, Outcome::PageFault));
        }
        table
    }

    #[test]
    fn test_fifo_basic() {
        let mut replacer = FifoReplacer::new();
        let mut table = full_table(&['A', 'B', 'C']);

        replacer.record_insert(FrameId::new(0));
        replacer.record_insert(FrameId::new(1));
        replacer.record_insert(FrameId::new(2));
        assert_eq!(replacer.len(), 3);

        // Should evict in FIFO order, then cycle
        assert_eq!(replacer.evict(&mut table), Some(FrameId::new(0)));
        assert_eq!(replacer.evict(&mut table), Some(FrameId::new(1)));
        assert_eq!(replacer.evict(&mut table), Some(FrameId::new(2)));
        assert_eq!(replacer.evict(&mut table), Some(FrameId::new(0)));
        assert_eq!(replacer.len(), 3);
    }

    #[test]
    fn test_fifo_follows_insert_order_not_slot_order() {
        let mut replacer = FifoReplacer::new();
        let mut table = full_table(&['A', 'B', 'C']);

        replacer.record_insert(FrameId::new(2));
        replacer.record_insert(FrameId::new(0));
        replacer.record_insert(FrameId::new(1));

        assert_eq!(replacer.evict(&mut table), Some(FrameId::new(2)));
        assert_eq!(replacer.evict(&mut table), Some(FrameId::new(0)));
        assert_eq!(replacer.evict(&mut table), Some(FrameId::new(1)));
    }

    #[test]
    fn test_fifo_hit_no_reorder() {
        let mut replacer = FifoReplacer::new();
        let mut table = full_table(&['A', 'B']);

        replacer.record_insert(FrameId::new(0));
        replacer.record_insert(FrameId::new(1));
        if let Some(entry) = table.get_mut(FrameId::new(0)) {
            replacer.record_hit(entry, 10); // Hit - should NOT reorder
        }

        // FIFO: frame 0 was first, should be evicted first
        assert_eq!(replacer.evict(&mut table), Some(FrameId::new(0)));
    }

    #[test]
    fn test_fifo_empty() {
        let mut replacer = FifoReplacer::new();
        let mut table = full_table(&['A']);
        assert!(replacer.is_empty());
        assert_eq!(replacer.evict(&mut table), None);
    }
}
