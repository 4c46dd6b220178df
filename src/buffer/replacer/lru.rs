//! LRU (Least Recently Used) replacement policy.

use crate::buffer::replacer::Replacer;
use crate::buffer::{Entry, FrameTable};
use crate::common::FrameId;

/// Evicts the entry with the oldest `last_used_tick`.
///
/// Recency lives on the entries themselves; the replacer only refreshes
/// it on hits and scans for the minimum on eviction. The scan is
/// O(slot_count) per eviction. Ties go to the lowest slot.
#[derive(Debug, Default)]
pub struct LruReplacer;

impl LruReplacer {
    /// Create a new LRU replacer.
    pub fn new() -> Self {
        Self
    }
}

impl Replacer for LruReplacer {
    fn record_hit<K>(&mut self, entry: &mut Entry<K>, tick: u64) {
        entry.last_used_tick = tick;
    }

    fn evict<K>(&mut self, table: &mut FrameTable<K>) -> Option<FrameId> {
        // min_by_key keeps the first of equal minima, i.e. the lowest slot
        table
            .iter()
            .min_by_key(|(_, entry)| entry.last_used_tick)
            .map(|(frame_id, _)| frame_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Outcome;

    fn table_with_ticks(ticks: &[u64]) -> FrameTable<usize> {
        let mut table = FrameTable::new(ticks.len());
        for (i, &tick) in ticks.iter().enumerate() {
            table.set(FrameId::new(i), Entry::new(i, tick, 1, Outcome::PageFault));
        }
        table
    }

    #[test]
    fn test_lru_evicts_oldest() {
        let mut replacer = LruReplacer::new();
        let mut table = table_with_ticks(&[3, 1, 2]);

        assert_eq!(replacer.evict(&mut table), Some(FrameId::new(1)));
    }

    #[test]
    fn test_lru_hit_refreshes_recency() {
        let mut replacer = LruReplacer::new();
        let mut table = table_with_ticks(&[1, 2, 3]);

        if let Some(entry) = table.get_mut(FrameId::new(0)) {
            replacer.record_hit(entry, 4);
        }

        assert_eq!(table.get(FrameId::new(0)).map(|e| e.last_used_tick), Some(4));
        assert_eq!(replacer.evict(&mut table), Some(FrameId::new(1)));
    }

    #[test]
    fn test_lru_tie_breaks_to_lowest_slot() {
        let mut replacer = LruReplacer::new();
        let mut table = table_with_ticks(&[5, 2, 2]);

        assert_eq!(replacer.evict(&mut table), Some(FrameId::new(1)));
    }

    #[test]
    fn test_lru_empty_table() {
        let mut replacer = LruReplacer::new();
        let mut table: FrameTable<usize> = FrameTable::new(2);

        assert_eq!(replacer.evict(&mut table), None);
    }
}
