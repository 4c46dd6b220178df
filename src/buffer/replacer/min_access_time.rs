//! Minimum-access-time replacement policy.

use crate::buffer::replacer::Replacer;
use crate::buffer::FrameTable;
use crate::common::FrameId;

/// Evicts the entry that was cheapest to bring in.
///
/// Keeps expensive-to-reload entries resident. The only input is the
/// `access_latency_ms` fixed on each entry at insertion, so hits change
/// nothing. Ties go to the lowest slot.
#[derive(Debug, Default)]
pub struct MinAccessTimeReplacer;

impl MinAccessTimeReplacer {
    /// Create a new minimum-access-time replacer.
    pub fn new() -> Self {
        Self
    }
}

impl Replacer for MinAccessTimeReplacer {
    fn evict<K>(&mut self, table: &mut FrameTable<K>) -> Option<FrameId> {
        table
            .iter()
            .min_by_key(|(_, entry)| entry.access_latency_ms)
            .map(|(frame_id, _)| frame_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{Entry, Outcome};

    fn table_with_latencies(latencies: &[u64]) -> FrameTable<usize> {
        let mut table = FrameTable::new(latencies.len());
        for (i, &latency) in latencies.iter().enumerate() {
            table.set(FrameId::new(i), Entry::new(i, i as u64, latency, Outcome::PageFault));
        }
        table
    }

    #[test]
    fn test_min_access_time_evicts_cheapest() {
        let mut replacer = MinAccessTimeReplacer::new();
        let mut table = table_with_latencies(&[5, 2, 9]);

        assert_eq!(replacer.evict(&mut table), Some(FrameId::new(1)));
    }

    #[test]
    fn test_min_access_time_tie_breaks_to_lowest_slot() {
        let mut replacer = MinAccessTimeReplacer::new();
        let mut table = table_with_latencies(&[7, 3, 3]);

        assert_eq!(replacer.evict(&mut table), Some(FrameId::new(1)));
    }

    #[test]
    fn test_min_access_time_ignores_hits() {
        let mut replacer = MinAccessTimeReplacer::new();
        let mut table = table_with_latencies(&[4, 8]);

        if let Some(entry) = table.get_mut(FrameId::new(0)) {
            replacer.record_hit(entry, 100);
            assert_eq!(entry.access_latency_ms, 4);
        }

        assert_eq!(replacer.evict(&mut table), Some(FrameId::new(0)));
    }
}
