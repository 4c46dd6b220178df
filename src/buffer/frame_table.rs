//! FrameTable - the fixed set of slots a run evicts into.
//!
//! The table is an arena of `slot_count` optional [`Entry`]s addressed by
//! [`FrameId`]. It never grows, never shrinks, and never vacates a slot:
//! once a slot is occupied it is only ever overwritten.

use std::ops::Index;

use crate::buffer::Entry;
use crate::common::FrameId;

/// Fixed-size table of resident entries.
///
/// # Layout
/// ```text
/// ┌──────────┬──────────┬──────────┬──────────┐
/// │ FrameId0 │ FrameId1 │ FrameId2 │ FrameId3 │
/// │ Some(A)  │ Some(B)  │  None    │  None    │
/// └──────────┴──────────┴──────────┴──────────┘
///                          ▲ first_empty()
/// ```
///
/// Indexing with an out-of-range [`FrameId`] panics. Replacers only hand
/// out ids below [`slot_count`](Self::slot_count).
#[derive(Debug, Clone)]
pub struct FrameTable<K> {
    slots: Vec<Option<Entry<K>>>,
    occupied: usize,
}

impl<K> FrameTable<K> {
    /// Create a table with `slot_count` empty slots.
    ///
    /// # Panics
    /// Panics if `slot_count` is 0.
    pub fn new(slot_count: usize) -> Self {
        assert!(slot_count > 0, "slot_count must be > 0");

        Self {
            slots: (0..slot_count).map(|_| None).collect(),
            occupied: 0,
        }
    }

    // ========================================================================
    // Capacity
    // ========================================================================

    /// Number of slots, fixed at construction.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots holding an entry.
    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// Whether every slot holds an entry.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied == self.slots.len()
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Slot holding `identity`, scanning in ascending slot order.
    pub fn find(&self, identity: &K) -> Option<FrameId>
    where
        K: PartialEq,
    {
        self.slots
            .iter()
            .position(|slot| matches!(slot, Some(entry) if entry.identity == *identity))
            .map(FrameId::new)
    }

    /// Lowest-index empty slot (first fit).
    pub fn first_empty(&self) -> Option<FrameId> {
        if self.is_full() {
            return None;
        }
        self.slots.iter().position(Option::is_none).map(FrameId::new)
    }

    /// Entry in `frame_id`, or `None` if the slot is empty.
    #[inline]
    pub fn get(&self, frame_id: FrameId) -> Option<&Entry<K>> {
        self.slots[frame_id.0].as_ref()
    }

    /// Mutable entry in `frame_id`, or `None` if the slot is empty.
    #[inline]
    pub fn get_mut(&mut self, frame_id: FrameId) -> Option<&mut Entry<K>> {
        self.slots[frame_id.0].as_mut()
    }

    /// Occupied slots in ascending slot order.
    pub fn iter(&self) -> impl Iterator<Item = (FrameId, &Entry<K>)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|entry| (FrameId::new(i), entry)))
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Place `entry` in `frame_id`, returning the entry it displaced.
    pub fn set(&mut self, frame_id: FrameId, entry: Entry<K>) -> Option<Entry<K>> {
        let previous = self.slots[frame_id.0].replace(entry);
        if previous.is_none() {
            self.occupied += 1;
        }
        previous
    }

    /// Copy of the identities per slot, for reporting.
    pub fn identities(&self) -> Vec<Option<K>>
    where
        K: Clone,
    {
        self.slots
            .iter()
            .map(|slot| slot.as_ref().map(|entry| entry.identity.clone()))
            .collect()
    }
}

impl<K> Index<FrameId> for FrameTable<K> {
    type Output = Option<Entry<K>>;

    #[inline]
    fn index(&self, frame_id: FrameId) -> &Self::Output {
        &self.slots[frame_id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Outcome;

    fn entry(id: char) -> Entry<char> {
        Entry::new(id, 0, 1, Outcome::PageFault)
    }

    #[test]
    fn test_frame_table_new() {
        let table: FrameTable<char> = FrameTable::new(3);
        assert_eq!(table.slot_count(), 3);
        assert_eq!(table.occupied_count(), 0);
        assert!(!table.is_full());
        assert_eq!(table.first_empty(), Some(FrameId::new(0)));
    }

    #[test]
    #[should_panic(expected = "slot_count must be > 0")]
    fn test_frame_table_zero_slots() {
        let _table: FrameTable<char> = FrameTable::new(0);
    }

    #[test]
    fn test_frame_table_first_fit() {
        let mut table = FrameTable::new(3);

        table.set(FrameId::new(0), entry('A'));
        assert_eq!(table.first_empty(), Some(FrameId::new(1)));

        table.set(FrameId::new(2), entry('C'));
        assert_eq!(table.first_empty(), Some(FrameId::new(1)));

        table.set(FrameId::new(1), entry('B'));
        assert_eq!(table.first_empty(), None);
        assert!(table.is_full());
    }

    #[test]
    fn test_frame_table_find() {
        let mut table = FrameTable::new(3);
        table.set(FrameId::new(0), entry('A'));
        table.set(FrameId::new(1), entry('B'));

        assert_eq!(table.find(&'A'), Some(FrameId::new(0)));
        assert_eq!(table.find(&'B'), Some(FrameId::new(1)));
        assert_eq!(table.find(&'Z'), None);
    }

    #[test]
    fn test_frame_table_overwrite_keeps_occupancy() {
        let mut table = FrameTable::new(2);
        assert!(table.set(FrameId::new(0), entry('A')).is_none());
        assert!(table.set(FrameId::new(1), entry('B')).is_none());
        assert_eq!(table.occupied_count(), 2);

        let displaced = table.set(FrameId::new(0), entry('C'));
        assert_eq!(displaced.map(|e| e.identity), Some('A'));
        assert_eq!(table.occupied_count(), 2);
        assert_eq!(table.find(&'A'), None);
        assert_eq!(table.find(&'C'), Some(FrameId::new(0)));
    }

    #[test]
    fn test_frame_table_iter_and_identities() {
        let mut table = FrameTable::new(3);
        table.set(FrameId::new(2), entry('C'));
        table.set(FrameId::new(0), entry('A'));

        let occupied: Vec<(FrameId, char)> = table.iter().map(|(f, e)| (f, e.identity)).collect();
        assert_eq!(occupied, vec![(FrameId::new(0), 'A'), (FrameId::new(2), 'C')]);
        assert_eq!(table.identities(), vec![Some('A'), None, Some('C')]);
    }

    #[test]
    fn test_frame_table_get_mut() {
        let mut table = FrameTable::new(1);
        table.set(FrameId::new(0), entry('A'));

        if let Some(e) = table.get_mut(FrameId::new(0)) {
            e.referenced = false;
        }
        assert_eq!(table.get(FrameId::new(0)).map(|e| e.referenced), Some(false));
        assert!(table[FrameId::new(0)].is_some());
    }

    #[test]
    #[should_panic]
    fn test_frame_table_out_of_range() {
        let table: FrameTable<char> = FrameTable::new(2);
        let _ = table.get(FrameId::new(2));
    }
}
