//! CLOCK (Second Chance) replacement policy.
//!
//! Slots form a ring swept by a persistent hand:
//! ```text
//!        ┌───────┐
//!    ┌──▶│ A : 1 │──┐
//!    │   └───────┘  ▼
//! ┌───────┐     ┌───────┐
//! │ D : 0 │     │ B : 0 │ ◀── hand
//! └───────┘     └───────┘
//!    ▲   ┌───────┐  │
//!    └───│ C : 1 │◀─┘
//!        └───────┘
//! ```
//! A set use bit buys the entry one more lap: the sweep clears it and
//! moves on. The first entry found with a clear bit is the victim.

use crate::buffer::replacer::Replacer;
use crate::buffer::{Entry, FrameTable};
use crate::common::FrameId;

/// Second-chance replacer.
///
/// Hits set the entry's use bit but never move the hand. Filling an empty
/// slot does not move the hand either.
///
/// # Termination
/// Every inspection either finds a victim or clears a bit. After one full
/// lap every bit is clear, so the sweep inspects at most `2 * slot_count`
/// slots.
#[derive(Debug, Default)]
pub struct ClockReplacer {
    /// Next slot the sweep will inspect.
    hand: FrameId,

    /// Slots inspected by the most recent sweep.
    last_sweep_len: usize,
}

impl ClockReplacer {
    /// Create a new clock replacer with the hand on slot 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current hand position.
    #[inline]
    pub fn hand(&self) -> FrameId {
        self.hand
    }

    /// Number of slots the latest eviction inspected, victim included.
    #[inline]
    pub fn last_sweep_len(&self) -> usize {
        self.last_sweep_len
    }
}

impl Replacer for ClockReplacer {
    fn record_hit<K>(&mut self, entry: &mut Entry<K>, _tick: u64) {
        entry.referenced = true;
    }

    fn evict<K>(&mut self, table: &mut FrameTable<K>) -> Option<FrameId> {
        let slot_count = table.slot_count();
        self.last_sweep_len = 0;

        for _ in 0..2 * slot_count {
            let frame_id = self.hand;
            self.hand = frame_id.next_wrapping(slot_count);
            self.last_sweep_len += 1;

            let entry = table.get_mut(frame_id)?;
            if !entry.referenced {
                return Some(frame_id);
            }
            entry.referenced = false;
        }

        None
    }
}
