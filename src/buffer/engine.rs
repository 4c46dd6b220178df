//! Eviction Engine - one policy driving one frame table.
//!
//! The [`EvictionEngine`] provides:
//! - Identity lookup against the frame table
//! - First-fit placement while free slots remain
//! - Policy-chosen eviction once the table is full
//! - A logical clock and per-run statistics

use std::fmt;

use log::{debug, trace};

use crate::buffer::replacer::{Policy, PolicyKind, Replacer};
use crate::buffer::{Entry, FrameTable, Outcome, Stats};
use crate::common::FrameId;

/// Runs accesses for one simulation against a fixed-size frame table.
///
/// # Architecture
/// ```text
/// ┌──────────────────────────────────────────────────────────┐
/// │                     EvictionEngine                       │
/// │  ┌──────────────┐   ┌──────────────────────────────────┐ │
/// │  │   access()   │──▶│  table: FrameTable<K>            │ │
/// │  │  find → hit  │   │  [Slot0] [Slot1] [Slot2] ...     │ │
/// │  │  else fault  │   └──────────────────────────────────┘ │
/// │  └──────────────┘   ┌──────────┐ ┌───────┐ ┌─────────┐   │
/// │                     │  policy  │ │ tick  │ │  stats  │   │
/// │                     │  Policy  │ │  u64  │ │  Stats  │   │
/// │                     └──────────┘ └───────┘ └─────────┘   │
/// └──────────────────────────────────────────────────────────┘
/// ```
///
/// Everything is owned by the engine and mutated only through
/// [`access`](Self::access), so two engines never share state.
///
/// # Usage
/// ```
/// use pagesim::{EvictionEngine, Outcome, PolicyKind};
///
/// let mut engine = EvictionEngine::new(2, PolicyKind::Lru);
/// assert_eq!(engine.access('A', 1), Outcome::PageFault);
/// assert_eq!(engine.access('A', 1), Outcome::Hit);
/// assert_eq!(engine.stats().hits, 1);
/// ```
#[derive(Debug)]
pub struct EvictionEngine<K> {
    /// Resident entries.
    table: FrameTable<K>,

    /// Eviction policy bookkeeping.
    policy: Policy,

    /// Logical clock, bumped once per access.
    tick: u64,

    /// Counters for this run.
    stats: Stats,

    /// Slot touched by the latest access.
    last_touched: Option<FrameId>,
}

impl<K: PartialEq + fmt::Debug> EvictionEngine<K> {
    /// Create an engine with `frame_count` empty slots.
    ///
    /// # Panics
    /// Panics if `frame_count` is 0. Callers validate first; see
    /// [`SimulationConfig::validate`](crate::simulation::SimulationConfig::validate).
    pub fn new(frame_count: usize, kind: PolicyKind) -> Self {
        Self {
            table: FrameTable::new(frame_count),
            policy: Policy::new(kind),
            tick: 0,
            stats: Stats::new(),
            last_touched: None,
        }
    }

    // ========================================================================
    // Public API
    // ========================================================================

    /// Access `identity`, paying `latency_ms` if it has to be brought in.
    pub fn access(&mut self, identity: K, latency_ms: u64) -> Outcome {
        self.tick += 1;

        let (frame_id, outcome) = match self.table.find(&identity) {
            Some(frame_id) => {
                self.handle_hit(frame_id);
                (frame_id, Outcome::Hit)
            }
            None => self.handle_fault(identity, latency_ms),
        };

        trace!(
            "tick {}: {:?} at {} (slots used {}/{})",
            self.tick,
            outcome,
            frame_id,
            self.table.occupied_count(),
            self.table.slot_count()
        );

        self.last_touched = Some(frame_id);
        outcome
    }

    /// Read-only view of the frame table.
    #[inline]
    pub fn frames(&self) -> &FrameTable<K> {
        &self.table
    }

    /// Counters accumulated so far.
    #[inline]
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Current logical time (number of accesses processed).
    #[inline]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Slot touched by the latest access, if any access happened yet.
    #[inline]
    pub fn last_touched(&self) -> Option<FrameId> {
        self.last_touched
    }

    /// The policy driving this engine.
    #[inline]
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    // ========================================================================
    // Internal: Hit / fault handling
    // ========================================================================

    /// Handle a hit: mark the entry and let the policy refresh its metadata.
    fn handle_hit(&mut self, frame_id: FrameId) {
        if let Some(entry) = self.table.get_mut(frame_id) {
            entry.mark_hit();
            self.policy.record_hit(entry, self.tick);
        }
        self.stats.record_hit();
    }

    /// Handle a fault: fill the first empty slot, or evict.
    fn handle_fault(&mut self, identity: K, latency_ms: u64) -> (FrameId, Outcome) {
        let (frame_id, outcome) = match self.table.first_empty() {
            Some(frame_id) => {
                self.policy.record_insert(frame_id);
                (frame_id, Outcome::PageFault)
            }
            None => (self.evict(), Outcome::Migration),
        };

        let entry = Entry::new(identity, self.tick, latency_ms, outcome);
        if let Some(victim) = self.table.set(frame_id, entry) {
            debug!(
                "{} evicted {:?} from slot {} (tick {})",
                self.policy.kind(),
                victim.identity,
                frame_id.index(),
                self.tick
            );
        }
        self.stats.record_fault(latency_ms, outcome == Outcome::Migration);

        (frame_id, outcome)
    }

    /// Ask the policy for a victim in the full table.
    fn evict(&mut self) -> FrameId {
        self.policy
            .evict(&mut self.table)
            .expect("a full frame table always yields a victim")
    }
}
