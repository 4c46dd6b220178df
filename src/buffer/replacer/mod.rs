//! Eviction policy implementations (replacers).
//!
//! Implements:
//! - [`FifoReplacer`] - First in, first out
//! - [`LruReplacer`] - Least recently used
//! - [`ClockReplacer`] - Second chance
//! - [`MinAccessTimeReplacer`] - Cheapest reload first
//!
//! [`Policy`] wraps one of them behind the [`Replacer`] contract so the
//! engine can be built from a [`PolicyKind`] picked at runtime.

mod clock;
mod fifo;
mod lru;
mod min_access_time;

use std::fmt;

use log::warn;

use crate::buffer::{Entry, FrameTable};
use crate::common::FrameId;

pub use clock::ClockReplacer;
pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use min_access_time::MinAccessTimeReplacer;

/// Bookkeeping contract every eviction policy implements.
///
/// The engine owns the frame table and the logical clock. It calls into
/// the replacer at three points:
/// - `record_insert` after filling an empty slot
/// - `record_hit` after finding the identity resident
/// - `evict` when a fault finds the table full
pub trait Replacer {
    /// An empty slot was just filled.
    fn record_insert(&mut self, _frame_id: FrameId) {}

    /// The resident `entry` was hit at logical time `tick`.
    fn record_hit<K>(&mut self, _entry: &mut Entry<K>, _tick: u64) {}

    /// Pick the slot to overwrite in a full table.
    ///
    /// Returns `None` only if the table holds no entry at all, which the
    /// engine never lets happen.
    fn evict<K>(&mut self, table: &mut FrameTable<K>) -> Option<FrameId>;
}

/// Selector for one of the four eviction policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PolicyKind {
    #[default]
    Fifo,
    Lru,
    SecondChance,
    MinAccessTime,
}

impl PolicyKind {
    /// Every policy, in display order.
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::Fifo,
        PolicyKind::Lru,
        PolicyKind::SecondChance,
        PolicyKind::MinAccessTime,
    ];

    /// Parse a policy tag, case-insensitively.
    ///
    /// Unrecognised tags fall back to FIFO.
    ///
    /// # Example
    /// ```
    /// use pagesim::PolicyKind;
    ///
    /// assert_eq!(PolicyKind::from_tag("lru"), PolicyKind::Lru);
    /// assert_eq!(PolicyKind::from_tag("SC"), PolicyKind::SecondChance);
    /// assert_eq!(PolicyKind::from_tag("bogus"), PolicyKind::Fifo);
    /// ```
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_uppercase().as_str() {
            "FIFO" => PolicyKind::Fifo,
            "LRU" => PolicyKind::Lru,
            "SC" | "SECOND_CHANCE" | "SECOND-CHANCE" | "CLOCK" => PolicyKind::SecondChance,
            "MAT" | "MIN_ACCESS_TIME" | "MIN-ACCESS-TIME" => PolicyKind::MinAccessTime,
            other => {
                warn!("unknown policy tag {:?}, falling back to FIFO", other);
                PolicyKind::Fifo
            }
        }
    }

    /// Canonical tag for this policy.
    pub fn tag(self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::SecondChance => "SECOND_CHANCE",
            PolicyKind::MinAccessTime => "MIN_ACCESS_TIME",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}

/// One replacer, chosen at runtime.
#[derive(Debug)]
pub enum Policy {
    Fifo(FifoReplacer),
    Lru(LruReplacer),
    SecondChance(ClockReplacer),
    MinAccessTime(MinAccessTimeReplacer),
}

impl Policy {
    /// Fresh replacer state for `kind`.
    pub fn new(kind: PolicyKind) -> Self {
        match kind {
            PolicyKind::Fifo => Policy::Fifo(FifoReplacer::new()),
            PolicyKind::Lru => Policy::Lru(LruReplacer::new()),
            PolicyKind::SecondChance => Policy::SecondChance(ClockReplacer::new()),
            PolicyKind::MinAccessTime => Policy::MinAccessTime(MinAccessTimeReplacer::new()),
        }
    }

    /// Which policy this is.
    pub fn kind(&self) -> PolicyKind {
        match self {
            Policy::Fifo(_) => PolicyKind::Fifo,
            Policy::Lru(_) => PolicyKind::Lru,
            Policy::SecondChance(_) => PolicyKind::SecondChance,
            Policy::MinAccessTime(_) => PolicyKind::MinAccessTime,
        }
    }
}

impl Replacer for Policy {
    fn record_insert(&mut self, frame_id: FrameId) {
        match self {
            Policy::Fifo(r) => r.record_insert(frame_id),
            Policy::Lru(r) => r.record_insert(frame_id),
            Policy::SecondChance(r) => r.record_insert(frame_id),
            Policy::MinAccessTime(r) => r.record_insert(frame_id),
        }
    }

    fn record_hit<K>(&mut self, entry: &mut Entry<K>, tick: u64) {
        match self {
            Policy::Fifo(r) => r.record_hit(entry, tick),
            Policy::Lru(r) => r.record_hit(entry, tick),
            Policy::SecondChance(r) => r.record_hit(entry, tick),
            Policy::MinAccessTime(r) => r.record_hit(entry, tick),
        }
    }

    fn evict<K>(&mut self, table: &mut FrameTable<K>) -> Option<FrameId> {
        match self {
            Policy::Fifo(r) => r.evict(table),
            Policy::Lru(r) => r.evict(table),
            Policy::SecondChance(r) => r.evict(table),
            Policy::MinAccessTime(r) => r.evict(table),
        }
    }
}
