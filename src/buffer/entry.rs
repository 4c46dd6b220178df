//! Entry - the record held by one frame.
//!
//! An [`Entry`] carries the identity of a resident page plus the metadata
//! the replacers read:
//! - `referenced` use bit (second-chance)
//! - `last_used_tick` recency stamp (LRU)
//! - `access_latency_ms` reload cost (minimum-access-time)
//! - `outcome` of the access that last touched it

use std::fmt;

/// Classification of a single access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The identity was already resident.
    Hit,
    /// The identity was not resident and went into an empty slot.
    PageFault,
    /// The identity was not resident and replaced a victim.
    Migration,
}

impl Outcome {
    /// Whether this access missed the frame table.
    #[inline]
    pub fn is_fault(self) -> bool {
        !matches!(self, Outcome::Hit)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Outcome::Hit => "HIT",
            Outcome::PageFault => "PAGEFAULT",
            Outcome::Migration => "MIGRATION",
        };
        // pad() so width specifiers in the trace columns apply
        f.pad(name)
    }
}

/// A resident page.
///
/// Every field is plain data: the frame table owns its entries outright
/// and a run is single-threaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K> {
    /// Identity of the page.
    pub identity: K,

    /// Use bit, consulted only by the second-chance sweep.
    pub referenced: bool,

    /// Logical time of the most recent access, consulted only by LRU.
    pub last_used_tick: u64,

    /// Cost paid to bring this entry in. Set at insertion, never updated.
    pub access_latency_ms: u64,

    /// Outcome of the access that most recently touched this entry.
    pub outcome: Outcome,
}

impl<K> Entry<K> {
    /// Create an entry for an identity that was just brought in.
    ///
    /// A freshly loaded page counts as used, so its use bit starts set.
    pub fn new(identity: K, tick: u64, access_latency_ms: u64, outcome: Outcome) -> Self {
        Self {
            identity,
            referenced: true,
            last_used_tick: tick,
            access_latency_ms,
            outcome,
        }
    }

    /// Record that the latest access to this entry was a hit.
    ///
    /// Policy metadata (use bit, recency) is left to the replacer.
    #[inline]
    pub fn mark_hit(&mut self) {
        self.outcome = Outcome::Hit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_new() {
        let entry = Entry::new('A', 7, 5, Outcome::PageFault);
        assert_eq!(entry.identity, 'A');
        assert!(entry.referenced);
        assert_eq!(entry.last_used_tick, 7);
        assert_eq!(entry.access_latency_ms, 5);
        assert_eq!(entry.outcome, Outcome::PageFault);
    }

    #[test]
    fn test_entry_mark_hit() {
        let mut entry = Entry::new('A', 1, 9, Outcome::Migration);
        entry.mark_hit();

        assert_eq!(entry.outcome, Outcome::Hit);
        assert_eq!(entry.last_used_tick, 1);
        // Latency is fixed at insertion
        assert_eq!(entry.access_latency_ms, 9);
    }

    #[test]
    fn test_outcome_is_fault() {
        assert!(!Outcome::Hit.is_fault());
        assert!(Outcome::PageFault.is_fault());
        assert!(Outcome::Migration.is_fault());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(format!("{}", Outcome::Hit), "HIT");
        assert_eq!(format!("{}", Outcome::PageFault), "PAGEFAULT");
        assert_eq!(format!("{:<11}|", Outcome::Migration), "MIGRATION  |");
    }
}
