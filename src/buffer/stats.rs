//! Simulation statistics tracking.

use std::fmt;

/// Counters accumulated over one simulation run.
///
/// A run is single-threaded and owns its stats, so these are plain
/// integers rather than atomics. The value is `Copy` and can be
/// compared, printed and stored freely.
///
/// # Example
/// ```
/// use pagesim::Stats;
///
/// let mut stats = Stats::new();
/// stats.record_hit();
/// stats.record_fault(5, false);
/// assert_eq!(stats.fault_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Accesses that found their identity resident.
    pub hits: u64,

    /// Accesses that did not, migrations included.
    pub faults: u64,

    /// Faults that had to overwrite an occupied slot.
    pub migrations: u64,

    /// Sum of the latency charged on every fault.
    pub total_io_ms: u64,
}

impl Stats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a hit.
    #[inline]
    pub fn record_hit(&mut self) {
        self.hits = self.hits.saturating_add(1);
    }

    /// Count a fault that cost `latency_ms`. Counters saturate at `u64::MAX`.
    #[inline]
    pub fn record_fault(&mut self, latency_ms: u64, migrated: bool) {
        self.faults = self.faults.saturating_add(1);
        self.total_io_ms = self.total_io_ms.saturating_add(latency_ms);
        if migrated {
            self.migrations = self.migrations.saturating_add(1);
        }
    }

    /// Hits plus faults.
    #[inline]
    pub fn total_accesses(&self) -> u64 {
        self.hits.saturating_add(self.faults)
    }

    /// Fraction of accesses that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        let total = self.total_accesses();
        if total == 0 {
            0.0
        } else {
            self.faults as f64 / total as f64
        }
    }

    /// Fraction of accesses that hit (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_accesses();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, faults: {}, migrations: {}, io: {}ms, fault_rate: {:.2}% }}",
            self.hits,
            self.faults,
            self.migrations,
            self.total_io_ms,
            self.fault_rate() * 100.0
        )
    }
}
