//! Simulation input and its validation.

use crate::buffer::PolicyKind;
use crate::common::config::DEFAULT_LATENCY_MS;
use crate::common::{ConfigError, Result};

/// Per-access cost of bringing a page in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Latencies {
    /// Every access costs [`DEFAULT_LATENCY_MS`].
    #[default]
    Uniform,

    /// One latency per reference, in the same order.
    Explicit(Vec<u64>),
}

impl Latencies {
    /// Latency of the access at position `index`.
    ///
    /// Only meaningful once the owning config has been validated.
    #[inline]
    pub fn at(&self, index: usize) -> u64 {
        match self {
            Latencies::Uniform => DEFAULT_LATENCY_MS,
            Latencies::Explicit(values) => values[index],
        }
    }

    /// Check that explicit latencies pair one-to-one with `references` accesses.
    pub fn check_len(&self, references: usize) -> std::result::Result<(), ConfigError> {
        match self {
            Latencies::Explicit(values) if values.len() != references => {
                Err(ConfigError::LatencyLengthMismatch {
                    references,
                    latencies: values.len(),
                })
            }
            _ => Ok(()),
        }
    }
}

impl From<Vec<u64>> for Latencies {
    fn from(values: Vec<u64>) -> Self {
        Latencies::Explicit(values)
    }
}

/// Everything one simulation run needs.
///
/// # Example
/// ```
/// use pagesim::{Latencies, PolicyKind, SimulationConfig};
///
/// let config = SimulationConfig::new("ABCAD".chars().collect(), 3, PolicyKind::Lru);
/// assert!(config.validate().is_ok());
///
/// let bad = config.clone().with_latencies(Latencies::Explicit(vec![1, 2]));
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig<K> {
    /// Identities to access, in order.
    pub reference: Vec<K>,

    /// Number of slots in the frame table.
    pub frame_count: usize,

    /// Which eviction policy to run.
    pub policy: PolicyKind,

    /// Cost of each access.
    pub latencies: Latencies,
}

impl<K> SimulationConfig<K> {
    /// Config with uniform latencies.
    pub fn new(reference: Vec<K>, frame_count: usize, policy: PolicyKind) -> Self {
        Self {
            reference,
            frame_count,
            policy,
            latencies: Latencies::Uniform,
        }
    }

    /// Replace the latencies.
    pub fn with_latencies(mut self, latencies: impl Into<Latencies>) -> Self {
        self.latencies = latencies.into();
        self
    }

    /// Check the config before any simulation state exists.
    ///
    /// # Errors
    /// - `ConfigError::InvalidFrameCount` if `frame_count` is 0
    /// - `ConfigError::LatencyLengthMismatch` if explicit latencies do not
    ///   match the reference length
    pub fn validate(&self) -> Result<()> {
        validate_frame_count(self.frame_count)?;
        self.latencies.check_len(self.reference.len())?;
        Ok(())
    }
}

/// Reject frame tables with no slots.
pub(crate) fn validate_frame_count(frame_count: usize) -> std::result::Result<(), ConfigError> {
    if frame_count < 1 {
        return Err(ConfigError::InvalidFrameCount(frame_count));
    }
    Ok(())
}
