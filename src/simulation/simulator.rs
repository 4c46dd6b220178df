//! Simulator - drives a whole reference string through one engine.

use std::fmt;

use log::info;

use crate::buffer::{EvictionEngine, Outcome, PolicyKind, Stats};
use crate::common::{FrameId, Result};
use crate::simulation::config::{validate_frame_count, Latencies, SimulationConfig};

/// Point-in-time copy of the frame table, for reporting only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSnapshot<K> {
    /// Identity held by each slot, `None` for empty slots.
    pub slots: Vec<Option<K>>,

    /// Slot the access that produced this snapshot touched.
    pub touched: Option<FrameId>,
}

impl<K: PartialEq> FrameSnapshot<K> {
    /// Number of occupied slots.
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether `identity` is resident.
    pub fn contains(&self, identity: &K) -> bool {
        self.slots.iter().any(|slot| slot.as_ref() == Some(identity))
    }
}

/// Outcome of one access, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult<K> {
    /// Position in the reference string (0-based).
    pub step_index: usize,

    /// Identity accessed.
    pub identity: K,

    /// Hit, fault or migration.
    pub outcome: Outcome,

    /// Frame table right after the access.
    pub frames: FrameSnapshot<K>,
}

/// Everything a finished run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport<K> {
    /// Policy that ran.
    pub policy: PolicyKind,

    /// Slots in the frame table.
    pub frame_count: usize,

    /// One step per access.
    pub steps: Vec<StepResult<K>>,

    /// Final counters.
    pub stats: Stats,
}

impl<K> SimulationReport<K> {
    /// Fraction of accesses that faulted.
    pub fn fault_rate(&self) -> f64 {
        self.stats.fault_rate()
    }
}

/// Runs reference strings against a fixed frame count and policy.
///
/// The simulator itself holds no run state: every call to
/// [`run`](Self::run) builds a fresh [`EvictionEngine`] and drops it when
/// the run ends, so runs never observe each other.
///
/// # Usage
/// ```
/// use pagesim::{Latencies, Outcome, PolicyKind, Simulator};
///
/// let sim = Simulator::new(3, PolicyKind::Fifo).unwrap();
/// let reference: Vec<char> = "ABCAD".chars().collect();
/// let report = sim.run(&reference, &Latencies::Uniform).unwrap();
///
/// assert_eq!(report.steps[3].outcome, Outcome::Hit);
/// assert_eq!(report.stats.migrations, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simulator {
    frame_count: usize,
    policy: PolicyKind,
}

impl Simulator {
    /// Create a simulator.
    ///
    /// # Errors
    /// - `ConfigError::InvalidFrameCount` if `frame_count` is 0
    pub fn new(frame_count: usize, policy: PolicyKind) -> Result<Self> {
        validate_frame_count(frame_count)?;
        Ok(Self {
            frame_count,
            policy,
        })
    }

    /// Simulate `reference` with the given per-access latencies.
    ///
    /// # Errors
    /// - `ConfigError::LatencyLengthMismatch` if explicit latencies do not
    ///   match `reference`. Nothing is simulated in that case.
    pub fn run<K>(&self, reference: &[K], latencies: &Latencies) -> Result<SimulationReport<K>>
    where
        K: Clone + PartialEq + fmt::Debug,
    {
        latencies.check_len(reference.len())?;

        info!(
            "simulating {} accesses with {} over {} frames",
            reference.len(),
            self.policy,
            self.frame_count
        );

        let mut engine = EvictionEngine::new(self.frame_count, self.policy);
        let mut steps = Vec::with_capacity(reference.len());

        for (step_index, identity) in reference.iter().enumerate() {
            let outcome = engine.access(identity.clone(), latencies.at(step_index));
            steps.push(StepResult {
                step_index,
                identity: identity.clone(),
                outcome,
                frames: FrameSnapshot {
                    slots: engine.frames().identities(),
                    touched: engine.last_touched(),
                },
            });
        }

        let stats = engine.stats();
        info!("{} finished: {}", self.policy, stats);

        Ok(SimulationReport {
            policy: self.policy,
            frame_count: self.frame_count,
            steps,
            stats,
        })
    }
}

/// Validate `config` and run it.
///
/// # Errors
/// Any [`ConfigError`](crate::common::ConfigError), before a single access
/// is processed.
pub fn simulate<K>(config: &SimulationConfig<K>) -> Result<SimulationReport<K>>
where
    K: Clone + PartialEq + fmt::Debug,
{
    config.validate()?;
    Simulator::new(config.frame_count, config.policy)?.run(&config.reference, &config.latencies)
}

/// Run the same input through every policy, one independent run each.
///
/// Reports come back in [`PolicyKind::ALL`] order.
pub fn compare_policies<K>(
    reference: &[K],
    frame_count: usize,
    latencies: &Latencies,
) -> Result<Vec<SimulationReport<K>>>
where
    K: Clone + PartialEq + fmt::Debug,
{
    PolicyKind::ALL
        .iter()
        .map(|&policy| Simulator::new(frame_count, policy)?.run(reference, latencies))
        .collect()
}
