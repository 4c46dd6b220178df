//! Simulation driver.
//!
//! Takes a [`SimulationConfig`], runs it through a fresh
//! [`EvictionEngine`](crate::buffer::EvictionEngine), and hands back a
//! [`SimulationReport`] with one [`StepResult`] per access plus the
//! final [`Stats`](crate::buffer::Stats).

mod config;
mod simulator;

pub use config::{Latencies, SimulationConfig};
pub use simulator::{
    compare_policies, simulate, FrameSnapshot, SimulationReport, Simulator, StepResult,
};
