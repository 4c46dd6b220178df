//! pagesim - A page-replacement simulator with interchangeable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Reporting (report)                          │   │
//! │  │        trace table · statistics · comparison             │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↑                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Simulation (simulation/)                    │   │
//! │  │   SimulationConfig → Simulator → StepResult + Stats      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │       Eviction Engine (buffer/)  [Runtime Swappable]    │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  Policies: FIFO | LRU | CLOCK | MIN-ACCESS-TIME │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │      EvictionEngine + FrameTable + Entry + Stats         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (FrameId, Error, config)
//! - [`buffer`] - Frame table, engine and eviction policies
//! - [`simulation`] - Runs reference strings and collects results
//! - [`report`] - Terminal rendering of traces and statistics
//!
//! # Quick Start
//! ```
//! use pagesim::{simulate, Outcome, PolicyKind, SimulationConfig};
//!
//! let config = SimulationConfig::new("ABCAD".chars().collect(), 3, PolicyKind::Lru);
//! let report = simulate(&config).unwrap();
//!
//! assert_eq!(report.steps[4].outcome, Outcome::Migration);
//! assert_eq!(report.stats.hits, 1);
//! ```

pub mod buffer;
pub mod common;
pub mod report;
pub mod simulation;

// Re-export commonly used items at crate root for convenience
pub use common::{ConfigError, Error, FrameId, Result};

pub use buffer::{Entry, EvictionEngine, FrameTable, Outcome, Policy, PolicyKind, Stats};
pub use simulation::{
    compare_policies, simulate, FrameSnapshot, Latencies, SimulationConfig, SimulationReport,
    Simulator, StepResult,
};
