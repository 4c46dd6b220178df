//! Frame table and eviction engine.
//!
//! The engine is the simulated resident set: a fixed number of frames,
//! each holding one entry, refilled by a pluggable eviction policy.
//!
//! # Components
//! - [`EvictionEngine`] - Drives accesses against the table
//! - [`FrameTable`] - Fixed array of slots
//! - [`Entry`] - A resident page plus policy metadata
//! - [`Stats`] - Per-run counters
//! - [`replacer`] - Eviction policy implementations

mod engine;
mod entry;
mod frame_table;
pub mod replacer;
mod stats;

pub use engine::EvictionEngine;
pub use entry::{Entry, Outcome};
pub use frame_table::FrameTable;
pub use replacer::{Policy, PolicyKind, Replacer};
pub use stats::Stats;
