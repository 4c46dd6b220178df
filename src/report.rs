//! Text rendering of simulation results.
//!
//! The core hands out raw [`StepResult`]s and [`Stats`]; this module turns
//! them into terminal tables. Nothing here feeds back into a run.

use std::fmt;

use comfy_table::{Cell, CellAlignment, Table};

use crate::buffer::Stats;
use crate::common::config::EMPTY_SLOT_GLYPH;
use crate::simulation::{FrameSnapshot, SimulationReport};

const TABLE_PRESET: &str = "||--+-++|    ++++++";

/// Fault rate as a percentage rounded to two decimals, e.g. `"80.00%"`.
pub fn format_fault_rate(stats: &Stats) -> String {
    format!("{:.2}%", stats.fault_rate() * 100.0)
}

/// Frame contents as `[A B □]`.
pub fn format_frames<K: fmt::Display>(snapshot: &FrameSnapshot<K>) -> String {
    let mut out = String::from("[");
    for (i, slot) in snapshot.slots.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        match slot {
            Some(identity) => out.push_str(&identity.to_string()),
            None => out.push(EMPTY_SLOT_GLYPH),
        }
    }
    out.push(']');
    out
}

/// One row per access: Step | Ref | Result | Frames.
pub fn render_trace<K: fmt::Display>(report: &SimulationReport<K>) -> Table {
    let mut table = Table::new();
    table.load_preset(TABLE_PRESET);
    table.set_header(vec!["Step", "Ref", "Result", "Frames"]);

    for step in &report.steps {
        table.add_row(vec![
            Cell::new(step.step_index + 1).set_alignment(CellAlignment::Right),
            Cell::new(&step.identity).set_alignment(CellAlignment::Center),
            Cell::new(step.outcome),
            Cell::new(format_frames(&step.frames)),
        ]);
    }

    table
}

/// Final counters as a labelled block.
pub fn render_stats(stats: &Stats) -> String {
    format!(
        "====== Statistics ======\n\
         Hits       : {}\n\
         Faults     : {}\n\
         Migrations : {}\n\
         Total I/O  : {} ms\n\
         Fault Rate : {}",
        stats.hits,
        stats.faults,
        stats.migrations,
        stats.total_io_ms,
        format_fault_rate(stats)
    )
}

/// One row per policy, for side-by-side runs.
pub fn render_comparison<K>(reports: &[SimulationReport<K>]) -> Table {
    let mut table = Table::new();
    table.load_preset(TABLE_PRESET);
    table.set_header(vec![
        "Policy",
        "Hits",
        "Faults",
        "Migrations",
        "I/O (ms)",
        "Fault Rate",
    ]);

    for report in reports {
        let stats = &report.stats;
        table.add_row(vec![
            Cell::new(report.policy),
            Cell::new(stats.hits),
            Cell::new(stats.faults),
            Cell::new(stats.migrations),
            Cell::new(stats.total_io_ms),
            Cell::new(format_fault_rate(stats)),
        ]);
    }

    table
}
