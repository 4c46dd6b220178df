//! Configuration constants for pagesim.

/// Latency charged per fault when the caller asks for uniform cost.
///
/// A run driven with [`Latencies::Uniform`](crate::simulation::Latencies)
/// behaves as if every access carried this value, so `total_io_ms`
/// equals the fault count.
pub const DEFAULT_LATENCY_MS: u64 = 1;

/// Glyph used by the trace renderer for a frame that holds no entry yet.
pub const EMPTY_SLOT_GLYPH: char = '□';

/// Frame count used by the terminal front end when none is given.
pub const DEFAULT_FRAME_COUNT: usize = 3;
