//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// The simulation core only ever produces [`Error::Config`]. The other
/// variants belong to the terminal front end.
#[derive(Debug, Error)]
pub enum Error {
    /// The simulation was configured with values it cannot run.
    ///
    /// Reported before any frame table or replacer state is created.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// I/O error while reading interactive input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input read from the terminal could not be interpreted.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Reasons a [`SimulationConfig`](crate::simulation::SimulationConfig) is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A frame table needs at least one slot.
    #[error("frame count must be at least 1, got {0}")]
    InvalidFrameCount(usize),

    /// Explicit latencies must pair one-to-one with the reference string.
    #[error("{latencies} latencies supplied for {references} references")]
    LatencyLengthMismatch { references: usize, latencies: usize },
}

impl Error {
    /// Returns the configuration error, if this is one.
    pub fn as_config(&self) -> Option<&ConfigError> {
        match self {
            Error::Config(e) => Some(e),
            _ => None,
        }
    }
}
