//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - Identifiers (FrameId)

pub mod config;
pub mod error;
mod frame_id;

pub use error::{ConfigError, Error, Result};
pub use frame_id::FrameId;
