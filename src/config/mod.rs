//! Application configuration.
//!
//! This module provides:
//! - Configuration constants (threshold bounds, cache TTL, lookup timeout)
//! - Library configuration and CLI option types
//! - The persisted threshold store

mod constants;
mod threshold;
mod types;

// Re-export all constants
pub use constants::*;
pub use threshold::{FileThresholdStore, MemoryThresholdStore, ThresholdStore};
pub use types::{Config, LogFormat, LogLevel};
