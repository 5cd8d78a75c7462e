//! Shared resource initialization.
//!
//! This module provides functions to initialize the resources the
//! application shares across tasks:
//! - The HTTP client used for RDAP lookups (hard timeout baked in)
//! - The logger

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
