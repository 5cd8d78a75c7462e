//! Error types.
//!
//! Runtime failures in this crate degrade rather than abort: lookup
//! failures become an `unknown` classification and configuration read
//! failures become the default threshold. The typed errors here cover the
//! only fatal phase, process initialization.

mod types;

pub use types::InitializationError;
