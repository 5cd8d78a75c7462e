//! domain_guard library: domain registration-age risk evaluation
//!
//! This library inspects the domain behind a navigated URL, determines how
//! recently it was registered via a public RDAP lookup, and classifies it
//! as `danger`, `safe`, or `unknown` against a configurable age threshold.
//! Classifications are cached per root domain with a 4-hour TTL so
//! repeated navigations do not re-trigger the external lookup.
//!
//! # Example
//!
//! ```no_run
//! use domain_guard::alert::LogAlertSink;
//! use domain_guard::{Config, DomainChecker};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let checker = DomainChecker::from_config(&config, Arc::new(LogAlertSink))?;
//!
//! let verdict = checker.evaluate("example.com").await;
//! println!("{} is {}", verdict.domain, verdict.status);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod alert;
pub mod cache;
mod checker;
pub mod classify;
pub mod config;
pub mod domain;
pub mod error_handling;
pub mod initialization;
pub mod rdap;
pub mod server;

// Re-export public API
pub use cache::{ClassificationCache, Clock, ManualClock, SystemClock};
pub use checker::DomainChecker;
pub use classify::{classify, Classification, Status};
pub use config::{
    Config, FileThresholdStore, LogFormat, LogLevel, MemoryThresholdStore, ThresholdStore,
};
pub use rdap::{RdapClient, RegistrationLookup};
