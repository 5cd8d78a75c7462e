//! RDAP registration-date lookup.
//!
//! The only component that performs I/O. A lookup asks a public RDAP
//! service for a domain's lifecycle events and extracts the date of the
//! `registration` event. Every failure mode (timeout, transport error,
//! non-success status, malformed body, missing event) is logged and
//! collapses to "no registration date" — nothing here ever returns an
//! error to the caller.

mod client;
mod parse;
mod types;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub use client::RdapClient;
pub use types::{RdapEvent, RdapResponse};

/// A source of domain registration dates.
///
/// The production implementation is [`RdapClient`]; tests substitute
/// deterministic stubs so the orchestrator and classifier can be
/// exercised without network access.
#[async_trait]
pub trait RegistrationLookup: Send + Sync {
    /// Returns the domain's registration date, or `None` when it cannot
    /// be determined for any reason. Must not hang: implementations
    /// enforce their own hard timeout.
    async fn registration_date(&self, domain: &str) -> Option<DateTime<Utc>>;
}
