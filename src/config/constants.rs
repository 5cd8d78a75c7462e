//! Configuration constants.
//!
//! This module defines the operational constants used throughout the
//! application: the classification threshold bounds, cache TTL, and the
//! RDAP lookup endpoint and timeout.

use std::time::Duration;

/// Default registration-age threshold in days.
///
/// Domains registered within this many days of the check are classified
/// as `danger`. Used whenever the persisted threshold is absent or
/// unreadable.
pub const DEFAULT_THRESHOLD_DAYS: i64 = 30;

/// Smallest threshold the configuration surface accepts.
pub const MIN_THRESHOLD_DAYS: i64 = 1;

/// Largest threshold the configuration surface accepts.
pub const MAX_THRESHOLD_DAYS: i64 = 365;

/// How long a cached classification stays fresh (4 hours).
///
/// Entries older than this are treated as absent by the cache and
/// recomputed on the next evaluation. Expiry is lazy: stale entries are
/// superseded on the next store, never proactively evicted.
pub const CACHE_TTL: Duration = Duration::from_secs(4 * 60 * 60);

/// Hard timeout for a single RDAP lookup in seconds.
///
/// The lookup client enforces this independently of any caller deadline;
/// on expiry the lookup resolves to "no registration date" rather than
/// hanging.
pub const RDAP_TIMEOUT_SECS: u64 = 8;

/// Default RDAP service the lookup client queries.
///
/// rdap.org redirects to the registry responsible for the queried TLD.
/// Override with the `RDAP_BASE_URL` environment variable or the
/// `--rdap-url` flag.
pub const DEFAULT_RDAP_BASE_URL: &str = "https://rdap.org";

/// Accept header sent with every RDAP request.
pub const RDAP_ACCEPT: &str = "application/rdap+json, application/json";

/// Default port for the HTTP API server.
pub const DEFAULT_API_PORT: u16 = 8311;

/// Default path of the persisted threshold file.
pub const DEFAULT_THRESHOLD_FILE: &str = "./domain_guard_threshold.json";
