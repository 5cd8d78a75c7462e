//! API server data structures.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::checker::DomainChecker;

/// Shared state for the API server
#[derive(Clone)]
pub struct ApiState {
    /// The evaluation orchestrator all handlers delegate to
    pub checker: Arc<DomainChecker>,
}

/// JSON response for `GET /threshold`
#[derive(Serialize)]
pub struct ThresholdResponse {
    /// Configured registration-age threshold in days
    #[serde(rename = "thresholdDays")]
    pub threshold_days: i64,
}

/// JSON body for `PUT /threshold`
#[derive(Deserialize)]
pub struct SetThresholdRequest {
    /// New threshold in days, within [1, 365]
    pub value: i64,
}

/// Acknowledgement for mutating requests
#[derive(Serialize)]
pub struct AckResponse {
    /// True when the request took effect
    pub ok: bool,
}

/// Query parameters for `GET /check`
#[derive(Deserialize)]
pub struct CheckQuery {
    /// The navigated URL to evaluate
    pub url: String,
}

/// JSON error body
#[derive(Serialize)]
pub struct ApiErrorResponse {
    /// Human-readable reason the request was rejected
    pub error: String,
}
