//! API request handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::types::{
    AckResponse, ApiErrorResponse, ApiState, CheckQuery, SetThresholdRequest, ThresholdResponse,
};
use crate::config::{MAX_THRESHOLD_DAYS, MIN_THRESHOLD_DAYS};

/// `GET /domain/{domain}` — classification for an already-normalized root
/// domain.
pub async fn domain_info_handler(
    State(state): State<ApiState>,
    Path(domain): Path<String>,
) -> Response {
    let domain = domain.trim();
    if domain.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiErrorResponse {
                error: "domain must not be empty".to_string(),
            }),
        )
            .into_response();
    }
    Json(state.checker.evaluate(domain).await).into_response()
}

/// `GET /check?url=…` — full navigation-style evaluation of a URL.
pub async fn check_handler(
    State(state): State<ApiState>,
    Query(query): Query<CheckQuery>,
) -> Response {
    match state.checker.check_navigation(&query.url).await {
        Some(classification) => Json(classification).into_response(),
        None => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiErrorResponse {
                error: format!("not a checkable web URL: {}", query.url),
            }),
        )
            .into_response(),
    }
}

/// `GET /threshold` — the configured registration-age threshold.
pub async fn get_threshold_handler(State(state): State<ApiState>) -> Json<ThresholdResponse> {
    Json(ThresholdResponse {
        threshold_days: state.checker.threshold().await,
    })
}

/// `PUT /threshold` — updates the threshold and clears the cache.
///
/// This is the configuration surface, so the valid range [1, 365] is
/// enforced here rather than in the core.
pub async fn set_threshold_handler(
    State(state): State<ApiState>,
    Json(request): Json<SetThresholdRequest>,
) -> Response {
    if !(MIN_THRESHOLD_DAYS..=MAX_THRESHOLD_DAYS).contains(&request.value) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiErrorResponse {
                error: format!(
                    "threshold must be between {} and {} days",
                    MIN_THRESHOLD_DAYS, MAX_THRESHOLD_DAYS
                ),
            }),
        )
            .into_response();
    }

    match state.checker.set_threshold(request.value).await {
        Ok(()) => Json(AckResponse { ok: true }).into_response(),
        Err(e) => {
            log::warn!("Failed to persist threshold: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiErrorResponse {
                    error: "failed to persist threshold".to_string(),
                }),
            )
                .into_response()
        }
    }
}
