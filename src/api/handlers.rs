//! HTTP request handlers for the Experience Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_period, summarize_periods, try_calculate_duration_with_formats};
use crate::config::EngineConfig;
use crate::error::EngineResult;

use super::request::{CalculationOptions, DurationRequest, PeriodRequest, SummaryRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/duration", post(duration_handler))
        .route("/summary", post(summary_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Handler for POST /duration.
///
/// Calculates the inclusive duration of a single period. Invalid dates or an
/// inverted range produce a zero duration with a warning, unless the
/// `strict` query parameter is set.
async fn duration_handler(
    State(state): State<AppState>,
    Query(options): Query<CalculationOptions>,
    payload: Result<Json<DurationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing duration request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id).into_response(),
    };

    let config = state.config();
    if options.strict {
        if let Err(err) = check_period(config, &request.start_date, &request.end_date) {
            warn!(correlation_id = %correlation_id, error = %err, "Strict duration rejected");
            return ApiErrorResponse::from(err).into_response();
        }
    }

    let period = calculate_period(
        None,
        &request.start_date,
        &request.end_date,
        &config.dates,
        &config.labels,
    );

    info!(
        correlation_id = %correlation_id,
        duration = %period.duration,
        warned = period.warning.is_some(),
        "Duration calculated"
    );
    (StatusCode::OK, Json(period)).into_response()
}

/// Handler for POST /summary.
///
/// Calculates every period and their normalized total.
async fn summary_handler(
    State(state): State<AppState>,
    Query(options): Query<CalculationOptions>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id).into_response(),
    };

    let config = state.config();
    if options.strict {
        if let Err(err) = check_periods(config, &request.periods) {
            warn!(correlation_id = %correlation_id, error = %err, "Strict summary rejected");
            return ApiErrorResponse::from(err).into_response();
        }
    }

    let start_time = Instant::now();
    let periods = request
        .periods
        .into_iter()
        .map(|p| calculate_period(p.id, &p.start_date, &p.end_date, &config.dates, &config.labels))
        .collect();
    let summary = summarize_periods(periods, &config.labels);

    info!(
        correlation_id = %correlation_id,
        summary_id = %summary.summary_id,
        periods_count = summary.periods.len(),
        rejected_count = summary.rejected_periods().count(),
        total = %summary.total,
        duration_us = start_time.elapsed().as_micros(),
        "Summary calculated"
    );
    (StatusCode::OK, Json(summary)).into_response()
}

fn check_period(config: &EngineConfig, start: &str, end: &str) -> EngineResult<()> {
    try_calculate_duration_with_formats(start, end, &config.dates.input_formats).map(|_| ())
}

fn check_periods(config: &EngineConfig, periods: &[PeriodRequest]) -> EngineResult<()> {
    periods
        .iter()
        .try_for_each(|p| check_period(config, &p.start_date, &p.end_date))
}

/// Converts a JSON body rejection into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::config::ConfigLoader;

    fn create_test_router() -> Router {
        create_router(AppState::new(ConfigLoader::default()))
    }

    async fn post_json(router: Router, uri: &str, body: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_returns_ok() {
        let response = create_test_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_duration_valid_request_returns_200() {
        let (status, body) = post_json(
            create_test_router(),
            "/duration",
            r#"{"start_date": "2023-01-15", "end_date": "2023-03-10"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["duration"]["years"], 0);
        assert_eq!(body["duration"]["months"], 1);
        assert_eq!(body["duration"]["days"], 24);
        assert_eq!(body["display"], "0 years, 1 month, 24 days");
        assert_eq!(body["start_display"], "15/01/2023");
        assert!(body.get("warning").is_none());
    }

    #[tokio::test]
    async fn test_duration_invalid_date_returns_zero_with_warning() {
        let (status, body) = post_json(
            create_test_router(),
            "/duration",
            r#"{"start_date": "not a date", "end_date": "2023-03-10"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["duration"], serde_json::json!({"years": 0, "months": 0, "days": 0}));
        assert!(body["warning"].as_str().unwrap().contains("not a date"));
    }

    #[tokio::test]
    async fn test_duration_strict_rejects_inverted_range() {
        let (status, body) = post_json(
            create_test_router(),
            "/duration?strict=true",
            r#"{"start_date": "2023-03-10", "end_date": "2023-01-15"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["code"], "INVERTED_RANGE");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let (status, body) = post_json(create_test_router(), "/duration", "{ not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let (status, body) = post_json(
            create_test_router(),
            "/duration",
            r#"{"start_date": "2023-01-15"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_summary_returns_total() {
        let (status, body) = post_json(
            create_test_router(),
            "/summary",
            r#"{"periods": [
                {"id": "a", "start_date": "2022-01-01", "end_date": "2022-12-25"},
                {"id": "b", "start_date": "2023-03-01", "end_date": "2023-05-10"}
            ]}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["periods"].as_array().unwrap().len(), 2);
        assert_eq!(body["total"], serde_json::json!({"years": 1, "months": 2, "days": 5}));
        assert_eq!(body["total_display"], "1 year, 2 months, 5 days");
    }
}
