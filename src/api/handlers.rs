//! HTTP request handlers for the ravvedimento API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{PENALTY_BRACKETS, compute_remediation};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, BracketView};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/rates", get(rates_handler))
        .route("/rates/current", get(current_rate_handler))
        .route("/brackets", get(brackets_handler))
        .route("/tax-codes", get(tax_codes_handler))
        .with_state(state)
}

fn json_error(status: StatusCode, error: ApiError) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a late payment and returns the computed ravvedimento.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
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
            return json_error(StatusCode::BAD_REQUEST, error);
        }
    };

    let config = state.config();
    let input = request.into_input(config);

    match compute_remediation(&input, config.rate_table()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                delay_days = result.delay_days,
                remediation_kind = %result.remediation_kind,
                total_payable = %result.total_payable,
                warnings = result.warnings.len(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            json_error(api_error.status, api_error.error)
        }
    }
}

/// Handler for GET /rates: the full legal interest rate table.
async fn rates_handler(State(state): State<AppState>) -> Response {
    Json(state.config().rate_table()).into_response()
}

/// Handler for GET /rates/current: the rate in force today.
async fn current_rate_handler(State(state): State<AppState>) -> Response {
    let today = Utc::now().date_naive();
    match state.config().rate_table().current_rate(today) {
        Some(rate) => Json(rate).into_response(),
        None => json_error(
            StatusCode::NOT_FOUND,
            ApiError::new("RATE_NOT_FOUND", "The interest rate table is empty"),
        ),
    }
}

/// Handler for GET /brackets: the penalty bracket catalog.
async fn brackets_handler() -> Json<Vec<BracketView>> {
    Json(PENALTY_BRACKETS.iter().map(BracketView::from).collect())
}

/// Handler for GET /tax-codes: the tax-code catalog.
async fn tax_codes_handler(State(state): State<AppState>) -> Response {
    Json(state.config().tax_codes()).into_response()
}
