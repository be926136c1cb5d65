//! Response types for the ravvedimento API.
//!
//! This module defines the error response structures, the engine error to
//! HTTP status mapping, and the bracket listing view.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{PenaltyBracket, SANCTION_REGIME, regime_valid_from};
use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid input field '{}': {}", field, message),
                    field,
                ),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::DuplicateRateYear { year } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Interest rate table is inconsistent",
                    format!("Duplicate entry for year {}", year),
                ),
            },
            EngineError::TaxCodeNotFound { code } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("TAX_CODE_NOT_FOUND", format!("Tax code not found: {}", code)),
            },
        }
    }
}

/// A penalty bracket as listed by `GET /brackets`.
#[derive(Debug, Clone, Serialize)]
pub struct BracketView {
    /// The bracket itself.
    #[serde(flatten)]
    pub bracket: &'static PenaltyBracket,
    /// Fraction of the base penalty owed.
    pub reduction_fraction: Decimal,
    /// Reduced penalty as a percentage of the unpaid tax.
    pub reduced_penalty_percent: Decimal,
    /// Sanction regime tag.
    pub regime: &'static str,
    /// First day the regime applies.
    pub valid_from: Option<NaiveDate>,
}

impl From<&'static PenaltyBracket> for BracketView {
    fn from(bracket: &'static PenaltyBracket) -> Self {
        Self {
            bracket,
            reduction_fraction: bracket.reduction_fraction(),
            reduced_penalty_percent: bracket.reduced_penalty_percent(),
            regime: SANCTION_REGIME,
            valid_from: regime_valid_from(),
        }
    }
}
