//! HTTP API module for the ravvedimento engine.
//!
//! This module provides the REST endpoints for computing a ravvedimento
//! and for browsing the reference data (rates, brackets, tax codes).

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse, BracketView};
pub use state::AppState;
