//! Domain models for the ravvedimento engine.
//!
//! This module contains the core data types: the late payment to remediate
//! and the result of the calculation.

mod calculation_input;
mod calculation_result;

pub use calculation_input::CalculationInput;
pub use calculation_result::{AuditWarning, CalculationResult, RemediationKind, YearlyInterestEntry};
