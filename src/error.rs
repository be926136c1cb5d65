//! Error types for the ravvedimento engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition the engine and its configuration loader can hit.
//! Missing interest rates are not errors: they surface as warnings on the
//! calculation result.

use thiserror::Error;

/// The main error type for the ravvedimento engine.
///
/// # Example
///
/// ```
/// use ravvedimento_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/interest_rates.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/interest_rates.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Calculation input failed validation.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The offending input field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An interest rate table contained more than one entry for a year.
    #[error("Duplicate interest rate entry for year {year}")]
    DuplicateRateYear {
        /// The duplicated year.
        year: i32,
    },

    /// A tax code was not found in the catalog.
    #[error("Tax code not found: {code}")]
    TaxCodeNotFound {
        /// The code that was not found.
        code: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The amount is too large for the penalty or interest arithmetic.
    pub fn amount_out_of_range() -> Self {
        Self::invalid_input("original_amount", "amount out of range")
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::invalid_input("payment_date", "must be after due_date");
        assert_eq!(
            error.to_string(),
            "Invalid input field 'payment_date': must be after due_date"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_duplicate_rate_year_displays_year() {
        let error = EngineError::DuplicateRateYear { year: 2024 };
        assert_eq!(
            error.to_string(),
            "Duplicate interest rate entry for year 2024"
        );
    }

    #[test]
    fn test_tax_code_not_found_displays_code() {
        let error = EngineError::TaxCodeNotFound {
            code: "9999".to_string(),
        };
        assert_eq!(error.to_string(), "Tax code not found: 9999");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_input() -> EngineResult<()> {
            Err(EngineError::invalid_input("original_amount", "must be positive"))
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_input()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
