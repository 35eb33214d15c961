//! Error types for the exemption computation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the hard failure conditions of the engine. Soft failures (an
//! unreachable index calculator, a grant with missing fields) never surface
//! here; they degrade the affected grant and are absorbed locally.

use thiserror::Error;

/// The main error type for the exemption computation engine.
///
/// Only hard failures are represented: a missing client aborts a summary
/// computation, a missing grant aborts a figures write-back, and a broken
/// cap-table file aborts configuration loading. Everything else resolves to
/// a degraded-but-complete summary.
///
/// # Example
///
/// ```
/// use exemption_engine::error::EngineError;
///
/// let error = EngineError::ClientNotFound { client_id: 42 };
/// assert_eq!(error.to_string(), "Client not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No client exists with the requested id.
    #[error("Client not found: {client_id}")]
    ClientNotFound {
        /// The client id that was not found.
        client_id: i64,
    },

    /// No grant exists with the requested id (write-back target vanished).
    #[error("Grant not found: {grant_id}")]
    GrantNotFound {
        /// The grant id that was not found.
        grant_id: i64,
    },

    /// Cap-table file was not found at the specified path.
    #[error("Cap table file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Cap-table file could not be parsed.
    #[error("Failed to parse cap table file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_not_found_displays_id() {
        let error = EngineError::ClientNotFound { client_id: 7 };
        assert_eq!(error.to_string(), "Client not found: 7");
    }

    #[test]
    fn test_grant_not_found_displays_id() {
        let error = EngineError::GrantNotFound { grant_id: 12 };
        assert_eq!(error.to_string(), "Grant not found: 12");
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/caps.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Cap table file not found: /missing/caps.yaml"
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
            "Failed to parse cap table file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::CalculationError {
            message: "negative remaining capital".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Calculation error: negative remaining capital"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_client_not_found() -> EngineResult<()> {
            Err(EngineError::ClientNotFound { client_id: 1 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_client_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
