//! Error types for the Payslip Query Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading, querying, and
//! serving payslip records.

use thiserror::Error;

/// The main error type for the Payslip Query Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payslip_engine::error::EngineError;
///
/// let error = EngineError::PayslipNotFound {
///     id: "PAY-2030-01".to_string(),
/// };
/// assert_eq!(error.to_string(), "Payslip not found: PAY-2030-01");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A date string did not parse as an ISO-8601 calendar date.
    #[error("Invalid date '{input}': {message}")]
    InvalidDate {
        /// The input string that failed to parse.
        input: String,
        /// A description of the parse error.
        message: String,
    },

    /// No payslip with the requested id exists in the record set.
    #[error("Payslip not found: {id}")]
    PayslipNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// The payslip data file was not found at the specified path.
    #[error("Payslip data file not found: {path}")]
    StoreNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The payslip data file could not be parsed.
    #[error("Failed to parse payslip data file '{path}': {message}")]
    StoreParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A payslip record was invalid or contained inconsistent data.
    #[error("Invalid payslip '{id}': {message}")]
    InvalidPayslip {
        /// The id of the invalid payslip.
        id: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// The source document for a payslip was not found.
    #[error("Document not found: {path}")]
    DocumentNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A document copy operation failed.
    #[error("Failed to copy document '{path}': {message}")]
    DocumentCopy {
        /// The path involved in the failed operation.
        path: String,
        /// A description of the I/O error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_displays_input_and_message() {
        let error = EngineError::InvalidDate {
            input: "2024-13-01".to_string(),
            message: "input is out of range".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date '2024-13-01': input is out of range"
        );
    }

    #[test]
    fn test_payslip_not_found_displays_id() {
        let error = EngineError::PayslipNotFound {
            id: "PAY-2030-01".to_string(),
        };
        assert_eq!(error.to_string(), "Payslip not found: PAY-2030-01");
    }

    #[test]
    fn test_store_not_found_displays_path() {
        let error = EngineError::StoreNotFound {
            path: "/missing/payslips.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Payslip data file not found: /missing/payslips.yaml"
        );
    }

    #[test]
    fn test_store_parse_error_displays_path_and_message() {
        let error = EngineError::StoreParseError {
            path: "/data/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse payslip data file '/data/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_payslip_displays_id_and_message() {
        let error = EngineError::InvalidPayslip {
            id: "PAY-2024-01".to_string(),
            message: "from_date is after to_date".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid payslip 'PAY-2024-01': from_date is after to_date"
        );
    }

    #[test]
    fn test_document_not_found_displays_path() {
        let error = EngineError::DocumentNotFound {
            path: "/bundle/Payslip_Jan_2024.pdf".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Document not found: /bundle/Payslip_Jan_2024.pdf"
        );
    }

    #[test]
    fn test_document_copy_displays_path_and_message() {
        let error = EngineError::DocumentCopy {
            path: "/downloads/Payslip_Jan_2024.pdf".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to copy document '/downloads/Payslip_Jan_2024.pdf': permission denied"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::PayslipNotFound {
                id: "PAY-0000-00".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
