//! Error types and handling for pagegen-core operations.
//!
//! Errors are categorized by which external surface produced them. Completion
//! errors are logged and swallowed per prompt by the batch path (the failed
//! prompt keeps its response slot); page-store errors always propagate and
//! terminate the run.

use thiserror::Error;

/// The main error type for pagegen-core operations.
///
/// All public functions in pagegen-core return `Result<T, Error>`. The error
/// type includes automatic conversion from common library errors and exposes
/// `category()` / `is_recoverable()` for logging and handling logic.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed (reading standard input, writing outputs).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport failed before a status code was available.
    ///
    /// Connection and timeout errors land here; they are typically
    /// recoverable on retry, though the pipelines never retry.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Input could not be parsed as a docs-gen record.
    ///
    /// Raised for malformed JSON on standard input. Fatal: the pipelines
    /// cannot proceed without a record.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization or deserialization of a wire body failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Required configuration is missing or invalid.
    ///
    /// Raised before any I/O when an expected environment variable is unset.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The completion service returned a non-success status.
    ///
    /// Carries the status and response body so the batch path can log both,
    /// matching the per-prompt log-and-continue contract.
    #[error("Completion service error (status {status}): {body}")]
    Completion {
        /// HTTP status code returned by the completion endpoint.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// The page database returned a non-success status.
    ///
    /// Query and create failures both land here and are fatal.
    #[error("Page store error (status {status}): {body}")]
    PageStore {
        /// HTTP status code returned by the page database.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// Generic error for uncategorized failures.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Check if the error might be recoverable through retry logic.
    ///
    /// The pipelines never retry, but callers embedding this crate can use
    /// the hint. Transport-level failures and service-side errors are
    /// considered transient; parse and configuration errors are not.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Network(e) => e.is_timeout() || e.is_connect(),
            Self::Completion { status, .. } | Self::PageStore { status, .. } => *status >= 500,
            Self::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::Interrupted
            ),
            _ => false,
        }
    }

    /// Get the error category as a static string identifier for logging.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Network(_) => "network",
            Self::Parse(_) => "parse",
            Self::Serialization(_) => "serialization",
            Self::Config(_) => "config",
            Self::Completion { .. } => "completion",
            Self::PageStore { .. } => "page_store",
            Self::Other(_) => "other",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display_formatting() {
        let errors = vec![
            Error::Parse("invalid syntax".to_string()),
            Error::Serialization("bad payload".to_string()),
            Error::Config("OPENAI_KEY not set".to_string()),
            Error::Other("unknown error".to_string()),
        ];

        for error in errors {
            let error_string = error.to_string();
            assert!(!error_string.is_empty());
            match error {
                Error::Parse(msg) => {
                    assert!(error_string.contains("Parse error"));
                    assert!(error_string.contains(&msg));
                },
                Error::Serialization(msg) => {
                    assert!(error_string.contains("Serialization error"));
                    assert!(error_string.contains(&msg));
                },
                Error::Config(msg) => {
                    assert!(error_string.contains("Configuration error"));
                    assert!(error_string.contains(&msg));
                },
                Error::Other(msg) => {
                    assert_eq!(error_string, msg);
                },
                _ => {},
            }
        }
    }

    #[test]
    fn test_service_error_display_includes_status_and_body() {
        let err = Error::Completion {
            status: 429,
            body: "rate limited".to_string(),
        };
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("rate limited"));

        let err = Error::PageStore {
            status: 400,
            body: "validation_error".to_string(),
        };
        assert!(err.to_string().contains("400"));
        assert!(err.to_string().contains("validation_error"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: Error = io_err.into();
        match error {
            Error::Io(inner) => assert!(inner.to_string().contains("file not found")),
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_error_from_serde_json() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = serde_err.into();
        assert_eq!(error.category(), "serialization");
    }

    #[test]
    fn test_error_categories() {
        let cases = vec![
            (Error::Io(io::Error::other("test")), "io"),
            (Error::Parse("test".to_string()), "parse"),
            (Error::Serialization("test".to_string()), "serialization"),
            (Error::Config("test".to_string()), "config"),
            (
                Error::Completion {
                    status: 500,
                    body: "test".to_string(),
                },
                "completion",
            ),
            (
                Error::PageStore {
                    status: 500,
                    body: "test".to_string(),
                },
                "page_store",
            ),
            (Error::Other("test".to_string()), "other"),
        ];

        for (error, expected) in cases {
            assert_eq!(error.category(), expected);
        }
    }

    #[test]
    fn test_error_recoverability() {
        let recoverable = vec![
            Error::Io(io::Error::new(io::ErrorKind::TimedOut, "timeout")),
            Error::Io(io::Error::new(io::ErrorKind::Interrupted, "interrupted")),
            Error::Completion {
                status: 503,
                body: "overloaded".to_string(),
            },
            Error::PageStore {
                status: 500,
                body: "internal".to_string(),
            },
        ];
        let permanent = vec![
            Error::Io(io::Error::new(io::ErrorKind::NotFound, "not found")),
            Error::Parse("bad syntax".to_string()),
            Error::Config("missing key".to_string()),
            Error::Completion {
                status: 401,
                body: "unauthorized".to_string(),
            },
            Error::Other("generic".to_string()),
        ];

        for error in recoverable {
            assert!(error.is_recoverable(), "Expected {error:?} recoverable");
        }
        for error in permanent {
            assert!(!error.is_recoverable(), "Expected {error:?} permanent");
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn ok_fn() -> Result<i32> {
            Ok(42)
        }
        fn err_fn() -> Result<i32> {
            Err(Error::Other("test error".to_string()))
        }

        assert_eq!(ok_fn().unwrap(), 42);
        match err_fn() {
            Err(Error::Other(msg)) => assert_eq!(msg, "test error"),
            other => panic!("Expected Other error, got {other:?}"),
        }
    }
}
