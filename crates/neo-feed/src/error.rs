//! Error types for the neo-feed crate.

use std::fmt;
use std::time::Duration;

/// Result type for neo-feed operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching or interpreting feed data.
#[derive(Debug)]
pub enum Error {
    /// HTTP request failed before a response arrived.
    Http {
        /// The URL that failed.
        url: String,
        /// The error message.
        message: String,
    },
    /// No response arrived within the per-request timeout.
    Timeout {
        /// The URL that timed out.
        url: String,
        /// The timeout that elapsed.
        timeout: Duration,
    },
    /// HTTP response had a non-success status code.
    HttpStatus {
        /// The URL that returned the error.
        url: String,
        /// The HTTP status code.
        status: u16,
    },
    /// The response body was not the JSON we expected.
    Json {
        /// Context for where the error occurred.
        context: &'static str,
        /// The error message.
        message: String,
    },
    /// Cache operation failed.
    Cache {
        /// The operation that failed.
        operation: &'static str,
        /// The error message.
        message: String,
    },
    /// A field was present but unusable.
    InvalidData {
        /// Context for where the error occurred.
        context: &'static str,
        /// Description of what was invalid.
        detail: String,
    },
    /// The asteroid parameters were rejected by the impact model.
    Physics(impact_physics::PhysicsError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http { url, message } => {
                write!(f, "http request to {url} failed: {message}")
            }
            Error::Timeout { url, timeout } => {
                write!(f, "http request to {url} timed out after {timeout:?}")
            }
            Error::HttpStatus { url, status } => {
                write!(f, "http request to {url} returned status {status}")
            }
            Error::Json { context, message } => {
                write!(f, "failed to parse {context}: {message}")
            }
            Error::Cache { operation, message } => {
                write!(f, "cache {operation} failed: {message}")
            }
            Error::InvalidData { context, detail } => {
                write!(f, "invalid {context}: {detail}")
            }
            Error::Physics(e) => write!(f, "impact model error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Physics(e) => Some(e),
            _ => None,
        }
    }
}

impl From<impact_physics::PhysicsError> for Error {
    fn from(e: impact_physics::PhysicsError) -> Self {
        Error::Physics(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json {
            context: "json",
            message: e.to_string(),
        }
    }
}
