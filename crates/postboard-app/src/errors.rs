//! Categorized application errors
//!
//! Provides structured error types that enable:
//! - Categorized error handling (network vs input vs remote operation)
//! - Recovery hints in the web notice banner and CLI output

use std::fmt;
use thiserror::Error;

// ============================================================================
// Error Categories
// ============================================================================

/// High-level error categories for frontend error handling.
///
/// Frontends (web, cli) use these to pick the hint shown and the exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// User input validation errors (correctable by user)
    Input,
    /// Configuration errors (correctable by modifying settings)
    Config,
    /// Network connectivity errors (often transient)
    Network,
    /// General operation failures (catch-all)
    Operation,
}

impl ErrorCategory {
    /// Check if this error category is user-correctable.
    #[must_use]
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Self::Input | Self::Config)
    }

    /// Get a short label for this category.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Config => "Config",
            Self::Network => "Network",
            Self::Operation => "Operation",
        }
    }

    /// Get a hint for the user on how to resolve this category of error.
    #[must_use]
    pub fn resolution_hint(&self) -> &'static str {
        match self {
            Self::Input => "Check your input and try again",
            Self::Config => "Review your configuration settings",
            Self::Network => "Check your network connection and retry",
            Self::Operation => "The server rejected the request; reload and retry",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// AppError
// ============================================================================

/// Unified error type for client operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http {
        /// Status code returned by the server
        status: u16,
        /// Status text or body excerpt
        message: String,
    },

    /// The GraphQL response carried one or more errors.
    #[error("{}", .messages.join("; "))]
    Graphql {
        /// Operation that failed
        operation: &'static str,
        /// Error messages in server order
        messages: Vec<String>,
    },

    /// The response body could not be decoded.
    #[error("Malformed response: {0}")]
    Decode(String),

    /// The GraphQL response had neither data nor errors.
    #[error("Empty response for {operation}")]
    EmptyResponse {
        /// Operation that returned nothing
        operation: &'static str,
    },

    /// Invalid user input, rejected before any request was sent.
    #[error("Invalid input: {0}")]
    Input(String),

    /// Location or history access failed.
    #[error("Navigation error: {0}")]
    Navigation(String),

    /// Invalid or unreadable configuration.
    #[error("Config error: {0}")]
    Config(String),

    /// The remote operation reported failure without an error message.
    #[error("Operation failed: {0}")]
    Operation(String),
}

impl AppError {
    /// Category used by frontends to pick presentation.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Network(_) => ErrorCategory::Network,
            Self::Http { status, .. } if *status >= 500 => ErrorCategory::Network,
            Self::Input(_) => ErrorCategory::Input,
            Self::Config(_) => ErrorCategory::Config,
            Self::Http { .. }
            | Self::Graphql { .. }
            | Self::Decode(_)
            | Self::EmptyResponse { .. }
            | Self::Navigation(_)
            | Self::Operation(_) => ErrorCategory::Operation,
        }
    }

    /// Message with the category prefix and its resolution hint, as shown
    /// in the notice banner and on the terminal.
    #[must_use]
    pub fn describe(&self) -> String {
        let category = self.category();
        format!("[{category}] {self}. {}", category.resolution_hint())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type for client operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graphql_error_joins_messages() {
        let err = AppError::Graphql {
            operation: "GetData",
            messages: vec!["no user found".into(), "second".into()],
        };
        assert_eq!(err.to_string(), "no user found; second");
        assert_eq!(err.category(), ErrorCategory::Operation);
    }

    #[test]
    fn server_errors_count_as_network() {
        let err = AppError::Http {
            status: 502,
            message: "Bad Gateway".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert!(err.describe().ends_with("Check your network connection and retry"));

        let err = AppError::Http {
            status: 400,
            message: "Bad Request".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Operation);
    }

    #[test]
    fn input_is_user_correctable() {
        let err = AppError::Input("title is required".into());
        assert!(err.category().is_user_correctable());
        assert_eq!(
            err.describe(),
            "[Input] Invalid input: title is required. Check your input and try again"
        );
    }
}
