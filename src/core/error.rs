//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/HTTP errors talking to the file server
//! - [`NameError`] - Client-side validation of new directory names
//! - [`ActionError`] - Either of the above, returned by user actions

use std::fmt;

use crate::config::FORBIDDEN_NAME_CHARS;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Request could not be built or sent (offline, CORS, bad URL)
    Network(String),
    /// Non-2xx response with the server's explanation
    Http { status: u16, message: String },
    /// Response body did not match the expected shape
    Decode(String),
}

impl FetchError {
    /// HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Http { status, message } => write!(f, "{}:{}", status, message),
            Self::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// Rejected directory names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// Name is empty or whitespace only
    Empty,
    /// `.` and `..` would escape the current directory
    Reserved(String),
    /// Name contains one of [`FORBIDDEN_NAME_CHARS`]
    IllegalChar(char),
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Name must not be empty"),
            Self::Reserved(name) => write!(f, "'{}' is a reserved name", name),
            Self::IllegalChar(_) => {
                write!(f, "Name should not contain any of {}", FORBIDDEN_NAME_CHARS)
            }
        }
    }
}

impl std::error::Error for NameError {}

/// Error returned by a user-triggered action.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionError {
    Invalid(NameError),
    Fetch(FetchError),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(e) => e.fmt(f),
            Self::Fetch(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for ActionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(e) => Some(e),
            Self::Fetch(e) => Some(e),
        }
    }
}

impl From<NameError> for ActionError {
    fn from(e: NameError) -> Self {
        Self::Invalid(e)
    }
}

impl From<FetchError> for ActionError {
    fn from(e: FetchError) -> Self {
        Self::Fetch(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_matches_alert_format() {
        let err = FetchError::Http {
            status: 403,
            message: "permission denied".to_string(),
        };
        assert_eq!(err.to_string(), "403:permission denied");
        assert_eq!(err.status(), Some(403));
        assert_eq!(FetchError::NoWindow.status(), None);
    }

    #[test]
    fn test_action_error_wraps_both_sides() {
        let invalid: ActionError = NameError::IllegalChar('*').into();
        assert_eq!(
            invalid.to_string(),
            r"Name should not contain any of \/:*<>|"
        );

        let fetch: ActionError = FetchError::Network("offline".to_string()).into();
        assert_eq!(fetch.to_string(), "Network error: offline");
    }
}
