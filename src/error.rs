//! Error types and handling.

use thiserror::Error;

/// Failure talking to the employee backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// HTTP request failed (network, TLS, timeout, malformed body)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with `success: false` or a non-2xx status
    #[error("Request rejected: {}", message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    /// Backend reported success but sent no payload
    #[error("Response contained no data")]
    MissingData,
}

/// Result type alias for StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    /// Create a rejection carrying the backend's message.
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected {
            message: Some(msg.into()),
        }
    }

    /// Message the backend attached to the failure, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message } => message.as_deref(),
            _ => None,
        }
    }

    /// Text to show the user: the backend's own message when present, else `fallback`.
    ///
    /// Transport failures append the underlying error to the fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { message: Some(message) } if !message.trim().is_empty() => message.clone(),
            Self::Http(e) => format!("{fallback}: {e}"),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_is_forwarded() {
        let err = StoreError::rejected("Employee already exists");
        assert_eq!(err.server_message(), Some("Employee already exists"));
        assert_eq!(err.user_message("Failed to add employee"), "Employee already exists");
    }

    #[test]
    fn test_fallback_without_message() {
        let err = StoreError::Rejected { message: None };
        assert_eq!(err.user_message("Failed to add employee"), "Failed to add employee");

        let blank = StoreError::rejected("   ");
        assert_eq!(blank.user_message("Failed to update employee"), "Failed to update employee");

        assert_eq!(StoreError::MissingData.user_message("Failed"), "Failed");
        assert_eq!(StoreError::MissingData.server_message(), None);
    }
}
