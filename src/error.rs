use thiserror::Error;

/// Application-level errors using thiserror for structured error handling.
///
/// These errors represent domain-specific failures that can occur while
/// talking to the account service or loading configuration. They provide
/// context and can be chained with anyhow.

#[derive(Error, Debug)]
pub enum GatewayError {
    /// The service answered with a non-2xx status. The message, when the
    /// error body carried one, is surfaced to the user verbatim.
    #[error("Service rejected the request: {}", .message.as_deref().unwrap_or("no details provided"))]
    Rejected { message: Option<String> },

    /// Transport-level failure (timeout, DNS, connection refused) or an
    /// unparseable success body. Always mapped to a generic user message.
    #[error("Network error: {0}")]
    Transport(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}

/// Type alias for application Results using anyhow for context chaining
pub type AppResult<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GatewayError::Rejected {
            message: Some("Account not found".to_string()),
        };
        assert_eq!(err.to_string(), "Service rejected the request: Account not found");

        let err = GatewayError::Rejected { message: None };
        assert_eq!(
            err.to_string(),
            "Service rejected the request: no details provided"
        );

        let err = GatewayError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingVar("DELETION_API_BASE_URL");
        assert_eq!(
            err.to_string(),
            "Missing environment variable: DELETION_API_BASE_URL"
        );

        let err = ConfigError::InvalidValue {
            var: "DELETION_TIMEOUT_SECS",
            value: "soon".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for DELETION_TIMEOUT_SECS: soon");
    }
}
