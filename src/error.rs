//! Error types for request dispatch and validation.
//!
//! Validation failures are not errors at this level: they are collected into
//! the request context and handed to a handler. The types here cover what the
//! dispatcher cannot recover from: unknown actions, bad configuration, and
//! handlers that reject their input.

/// Main error type for dispatching a request through an [`crate::Application`].
#[derive(Debug, thiserror::Error)]
pub enum FormgateError {
    /// No action is registered for the requested path
    #[error("No action found for path '{path}'")]
    NotFound { path: String },

    /// The request method is not accepted by the application
    #[error("Method '{method}' not allowed")]
    MethodNotAllowed { method: String },

    /// A handler refused its arguments
    #[error("Handler '{action}' failed: {source}")]
    Handler {
        action: String,
        #[source]
        source: HandlerError,
    },

    /// The request body could not be decoded
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Controller or application configuration is inconsistent
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised by action handlers.
///
/// A handler that requires a converted value (for example an integer) and
/// receives raw text instead reports [`HandlerError::UnexpectedType`]. This is
/// what happens when validation fails and no error handler is configured.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HandlerError {
    /// A required argument was not supplied
    #[error("Missing argument '{name}'")]
    MissingArgument { name: String },

    /// An argument did not have the expected type
    #[error("Argument '{name}' has invalid type, expected {expected}, got {actual}")]
    UnexpectedType {
        name: String,
        expected: String,
        actual: String,
    },

    /// Handler-specific failure
    #[error("{message}")]
    Custom { message: String },
}

impl HandlerError {
    /// Create a missing argument error.
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingArgument { name: name.into() }
    }

    /// Create a type mismatch error for the given argument.
    pub fn unexpected_type(
        name: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::UnexpectedType {
            name: name.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a custom handler error.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom {
            message: message.into(),
        }
    }
}

/// Configuration errors for controllers and applications.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// An action names an error handler that is not registered
    #[error("Action '{action}' names unknown error handler '{error_handler}'")]
    UnknownErrorHandler {
        action: String,
        error_handler: String,
    },

    /// The same action name was registered twice
    #[error("Action '{0}' registered more than once")]
    DuplicateAction(String),

    /// The default locale is not in the supported set
    #[error("Default locale '{0}' is not among the supported locales")]
    UnsupportedDefaultLocale(String),

    /// A locale tag could not be parsed
    #[error("Unknown locale '{0}'")]
    UnknownLocale(String),

    /// A config document could not be parsed
    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}

/// Result type for dispatch operations.
pub type FormgateResult<T> = Result<T, FormgateError>;

/// Result type for handler invocations.
pub type HandlerResult<T> = Result<T, HandlerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error_display() {
        let error = HandlerError::unexpected_type("a", "integer", "string");
        assert_eq!(
            error.to_string(),
            "Argument 'a' has invalid type, expected integer, got string"
        );
    }

    #[test]
    fn test_handler_error_wraps_into_dispatch_error() {
        let error = FormgateError::Handler {
            action: "validated_int".to_string(),
            source: HandlerError::missing("some_int"),
        };
        assert!(error.to_string().contains("validated_int"));
        assert!(error.to_string().contains("some_int"));
    }

    #[test]
    fn test_config_error_conversion() {
        let error: FormgateError = ConfigError::DuplicateAction("index".to_string()).into();
        assert!(matches!(error, FormgateError::Config(_)));
    }
}
