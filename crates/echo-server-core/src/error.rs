use thiserror::Error;

/// Structured error types for the echo server
#[derive(Debug, Error)]
pub enum Error {
    /// A tool argument is missing or has the wrong JSON kind
    #[error("{server}:{tool} - {message}")]
    InvalidArgument {
        server: String,
        tool: String,
        field: String,
        message: String,
    },

    /// The requested tool is not registered
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Transport layer errors
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an invalid argument error scoped to a server and tool
    pub fn invalid_argument<S, T, F, M>(server: S, tool: T, field: F, message: M) -> Self
    where
        S: Into<String>,
        T: Into<String>,
        F: Into<String>,
        M: Into<String>,
    {
        Self::InvalidArgument {
            server: server.into(),
            tool: tool.into(),
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an unknown tool error
    pub fn unknown_tool<S: Into<String>>(name: S) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Name of the offending argument, for invalid argument errors
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { field, .. } => Some(field),
            _ => None,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = Error::invalid_argument(
            "echo-server",
            "echo",
            "text",
            "'text' must be a string, got null",
        );
        assert_eq!(
            err.to_string(),
            "echo-server:echo - 'text' must be a string, got null"
        );
        assert_eq!(err.field(), Some("text"));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_transport_error_display() {
        let err = Error::transport("stdio transport failed");
        assert_eq!(err.to_string(), "Transport error: stdio transport failed");
        assert_eq!(err.field(), None);
        assert!(!err.is_invalid_argument());
    }
}
