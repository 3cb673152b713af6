use crate::error::{Error, Result};

/// The default name of this MCP server
pub const SERVER_NAME: &str = "echo-server";

/// Default version reported in the initialize handshake
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

const INSTRUCTIONS: &str = "Echo Server - simple text tools.

TOOLS:
- echo: return `text` unchanged, or uppercased when `upper` is true
- word_count: count whitespace-separated words in `text`

Both tools require `text` to be a string; other values are rejected.";

/// Metadata the server reports to clients. Not behaviorally load-bearing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
    pub instructions: Option<String>,
}

impl ServerConfig {
    pub fn new<N: Into<String>, V: Into<String>>(name: N, version: V) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }

    /// Reject metadata a client could not display
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::configuration("server name must not be empty"));
        }
        if self.version.trim().is_empty() {
            return Err(Error::configuration("server version must not be empty"));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(SERVER_NAME, SERVER_VERSION)
    }
}

/// Create tool-specific errors with proper typing
pub mod tool_errors {
    use crate::error::Error;

    /// Create an invalid argument error for a tool on the named server
    pub fn invalid_argument(server: &str, tool: &str, field: &str, message: &str) -> Error {
        Error::invalid_argument(server, tool, field, message)
    }

    /// Create an unknown tool error
    pub fn unknown_tool(tool: &str) -> Error {
        Error::unknown_tool(tool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.name, "echo-server");
        assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
        assert!(config.instructions.is_some());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let config = ServerConfig::new("  ", "0.1.0");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("server name must not be empty"));
    }

    #[test]
    fn test_invalid_argument_is_scoped_to_server() {
        let err = tool_errors::invalid_argument("custom-echo", "word_count", "text", "boom");
        assert_eq!(err.to_string(), "custom-echo:word_count - boom");
    }
}
