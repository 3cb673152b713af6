// Re-export the rust-mcp-schema types the server works with
pub use rust_mcp_schema::{
    // Core protocol types
    CallToolRequest,
    CallToolRequestParams,
    CallToolResult,
    CallToolResultContentItem,

    // Utility types
    Implementation,
    InitializeResult,
    ListToolsRequest,
    ListToolsResult,

    // Error types
    RpcError,
    // Schema and capability types
    ServerCapabilities,
    ServerCapabilitiesTools,
    TextContent,
    Tool,
    ToolInputSchema,
    // Schema utilities
    schema_utils::CallToolError,
};

use crate::config::ServerConfig;

// Constants
pub const PROTOCOL_VERSION: &str = "2025-03-26";

// Helper function to create server info
pub fn create_server_info(name: &str, version: &str) -> Implementation {
    Implementation {
        name: name.to_string(),
        version: version.to_string(),
    }
}

// Helper function to create server capabilities with tools
pub fn create_server_capabilities() -> ServerCapabilities {
    ServerCapabilities {
        tools: Some(ServerCapabilitiesTools {
            list_changed: Some(false),
        }),
        completions: None,
        experimental: None,
        logging: None,
        prompts: None,
        resources: None,
    }
}

// Helper function to create InitializeResult
pub fn create_initialize_result(config: &ServerConfig) -> InitializeResult {
    InitializeResult {
        protocol_version: PROTOCOL_VERSION.to_string(),
        capabilities: create_server_capabilities(),
        server_info: create_server_info(&config.name, &config.version),
        instructions: config.instructions.clone(),
        meta: None,
    }
}

/// Text of the first content item, if it is text
pub fn first_text(result: &CallToolResult) -> Option<&str> {
    match result.content.first()? {
        CallToolResultContentItem::TextContent(text) => Some(text.text.as_str()),
        _ => None,
    }
}
