use crate::config::ServerConfig;
use crate::error::Error;
use crate::handler::{CoreHandler, create_server_details};
use async_trait::async_trait;
use rust_mcp_schema::{
    CallToolRequest, CallToolResult, ListToolsRequest, ListToolsResult, RpcError,
    schema_utils::CallToolError,
};
use rust_mcp_sdk::{
    McpServer, StdioTransport, TransportOptions,
    mcp_server::{ServerHandler, server_runtime},
};
use tracing::{debug, error, info, instrument};

/// Stdio transport handler that wraps the core handler
pub struct StdioHandler {
    core: CoreHandler,
}

impl StdioHandler {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            core: CoreHandler::with_config(config),
        }
    }
}

#[async_trait]
impl ServerHandler for StdioHandler {
    /// Handles requests to list available tools
    #[instrument(level = "debug", skip(self, request, _runtime))]
    async fn handle_list_tools_request(
        &self,
        request: ListToolsRequest,
        _runtime: &dyn McpServer,
    ) -> std::result::Result<ListToolsResult, RpcError> {
        debug!("Stdio transport: handling list_tools request");
        self.core.list_tools(request).await
    }

    /// Handles requests to call a specific tool
    #[instrument(
        level = "debug",
        skip(self, request, _runtime),
        fields(tool_name = %request.params.name)
    )]
    async fn handle_call_tool_request(
        &self,
        request: CallToolRequest,
        _runtime: &dyn McpServer,
    ) -> std::result::Result<CallToolResult, CallToolError> {
        debug!("Stdio transport: handling call_tool request");
        self.core.call_tool(request).await
    }
}

impl Default for StdioHandler {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}

/// Run the MCP server with stdio transport
#[instrument(level = "info", skip(config), fields(name = %config.name, version = %config.version))]
pub async fn run_stdio_server(config: ServerConfig) -> anyhow::Result<()> {
    config.validate()?;

    info!("Initializing stdio transport handler");
    let server_details = create_server_details(&config);
    let handler = StdioHandler::new(config);

    let transport = StdioTransport::new(TransportOptions::default()).map_err(|e| {
        Error::transport(format!("Failed to create stdio transport: {}", e))
    })?;

    let server = server_runtime::create_server(server_details, transport, handler);

    info!("Starting stdio server");
    server.start().await.map_err(|e| {
        error!(error = %e, "Stdio server startup failed");
        Error::transport(format!("Server error: {}", e))
    })?;

    info!("Stdio server stopped");
    Ok(())
}
