use crate::config::ServerConfig;
use crate::error::Error;
use crate::handler::{CoreHandler, create_server_details};
use async_trait::async_trait;
use rust_mcp_schema::{
    CallToolRequest, CallToolResult, ListToolsRequest, ListToolsResult, RpcError,
    schema_utils::CallToolError,
};
use rust_mcp_sdk::{
    McpServer,
    mcp_server::{HyperServerOptions, ServerHandler, hyper_server},
};
use tracing::{debug, error, info, instrument};

/// SSE transport handler that wraps the core handler
pub struct SseHandler {
    core: CoreHandler,
}

impl SseHandler {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            core: CoreHandler::with_config(config),
        }
    }
}

#[async_trait]
impl ServerHandler for SseHandler {
    /// Handle tool listing requests for SSE transport
    #[instrument(level = "debug", skip(self, request, _runtime))]
    async fn handle_list_tools_request(
        &self,
        request: ListToolsRequest,
        _runtime: &dyn McpServer,
    ) -> std::result::Result<ListToolsResult, RpcError> {
        debug!("SSE transport: handling list_tools request");
        self.core.list_tools(request).await
    }

    /// Handle tool call requests for SSE transport
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
        debug!("SSE transport: handling call_tool request");
        self.core.call_tool(request).await
    }
}

impl Default for SseHandler {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}

/// Run the MCP server with SSE transport
#[instrument(level = "info", skip(config), fields(name = %config.name))]
pub async fn run_sse_server(config: ServerConfig, host: String, port: u16) -> anyhow::Result<()> {
    config.validate()?;

    info!("Initializing SSE transport handler");
    let server_details = create_server_details(&config);
    let handler = SseHandler::new(config);

    let server_options = HyperServerOptions {
        host: host.clone(),
        port,
        ..Default::default()
    };

    let server = hyper_server::create_server(server_details, handler, server_options);

    info!(%host, port, "SSE transport endpoints:");
    info!("  GET  http://{}:{}/sse     - SSE stream (server → client)", host, port);
    info!("  POST http://{}:{}/message - HTTP messages (client → server)", host, port);

    info!("Starting SSE server");
    server.start().await.map_err(|e| {
        error!(error = %e, "SSE server startup failed");
        Error::transport(format!("Server error: {}", e))
    })?;

    info!("SSE server stopped");
    Ok(())
}
