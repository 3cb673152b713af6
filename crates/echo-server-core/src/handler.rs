use crate::config::ServerConfig;
use crate::error::Error;
use crate::protocol::{create_initialize_result, first_text};
use crate::tools::{EchoTool, TextTools, WordCountTool};
use crate::validate::validate_arguments;
use rust_mcp_schema::{
    CallToolRequest, CallToolRequestParams, CallToolResult, InitializeResult, ListToolsRequest,
    ListToolsResult, RpcError, schema_utils::CallToolError,
};
use tracing::{debug, error, info, instrument, warn};

/// Core MCP server handler with transport-agnostic business logic
pub struct CoreHandler {
    config: ServerConfig,
}

impl CoreHandler {
    /// Create a new handler with default server metadata
    pub fn new() -> Self {
        Self {
            config: ServerConfig::default(),
        }
    }

    /// Create a new handler with custom server metadata
    pub fn with_config(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Handle tool listing requests (transport-agnostic)
    #[instrument(level = "debug", skip(self, _request))]
    pub async fn list_tools(
        &self,
        _request: ListToolsRequest,
    ) -> std::result::Result<ListToolsResult, RpcError> {
        debug!("Handling list_tools request");
        let tools = TextTools::tools();
        info!(tool_count = tools.len(), "Listed available tools");

        Ok(ListToolsResult {
            tools,
            next_cursor: None,
            meta: None,
        })
    }

    /// Handle tool call requests (transport-agnostic)
    #[instrument(level = "debug", skip(self, request), fields(tool_name = %request.params.name))]
    pub async fn call_tool(
        &self,
        request: CallToolRequest,
    ) -> std::result::Result<CallToolResult, CallToolError> {
        self.call_tool_params(request.params).await
    }

    /// Validate, parse and dispatch a tool call
    pub async fn call_tool_params(
        &self,
        params: CallToolRequestParams,
    ) -> std::result::Result<CallToolResult, CallToolError> {
        let name = params.name.clone();
        let tool_name = name.as_str();
        debug!(tool_name, "Validating tool arguments");

        let server = self.config.name.as_str();
        validate_arguments(server, tool_name, params.arguments.as_ref()).map_err(|e| match e {
            Error::UnknownTool(unknown) => {
                warn!(tool_name, "Unknown tool requested");
                CallToolError::unknown_tool(unknown)
            }
            other => {
                warn!(tool_name, error = %other, "Rejected tool arguments");
                CallToolError::new(other)
            }
        })?;

        let tool = TextTools::try_from(params).map_err(|e| {
            error!(tool_name, error = %e, "Failed to parse tool request");
            CallToolError::unknown_tool(format!("Failed to parse tool request: {}", e))
        })?;

        info!(tool_name, "Executing tool");
        let result = match tool {
            TextTools::EchoTool(echo) => echo.call().await,
            TextTools::WordCountTool(word_count) => word_count.call().await,
        };

        match &result {
            Ok(_) => info!(tool_name, "Tool execution completed successfully"),
            Err(e) => error!(tool_name, error = %e, "Tool execution failed"),
        }

        result
    }
}

impl Default for CoreHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates server details with tools capability
pub fn create_server_details(config: &ServerConfig) -> InitializeResult {
    create_initialize_result(config)
}

/// Exercise both tools in-process and report through the log
pub async fn self_test() -> anyhow::Result<()> {
    info!("Testing echo server tools");

    let tools = TextTools::tools();
    info!("list_tools successful: {} tools available", tools.len());
    for tool in &tools {
        info!(
            "  - {}: {}",
            tool.name,
            tool.description.as_deref().unwrap_or("No description")
        );
    }

    let echoed = EchoTool {
        text: "hello".to_string(),
        upper: Some(true),
    }
    .call()
    .await
    .map_err(|e| anyhow::anyhow!("echo tool failed: {}", e))?;
    let echoed = first_text(&echoed).unwrap_or_default();
    if echoed != "HELLO" {
        error!(output = echoed, "echo tool returned unexpected output");
        anyhow::bail!("echo test failed: expected HELLO, got {echoed}");
    }
    info!("echo tool successful: {}", echoed);

    let counted = WordCountTool {
        text: "the quick brown fox".to_string(),
    }
    .call()
    .await
    .map_err(|e| anyhow::anyhow!("word_count tool failed: {}", e))?;
    let counted = first_text(&counted).unwrap_or_default();
    if counted != "4" {
        error!(output = counted, "word_count tool returned unexpected output");
        anyhow::bail!("word_count test failed: expected 4, got {counted}");
    }
    info!("word_count tool successful: {}", counted);

    info!("All tool tests passed");
    Ok(())
}
