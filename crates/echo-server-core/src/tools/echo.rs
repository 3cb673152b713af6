use crate::text;
use rust_mcp_schema::{
    CallToolResult, CallToolResultContentItem, TextContent, schema_utils::CallToolError,
};
use rust_mcp_sdk::macros::{JsonSchema, mcp_tool};
use serde::{Deserialize, Serialize};

#[mcp_tool(
    name = "echo",
    description = "Echo text back with optional casing tweaks"
)]
#[derive(JsonSchema, Serialize, Deserialize, Debug, Clone)]
pub struct EchoTool {
    /// Text to echo back
    pub text: String,

    /// Convert the text to uppercase (default: false)
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper: Option<bool>,
}

impl EchoTool {
    pub async fn call(self) -> Result<CallToolResult, CallToolError> {
        let output = text::echo(&self.text, self.upper.unwrap_or(false));

        Ok(CallToolResult {
            content: vec![CallToolResultContentItem::TextContent(TextContent::new(
                output, None,
            ))],
            is_error: Some(false),
            meta: None,
        })
    }
}
