use crate::text;
use rust_mcp_schema::{
    CallToolResult, CallToolResultContentItem, TextContent, schema_utils::CallToolError,
};
use rust_mcp_sdk::macros::{JsonSchema, mcp_tool};
use serde::{Deserialize, Serialize};

#[mcp_tool(
    name = "word_count",
    description = "Count words separated by whitespace"
)]
#[derive(JsonSchema, Serialize, Deserialize, Debug, Clone)]
pub struct WordCountTool {
    /// Text whose words are counted
    pub text: String,
}

impl WordCountTool {
    pub async fn call(self) -> Result<CallToolResult, CallToolError> {
        let count = text::word_count(&self.text);

        Ok(CallToolResult {
            content: vec![CallToolResultContentItem::TextContent(TextContent::new(
                count.to_string(),
                None,
            ))],
            is_error: Some(false),
            meta: None,
        })
    }
}
