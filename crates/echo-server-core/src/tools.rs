mod echo;
mod word_count;

use rust_mcp_sdk::tool_box;

pub use echo::EchoTool;
pub use word_count::WordCountTool;

tool_box!(TextTools, [EchoTool, WordCountTool]);
