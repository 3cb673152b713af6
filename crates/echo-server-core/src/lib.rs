pub mod config;
pub mod error;
pub mod handler;
pub mod protocol;
pub mod server;
pub mod text;
pub mod tools;
pub mod transports;
pub mod validate;

pub use config::ServerConfig;
pub use error::{Error, Result};
pub use handler::{CoreHandler, create_server_details, self_test};
pub use protocol::*;
pub use server::{run_sse_server, run_stdio_server};
pub use tools::{EchoTool, TextTools, WordCountTool};
pub use transports::{SseHandler, StdioHandler};
