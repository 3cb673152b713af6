pub mod sse;
pub mod stdio;

pub use sse::{SseHandler, run_sse_server};
pub use stdio::{StdioHandler, run_stdio_server};
