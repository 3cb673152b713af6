use anyhow::Result;
use clap::Parser;
use echo_server_core::ServerConfig;
use std::io::IsTerminal;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

mod cli;
use cli::{Cli, Commands, ShowCommands};

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the stdio transport, so logs go to stderr
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("echo_server_core=info,echo_server=info,info"));

    fmt()
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.into_command() {
        Commands::Stdio { name, version } => {
            info!("Starting MCP server with stdio transport");
            echo_server_core::run_stdio_server(ServerConfig::new(name, version)).await
        }
        Commands::Sse { name, version, host, port } => {
            info!(%host, port, "Starting MCP server with SSE transport");
            echo_server_core::run_sse_server(ServerConfig::new(name, version), host, port).await
        }
        Commands::Test => echo_server_core::self_test().await,
        Commands::Show { command } => match command {
            ShowCommands::Tools { name } => {
                for line in tool_names(&name) {
                    println!("{}", line);
                }
                Ok(())
            }
        },
    }
}

fn tool_names(name: &str) -> Vec<String> {
    echo_server_core::TextTools::tools()
        .into_iter()
        .map(|tool| format!("mcp__{}__{}", name, tool.name))
        .collect()
}
