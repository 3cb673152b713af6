use clap::{Parser, Subcommand};
use echo_server_core::config::SERVER_NAME;

#[derive(Parser)]
#[command(name = "echo-server")]
#[command(author, version, about = "Echo MCP Server", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The subcommand to run, falling back to stdio with default metadata
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or_else(|| Commands::Stdio {
            name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the MCP server using stdio transport
    Stdio {
        /// Server name
        #[arg(long, default_value = "echo-server")]
        name: String,

        /// Server version
        #[arg(long, default_value = env!("CARGO_PKG_VERSION"))]
        version: String,
    },
    /// Run the MCP server using SSE transport
    Sse {
        /// Server name
        #[arg(long, default_value = "echo-server")]
        name: String,

        /// Server version
        #[arg(long, default_value = env!("CARGO_PKG_VERSION"))]
        version: String,

        /// Address to bind
        #[arg(long, env = "ECHO_SERVER_HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(long, env = "ECHO_SERVER_PORT", default_value_t = 8080)]
        port: u16,
    },
    /// Test the tool handler implementation
    Test,
    /// Show various MCP server components
    Show {
        #[command(subcommand)]
        command: ShowCommands,
    },
}

#[derive(Subcommand)]
pub enum ShowCommands {
    /// Show all available tools with their MCP naming convention
    Tools {
        /// Custom name to replace 'echo-server' in tool names
        #[arg(long, default_value = "echo-server")]
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_sse_defaults() {
        let cli = Cli::try_parse_from(["echo-server", "sse"]).unwrap();
        match cli.into_command() {
            Commands::Sse { name, host, .. } => {
                assert_eq!(name, "echo-server");
                assert!(!host.is_empty());
            }
            _ => panic!("expected sse command"),
        }
    }

    #[test]
    fn test_stdio_overrides() {
        let args = ["echo-server", "stdio", "--name", "shouter", "--version", "2.0.0"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.into_command() {
            Commands::Stdio { name, version } => {
                assert_eq!(name, "shouter");
                assert_eq!(version, "2.0.0");
            }
            _ => panic!("expected stdio command"),
        }
    }

    #[test]
    fn test_show_tools_name() {
        let cli = Cli::try_parse_from(["echo-server", "show", "tools", "--name", "text"]).unwrap();
        assert!(matches!(
            cli.into_command(),
            Commands::Show { command: ShowCommands::Tools { ref name } } if name == "text"
        ));
    }

    #[test]
    fn test_no_subcommand_runs_stdio() {
        let cli = Cli::try_parse_from(["echo-server"]).unwrap();
        assert!(cli.command.is_none());
        match cli.into_command() {
            Commands::Stdio { name, version } => {
                assert_eq!(name, "echo-server");
                assert_eq!(version, env!("CARGO_PKG_VERSION"));
            }
            _ => panic!("expected stdio command"),
        }
    }
}
