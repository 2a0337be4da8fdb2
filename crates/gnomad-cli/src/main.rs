use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gnomad_client::{ClientConfig, HttpGraphQlClient, DEFAULT_ENDPOINT};
use gnomad_mcp::{McpHandler, ToolRegistry};

mod call_cmd;
mod stdio_cmd;

#[derive(Parser)]
#[command(name = "gnomad", about = "gnomAD MCP server and query CLI")]
struct Cli {
    /// gnomAD GraphQL endpoint
    #[arg(long, env = "GNOMAD_API_URL", default_value = DEFAULT_ENDPOINT)]
    api_url: String,

    /// Abort a gnomAD request after this many seconds
    #[arg(long, env = "GNOMAD_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve MCP over stdin/stdout (newline-delimited JSON-RPC)
    Stdio,

    /// Print the tool catalog as JSON
    ListTools,

    /// Run a single tool and print its output
    Call {
        /// Tool name, e.g. `get_variant`
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout is reserved for protocol frames in stdio mode.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let handler = || -> anyhow::Result<McpHandler> {
        let client = HttpGraphQlClient::new(ClientConfig {
            endpoint: cli.api_url.clone(),
            timeout: cli.timeout_secs.map(Duration::from_secs),
        })?;
        Ok(McpHandler::new(Arc::new(client)))
    };

    match &cli.command {
        Commands::Stdio => {
            stdio_cmd::run(&handler()?).await?;
        }
        Commands::ListTools => {
            println!("{}", serde_json::to_string_pretty(&ToolRegistry::definitions())?);
        }
        Commands::Call { tool, args } => {
            call_cmd::run(&handler()?, tool, args).await?;
        }
    }

    Ok(())
}
