//! ReviewWeb MCP server binary.
//!
//! Reads configuration from the command line and environment, then serves
//! the tool set over stdio or Streamable HTTP.

use clap::{ArgAction, Parser};
use miette::Result;
use reviewweb::config::ACCESS_KEY_ENV;
use reviewweb::mcp::{self, HttpConfig, Transport};
use reviewweb::{Config, Orchestrator, telemetry};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "reviewweb-mcp")]
#[command(author, version, about = "ReviewWeb.site MCP server", long_about = None)]
struct Cli {
    /// Transport to serve on
    #[arg(long, value_enum, default_value = "stdio")]
    transport: Transport,

    /// Host address to bind to (http transport)
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on (http transport)
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Override the API URL (default: REVIEWWEBSITE_API_URL env or https://reviewweb.site/api/v1)
    #[arg(long)]
    api_url: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.verbose);

    let config = Config::from_env(cli.api_url);
    if !config.has_api_key() {
        warn!(
            "{} is not set; tool calls must pass api_key",
            ACCESS_KEY_ENV
        );
    }
    info!(api_url = config.api_url(), "Starting ReviewWeb MCP server");

    let orchestrator = Orchestrator::new(config);
    match cli.transport {
        Transport::Stdio => mcp::serve_stdio(orchestrator).await?,
        Transport::Http => {
            mcp::serve_http(
                orchestrator,
                HttpConfig {
                    host: cli.host,
                    port: cli.port,
                },
            )
            .await?
        }
    }

    Ok(())
}
