//! Command-line front end.

mod commands;

use std::process::ExitCode;

use clap::{ArgAction, Parser};

use crate::config::Config;
use crate::orchestrator::{Orchestrator, ResultEnvelope, ToolError};
use crate::telemetry;

pub use commands::Commands;

#[derive(Parser, Debug)]
#[command(name = "reviewweb")]
#[command(author, version, about = "ReviewWeb.site command-line client", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Override the API URL (default: REVIEWWEBSITE_API_URL env or https://reviewweb.site/api/v1)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Parse arguments, run one operation and report the outcome.
///
/// Success prints the response to stdout and exits 0; failure prints the
/// formatted error to stderr and exits 1. Usage errors exit 2 from clap.
pub async fn run() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.verbose);

    let orchestrator = Orchestrator::new(Config::from_env(cli.api_url));

    match execute(&orchestrator, cli.command).await {
        Ok(envelope) => {
            println!("{}", envelope.content);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err.to_text());
            ExitCode::FAILURE
        }
    }
}

pub async fn execute(
    orchestrator: &Orchestrator,
    command: Commands,
) -> Result<ResultEnvelope, ToolError> {
    let (operation, args) = command.into_call()?;
    orchestrator.execute(operation, &args).await
}
