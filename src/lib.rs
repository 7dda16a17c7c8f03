//! ReviewWeb.site adapter.
//!
//! Exposes the ReviewWeb scraping, summarization, review and SEO API as a
//! set of operations reachable from an MCP server, a command-line interface
//! and the [`orchestrator::Orchestrator`] library API.

pub mod cli;
pub mod config;
pub mod mcp;
pub mod operations;
pub mod orchestrator;
pub mod remote;
pub mod telemetry;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::Config;
pub use operations::Operation;
pub use orchestrator::{ErrorKind, Orchestrator, ResultEnvelope, ToolError};
