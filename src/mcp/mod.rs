//! MCP front end.
//!
//! One tool per operation, served over stdio or Streamable HTTP.

mod server;
mod service;
pub mod tools;

pub use server::ReviewWebServer;
pub use service::{
    HealthResponse, HttpConfig, ServeError, Transport, create_mcp_service, router, serve_http,
    serve_stdio,
};
