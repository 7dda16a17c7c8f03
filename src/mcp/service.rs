//! MCP transports: stdio and Streamable HTTP.

use axum::{Json, Router, routing::get};
use clap::ValueEnum;
use miette::Diagnostic;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use serde::Serialize;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument, warn};

use crate::orchestrator::Orchestrator;

use super::server::ReviewWebServer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    /// JSON-RPC over stdin/stdout
    Stdio,
    /// Streamable HTTP under /mcp
    Http,
}

/// HTTP listener settings.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Error, Diagnostic, Debug)]
pub enum ServeError {
    #[error("I/O error: {0}")]
    #[diagnostic(code(reviewweb::mcp::io))]
    Io(#[from] std::io::Error),

    #[error("Failed to start MCP session: {0}")]
    #[diagnostic(
        code(reviewweb::mcp::initialize),
        help("The client closed the connection or sent an invalid initialize request.")
    )]
    Initialize(String),

    #[error("MCP server stopped unexpectedly: {0}")]
    #[diagnostic(code(reviewweb::mcp::runtime))]
    Runtime(String),
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
}

#[instrument]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Create MCP Streamable HTTP service
///
/// Each session gets its own [`ReviewWebServer`]; all of them share the
/// orchestrator.
pub fn create_mcp_service(
    orchestrator: Orchestrator,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<ReviewWebServer> {
    let service_factory = move || -> Result<ReviewWebServer, std::io::Error> {
        Ok(ReviewWebServer::new(orchestrator.clone()))
    };

    let config = StreamableHttpServerConfig {
        stateful_mode: true,
        cancellation_token,
        ..Default::default()
    };

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}

/// Router serving `/health` and the MCP endpoint under `/mcp`.
pub fn router(orchestrator: Orchestrator, cancellation_token: CancellationToken) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest_service("/mcp", create_mcp_service(orchestrator, cancellation_token))
        .layer(TraceLayer::new_for_http())
}

/// Serve MCP over stdin/stdout until the client disconnects.
pub async fn serve_stdio(orchestrator: Orchestrator) -> Result<(), ServeError> {
    info!("Serving MCP over stdio");
    let running = ReviewWebServer::new(orchestrator)
        .serve(stdio())
        .await
        .map_err(|e| ServeError::Initialize(e.to_string()))?;
    running
        .waiting()
        .await
        .map_err(|e| ServeError::Runtime(e.to_string()))?;
    Ok(())
}

/// Serve MCP over Streamable HTTP until Ctrl-C.
pub async fn serve_http(orchestrator: Orchestrator, config: HttpConfig) -> Result<(), ServeError> {
    let cancellation_token = CancellationToken::new();
    let app = router(orchestrator, cancellation_token.clone());

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!(
        "MCP server listening on http://{}/mcp",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cancellation_token))
        .await?;
    info!("MCP server stopped");
    Ok(())
}

async fn shutdown_signal(cancellation_token: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        return cancellation_token.cancelled().await;
    }
    info!("Shutdown requested");
    cancellation_token.cancel();
}

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;
