//! MCP server implementation

use rmcp::{
    ServerHandler,
    handler::server::tool::ToolRouter,
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool_handler,
};

use crate::operations::Operation;
use crate::orchestrator::Orchestrator;

use super::tools::ToolArgs;

/// MCP server exposing every ReviewWeb operation as a tool.
///
/// Clones share the orchestrator, so one instance per HTTP session is cheap.
#[derive(Clone)]
pub struct ReviewWebServer {
    orchestrator: Orchestrator,
    tool_router: ToolRouter<Self>,
}

impl ReviewWebServer {
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self {
            orchestrator,
            tool_router: Self::content_router()
                + Self::extraction_router()
                + Self::summary_router()
                + Self::review_router()
                + Self::url_router()
                + Self::seo_router(),
        }
    }

    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    /// Registered tool definitions.
    pub fn tools(&self) -> Vec<rmcp::model::Tool> {
        self.tool_router.list_all()
    }

    /// Run `operation` and render the outcome as a tool result.
    ///
    /// Failures become an error result holding the formatted error, never a
    /// protocol fault.
    pub(crate) async fn dispatch<T>(&self, operation: Operation, args: ToolArgs<T>) -> CallToolResult {
        match self.orchestrator.execute(operation, args.raw()).await {
            Ok(envelope) => CallToolResult::success(vec![Content::text(envelope.content)]),
            Err(err) => CallToolResult::error(vec![Content::text(err.to_text())]),
        }
    }

    fn instructions() -> String {
        let mut text = String::from(
            "ReviewWeb MCP server: scrape, convert, summarize and review websites, \
             and query SEO metrics through the ReviewWeb.site API.\n\n\
             Every tool accepts an optional api_key overriding the server's configured key.\n\n\
             Available tools:\n",
        );
        for operation in Operation::ALL {
            let spec = operation.spec();
            text.push_str(&format!("- {}: {}\n", spec.name, spec.summary));
        }
        text
    }
}

#[tool_handler]
impl ServerHandler for ReviewWebServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(Self::instructions()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
#[path = "server_test.rs"]
mod server_test;
