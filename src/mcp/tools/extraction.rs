//! Structured data extraction.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, tool,
    tool_router,
};

use super::ToolArgs;
use crate::mcp::ReviewWebServer;
use crate::operations::Operation;
use crate::operations::params::{ExtractDataMultipleParams, ExtractDataParams};

#[tool_router(router = extraction_router, vis = "pub(crate)")]
impl ReviewWebServer {
    #[tool(
        description = "Extract structured JSON from a web page.\nDescribe what to extract in `instructions` and the shape of the result in `jsonTemplate`.\nSet `recursive` to include internally linked pages."
    )]
    async fn extract_data(
        &self,
        params: Parameters<ToolArgs<ExtractDataParams>>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.dispatch(Operation::ExtractData, params.0).await)
    }

    #[tool(
        description = "Extract structured JSON from several web pages.\nOne set of `instructions` and one `jsonTemplate` apply to every URL.\nReturns one result per URL."
    )]
    async fn extract_data_multiple(
        &self,
        params: Parameters<ToolArgs<ExtractDataMultipleParams>>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.dispatch(Operation::ExtractDataMultiple, params.0).await)
    }
}
