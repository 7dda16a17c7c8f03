//! Summaries and model listing.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, tool,
    tool_router,
};

use super::ToolArgs;
use crate::mcp::ReviewWebServer;
use crate::operations::Operation;
use crate::operations::params::{
    GetAiModelsParams, SummarizeMultipleUrlsParams, SummarizeUrlParams, SummarizeWebsiteParams,
};

#[tool_router(router = summary_router, vis = "pub(crate)")]
impl ReviewWebServer {
    #[tool(
        description = "Summarize a single web page.\nChoose `format` bullet or paragraph and cap the size with `maxLength`."
    )]
    async fn summarize_url(
        &self,
        params: Parameters<ToolArgs<SummarizeUrlParams>>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.dispatch(Operation::SummarizeUrl, params.0).await)
    }

    #[tool(
        description = "Summarize a whole website.\nThe service crawls up to `maxLinks` pages starting from `url` and returns one summary."
    )]
    async fn summarize_website(
        &self,
        params: Parameters<ToolArgs<SummarizeWebsiteParams>>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.dispatch(Operation::SummarizeWebsite, params.0).await)
    }

    #[tool(
        description = "Summarize several web pages.\nReturns one summary per URL, in the order given."
    )]
    async fn summarize_multiple_urls(
        &self,
        params: Parameters<ToolArgs<SummarizeMultipleUrlsParams>>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self
            .dispatch(Operation::SummarizeMultipleUrls, params.0)
            .await)
    }

    #[tool(
        description = "List the AI models the service offers.\nUse a returned model name as `model`, `textModel` or `visionModel` in other tools."
    )]
    async fn get_ai_models(
        &self,
        params: Parameters<ToolArgs<GetAiModelsParams>>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.dispatch(Operation::GetAiModels, params.0).await)
    }
}
