//! SEO insights.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, tool,
    tool_router,
};

use super::ToolArgs;
use crate::mcp::ReviewWebServer;
use crate::operations::Operation;
use crate::operations::params::{
    SeoBacklinksParams, SeoKeywordDifficultyParams, SeoKeywordIdeasParams, SeoTrafficParams,
};

#[tool_router(router = seo_router, vis = "pub(crate)")]
impl ReviewWebServer {
    #[tool(
        description = "Suggest keywords related to a seed keyword.\nResults include search volume and competition; narrow them with `country` and `searchEngine`."
    )]
    async fn seo_keyword_ideas(
        &self,
        params: Parameters<ToolArgs<SeoKeywordIdeasParams>>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.dispatch(Operation::SeoKeywordIdeas, params.0).await)
    }

    #[tool(
        description = "Score how hard it is to rank for a keyword.\nOptionally scoped to a `country`."
    )]
    async fn seo_keyword_difficulty(
        &self,
        params: Parameters<ToolArgs<SeoKeywordDifficultyParams>>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self
            .dispatch(Operation::SeoKeywordDifficulty, params.0)
            .await)
    }

    #[tool(
        description = "Estimate organic search traffic for a domain.\nUse `mode` subdomains to include subdomains or exact for the host alone."
    )]
    async fn seo_traffic(
        &self,
        params: Parameters<ToolArgs<SeoTrafficParams>>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.dispatch(Operation::SeoTraffic, params.0).await)
    }

    #[tool(
        description = "List backlinks pointing at a domain.\nReturns referring pages and their anchors."
    )]
    async fn seo_backlinks(
        &self,
        params: Parameters<ToolArgs<SeoBacklinksParams>>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.dispatch(Operation::SeoBacklinks, params.0).await)
    }
}
