//! URL liveness and redirect resolution.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, tool,
    tool_router,
};

use super::ToolArgs;
use crate::mcp::ReviewWebServer;
use crate::operations::Operation;
use crate::operations::params::{GetUrlAfterRedirectsParams, IsUrlAliveParams};

#[tool_router(router = url_router, vis = "pub(crate)")]
impl ReviewWebServer {
    #[tool(
        description = "Check whether a URL responds.\nThe check runs remotely with `timeout` milliseconds (default 10000),\noptionally routed through `proxyUrl`."
    )]
    async fn is_url_alive(
        &self,
        params: Parameters<ToolArgs<IsUrlAliveParams>>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.dispatch(Operation::IsUrlAlive, params.0).await)
    }

    #[tool(
        description = "Follow a URL's redirect chain.\nReturns the final URL; useful for short links and tracking redirects."
    )]
    async fn get_url_after_redirects(
        &self,
        params: Parameters<ToolArgs<GetUrlAfterRedirectsParams>>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self
            .dispatch(Operation::GetUrlAfterRedirects, params.0)
            .await)
    }
}

#[cfg(test)]
#[path = "urls_test.rs"]
mod urls_test;
