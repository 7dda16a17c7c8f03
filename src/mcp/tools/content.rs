//! Markdown conversion, scraping and link extraction.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, tool,
    tool_router,
};

use super::ToolArgs;
use crate::mcp::ReviewWebServer;
use crate::operations::Operation;
use crate::operations::params::{
    ConvertMultipleUrlsToMarkdownParams, ConvertToMarkdownParams, ExtractLinksParams,
    ScrapeUrlParams,
};

#[tool_router(router = content_router, vis = "pub(crate)")]
impl ReviewWebServer {
    #[tool(
        description = "Convert a web page to clean Markdown using an AI model.\nUse this to read an article or documentation page as text.\nReturns the converted document as JSON."
    )]
    async fn convert_to_markdown(
        &self,
        params: Parameters<ToolArgs<ConvertToMarkdownParams>>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.dispatch(Operation::ConvertToMarkdown, params.0).await)
    }

    #[tool(
        description = "Convert several web pages to Markdown in one request.\nURLs are processed in the order given; duplicates are kept.\nReturns one result per URL."
    )]
    async fn convert_multiple_urls_to_markdown(
        &self,
        params: Parameters<ToolArgs<ConvertMultipleUrlsToMarkdownParams>>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self
            .dispatch(Operation::ConvertMultipleUrlsToMarkdown, params.0)
            .await)
    }

    #[tool(
        description = "Scrape a web page and return its raw HTML.\nUse this when markup matters; prefer convert_to_markdown for reading content."
    )]
    async fn scrape_url(
        &self,
        params: Parameters<ToolArgs<ScrapeUrlParams>>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.dispatch(Operation::ScrapeUrl, params.0).await)
    }

    #[tool(
        description = "List the links found on a web page.\nFilter with `type` (web, image, file, all), probe each link with `getStatusCode`,\nor follow internal links with `autoScrapeInternalLinks`."
    )]
    async fn extract_links(
        &self,
        params: Parameters<ToolArgs<ExtractLinksParams>>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.dispatch(Operation::ExtractLinks, params.0).await)
    }
}

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;
