//! Review records.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, tool,
    tool_router,
};

use super::ToolArgs;
use crate::mcp::ReviewWebServer;
use crate::operations::Operation;
use crate::operations::params::{
    CreateReviewParams, DeleteReviewParams, GetReviewParams, ListReviewsParams, UpdateReviewParams,
};

#[tool_router(router = review_router, vis = "pub(crate)")]
impl ReviewWebServer {
    #[tool(
        description = "Create an AI review of a website.\nOptional `instructions` steer the reviewer; `textModel` and `visionModel` pick the models\nused for page text and screenshots. Returns the new review record."
    )]
    async fn create_review(
        &self,
        params: Parameters<ToolArgs<CreateReviewParams>>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.dispatch(Operation::CreateReview, params.0).await)
    }

    #[tool(
        description = "Fetch a review by its ID.\nReturns the review record including its status and findings."
    )]
    async fn get_review(
        &self,
        params: Parameters<ToolArgs<GetReviewParams>>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.dispatch(Operation::GetReview, params.0).await)
    }

    #[tool(
        description = "List reviews.\nPage through results with `page` (starting at 1) and `limit`."
    )]
    async fn list_reviews(
        &self,
        params: Parameters<ToolArgs<ListReviewsParams>>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.dispatch(Operation::ListReviews, params.0).await)
    }

    #[tool(
        description = "Update an existing review.\nChange its `url` or `instructions`; omitted fields are left unchanged."
    )]
    async fn update_review(
        &self,
        params: Parameters<ToolArgs<UpdateReviewParams>>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.dispatch(Operation::UpdateReview, params.0).await)
    }

    #[tool(
        description = "Delete a review by its ID.\nThis cannot be undone."
    )]
    async fn delete_review(
        &self,
        params: Parameters<ToolArgs<DeleteReviewParams>>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self.dispatch(Operation::DeleteReview, params.0).await)
    }
}

#[cfg(test)]
#[path = "reviews_test.rs"]
mod reviews_test;
