use clap::Subcommand;

use crate::operations::params::*;
use crate::operations::{JsonObject, Operation};
use crate::orchestrator::ToolError;

/// One subcommand per operation; flags mirror the tool parameters.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a web page to Markdown
    ConvertToMarkdown(ConvertToMarkdownParams),
    /// Convert several web pages to Markdown
    ConvertMultipleUrlsToMarkdown(ConvertMultipleUrlsToMarkdownParams),
    /// Extract structured JSON from a web page
    ExtractData(ExtractDataParams),
    /// Extract structured JSON from several web pages
    ExtractDataMultiple(ExtractDataMultipleParams),
    /// Scrape the raw HTML of a web page
    ScrapeUrl(ScrapeUrlParams),
    /// List the links found on a web page
    ExtractLinks(ExtractLinksParams),
    /// Summarize a web page
    SummarizeUrl(SummarizeUrlParams),
    /// Summarize a whole website
    SummarizeWebsite(SummarizeWebsiteParams),
    /// Summarize several web pages
    SummarizeMultipleUrls(SummarizeMultipleUrlsParams),
    /// List available AI models
    GetAiModels(GetAiModelsParams),
    /// Create an AI review of a website
    CreateReview(CreateReviewParams),
    /// Fetch a review by ID
    GetReview(GetReviewParams),
    /// List reviews
    ListReviews(ListReviewsParams),
    /// Update a review
    UpdateReview(UpdateReviewParams),
    /// Delete a review
    DeleteReview(DeleteReviewParams),
    /// Check whether a URL responds
    IsUrlAlive(IsUrlAliveParams),
    /// Resolve the final URL after redirects
    GetUrlAfterRedirects(GetUrlAfterRedirectsParams),
    /// Suggest related keywords
    SeoKeywordIdeas(SeoKeywordIdeasParams),
    /// Score keyword difficulty
    SeoKeywordDifficulty(SeoKeywordDifficultyParams),
    /// Estimate organic traffic for a domain
    SeoTraffic(SeoTrafficParams),
    /// List backlinks for a domain
    SeoBacklinks(SeoBacklinksParams),
}

impl Commands {
    pub fn operation(&self) -> Operation {
        match self {
            Commands::ConvertToMarkdown(_) => Operation::ConvertToMarkdown,
            Commands::ConvertMultipleUrlsToMarkdown(_) => Operation::ConvertMultipleUrlsToMarkdown,
            Commands::ExtractData(_) => Operation::ExtractData,
            Commands::ExtractDataMultiple(_) => Operation::ExtractDataMultiple,
            Commands::ScrapeUrl(_) => Operation::ScrapeUrl,
            Commands::ExtractLinks(_) => Operation::ExtractLinks,
            Commands::SummarizeUrl(_) => Operation::SummarizeUrl,
            Commands::SummarizeWebsite(_) => Operation::SummarizeWebsite,
            Commands::SummarizeMultipleUrls(_) => Operation::SummarizeMultipleUrls,
            Commands::GetAiModels(_) => Operation::GetAiModels,
            Commands::CreateReview(_) => Operation::CreateReview,
            Commands::GetReview(_) => Operation::GetReview,
            Commands::ListReviews(_) => Operation::ListReviews,
            Commands::UpdateReview(_) => Operation::UpdateReview,
            Commands::DeleteReview(_) => Operation::DeleteReview,
            Commands::IsUrlAlive(_) => Operation::IsUrlAlive,
            Commands::GetUrlAfterRedirects(_) => Operation::GetUrlAfterRedirects,
            Commands::SeoKeywordIdeas(_) => Operation::SeoKeywordIdeas,
            Commands::SeoKeywordDifficulty(_) => Operation::SeoKeywordDifficulty,
            Commands::SeoTraffic(_) => Operation::SeoTraffic,
            Commands::SeoBacklinks(_) => Operation::SeoBacklinks,
        }
    }

    /// Operation plus its wire-named argument object.
    pub fn into_call(self) -> Result<(Operation, JsonObject), ToolError> {
        let operation = self.operation();
        let args = match &self {
            Commands::ConvertToMarkdown(p) => to_arguments(p),
            Commands::ConvertMultipleUrlsToMarkdown(p) => to_arguments(p),
            Commands::ExtractData(p) => to_arguments(p),
            Commands::ExtractDataMultiple(p) => to_arguments(p),
            Commands::ScrapeUrl(p) => to_arguments(p),
            Commands::ExtractLinks(p) => to_arguments(p),
            Commands::SummarizeUrl(p) => to_arguments(p),
            Commands::SummarizeWebsite(p) => to_arguments(p),
            Commands::SummarizeMultipleUrls(p) => to_arguments(p),
            Commands::GetAiModels(p) => to_arguments(p),
            Commands::CreateReview(p) => to_arguments(p),
            Commands::GetReview(p) => to_arguments(p),
            Commands::ListReviews(p) => to_arguments(p),
            Commands::UpdateReview(p) => to_arguments(p),
            Commands::DeleteReview(p) => to_arguments(p),
            Commands::IsUrlAlive(p) => to_arguments(p),
            Commands::GetUrlAfterRedirects(p) => to_arguments(p),
            Commands::SeoKeywordIdeas(p) => to_arguments(p),
            Commands::SeoKeywordDifficulty(p) => to_arguments(p),
            Commands::SeoTraffic(p) => to_arguments(p),
            Commands::SeoBacklinks(p) => to_arguments(p),
        }
        .map_err(|e| ToolError::invalid_arguments(operation.spec(), e.to_string()))?;

        Ok((operation, args))
    }
}
