//! Typed parameter structs, one per operation.
//!
//! Each struct is the single definition behind both the MCP tool input
//! schema (`JsonSchema`) and the CLI subcommand flags (`clap::Args`).
//! Serialized field names are the wire names used by the remote API.

use clap::{Args, ValueEnum};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::schema::JsonObject;

/// Which links `extract_links` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Web,
    Image,
    File,
    All,
}

impl LinkType {
    pub const VALUES: &'static [&'static str] = &["web", "image", "file", "all"];
}

/// Rendering requested from the summarizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    Bullet,
    Paragraph,
}

impl SummaryFormat {
    pub const VALUES: &'static [&'static str] = &["bullet", "paragraph"];
}

/// Traffic aggregation scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TrafficMode {
    Subdomains,
    Exact,
}

impl TrafficMode {
    pub const VALUES: &'static [&'static str] = &["subdomains", "exact"];
}

/// Serialize typed parameters into the untyped argument object the
/// orchestrator validates.
pub fn to_arguments<T: Serialize>(params: &T) -> Result<JsonObject, serde_json::Error> {
    match serde_json::to_value(params)? {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(serde::ser::Error::custom(format!(
            "expected parameters to serialize to an object, got {}",
            other
        ))),
    }
}

// -- Content conversion and scraping

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Args)]
#[serde(rename_all = "camelCase")]
pub struct ConvertToMarkdownParams {
    /// URL of the page to convert
    #[arg(long)]
    pub url: String,
    /// AI model used for the conversion (remote default when omitted)
    #[arg(long)]
    pub model: Option<String>,
    /// Milliseconds to wait after page load before converting
    #[arg(long)]
    pub delay_after_load: Option<u64>,
    /// Ask the remote service for verbose logging
    #[arg(long)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub debug: bool,
    /// API key overriding REVIEWWEBSITE_ACCESS_KEY for this call
    #[arg(long)]
    #[serde(rename = "api_key")]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Args)]
#[serde(rename_all = "camelCase")]
pub struct ConvertMultipleUrlsToMarkdownParams {
    /// URLs of the pages to convert
    #[arg(long, required = true, num_args = 1..)]
    pub urls: Vec<String>,
    /// AI model used for the conversion (remote default when omitted)
    #[arg(long)]
    pub model: Option<String>,
    /// Milliseconds to wait after page load before converting
    #[arg(long)]
    pub delay_after_load: Option<u64>,
    /// Ask the remote service for verbose logging
    #[arg(long)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub debug: bool,
    /// API key overriding REVIEWWEBSITE_ACCESS_KEY for this call
    #[arg(long)]
    #[serde(rename = "api_key")]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Args)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeUrlParams {
    /// URL of the page to scrape
    #[arg(long)]
    pub url: String,
    /// Milliseconds to wait after page load before scraping
    #[arg(long)]
    pub delay_after_load: Option<u64>,
    /// Ask the remote service for verbose logging
    #[arg(long)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub debug: bool,
    /// API key overriding REVIEWWEBSITE_ACCESS_KEY for this call
    #[arg(long)]
    #[serde(rename = "api_key")]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Args)]
#[serde(rename_all = "camelCase")]
pub struct ExtractLinksParams {
    /// URL of the page whose links are extracted
    #[arg(long)]
    pub url: String,
    /// Kind of links to return: web, image, file or all
    #[arg(long = "type", value_enum)]
    #[serde(rename = "type")]
    pub link_type: Option<LinkType>,
    /// Probe each link and report its HTTP status code
    #[arg(long)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub get_status_code: bool,
    /// Also scrape internal links found on the page
    #[arg(long)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub auto_scrape_internal_links: bool,
    /// Maximum number of links to return
    #[arg(long)]
    pub max_links: Option<u64>,
    /// Milliseconds to wait after page load before extracting
    #[arg(long)]
    pub delay_after_load: Option<u64>,
    /// Ask the remote service for verbose logging
    #[arg(long)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub debug: bool,
    /// API key overriding REVIEWWEBSITE_ACCESS_KEY for this call
    #[arg(long)]
    #[serde(rename = "api_key")]
    pub api_key: Option<String>,
}

// -- Structured extraction

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Args)]
#[serde(rename_all = "camelCase")]
pub struct ExtractDataParams {
    /// URL of the page to extract data from
    #[arg(long)]
    pub url: String,
    /// What to extract, in plain language
    #[arg(long)]
    pub instructions: String,
    /// JSON template describing the shape of the result
    #[arg(long)]
    pub json_template: String,
    /// System prompt for the extraction model
    #[arg(long)]
    pub system_prompt: Option<String>,
    /// AI model used for extraction (remote default when omitted)
    #[arg(long)]
    pub model: Option<String>,
    /// Milliseconds to wait after page load before extracting
    #[arg(long)]
    pub delay_after_load: Option<u64>,
    /// Also extract from internally linked pages
    #[arg(long)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub recursive: bool,
    /// Ask the remote service for verbose logging
    #[arg(long)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub debug: bool,
    /// API key overriding REVIEWWEBSITE_ACCESS_KEY for this call
    #[arg(long)]
    #[serde(rename = "api_key")]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Args)]
#[serde(rename_all = "camelCase")]
pub struct ExtractDataMultipleParams {
    /// URLs of the pages to extract data from
    #[arg(long, required = true, num_args = 1..)]
    pub urls: Vec<String>,
    /// What to extract, in plain language
    #[arg(long)]
    pub instructions: String,
    /// JSON template describing the shape of each result
    #[arg(long)]
    pub json_template: String,
    /// System prompt for the extraction model
    #[arg(long)]
    pub system_prompt: Option<String>,
    /// AI model used for extraction (remote default when omitted)
    #[arg(long)]
    pub model: Option<String>,
    /// Milliseconds to wait after page load before extracting
    #[arg(long)]
    pub delay_after_load: Option<u64>,
    /// Also extract from internally linked pages
    #[arg(long)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub recursive: bool,
    /// Ask the remote service for verbose logging
    #[arg(long)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub debug: bool,
    /// API key overriding REVIEWWEBSITE_ACCESS_KEY for this call
    #[arg(long)]
    #[serde(rename = "api_key")]
    pub api_key: Option<String>,
}

// -- Summaries

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Args)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeUrlParams {
    /// URL of the page to summarize
    #[arg(long)]
    pub url: String,
    /// AI model used for the summary (remote default when omitted)
    #[arg(long)]
    pub model: Option<String>,
    /// Summary rendering: bullet or paragraph
    #[arg(long, value_enum)]
    pub format: Option<SummaryFormat>,
    /// Maximum summary length
    #[arg(long)]
    pub max_length: Option<u64>,
    /// Ask the remote service for verbose logging
    #[arg(long)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub debug: bool,
    /// API key overriding REVIEWWEBSITE_ACCESS_KEY for this call
    #[arg(long)]
    #[serde(rename = "api_key")]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Args)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeWebsiteParams {
    /// Root URL of the website to summarize
    #[arg(long)]
    pub url: String,
    /// AI model used for the summary (remote default when omitted)
    #[arg(long)]
    pub model: Option<String>,
    /// Summary rendering: bullet or paragraph
    #[arg(long, value_enum)]
    pub format: Option<SummaryFormat>,
    /// Maximum number of pages to crawl
    #[arg(long)]
    pub max_links: Option<u64>,
    /// Ask the remote service for verbose logging
    #[arg(long)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub debug: bool,
    /// API key overriding REVIEWWEBSITE_ACCESS_KEY for this call
    #[arg(long)]
    #[serde(rename = "api_key")]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Args)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeMultipleUrlsParams {
    /// URLs of the pages to summarize
    #[arg(long, required = true, num_args = 1..)]
    pub urls: Vec<String>,
    /// AI model used for the summaries (remote default when omitted)
    #[arg(long)]
    pub model: Option<String>,
    /// Summary rendering: bullet or paragraph
    #[arg(long, value_enum)]
    pub format: Option<SummaryFormat>,
    /// Maximum length of each summary
    #[arg(long)]
    pub max_length: Option<u64>,
    /// Ask the remote service for verbose logging
    #[arg(long)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub debug: bool,
    /// API key overriding REVIEWWEBSITE_ACCESS_KEY for this call
    #[arg(long)]
    #[serde(rename = "api_key")]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, Args)]
pub struct GetAiModelsParams {
    /// API key overriding REVIEWWEBSITE_ACCESS_KEY for this call
    #[arg(long)]
    pub api_key: Option<String>,
}

// -- Reviews

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Args)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewParams {
    /// URL of the website to review
    #[arg(long)]
    pub url: String,
    /// Custom instructions for the reviewer
    #[arg(long)]
    pub instructions: Option<String>,
    /// AI model used for the review (remote default when omitted)
    #[arg(long)]
    pub model: Option<String>,
    /// Model used for text analysis
    #[arg(long)]
    pub text_model: Option<String>,
    /// Model used for screenshot and image analysis
    #[arg(long)]
    pub vision_model: Option<String>,
    /// Maximum number of images to analyse
    #[arg(long)]
    pub max_extracted_images: Option<u64>,
    /// Maximum number of links to analyse
    #[arg(long)]
    pub max_extracted_links: Option<u64>,
    /// Milliseconds to wait after page load before reviewing
    #[arg(long)]
    pub delay_after_load: Option<u64>,
    /// Ask the remote service for verbose logging
    #[arg(long)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub debug: bool,
    /// API key overriding REVIEWWEBSITE_ACCESS_KEY for this call
    #[arg(long)]
    #[serde(rename = "api_key")]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Args)]
pub struct GetReviewParams {
    /// Review ID
    #[arg(long)]
    pub review_id: String,
    /// API key overriding REVIEWWEBSITE_ACCESS_KEY for this call
    #[arg(long)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, Args)]
pub struct ListReviewsParams {
    /// Page number, starting at 1
    #[arg(long)]
    pub page: Option<u64>,
    /// Reviews per page
    #[arg(long)]
    pub limit: Option<u64>,
    /// API key overriding REVIEWWEBSITE_ACCESS_KEY for this call
    #[arg(long)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Args)]
pub struct UpdateReviewParams {
    /// Review ID to update
    #[arg(long)]
    pub review_id: String,
    /// New URL for the review
    #[arg(long)]
    pub url: Option<String>,
    /// New reviewer instructions
    #[arg(long)]
    pub instructions: Option<String>,
    /// API key overriding REVIEWWEBSITE_ACCESS_KEY for this call
    #[arg(long)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Args)]
pub struct DeleteReviewParams {
    /// Review ID to delete
    #[arg(long)]
    pub review_id: String,
    /// API key overriding REVIEWWEBSITE_ACCESS_KEY for this call
    #[arg(long)]
    pub api_key: Option<String>,
}

// -- URL utilities

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Args)]
#[serde(rename_all = "camelCase")]
pub struct IsUrlAliveParams {
    /// URL to check
    #[arg(long)]
    pub url: String,
    /// Remote-side timeout in milliseconds (default: 10000)
    #[arg(long)]
    pub timeout: Option<u64>,
    /// Proxy the remote check is routed through
    #[arg(long)]
    pub proxy_url: Option<String>,
    /// API key overriding REVIEWWEBSITE_ACCESS_KEY for this call
    #[arg(long)]
    #[serde(rename = "api_key")]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Args)]
pub struct GetUrlAfterRedirectsParams {
    /// URL whose redirect chain is followed
    #[arg(long)]
    pub url: String,
    /// API key overriding REVIEWWEBSITE_ACCESS_KEY for this call
    #[arg(long)]
    pub api_key: Option<String>,
}

// -- SEO insights

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Args)]
#[serde(rename_all = "camelCase")]
pub struct SeoKeywordIdeasParams {
    /// Seed keyword
    #[arg(long)]
    pub keyword: String,
    /// Two-letter country code, e.g. us
    #[arg(long)]
    pub country: Option<String>,
    /// Search engine, e.g. Google
    #[arg(long)]
    pub search_engine: Option<String>,
    /// API key overriding REVIEWWEBSITE_ACCESS_KEY for this call
    #[arg(long)]
    #[serde(rename = "api_key")]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Args)]
pub struct SeoKeywordDifficultyParams {
    /// Keyword to score
    #[arg(long)]
    pub keyword: String,
    /// Two-letter country code, e.g. us
    #[arg(long)]
    pub country: Option<String>,
    /// API key overriding REVIEWWEBSITE_ACCESS_KEY for this call
    #[arg(long)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Args)]
pub struct SeoTrafficParams {
    /// Domain or URL to analyse
    #[arg(long)]
    pub domain: String,
    /// Aggregate over subdomains or the exact host
    #[arg(long, value_enum)]
    pub mode: Option<TrafficMode>,
    /// Two-letter country code, e.g. us
    #[arg(long)]
    pub country: Option<String>,
    /// API key overriding REVIEWWEBSITE_ACCESS_KEY for this call
    #[arg(long)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Args)]
pub struct SeoBacklinksParams {
    /// Domain whose backlinks are listed
    #[arg(long)]
    pub domain: String,
    /// API key overriding REVIEWWEBSITE_ACCESS_KEY for this call
    #[arg(long)]
    pub api_key: Option<String>,
}
