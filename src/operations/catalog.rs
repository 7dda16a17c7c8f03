//! The ReviewWeb endpoint catalog.

use super::params::{LinkType, SummaryFormat, TrafficMode};
use super::schema::Field;
use super::{HttpMethod, Operation, OperationSpec};

use super::schema::FieldType::{Boolean, Choice, Integer, Text, TextList};
use super::schema::Placement::{Body, Credential, Options, Path, Query};

const API_KEY: Field = Field::optional("api_key", Text, Credential);

const URL_IN_BODY: Field = Field::required("url", Text, Body);
const URL_IN_QUERY: Field = Field::required("url", Text, Query);
const URLS: Field = Field::required("urls", TextList, Body);
const REVIEW_ID: Field = Field::required("review_id", Text, Path);

const MODEL: Field = Field::optional("model", Text, Options);
const DELAY_AFTER_LOAD: Field = Field::optional("delayAfterLoad", Integer, Options);
const DEBUG: Field = Field::optional("debug", Boolean, Options);
const INSTRUCTIONS: Field = Field::required("instructions", Text, Options);
const JSON_TEMPLATE: Field = Field::required("jsonTemplate", Text, Options);
const SYSTEM_PROMPT: Field = Field::optional("systemPrompt", Text, Options);
const RECURSIVE: Field = Field::optional("recursive", Boolean, Options);
const FORMAT: Field = Field::optional("format", Choice(SummaryFormat::VALUES), Options);
const MAX_LENGTH: Field = Field::optional("maxLength", Integer, Options);
const MAX_LINKS: Field = Field::optional("maxLinks", Integer, Options);

const COUNTRY: Field = Field::optional("country", Text, Query);

static CONVERT_TO_MARKDOWN: OperationSpec = OperationSpec {
    name: "convert_to_markdown",
    summary: "Convert a web page to Markdown",
    method: HttpMethod::Post,
    path: "convert/markdown",
    fields: &[URL_IN_BODY, MODEL, DELAY_AFTER_LOAD, DEBUG, API_KEY],
    primary: Some("url"),
};

static CONVERT_MULTIPLE_URLS_TO_MARKDOWN: OperationSpec = OperationSpec {
    name: "convert_multiple_urls_to_markdown",
    summary: "Convert several web pages to Markdown",
    method: HttpMethod::Post,
    path: "convert/markdown/urls",
    fields: &[URLS, MODEL, DELAY_AFTER_LOAD, DEBUG, API_KEY],
    primary: Some("urls"),
};

static EXTRACT_DATA: OperationSpec = OperationSpec {
    name: "extract_data",
    summary: "Extract structured JSON from a web page",
    method: HttpMethod::Post,
    path: "extract",
    fields: &[
        URL_IN_BODY,
        INSTRUCTIONS,
        JSON_TEMPLATE,
        SYSTEM_PROMPT,
        MODEL,
        DELAY_AFTER_LOAD,
        RECURSIVE,
        DEBUG,
        API_KEY,
    ],
    primary: Some("url"),
};

static EXTRACT_DATA_MULTIPLE: OperationSpec = OperationSpec {
    name: "extract_data_multiple",
    summary: "Extract structured JSON from several web pages",
    method: HttpMethod::Post,
    path: "extract/urls",
    fields: &[
        URLS,
        INSTRUCTIONS,
        JSON_TEMPLATE,
        SYSTEM_PROMPT,
        MODEL,
        DELAY_AFTER_LOAD,
        RECURSIVE,
        DEBUG,
        API_KEY,
    ],
    primary: Some("urls"),
};

static SCRAPE_URL: OperationSpec = OperationSpec {
    name: "scrape_url",
    summary: "Scrape the raw HTML of a web page",
    method: HttpMethod::Post,
    path: "scrape",
    fields: &[URL_IN_QUERY, DELAY_AFTER_LOAD, DEBUG, API_KEY],
    primary: Some("url"),
};

static EXTRACT_LINKS: OperationSpec = OperationSpec {
    name: "extract_links",
    summary: "List the links found on a web page",
    method: HttpMethod::Post,
    path: "scrape/links-map",
    fields: &[
        URL_IN_QUERY,
        Field::optional("type", Choice(LinkType::VALUES), Options),
        Field::optional("getStatusCode", Boolean, Options),
        Field::optional("autoScrapeInternalLinks", Boolean, Options),
        MAX_LINKS,
        DELAY_AFTER_LOAD,
        DEBUG,
        API_KEY,
    ],
    primary: Some("url"),
};

static SUMMARIZE_URL: OperationSpec = OperationSpec {
    name: "summarize_url",
    summary: "Summarize a web page",
    method: HttpMethod::Post,
    path: "summarize/url",
    fields: &[URL_IN_BODY, MODEL, FORMAT, MAX_LENGTH, DEBUG, API_KEY],
    primary: Some("url"),
};

static SUMMARIZE_WEBSITE: OperationSpec = OperationSpec {
    name: "summarize_website",
    summary: "Summarize a whole website by crawling its pages",
    method: HttpMethod::Post,
    path: "summarize/website",
    fields: &[URL_IN_BODY, MODEL, FORMAT, MAX_LINKS, DEBUG, API_KEY],
    primary: Some("url"),
};

static SUMMARIZE_MULTIPLE_URLS: OperationSpec = OperationSpec {
    name: "summarize_multiple_urls",
    summary: "Summarize several web pages",
    method: HttpMethod::Post,
    path: "summarize/urls",
    fields: &[URLS, MODEL, FORMAT, MAX_LENGTH, DEBUG, API_KEY],
    primary: Some("urls"),
};

static GET_AI_MODELS: OperationSpec = OperationSpec {
    name: "get_ai_models",
    summary: "List the AI models available to the service",
    method: HttpMethod::Get,
    path: "ai/models",
    fields: &[API_KEY],
    primary: None,
};

static CREATE_REVIEW: OperationSpec = OperationSpec {
    name: "create_review",
    summary: "Create an AI review of a website",
    method: HttpMethod::Post,
    path: "review",
    fields: &[
        URL_IN_BODY,
        Field::optional("instructions", Text, Body),
        MODEL,
        Field::optional("textModel", Text, Options),
        Field::optional("visionModel", Text, Options),
        Field::optional("maxExtractedImages", Integer, Options),
        Field::optional("maxExtractedLinks", Integer, Options),
        DELAY_AFTER_LOAD,
        DEBUG,
        API_KEY,
    ],
    primary: Some("url"),
};

static GET_REVIEW: OperationSpec = OperationSpec {
    name: "get_review",
    summary: "Fetch a review by ID",
    method: HttpMethod::Get,
    path: "review/{review_id}",
    fields: &[REVIEW_ID, API_KEY],
    primary: Some("review_id"),
};

static LIST_REVIEWS: OperationSpec = OperationSpec {
    name: "list_reviews",
    summary: "List reviews page by page",
    method: HttpMethod::Get,
    path: "review",
    fields: &[
        Field::optional("page", Integer, Query),
        Field::optional("limit", Integer, Query),
        API_KEY,
    ],
    primary: None,
};

static UPDATE_REVIEW: OperationSpec = OperationSpec {
    name: "update_review",
    summary: "Update a review's URL or instructions",
    method: HttpMethod::Patch,
    path: "review/{review_id}",
    fields: &[
        REVIEW_ID,
        Field::optional("url", Text, Body),
        Field::optional("instructions", Text, Body),
        API_KEY,
    ],
    primary: Some("review_id"),
};

static DELETE_REVIEW: OperationSpec = OperationSpec {
    name: "delete_review",
    summary: "Delete a review by ID",
    method: HttpMethod::Delete,
    path: "review/{review_id}",
    fields: &[REVIEW_ID, API_KEY],
    primary: Some("review_id"),
};

static IS_URL_ALIVE: OperationSpec = OperationSpec {
    name: "is_url_alive",
    summary: "Check whether a URL responds",
    method: HttpMethod::Get,
    path: "url/is-alive",
    fields: &[
        URL_IN_QUERY,
        Field::optional("timeout", Integer, Query).with_default(10_000),
        Field::optional("proxyUrl", Text, Query),
        API_KEY,
    ],
    primary: Some("url"),
};

static GET_URL_AFTER_REDIRECTS: OperationSpec = OperationSpec {
    name: "get_url_after_redirects",
    summary: "Resolve the final URL after following redirects",
    method: HttpMethod::Get,
    path: "url/get-url-after-redirects",
    fields: &[URL_IN_QUERY, API_KEY],
    primary: Some("url"),
};

static SEO_KEYWORD_IDEAS: OperationSpec = OperationSpec {
    name: "seo_keyword_ideas",
    summary: "Suggest related keywords with search metrics",
    method: HttpMethod::Get,
    path: "seo-insights/keyword-ideas",
    fields: &[
        Field::required("keyword", Text, Query),
        COUNTRY,
        Field::optional("searchEngine", Text, Query),
        API_KEY,
    ],
    primary: Some("keyword"),
};

static SEO_KEYWORD_DIFFICULTY: OperationSpec = OperationSpec {
    name: "seo_keyword_difficulty",
    summary: "Score how hard a keyword is to rank for",
    method: HttpMethod::Get,
    path: "seo-insights/keyword-difficulty",
    fields: &[Field::required("keyword", Text, Query), COUNTRY, API_KEY],
    primary: Some("keyword"),
};

static SEO_TRAFFIC: OperationSpec = OperationSpec {
    name: "seo_traffic",
    summary: "Estimate organic traffic for a domain",
    method: HttpMethod::Get,
    path: "seo-insights/traffic",
    fields: &[
        Field::required("domain", Text, Query),
        Field::optional("mode", Choice(TrafficMode::VALUES), Query),
        COUNTRY,
        API_KEY,
    ],
    primary: Some("domain"),
};

static SEO_BACKLINKS: OperationSpec = OperationSpec {
    name: "seo_backlinks",
    summary: "List backlinks pointing at a domain",
    method: HttpMethod::Get,
    path: "seo-insights/backlinks",
    fields: &[Field::required("domain", Text, Query), API_KEY],
    primary: Some("domain"),
};

pub(super) fn spec(operation: Operation) -> &'static OperationSpec {
    match operation {
        Operation::ConvertToMarkdown => &CONVERT_TO_MARKDOWN,
        Operation::ConvertMultipleUrlsToMarkdown => &CONVERT_MULTIPLE_URLS_TO_MARKDOWN,
        Operation::ExtractData => &EXTRACT_DATA,
        Operation::ExtractDataMultiple => &EXTRACT_DATA_MULTIPLE,
        Operation::ScrapeUrl => &SCRAPE_URL,
        Operation::ExtractLinks => &EXTRACT_LINKS,
        Operation::SummarizeUrl => &SUMMARIZE_URL,
        Operation::SummarizeWebsite => &SUMMARIZE_WEBSITE,
        Operation::SummarizeMultipleUrls => &SUMMARIZE_MULTIPLE_URLS,
        Operation::GetAiModels => &GET_AI_MODELS,
        Operation::CreateReview => &CREATE_REVIEW,
        Operation::GetReview => &GET_REVIEW,
        Operation::ListReviews => &LIST_REVIEWS,
        Operation::UpdateReview => &UPDATE_REVIEW,
        Operation::DeleteReview => &DELETE_REVIEW,
        Operation::IsUrlAlive => &IS_URL_ALIVE,
        Operation::GetUrlAfterRedirects => &GET_URL_AFTER_REDIRECTS,
        Operation::SeoKeywordIdeas => &SEO_KEYWORD_IDEAS,
        Operation::SeoKeywordDifficulty => &SEO_KEYWORD_DIFFICULTY,
        Operation::SeoTraffic => &SEO_TRAFFIC,
        Operation::SeoBacklinks => &SEO_BACKLINKS,
    }
}
