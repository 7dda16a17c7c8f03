//! Operation table.
//!
//! Every remote capability is described once, as an [`OperationSpec`]:
//! HTTP method, path template and the parameter descriptors that say how
//! each argument is validated and where it is placed in the request. The
//! client, the orchestrator and both front ends are driven from this table.

mod catalog;
pub mod params;
pub mod schema;

use std::fmt;

pub use schema::{
    Field, FieldType, JsonObject, ParamValue, Placement, Problem, ValidatedArgs, ValidationError,
    Violation,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }

    /// Whether requests with this method carry a JSON body.
    pub fn sends_body(self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_reqwest().as_str())
    }
}

/// Static description of one remote operation.
#[derive(Debug)]
pub struct OperationSpec {
    /// Tool name, e.g. `convert_to_markdown`.
    pub name: &'static str,
    /// One-line human description.
    pub summary: &'static str,
    pub method: HttpMethod,
    /// Path below the API base URL; `{field}` segments are interpolated.
    pub path: &'static str,
    pub fields: &'static [Field],
    /// Field reported in error context (url, urls, review_id, keyword, domain).
    pub primary: Option<&'static str>,
}

impl OperationSpec {
    pub fn validate(&self, args: &JsonObject) -> Result<ValidatedArgs, ValidationError> {
        schema::validate(self.name, self.fields, args)
    }

    pub fn field(&self, name: &str) -> Option<&'static Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Stable tag identifying this operation in logs and error metadata.
    pub fn source_tag(&self) -> String {
        format!("reviewweb::{}", self.name)
    }

    /// Primary argument rendered for diagnostics.
    ///
    /// Reads the raw arguments so it is available even when validation failed.
    pub fn target(&self, args: &JsonObject) -> Option<String> {
        match args.get(self.primary?)? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Array(items) => {
                let items: Vec<&str> = items.iter().filter_map(|v| v.as_str()).collect();
                (!items.is_empty()).then(|| items.join(", "))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ConvertToMarkdown,
    ConvertMultipleUrlsToMarkdown,
    ExtractData,
    ExtractDataMultiple,
    ScrapeUrl,
    ExtractLinks,
    SummarizeUrl,
    SummarizeWebsite,
    SummarizeMultipleUrls,
    GetAiModels,
    CreateReview,
    GetReview,
    ListReviews,
    UpdateReview,
    DeleteReview,
    IsUrlAlive,
    GetUrlAfterRedirects,
    SeoKeywordIdeas,
    SeoKeywordDifficulty,
    SeoTraffic,
    SeoBacklinks,
}

impl Operation {
    pub const ALL: [Operation; 21] = [
        Operation::ConvertToMarkdown,
        Operation::ConvertMultipleUrlsToMarkdown,
        Operation::ExtractData,
        Operation::ExtractDataMultiple,
        Operation::ScrapeUrl,
        Operation::ExtractLinks,
        Operation::SummarizeUrl,
        Operation::SummarizeWebsite,
        Operation::SummarizeMultipleUrls,
        Operation::GetAiModels,
        Operation::CreateReview,
        Operation::GetReview,
        Operation::ListReviews,
        Operation::UpdateReview,
        Operation::DeleteReview,
        Operation::IsUrlAlive,
        Operation::GetUrlAfterRedirects,
        Operation::SeoKeywordIdeas,
        Operation::SeoKeywordDifficulty,
        Operation::SeoTraffic,
        Operation::SeoBacklinks,
    ];

    pub fn spec(self) -> &'static OperationSpec {
        catalog::spec(self)
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;
