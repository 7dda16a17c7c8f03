use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Response, Url};
use serde_json::Value;
use tracing::{debug, instrument};

use super::error::{ClientError, ClientResult};
use super::request::RemoteRequest;

const API_KEY_HEADER: &str = "X-API-Key";
const UNKNOWN_UPSTREAM_ERROR: &str = "Unknown upstream error";

/// Client for the ReviewWeb REST API.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone, Debug)]
pub struct ReviewWebClient {
    base_url: String,
    client: Client,
}

impl ReviewWebClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        // reqwest is built without a default TLS provider.
        let _ = rustls::crypto::ring::default_provider().install_default();

        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Resolve path segments against the base URL, percent-encoding each one.
    pub fn url_for(&self, segments: &[String]) -> ClientResult<Url> {
        let invalid = |message: String| ClientError::InvalidBaseUrl {
            url: self.base_url.clone(),
            message,
        };

        let mut url = Url::parse(&self.base_url).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| invalid("URL cannot be used as a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Perform exactly one HTTP call and return the decoded body.
    #[instrument(skip_all, fields(method = %request.method, path = %request.path()))]
    pub async fn send(&self, request: &RemoteRequest, api_key: Option<&str>) -> ClientResult<Value> {
        let url = self.url_for(&request.segments)?;

        let mut builder = self
            .client
            .request(request.method.as_reqwest(), url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(key) = api_key {
            let mut value = HeaderValue::from_str(key).map_err(|_| ClientError::InvalidApiKey)?;
            value.set_sensitive(true);
            builder = builder.header(API_KEY_HEADER, value);
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        debug!(status = response.status().as_u16(), "ReviewWeb API responded");
        Self::handle_response(response).await
    }

    /// Handle API response with standardized error handling
    ///
    /// Success bodies are returned as-is (an empty body becomes `null`).
    /// Failures carry the remote `message` and `error` fields when the body
    /// is JSON.
    pub async fn handle_response(response: Response) -> ClientResult<Value> {
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            if text.trim().is_empty() {
                return Ok(Value::Null);
            }
            return Ok(serde_json::from_str(&text)?);
        }

        let body: Option<Value> = serde_json::from_str(&text).ok();
        let field = |name: &str| {
            body.as_ref()
                .and_then(|b| b.get(name))
                .and_then(Value::as_str)
                .filter(|s| !s.trim().is_empty())
                .map(String::from)
        };

        let code = field("error");
        let message = field("message")
            .or_else(|| code.clone())
            .unwrap_or_else(|| UNKNOWN_UPSTREAM_ERROR.to_string());

        Err(ClientError::Upstream {
            status: status.as_u16(),
            code,
            message,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;
