use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum ClientError {
    #[error("Failed to connect to the ReviewWeb API")]
    #[diagnostic(
        code(reviewweb::remote::connection_failed),
        help("Check network access, or set REVIEWWEBSITE_API_URL to the correct endpoint.")
    )]
    ConnectionFailed {
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to the ReviewWeb API timed out")]
    #[diagnostic(code(reviewweb::remote::timeout))]
    Timeout {
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to the ReviewWeb API failed")]
    #[diagnostic(code(reviewweb::remote::request_failed))]
    Request {
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid response from the ReviewWeb API: {message}")]
    #[diagnostic(
        code(reviewweb::remote::invalid_response),
        help("The server returned a success status with a body that is not JSON.")
    )]
    InvalidResponse { message: String },

    #[error("ReviewWeb API error ({status}): {message}")]
    #[diagnostic(code(reviewweb::remote::api_error))]
    Upstream {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Invalid API base URL `{url}`: {message}")]
    #[diagnostic(
        code(reviewweb::remote::invalid_base_url),
        help("Pass an absolute http(s) URL with --api-url or REVIEWWEBSITE_API_URL.")
    )]
    InvalidBaseUrl { url: String, message: String },

    #[error("API key contains characters that cannot be sent in a header")]
    #[diagnostic(code(reviewweb::remote::invalid_api_key))]
    InvalidApiKey,
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Timeout { source: e }
        } else if e.is_connect() {
            ClientError::ConnectionFailed { source: e }
        } else {
            ClientError::Request { source: e }
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::InvalidResponse {
            message: e.to_string(),
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
