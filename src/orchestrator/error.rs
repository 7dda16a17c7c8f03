//! Normalized errors returned by every operation.

use std::error::Error as StdError;
use std::fmt;

use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

use crate::config::ACCESS_KEY_ENV;
use crate::operations::{JsonObject, OperationSpec, ValidationError};
use crate::remote::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    /// No usable API key or base URL.
    #[serde(rename = "configuration_error")]
    Configuration,
    #[serde(rename = "validation_error")]
    Validation,
    /// The remote API answered with a non-success status.
    #[serde(rename = "upstream_api_error")]
    UpstreamApi,
    /// Network failure, timeout or an undecodable response.
    #[serde(rename = "transport_error")]
    Transport,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Configuration => "configuration_error",
            ErrorKind::Validation => "validation_error",
            ErrorKind::UpstreamApi => "upstream_api_error",
            ErrorKind::Transport => "transport_error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an error happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorContext {
    pub operation: String,
    /// Primary argument (url, urls, review_id, keyword or domain).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// `reviewweb::<operation>`
    pub source: String,
}

impl ErrorContext {
    pub fn new(spec: &OperationSpec, args: &JsonObject) -> Self {
        Self {
            operation: spec.name.to_string(),
            target: spec.target(args),
            source: spec.source_tag(),
        }
    }
}

/// Error returned by [`Orchestrator::execute`](super::Orchestrator::execute).
///
/// The underlying cause is kept for logging and never serialized.
#[derive(Error, Diagnostic, Debug, Serialize)]
#[error("{message}")]
#[diagnostic(code(reviewweb::orchestrator::tool_error))]
pub struct ToolError {
    pub kind: ErrorKind,
    /// HTTP-style status: 400, 500, the remote status, 502 or 504.
    pub code: u16,
    pub message: String,
    /// Machine-readable code from the remote error body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_code: Option<String>,
    pub context: ErrorContext,
    #[source]
    #[serde(skip)]
    cause: Option<Box<dyn StdError + Send + Sync>>,
}

impl ToolError {
    fn new(kind: ErrorKind, code: u16, message: impl Into<String>, context: ErrorContext) -> Self {
        Self {
            kind,
            code,
            message: message.into(),
            remote_code: None,
            context,
            cause: None,
        }
    }

    fn with_cause(mut self, cause: impl StdError + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    pub fn validation(spec: &OperationSpec, args: &JsonObject, err: ValidationError) -> Self {
        Self::new(
            ErrorKind::Validation,
            400,
            err.to_string(),
            ErrorContext::new(spec, args),
        )
        .with_cause(err)
    }

    pub fn missing_credential(spec: &OperationSpec, args: &JsonObject) -> Self {
        Self::new(
            ErrorKind::Configuration,
            500,
            format!(
                "No API key available. Set {} or pass api_key.",
                ACCESS_KEY_ENV
            ),
            ErrorContext::new(spec, args),
        )
    }

    pub fn from_client(spec: &OperationSpec, args: &JsonObject, err: ClientError) -> Self {
        let context = ErrorContext::new(spec, args);
        let mut error = match &err {
            ClientError::Upstream {
                status,
                code,
                message,
            } => {
                let mut error = Self::new(ErrorKind::UpstreamApi, *status, message.clone(), context);
                error.remote_code = code.clone();
                error
            }
            ClientError::InvalidBaseUrl { .. } | ClientError::InvalidApiKey => {
                Self::new(ErrorKind::Configuration, 500, err.to_string(), context)
            }
            ClientError::Timeout { .. } => {
                Self::new(ErrorKind::Transport, 504, err.to_string(), context)
            }
            ClientError::ConnectionFailed { .. }
            | ClientError::Request { .. }
            | ClientError::InvalidResponse { .. } => {
                Self::new(ErrorKind::Transport, 502, err.to_string(), context)
            }
        };
        error.cause = Some(Box::new(err));
        error
    }

    /// The remote response could not be rendered back to text.
    pub fn encoding(spec: &OperationSpec, args: &JsonObject, err: serde_json::Error) -> Self {
        Self::new(
            ErrorKind::Transport,
            502,
            format!("Failed to encode the ReviewWeb response: {}", err),
            ErrorContext::new(spec, args),
        )
        .with_cause(err)
    }

    /// Arguments could not be prepared before reaching the orchestrator.
    pub fn invalid_arguments(spec: &OperationSpec, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Validation,
            400,
            message,
            ErrorContext::new(spec, &JsonObject::new()),
        )
    }

    /// Multi-line rendering shown to MCP clients and on the CLI's stderr.
    pub fn to_text(&self) -> String {
        let mut text = format!(
            "Error: {}\nKind: {} ({})",
            self.message, self.kind, self.code
        );
        if let Some(remote_code) = &self.remote_code {
            text.push_str(&format!("\nRemote code: {}", remote_code));
        }
        text.push_str(&format!("\nOperation: {}", self.context.operation));
        if let Some(target) = &self.context.target {
            text.push_str(&format!("\nTarget: {}", target));
        }
        text.push_str(&format!("\nSource: {}", self.context.source));
        text
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
