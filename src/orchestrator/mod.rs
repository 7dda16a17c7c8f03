//! Operation orchestrator.
//!
//! Shared by the MCP server, the CLI and library callers. One generic
//! routine handles every operation: validate, resolve the API key, build the
//! request, call the remote API, and wrap the outcome.

mod error;

use std::error::Error as _;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::config::Config;
use crate::operations::{JsonObject, Operation, OperationSpec};
use crate::remote::{RemoteRequest, ReviewWebClient};

pub use error::{ErrorContext, ErrorKind, ToolError};

/// Successful operation output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultEnvelope {
    /// Remote response as pretty-printed JSON (two-space indent).
    pub content: String,
}

#[derive(Clone, Debug)]
pub struct Orchestrator {
    config: Arc<Config>,
    client: ReviewWebClient,
}

impl Orchestrator {
    pub fn new(config: Config) -> Self {
        let client = ReviewWebClient::new(config.api_url());
        Self {
            config: Arc::new(config),
            client,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one operation against the remote API.
    ///
    /// Every call re-validates its arguments, resolves the key afresh and
    /// issues exactly one HTTP request. No request is made when validation
    /// or key resolution fails.
    #[instrument(skip_all, fields(operation = %operation))]
    pub async fn execute(
        &self,
        operation: Operation,
        args: &JsonObject,
    ) -> Result<ResultEnvelope, ToolError> {
        let spec = operation.spec();
        match self.run(spec, args).await {
            Ok(envelope) => {
                info!("Operation completed");
                Ok(envelope)
            }
            Err(err) => {
                warn!(
                    kind = %err.kind,
                    code = err.code,
                    source = %err.context.source,
                    "Operation failed: {}",
                    err.message
                );
                if let Some(cause) = err.source() {
                    debug!(cause = %cause, "Underlying failure");
                }
                Err(err)
            }
        }
    }

    async fn run(
        &self,
        spec: &'static OperationSpec,
        args: &JsonObject,
    ) -> Result<ResultEnvelope, ToolError> {
        let validated = spec
            .validate(args)
            .map_err(|e| ToolError::validation(spec, args, e))?;

        let api_key = validated
            .credential()
            .or_else(|| self.config.api_key())
            .ok_or_else(|| ToolError::missing_credential(spec, args))?;

        let request = RemoteRequest::build(spec, &validated);
        debug!(method = %request.method, path = %request.path(), "Calling ReviewWeb API");

        let value = self
            .client
            .send(&request, Some(api_key))
            .await
            .map_err(|e| ToolError::from_client(spec, args, e))?;

        let content =
            serde_json::to_string_pretty(&value).map_err(|e| ToolError::encoding(spec, args, e))?;
        Ok(ResultEnvelope { content })
    }
}
