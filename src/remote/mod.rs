//! HTTP client for the ReviewWeb REST API.

mod client;
mod error;
mod request;

pub use client::ReviewWebClient;
pub use error::{ClientError, ClientResult};
pub use request::RemoteRequest;
