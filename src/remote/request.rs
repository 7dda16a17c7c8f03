use serde_json::{Map, Value};

use crate::operations::{HttpMethod, OperationSpec, Placement, ValidatedArgs};

/// A fully resolved outgoing call, independent of base URL and credential.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteRequest {
    pub method: HttpMethod,
    /// Unencoded path segments below the base URL.
    pub segments: Vec<String>,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl RemoteRequest {
    /// Place validated arguments according to the operation's descriptors.
    ///
    /// Path placeholders always resolve: validation guarantees every path
    /// field is present.
    pub fn build(spec: &OperationSpec, args: &ValidatedArgs) -> Self {
        let segments = spec
            .path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                match segment
                    .strip_prefix('{')
                    .and_then(|s| s.strip_suffix('}'))
                {
                    Some(name) => args.get(name).map(|v| v.to_query()).unwrap_or_default(),
                    None => segment.to_string(),
                }
            })
            .collect();

        let mut query = Vec::new();
        let mut body = Map::new();
        let mut options = Map::new();

        for (field, value) in args.iter() {
            match field.placement {
                Placement::Query => query.push((field.name, value.to_query())),
                Placement::Body => {
                    body.insert(field.name.to_string(), value.to_json());
                }
                Placement::Options => {
                    options.insert(field.name.to_string(), value.to_json());
                }
                Placement::Path | Placement::Credential => {}
            }
        }

        let body = spec.method.sends_body().then(|| {
            if !options.is_empty() {
                body.insert("options".to_string(), Value::Object(options));
            }
            Value::Object(body)
        });

        Self {
            method: spec.method,
            segments,
            query,
            body,
        }
    }

    /// Path below the base URL, for logs.
    pub fn path(&self) -> String {
        self.segments.join("/")
    }
}

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;
