//! Tool definitions, grouped by API area.
//!
//! Each group contributes a `ToolRouter` that [`ReviewWebServer`] merges.
//!
//! [`ReviewWebServer`]: super::ReviewWebServer

mod content;
mod extraction;
mod reviews;
mod seo;
mod summarize;
mod urls;

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Deserializer};

use crate::operations::JsonObject;

/// Tool arguments advertised with `T`'s schema but kept as raw JSON.
///
/// Deserialization never fails on field contents; malformed arguments are
/// reported by the operation validator as a tool error result.
pub struct ToolArgs<T> {
    raw: JsonObject,
    _schema: PhantomData<fn() -> T>,
}

impl<T> ToolArgs<T> {
    pub fn new(raw: JsonObject) -> Self {
        Self {
            raw,
            _schema: PhantomData,
        }
    }

    pub fn raw(&self) -> &JsonObject {
        &self.raw
    }
}

impl<T: serde::Serialize> ToolArgs<T> {
    /// Build from typed parameters.
    pub fn from_params(params: &T) -> Result<Self, serde_json::Error> {
        crate::operations::params::to_arguments(params).map(Self::new)
    }
}

impl<T> fmt::Debug for ToolArgs<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolArgs")
            .field("keys", &self.raw.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<'de, T> Deserialize<'de> for ToolArgs<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        JsonObject::deserialize(deserializer).map(Self::new)
    }
}

impl<T: JsonSchema> JsonSchema for ToolArgs<T> {
    fn schema_name() -> Cow<'static, str> {
        T::schema_name()
    }

    fn schema_id() -> Cow<'static, str> {
        T::schema_id()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        T::json_schema(generator)
    }
}
