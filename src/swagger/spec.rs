//! Swagger schema structs for serde deserialization.
//!
//! A minimal subset of the Swagger 2.0 spec: routes, their methods, and each
//! method's parameter list. Response and definition bodies are carried as
//! opaque JSON because the annotator never looks inside them.

// Allow unused fields that are part of the Swagger spec for completeness.
#![allow(dead_code)]

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Root Swagger schema.
#[derive(Debug, Deserialize)]
pub struct SwaggerSchema {
    pub swagger: Option<String>,
    pub paths: IndexMap<String, MethodMap>,
    #[serde(default)]
    pub definitions: IndexMap<String, serde_json::Value>,
}

/// Methods declared on a single route, keyed by lowercase HTTP method.
pub type MethodMap = IndexMap<String, RouteMethod>;

/// A single operation on a route.
#[derive(Debug, Deserialize)]
pub struct RouteMethod {
    pub parameters: Option<Vec<Parameter>>,
    #[serde(default)]
    pub responses: IndexMap<String, serde_json::Value>,
}

/// A parameter declaration. Swagger 2.0 allows the type shape either inline
/// on the parameter itself or under a nested `schema` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: String,
    #[serde(default)]
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<ParamSchema>,
    #[serde(flatten)]
    pub shape: ParamSchema,
}

/// The type shape of a parameter fragment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParamSchema {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub ref_path: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<ParamSchema>>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

impl SwaggerSchema {
    /// Parse a Swagger schema from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Parameter {
    /// The effective type shape: a nested `schema` wins over the inline
    /// shape.
    pub fn type_shape(&self) -> &ParamSchema {
        self.schema.as_ref().unwrap_or(&self.shape)
    }
}
