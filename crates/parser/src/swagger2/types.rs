//! Swagger 2.0 document types
//!
//! Simplified representation focusing on definitions and paths.

use crate::schema::RawSchema;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Swagger 2.0 document root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwaggerSpec {
    /// Swagger version (always `"2.0"`)
    pub swagger: String,

    /// API metadata
    #[serde(default)]
    pub info: Option<Info>,

    /// API host, e.g. `petstore.swagger.io`
    #[serde(default)]
    pub host: Option<String>,

    /// Base path prefixed to every path template
    #[serde(rename = "basePath")]
    #[serde(default)]
    pub base_path: Option<String>,

    /// API paths (endpoints)
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,

    /// Top-level named schema table
    #[serde(default)]
    pub definitions: IndexMap<String, RawSchema>,
}

/// API information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub version: Option<String>,
}

/// Operations declared for one path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(default)]
    pub get: Option<Operation>,

    #[serde(default)]
    pub post: Option<Operation>,

    #[serde(default)]
    pub put: Option<Operation>,

    #[serde(default)]
    pub patch: Option<Operation>,

    #[serde(default)]
    pub delete: Option<Operation>,
}

/// HTTP operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    /// Operation ID (unique identifier)
    #[serde(rename = "operationId")]
    #[serde(default)]
    pub operation_id: Option<String>,

    /// Parameters
    #[serde(default)]
    pub parameters: Vec<Parameter>,

    /// Responses keyed by status code, in document order
    #[serde(default)]
    pub responses: IndexMap<String, Response>,
}

/// Parameter definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name
    pub name: String,

    /// Location: path, query, body, formData, header
    #[serde(rename = "in")]
    pub location: String,

    /// Required flag
    #[serde(default)]
    pub required: bool,

    /// Body parameters carry a schema
    #[serde(default)]
    pub schema: Option<RawSchema>,

    /// Non-body parameters declare their type inline
    #[serde(rename = "type")]
    #[serde(default)]
    pub param_type: Option<String>,

    #[serde(default)]
    pub format: Option<String>,

    #[serde(default)]
    pub items: Option<Box<RawSchema>>,

    #[serde(rename = "enum")]
    #[serde(default)]
    pub enum_values: Vec<serde_json::Value>,
}

/// Response definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub description: Option<String>,

    /// Response body schema
    #[serde(default)]
    pub schema: Option<RawSchema>,
}
