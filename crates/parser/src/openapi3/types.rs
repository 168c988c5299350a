//! OpenAPI 3.x document types
//!
//! Simplified representation focusing on component schemas and paths.

use crate::schema::RawSchema;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// OpenAPI document root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenApiSpec {
    /// OpenAPI version (e.g., `"3.0.1"`)
    pub openapi: String,

    /// API metadata
    #[serde(default)]
    pub info: Option<Info>,

    /// Servers; the first URL becomes the default base URL
    #[serde(default)]
    pub servers: Vec<Server>,

    /// API paths (endpoints)
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,

    /// Reusable components
    #[serde(default)]
    pub components: Option<Components>,
}

/// API information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub version: Option<String>,
}

/// Server information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    /// Server URL
    pub url: String,
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

    /// Request body
    #[serde(rename = "requestBody")]
    #[serde(default)]
    pub request_body: Option<RequestBody>,

    /// Responses keyed by status code, in document order
    #[serde(default)]
    pub responses: IndexMap<String, Response>,
}

/// Parameter definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name
    pub name: String,

    /// Location: query, header, path, cookie
    #[serde(rename = "in")]
    pub location: String,

    /// Required flag
    #[serde(default)]
    pub required: bool,

    /// Schema
    #[serde(default)]
    pub schema: Option<RawSchema>,
}

/// Request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestBody {
    /// Content types
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,

    /// Required flag
    #[serde(default)]
    pub required: bool,
}

/// Response definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub description: Option<String>,

    /// Content types
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

/// Media type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaType {
    /// Schema
    #[serde(default)]
    pub schema: Option<RawSchema>,
}

/// Reusable components
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Components {
    /// Top-level named schema table
    #[serde(default)]
    pub schemas: IndexMap<String, RawSchema>,
}
