//! Unified document IR
//!
//! The in-memory structural representation of an API description document,
//! produced by the parser crate's converters and consumed by the generator.
//! Both supported variants (Swagger 2.0, OpenAPI 3.x) lower into this graph,
//! so resolution never needs to know which variant a document came from.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A parsed API description document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiDocument {
    /// Document title from the info block
    pub title: Option<String>,
    /// Default base URL: `host` + `basePath` (Swagger 2) or the first
    /// server URL (OpenAPI 3)
    pub base_url: Option<String>,
    /// Top-level named schema table, in document order
    pub schemas: IndexMap<String, SchemaNode>,
    /// Path entries, in document order
    pub paths: Vec<PathEntry>,
}

/// Operations declared under one path template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathEntry {
    /// Path template with `{placeholder}` variables, e.g. `/pet/{petId}`
    pub template: String,
    /// Declared operations in method order
    pub operations: Vec<(HttpMethod, OperationNode)>,
}

/// HTTP methods recognized on a path item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
        }
    }
}

/// One declared operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationNode {
    /// Operation id from the document, if declared
    pub id: Option<String>,
    /// Declared parameters in document order
    pub parameters: Vec<ParameterNode>,
    /// Declared responses in document order
    pub responses: Vec<ResponseNode>,
}

/// One declared operation parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterNode {
    pub name: String,
    /// Location tag carried by the document (`in`)
    pub location: ParameterLocation,
    /// Declared schema, absent for untyped parameters
    pub schema: Option<SchemaNode>,
}

/// Parameter location tags supported by the binding generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterLocation {
    Path,
    Query,
    Body,
    Form,
    Header,
}

/// One declared response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseNode {
    /// Status code key as declared, e.g. `"200"` or `"default"`
    pub status: String,
    /// Response body schema, if any
    pub schema: Option<SchemaNode>,
}

/// Tagged union over the structural kinds of a schema node.
///
/// The variant is decided once at document-load time. Reference and enum
/// classification take precedence over structural kinds, so a node carrying
/// `$ref` is always a `Reference` and a node carrying `enum` values is
/// always an `Enum`, whatever else it declares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SchemaNode {
    Primitive {
        kind: PrimitiveKind,
        format: Option<String>,
    },
    Array {
        items: Box<SchemaNode>,
        /// `uniqueItems` renders as a set-like container
        unique: bool,
    },
    /// Free-form object (`additionalProperties` or no declared properties).
    /// The declared value schema is kept for display; resolution models only
    /// the container shape.
    Map {
        value: Option<Box<SchemaNode>>,
    },
    Object {
        properties: IndexMap<String, SchemaNode>,
        required: Vec<String>,
    },
    /// Named pointer into the document's top-level schema table
    Reference(String),
    /// Enumerated literal values, stringified at load time
    Enum(Vec<String>),
}

/// Primitive kinds recognized at document-load time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveKind {
    String,
    Boolean,
    Integer,
    Number,
    Date,
    DateTime,
    Uuid,
    /// Declared type matched no known kind; carries the declared tag for
    /// diagnostics
    Unknown(Option<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_as_str() {
        assert_eq!(HttpMethod::Get.as_str(), "get");
        assert_eq!(HttpMethod::Delete.as_str(), "delete");
    }
}
