//! OpenAPI 3.x document parsing
//!
//! Internal `#/components/schemas/...` references lower to named `Reference`
//! nodes; they name top-level entries of the schema table, so the generator
//! resolves them by name exactly as it does for Swagger 2.0 documents.
//! External-file references are out of scope.

mod converter;
mod types;

pub use types::*;

use crate::loader;
use swagger_client_generator_common::document::ApiDocument;
use swagger_client_generator_common::Result;

/// Parse raw OpenAPI 3.x text and lower it into the unified graph
pub fn parse_document(raw: &str, location: &str) -> Result<ApiDocument> {
    let spec: OpenApiSpec = loader::deserialize_document(raw, location)?;
    converter::convert(&spec)
}
