//! Swagger 2.0 document parsing
//!
//! References stay late-bound by name: a `#/definitions/...` pointer lowers
//! to a named `Reference` node and resolves when its own top-level entry is
//! processed by the generator.

mod converter;
mod types;

pub use types::*;

use crate::loader;
use swagger_client_generator_common::document::ApiDocument;
use swagger_client_generator_common::Result;

/// Parse raw Swagger 2.0 text and lower it into the unified graph
pub fn parse_document(raw: &str, location: &str) -> Result<ApiDocument> {
    let spec: SwaggerSpec = loader::deserialize_document(raw, location)?;
    converter::convert(&spec)
}
