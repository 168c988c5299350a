//! Document loading for Swagger 2.0 and OpenAPI 3.x specifications
//!
//! This crate turns a document location (filesystem path or URL) into the
//! unified `ApiDocument` graph consumed by the generator crate. Each variant
//! has its own raw serde types and a converter that lowers them; the
//! generator never sees variant-specific shapes.
//!
//! ## Usage
//! ```rust,ignore
//! use swagger_client_generator_parser::load_document;
//! use swagger_client_generator_common::SpecVariant;
//!
//! let document = load_document("petstore.json", SpecVariant::Swagger2)?;
//! ```

mod loader;

pub mod openapi3;
pub mod schema;
pub mod swagger2;

pub use loader::{DefaultSource, DocumentSource};

use swagger_client_generator_common::document::ApiDocument;
use swagger_client_generator_common::{Result, SpecVariant};

/// Load and lower a document with the default filesystem/HTTP source
pub fn load_document(location: &str, variant: SpecVariant) -> Result<ApiDocument> {
    load_document_from(&DefaultSource, location, variant)
}

/// Load and lower a document through a caller-supplied source
pub fn load_document_from(
    source: &dyn DocumentSource,
    location: &str,
    variant: SpecVariant,
) -> Result<ApiDocument> {
    let raw = source.fetch(location)?;
    lower_document(&raw, location, variant)
}

/// Lower already-fetched document text into the unified graph
pub fn lower_document(raw: &str, location: &str, variant: SpecVariant) -> Result<ApiDocument> {
    match variant {
        SpecVariant::Swagger2 => swagger2::parse_document(raw, location),
        SpecVariant::Openapi3 => openapi3::parse_document(raw, location),
    }
}

/// Detect the spec variant from the document content and the location.
///
/// Content markers win: hosts like `petstore3.swagger.io` happily serve 3.x
/// documents, so the version key is authoritative and the location is only a
/// fallback. An undetectable document is treated as OpenAPI 3.x, the variant
/// published APIs overwhelmingly use.
pub fn detect_variant(location: &str, raw: &str) -> SpecVariant {
    if raw.contains("\"swagger\"") || raw.contains("swagger:") {
        return SpecVariant::Swagger2;
    }
    if raw.contains("\"openapi\"") || raw.contains("openapi:") {
        return SpecVariant::Openapi3;
    }

    let lower = location.to_lowercase();
    if lower.contains("swagger") {
        return SpecVariant::Swagger2;
    }
    if lower.contains("openapi") {
        return SpecVariant::Openapi3;
    }

    SpecVariant::Openapi3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_variant_from_location() {
        assert_eq!(
            detect_variant("http://petstore.swagger.io/v2/swagger.json", "{}"),
            SpecVariant::Swagger2
        );
        assert_eq!(
            detect_variant("./specs/openapi.yaml", "{}"),
            SpecVariant::Openapi3
        );
    }

    #[test]
    fn test_detect_variant_from_content() {
        assert_eq!(
            detect_variant("./spec.json", r#"{"swagger": "2.0"}"#),
            SpecVariant::Swagger2
        );
        assert_eq!(
            detect_variant("./spec.json", r#"{"openapi": "3.0.1"}"#),
            SpecVariant::Openapi3
        );
        assert_eq!(detect_variant("./spec.json", "{}"), SpecVariant::Openapi3);
    }
}
