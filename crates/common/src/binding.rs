//! Output binding model
//!
//! The type model and client method descriptors produced by one generation
//! pass and handed to the emission layer. Everything here is fully resolved:
//! the emission layer renders these directly, with no further lookups.

use crate::document::HttpMethod;
use serde::{Deserialize, Serialize};

/// A fully resolved target type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeDescriptor {
    /// A named model, synthesized type, or referenced schema
    Named(String),
    Primitive(PrimitiveType),
    Collection {
        element: Box<TypeDescriptor>,
        /// Set-like container instead of list-like
        unique: bool,
    },
    /// Map container; entry-value typing is deliberately coarse
    MapOf(Box<TypeDescriptor>),
    /// No reference-typed response body; renders as a status marker
    Status,
}

/// Fixed primitive target types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveType {
    String,
    Bool,
    Int32,
    Int64,
    Float32,
    Float64,
    Date,
    DateTime,
    Uuid,
    /// Generic JSON value
    Json,
}

/// One resolved model field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Property key as declared in the document
    pub source_name: String,
    /// Sanitized field identifier
    pub ident: String,
    pub ty: TypeDescriptor,
    pub required: bool,
    /// Original wire key, carried whenever `ident` no longer matches it so
    /// the emitted field still serializes under the document's property key
    pub alias: Option<String>,
}

/// One data-model definition for a top-level named schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDefinition {
    pub name: String,
    /// Fields in declared property order
    pub fields: Vec<FieldSpec>,
}

/// A type created by the generator that did not exist in the source document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SynthesizedType {
    Enum(EnumType),
    Object(NestedObjectType),
}

impl SynthesizedType {
    pub fn name(&self) -> &str {
        match self {
            Self::Enum(e) => &e.name,
            Self::Object(o) => &o.name,
        }
    }
}

/// Enum synthesized from inline literal values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumType {
    pub name: String,
    /// Constants in declared literal order
    pub constants: Vec<EnumConstant>,
}

/// One enum constant with its source literal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumConstant {
    /// Literal value as declared in the document
    pub value: String,
    /// Sanitized constant identifier
    pub ident: String,
}

/// Object synthesized from a nested anonymous schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedObjectType {
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

/// Categories a declared operation parameter maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterCategory {
    Path,
    Query,
    Body,
    Form,
    Header,
}

/// One categorized, typed operation parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterBinding {
    /// Parameter name as declared in the document
    pub name: String,
    pub ty: TypeDescriptor,
    pub category: ParameterCategory,
}

/// One callable client method descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientMethod {
    /// Operation name (the document's operation id, or derived)
    pub operation: String,
    /// Bindings in declared parameter order
    pub parameters: Vec<ParameterBinding>,
    pub return_type: TypeDescriptor,
    pub http_method: HttpMethod,
    pub path_template: String,
}

impl ClientMethod {
    /// Whether any binding of `category` is present
    pub fn has_category(&self, category: ParameterCategory) -> bool {
        self.parameters.iter().any(|p| p.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesized_type_name() {
        let e = SynthesizedType::Enum(EnumType {
            name: "OrderStatus".to_string(),
            constants: vec![],
        });
        assert_eq!(e.name(), "OrderStatus");

        let o = SynthesizedType::Object(NestedObjectType {
            name: "PetTag".to_string(),
            fields: vec![],
        });
        assert_eq!(o.name(), "PetTag");
    }

    #[test]
    fn test_has_category() {
        let method = ClientMethod {
            operation: "getPetById".to_string(),
            parameters: vec![ParameterBinding {
                name: "petId".to_string(),
                ty: TypeDescriptor::Primitive(PrimitiveType::String),
                category: ParameterCategory::Path,
            }],
            return_type: TypeDescriptor::Status,
            http_method: HttpMethod::Get,
            path_template: "/pet/{petId}".to_string(),
        };
        assert!(method.has_category(ParameterCategory::Path));
        assert!(!method.has_category(ParameterCategory::Query));
    }
}
