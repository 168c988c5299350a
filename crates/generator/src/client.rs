//! Client method binding
//!
//! Classifies operation parameters, resolves return types, and builds one
//! client method descriptor per supported (path, method, operation) triple.

use crate::resolver::TypeResolver;
use swagger_client_generator_common::binding::{
    ClientMethod, ParameterBinding, ParameterCategory, PrimitiveType, TypeDescriptor,
};
use swagger_client_generator_common::document::{
    ApiDocument, HttpMethod, OperationNode, ParameterLocation, ParameterNode, PrimitiveKind,
    ResponseNode, SchemaNode,
};
use swagger_client_generator_common::{naming, Diagnostic, Result};

/// Maps declared parameters to categorized, typed bindings
pub struct ParameterClassifier;

impl ParameterClassifier {
    /// Classify every declared parameter in order. The category is a direct
    /// mapping from the document's location tag; there is no inference.
    pub fn classify(
        resolver: &mut TypeResolver,
        operation: &str,
        params: &[ParameterNode],
    ) -> Result<Vec<ParameterBinding>> {
        params
            .iter()
            .map(|param| Self::classify_one(resolver, operation, param))
            .collect()
    }

    fn classify_one(
        resolver: &mut TypeResolver,
        operation: &str,
        param: &ParameterNode,
    ) -> Result<ParameterBinding> {
        let category = match param.location {
            ParameterLocation::Path => ParameterCategory::Path,
            ParameterLocation::Query => ParameterCategory::Query,
            ParameterLocation::Body => ParameterCategory::Body,
            ParameterLocation::Form => ParameterCategory::Form,
            ParameterLocation::Header => ParameterCategory::Header,
        };

        let ty = match category {
            // path values are interpolated into the template as strings
            ParameterCategory::Path => TypeDescriptor::Primitive(PrimitiveType::String),
            ParameterCategory::Body => Self::resolve_body_type(resolver, operation, param),
            ParameterCategory::Query | ParameterCategory::Form | ParameterCategory::Header => {
                Self::resolve_plain_type(param.schema.as_ref())
            }
        };

        Ok(ParameterBinding {
            name: param.name.clone(),
            ty,
            category,
        })
    }

    /// Body parameters resolve through the schema's reference: an array body
    /// binds as a collection of the referenced element type, anything else as
    /// the referenced type directly.
    fn resolve_body_type(
        resolver: &mut TypeResolver,
        operation: &str,
        param: &ParameterNode,
    ) -> TypeDescriptor {
        match &param.schema {
            Some(SchemaNode::Array { items, unique }) => {
                let element = match items.as_ref() {
                    SchemaNode::Reference(name) => TypeDescriptor::Named(name.clone()),
                    other => Self::resolve_plain_schema(other),
                };
                TypeDescriptor::Collection {
                    element: Box::new(element),
                    unique: *unique,
                }
            }
            Some(SchemaNode::Reference(name)) => TypeDescriptor::Named(name.clone()),
            _ => {
                resolver.warn(Diagnostic::unrecognized_shape(
                    format!("{}.{}", operation, param.name),
                    Some("body".to_string()),
                    None,
                ));
                TypeDescriptor::Primitive(PrimitiveType::Json)
            }
        }
    }

    /// Query/form/header schemas resolve primitives only; no type synthesis
    /// happens for parameter schemas.
    fn resolve_plain_type(schema: Option<&SchemaNode>) -> TypeDescriptor {
        match schema {
            Some(node) => Self::resolve_plain_schema(node),
            None => TypeDescriptor::Primitive(PrimitiveType::String),
        }
    }

    fn resolve_plain_schema(node: &SchemaNode) -> TypeDescriptor {
        match node {
            SchemaNode::Primitive { kind, format } => {
                let primitive = match kind {
                    PrimitiveKind::String => PrimitiveType::String,
                    PrimitiveKind::Boolean => PrimitiveType::Bool,
                    PrimitiveKind::Date => PrimitiveType::Date,
                    PrimitiveKind::DateTime => PrimitiveType::DateTime,
                    PrimitiveKind::Uuid => PrimitiveType::Uuid,
                    PrimitiveKind::Integer => match format.as_deref() {
                        Some("int64") => PrimitiveType::Int64,
                        _ => PrimitiveType::Int32,
                    },
                    PrimitiveKind::Number => match format.as_deref() {
                        Some("double") => PrimitiveType::Float64,
                        _ => PrimitiveType::Float32,
                    },
                    PrimitiveKind::Unknown(_) => PrimitiveType::String,
                };
                TypeDescriptor::Primitive(primitive)
            }
            SchemaNode::Map { .. } => TypeDescriptor::MapOf(Box::new(TypeDescriptor::Primitive(
                PrimitiveType::Json,
            ))),
            // enum/array/object parameter schemas degrade to strings
            _ => TypeDescriptor::Primitive(PrimitiveType::String),
        }
    }
}

/// Selects the representative return type from an operation's responses
pub struct ReturnTypeResolver;

impl ReturnTypeResolver {
    /// First response whose schema is a named reference wins, in declared
    /// order. A document with several differently-typed success responses
    /// collapses to the first; operations without any reference-bearing
    /// response return the status marker.
    pub fn resolve(responses: &[ResponseNode]) -> TypeDescriptor {
        responses
            .iter()
            .find_map(|response| match &response.schema {
                Some(SchemaNode::Reference(name)) => Some(TypeDescriptor::Named(name.clone())),
                _ => None,
            })
            .unwrap_or(TypeDescriptor::Status)
    }
}

/// Builds client method descriptors for supported operations
pub struct ClientBindingBuilder;

impl ClientBindingBuilder {
    /// Build descriptors for every operation of every path, in document
    /// order. PATCH and DELETE operations are recognized and skipped.
    pub fn build_all(
        resolver: &mut TypeResolver,
        document: &ApiDocument,
    ) -> Result<Vec<ClientMethod>> {
        let mut methods = Vec::new();
        for path in &document.paths {
            for (method, operation) in &path.operations {
                if let Some(client_method) =
                    Self::build(resolver, &path.template, *method, operation)?
                {
                    methods.push(client_method);
                }
            }
        }
        Ok(methods)
    }

    /// Build one method descriptor, or `None` for unsupported verbs
    pub fn build(
        resolver: &mut TypeResolver,
        template: &str,
        method: HttpMethod,
        operation: &OperationNode,
    ) -> Result<Option<ClientMethod>> {
        match method {
            HttpMethod::Get | HttpMethod::Post | HttpMethod::Put => {}
            HttpMethod::Patch | HttpMethod::Delete => return Ok(None),
        }

        let name = operation
            .id
            .clone()
            .unwrap_or_else(|| derived_operation_id(method, template));
        let parameters = ParameterClassifier::classify(resolver, &name, &operation.parameters)?;
        let return_type = ReturnTypeResolver::resolve(&operation.responses);

        Ok(Some(ClientMethod {
            operation: name,
            parameters,
            return_type,
            http_method: method,
            path_template: template.to_string(),
        }))
    }
}

/// Fallback operation name for documents without operation ids
fn derived_operation_id(method: HttpMethod, template: &str) -> String {
    let words: String = template
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    format!("{}_{}", method.as_str(), naming::to_snake_case(words.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use swagger_client_generator_common::document::ResponseNode;

    fn path_param(name: &str) -> ParameterNode {
        ParameterNode {
            name: name.to_string(),
            location: ParameterLocation::Path,
            schema: Some(SchemaNode::Primitive {
                kind: PrimitiveKind::String,
                format: None,
            }),
        }
    }

    #[test]
    fn test_first_reference_bearing_response_wins() {
        let responses = vec![
            ResponseNode {
                status: "200".to_string(),
                schema: Some(SchemaNode::Reference("Pet".to_string())),
            },
            ResponseNode {
                status: "404".to_string(),
                schema: Some(SchemaNode::Reference("Error".to_string())),
            },
        ];
        assert_eq!(
            ReturnTypeResolver::resolve(&responses),
            TypeDescriptor::Named("Pet".to_string())
        );
    }

    #[test]
    fn test_no_reference_response_returns_status() {
        let responses = vec![ResponseNode {
            status: "200".to_string(),
            schema: Some(SchemaNode::Primitive {
                kind: PrimitiveKind::String,
                format: None,
            }),
        }];
        assert_eq!(ReturnTypeResolver::resolve(&responses), TypeDescriptor::Status);
        assert_eq!(ReturnTypeResolver::resolve(&[]), TypeDescriptor::Status);
    }

    #[test]
    fn test_body_array_of_references_binds_as_collection() {
        let mut resolver = TypeResolver::new();
        let param = ParameterNode {
            name: "body".to_string(),
            location: ParameterLocation::Body,
            schema: Some(SchemaNode::Array {
                items: Box::new(SchemaNode::Reference("Tag".to_string())),
                unique: false,
            }),
        };

        let bindings =
            ParameterClassifier::classify(&mut resolver, "addTags", &[param]).unwrap();
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].category, ParameterCategory::Body);
        assert_eq!(
            bindings[0].ty,
            TypeDescriptor::Collection {
                element: Box::new(TypeDescriptor::Named("Tag".to_string())),
                unique: false,
            }
        );
    }

    #[test]
    fn test_patch_and_delete_are_skipped() {
        let mut resolver = TypeResolver::new();
        let operation = OperationNode {
            id: Some("deletePet".to_string()),
            parameters: vec![path_param("petId")],
            responses: vec![],
        };

        let deleted = ClientBindingBuilder::build(
            &mut resolver,
            "/pet/{petId}",
            HttpMethod::Delete,
            &operation,
        )
        .unwrap();
        assert!(deleted.is_none());

        let patched = ClientBindingBuilder::build(
            &mut resolver,
            "/pet/{petId}",
            HttpMethod::Patch,
            &operation,
        )
        .unwrap();
        assert!(patched.is_none());
    }

    #[test]
    fn test_get_with_path_parameter() {
        let mut resolver = TypeResolver::new();
        let operation = OperationNode {
            id: Some("getPetById".to_string()),
            parameters: vec![path_param("petId")],
            responses: vec![ResponseNode {
                status: "200".to_string(),
                schema: Some(SchemaNode::Reference("Pet".to_string())),
            }],
        };

        let method = ClientBindingBuilder::build(
            &mut resolver,
            "/pet/{petId}",
            HttpMethod::Get,
            &operation,
        )
        .unwrap()
        .expect("GET must produce a method");

        assert_eq!(method.operation, "getPetById");
        assert_eq!(method.parameters.len(), 1);
        assert_eq!(method.parameters[0].category, ParameterCategory::Path);
        assert_eq!(
            method.parameters[0].ty,
            TypeDescriptor::Primitive(PrimitiveType::String)
        );
        assert_eq!(method.return_type, TypeDescriptor::Named("Pet".to_string()));
    }

    #[test]
    fn test_derived_operation_id() {
        assert_eq!(
            derived_operation_id(HttpMethod::Get, "/pet/{petId}"),
            "get_pet_pet_id"
        );
        assert_eq!(
            derived_operation_id(HttpMethod::Post, "/store/order"),
            "post_store_order"
        );
    }
}
