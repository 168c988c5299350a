//! Model construction for top-level named schemas

use crate::resolver::TypeResolver;
use swagger_client_generator_common::binding::ModelDefinition;
use swagger_client_generator_common::document::{ApiDocument, SchemaNode};
use swagger_client_generator_common::Result;

/// Builds one data-model definition per top-level schema entry
pub struct ModelBuilder;

impl ModelBuilder {
    /// Build definitions for every entry of the document's schema table, in
    /// table order. Non-object entries (top-level enums, aliases) still run
    /// through the resolver so their synthesized types register, but they
    /// produce no definition of their own.
    pub fn build_models(
        resolver: &mut TypeResolver,
        document: &ApiDocument,
    ) -> Result<Vec<ModelDefinition>> {
        let mut models = Vec::new();
        for (name, schema) in &document.schemas {
            match schema {
                SchemaNode::Object {
                    properties,
                    required,
                } => {
                    models.push(ModelDefinition {
                        name: name.clone(),
                        fields: resolver.resolve_fields(name, properties, required)?,
                    });
                }
                other => {
                    resolver.resolve(name, "", other)?;
                }
            }
        }
        Ok(models)
    }

    /// Build the definition for a single named schema
    pub fn build_model(
        resolver: &mut TypeResolver,
        name: &str,
        schema: &SchemaNode,
    ) -> Result<Option<ModelDefinition>> {
        match schema {
            SchemaNode::Object {
                properties,
                required,
            } => Ok(Some(ModelDefinition {
                name: name.to_string(),
                fields: resolver.resolve_fields(name, properties, required)?,
            })),
            other => {
                resolver.resolve(name, "", other)?;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use swagger_client_generator_common::binding::{SynthesizedType, TypeDescriptor};
    use swagger_client_generator_common::document::PrimitiveKind;

    fn pet_document() -> ApiDocument {
        let mut properties = IndexMap::new();
        properties.insert(
            "id".to_string(),
            SchemaNode::Primitive {
                kind: PrimitiveKind::Integer,
                format: Some("int64".to_string()),
            },
        );
        properties.insert(
            "status".to_string(),
            SchemaNode::Enum(vec!["available".to_string(), "sold".to_string()]),
        );

        let mut schemas = IndexMap::new();
        schemas.insert(
            "Pet".to_string(),
            SchemaNode::Object {
                properties,
                required: vec!["id".to_string()],
            },
        );

        ApiDocument {
            title: None,
            base_url: None,
            schemas,
            paths: vec![],
        }
    }

    #[test]
    fn test_build_models_in_table_order() {
        let document = pet_document();
        let mut resolver = TypeResolver::new();
        let models = ModelBuilder::build_models(&mut resolver, &document).unwrap();

        assert_eq!(models.len(), 1);
        assert_eq!(models[0].name, "Pet");
        assert_eq!(models[0].fields.len(), 2);
        assert!(models[0].fields[0].required);
        assert_eq!(
            models[0].fields[1].ty,
            TypeDescriptor::Named("PetStatus".to_string())
        );

        let (synthesized, diagnostics) = resolver.finish();
        assert_eq!(synthesized.len(), 1);
        assert_eq!(synthesized[0].name(), "PetStatus");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_top_level_enum_registers_without_model() {
        let mut schemas = IndexMap::new();
        schemas.insert(
            "OrderStatus".to_string(),
            SchemaNode::Enum(vec!["placed".to_string()]),
        );
        let document = ApiDocument {
            title: None,
            base_url: None,
            schemas,
            paths: vec![],
        };

        let mut resolver = TypeResolver::new();
        let models = ModelBuilder::build_models(&mut resolver, &document).unwrap();
        assert!(models.is_empty());

        let (synthesized, _) = resolver.finish();
        assert_eq!(synthesized.len(), 1);
        match &synthesized[0] {
            SynthesizedType::Enum(e) => assert_eq!(e.name, "OrderStatus"),
            other => panic!("expected enum, got {:?}", other),
        }
    }
}
