//! Schema-to-type resolution
//!
//! Resolves `SchemaNode`s into renderable `TypeDescriptor`s, synthesizing
//! named enum and nested-object types along the way. Synthesized types and
//! diagnostics accumulate in a registry owned by the resolver; the registry
//! lives for exactly one generation pass and is never shared across targets.

use indexmap::IndexMap;
use swagger_client_generator_common::binding::{
    EnumConstant, EnumType, FieldSpec, NestedObjectType, PrimitiveType, SynthesizedType,
    TypeDescriptor,
};
use swagger_client_generator_common::document::{PrimitiveKind, SchemaNode};
use swagger_client_generator_common::{naming, Diagnostic, GeneratorError, Result};

/// Per-pass accumulation of synthesized types and resolution diagnostics
#[derive(Debug, Default)]
pub struct SynthesizedRegistry {
    types: IndexMap<String, SynthesizedType>,
    diagnostics: Vec<Diagnostic>,
}

impl SynthesizedRegistry {
    /// Register a synthesized type. Two registrations under one name within
    /// a pass would make the output ambiguous, so that is fatal.
    pub fn register(&mut self, ty: SynthesizedType) -> Result<()> {
        let name = ty.name().to_string();
        if self.types.contains_key(&name) {
            return Err(GeneratorError::NamingCollision(name));
        }
        self.types.insert(name, ty);
        Ok(())
    }

    pub fn warn(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Flush the registry: synthesized types in registration order plus the
    /// collected diagnostics.
    pub fn into_parts(self) -> (Vec<SynthesizedType>, Vec<Diagnostic>) {
        (self.types.into_values().collect(), self.diagnostics)
    }
}

/// Resolves schema nodes to type descriptors
///
/// One resolver per generation pass; `finish` consumes it and yields the
/// synthesized types it registered.
#[derive(Debug, Default)]
pub struct TypeResolver {
    registry: SynthesizedRegistry,
}

impl TypeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `node`, encountered under schema `parent` at property `field`.
    ///
    /// Every descriptor returned here is directly renderable; nothing
    /// partially resolved escapes.
    pub fn resolve(&mut self, parent: &str, field: &str, node: &SchemaNode) -> Result<TypeDescriptor> {
        match node {
            // Never recurse into the referenced body: the referenced schema
            // resolves independently when its own top-level entry is
            // processed. This also makes reference cycles terminate.
            SchemaNode::Reference(name) => Ok(TypeDescriptor::Named(name.clone())),
            SchemaNode::Enum(values) => self.synthesize_enum(parent, field, values),
            SchemaNode::Array { items, unique } => {
                let element = self.resolve(parent, field, items)?;
                Ok(TypeDescriptor::Collection {
                    element: Box::new(element),
                    unique: *unique,
                })
            }
            // Only the container shape is modeled; entry values stay generic
            SchemaNode::Map { .. } => Ok(TypeDescriptor::MapOf(Box::new(
                TypeDescriptor::Primitive(PrimitiveType::Json),
            ))),
            SchemaNode::Object {
                properties,
                required,
            } => self.synthesize_object(parent, field, properties, required),
            SchemaNode::Primitive { kind, format } => {
                Ok(self.resolve_primitive(parent, field, kind, format.as_deref()))
            }
        }
    }

    /// Resolve an ordered property map into field specs. Shared by
    /// `ModelBuilder` (top-level models) and nested-object synthesis.
    pub fn resolve_fields(
        &mut self,
        owner: &str,
        properties: &IndexMap<String, SchemaNode>,
        required: &[String],
    ) -> Result<Vec<FieldSpec>> {
        let mut fields = Vec::with_capacity(properties.len());
        for (key, schema) in properties {
            let ty = self.resolve(owner, key, schema)?;
            let ident = naming::field_ident(key);
            let alias = (ident != *key).then(|| key.clone());
            fields.push(FieldSpec {
                source_name: key.clone(),
                ident,
                ty,
                required: required.contains(key),
                alias,
            });
        }
        Ok(fields)
    }

    pub fn warn(&mut self, diagnostic: Diagnostic) {
        self.registry.warn(diagnostic);
    }

    /// Consume the resolver, yielding synthesized types and diagnostics
    pub fn finish(self) -> (Vec<SynthesizedType>, Vec<Diagnostic>) {
        self.registry.into_parts()
    }

    fn synthesize_enum(&mut self, parent: &str, field: &str, values: &[String]) -> Result<TypeDescriptor> {
        let name = naming::type_name(parent, field);
        let constants = values
            .iter()
            .map(|value| EnumConstant {
                value: value.clone(),
                ident: naming::enum_const_ident(value),
            })
            .collect();
        self.registry.register(SynthesizedType::Enum(EnumType {
            name: name.clone(),
            constants,
        }))?;
        Ok(TypeDescriptor::Named(name))
    }

    fn synthesize_object(
        &mut self,
        parent: &str,
        field: &str,
        properties: &IndexMap<String, SchemaNode>,
        required: &[String],
    ) -> Result<TypeDescriptor> {
        let name = naming::type_name(parent, field);
        // the nested type becomes the parent for anything synthesized below it
        let fields = self.resolve_fields(&name, properties, required)?;
        self.registry
            .register(SynthesizedType::Object(NestedObjectType {
                name: name.clone(),
                fields,
            }))?;
        Ok(TypeDescriptor::Named(name))
    }

    fn resolve_primitive(
        &mut self,
        parent: &str,
        field: &str,
        kind: &PrimitiveKind,
        format: Option<&str>,
    ) -> TypeDescriptor {
        let primitive = match kind {
            PrimitiveKind::String => PrimitiveType::String,
            PrimitiveKind::Boolean => PrimitiveType::Bool,
            PrimitiveKind::Date => PrimitiveType::Date,
            PrimitiveKind::DateTime => PrimitiveType::DateTime,
            PrimitiveKind::Uuid => PrimitiveType::Uuid,
            // absent or unrecognized formats take the narrower representation
            PrimitiveKind::Integer => match format {
                Some("int64") => PrimitiveType::Int64,
                _ => PrimitiveType::Int32,
            },
            PrimitiveKind::Number => match format {
                Some("double") => PrimitiveType::Float64,
                _ => PrimitiveType::Float32,
            },
            PrimitiveKind::Unknown(declared) => {
                self.registry.warn(Diagnostic::unrecognized_shape(
                    resolution_context(parent, field),
                    declared.clone(),
                    format.map(String::from),
                ));
                PrimitiveType::String
            }
        };
        TypeDescriptor::Primitive(primitive)
    }
}

fn resolution_context(parent: &str, field: &str) -> String {
    if field.is_empty() {
        parent.to_string()
    } else {
        format!("{}.{}", parent, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_one(node: &SchemaNode) -> (TypeDescriptor, Vec<SynthesizedType>, Vec<Diagnostic>) {
        let mut resolver = TypeResolver::new();
        let ty = resolver.resolve("Pet", "field", node).unwrap();
        let (synthesized, diagnostics) = resolver.finish();
        (ty, synthesized, diagnostics)
    }

    #[test]
    fn test_reference_resolves_by_name_without_recursion() {
        let (ty, synthesized, diagnostics) =
            resolve_one(&SchemaNode::Reference("Category".to_string()));
        assert_eq!(ty, TypeDescriptor::Named("Category".to_string()));
        assert!(synthesized.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_integer_width_defaults_narrow() {
        let node = SchemaNode::Primitive {
            kind: PrimitiveKind::Integer,
            format: None,
        };
        let (ty, _, _) = resolve_one(&node);
        assert_eq!(ty, TypeDescriptor::Primitive(PrimitiveType::Int32));

        let node = SchemaNode::Primitive {
            kind: PrimitiveKind::Integer,
            format: Some("int64".to_string()),
        };
        let (ty, _, _) = resolve_one(&node);
        assert_eq!(ty, TypeDescriptor::Primitive(PrimitiveType::Int64));
    }

    #[test]
    fn test_number_width_defaults_narrow() {
        let node = SchemaNode::Primitive {
            kind: PrimitiveKind::Number,
            format: None,
        };
        let (ty, _, _) = resolve_one(&node);
        assert_eq!(ty, TypeDescriptor::Primitive(PrimitiveType::Float32));

        let node = SchemaNode::Primitive {
            kind: PrimitiveKind::Number,
            format: Some("double".to_string()),
        };
        let (ty, _, _) = resolve_one(&node);
        assert_eq!(ty, TypeDescriptor::Primitive(PrimitiveType::Float64));
    }

    #[test]
    fn test_unknown_kind_falls_back_to_string_with_diagnostic() {
        let node = SchemaNode::Primitive {
            kind: PrimitiveKind::Unknown(Some("file".to_string())),
            format: None,
        };
        let (ty, _, diagnostics) = resolve_one(&node);
        assert_eq!(ty, TypeDescriptor::Primitive(PrimitiveType::String));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].context, "Pet.field");
        assert_eq!(diagnostics[0].declared_type.as_deref(), Some("file"));
    }

    #[test]
    fn test_enum_synthesis_sanitizes_constants() {
        let node = SchemaNode::Enum(vec!["placed".to_string(), "N/A".to_string()]);
        let mut resolver = TypeResolver::new();
        let ty = resolver.resolve("Order", "status", &node).unwrap();
        assert_eq!(ty, TypeDescriptor::Named("OrderStatus".to_string()));

        let (synthesized, _) = resolver.finish();
        assert_eq!(synthesized.len(), 1);
        match &synthesized[0] {
            SynthesizedType::Enum(e) => {
                assert_eq!(e.name, "OrderStatus");
                assert_eq!(e.constants[0].ident, "placed");
                assert_eq!(e.constants[1].ident, "NA");
                assert_eq!(e.constants[1].value, "N/A");
            }
            other => panic!("expected enum, got {:?}", other),
        }
    }

    #[test]
    fn test_same_property_under_different_parents_does_not_collide() {
        let node = SchemaNode::Enum(vec!["placed".to_string()]);
        let mut resolver = TypeResolver::new();
        resolver.resolve("Order", "status", &node).unwrap();
        resolver.resolve("Pet", "status", &node).unwrap();

        let (synthesized, _) = resolver.finish();
        let names: Vec<&str> = synthesized.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["OrderStatus", "PetStatus"]);
    }

    #[test]
    fn test_name_collision_is_fatal() {
        let node = SchemaNode::Enum(vec!["placed".to_string()]);
        let mut resolver = TypeResolver::new();
        resolver.resolve("Order", "status", &node).unwrap();
        // `Status` capitalizes to the same synthesized name
        let result = resolver.resolve("Order", "Status", &node);
        assert!(matches!(result, Err(GeneratorError::NamingCollision(name)) if name == "OrderStatus"));
    }

    #[test]
    fn test_unique_array_becomes_set_collection() {
        let node = SchemaNode::Array {
            items: Box::new(SchemaNode::Reference("Tag".to_string())),
            unique: true,
        };
        let (ty, _, _) = resolve_one(&node);
        assert_eq!(
            ty,
            TypeDescriptor::Collection {
                element: Box::new(TypeDescriptor::Named("Tag".to_string())),
                unique: true,
            }
        );
    }

    #[test]
    fn test_map_value_typing_is_coarse() {
        let node = SchemaNode::Map {
            value: Some(Box::new(SchemaNode::Reference("Pet".to_string()))),
        };
        let (ty, _, _) = resolve_one(&node);
        assert_eq!(
            ty,
            TypeDescriptor::MapOf(Box::new(TypeDescriptor::Primitive(PrimitiveType::Json)))
        );
    }

    #[test]
    fn test_nested_object_synthesis() {
        let mut properties = IndexMap::new();
        properties.insert(
            "street".to_string(),
            SchemaNode::Primitive {
                kind: PrimitiveKind::String,
                format: None,
            },
        );
        let node = SchemaNode::Object {
            properties,
            required: vec!["street".to_string()],
        };

        let mut resolver = TypeResolver::new();
        let ty = resolver.resolve("User", "address", &node).unwrap();
        assert_eq!(ty, TypeDescriptor::Named("UserAddress".to_string()));

        let (synthesized, _) = resolver.finish();
        match &synthesized[0] {
            SynthesizedType::Object(o) => {
                assert_eq!(o.name, "UserAddress");
                assert_eq!(o.fields.len(), 1);
                assert!(o.fields[0].required);
            }
            other => panic!("expected object, got {:?}", other),
        }
    }

    #[test]
    fn test_alias_carried_when_identifier_changes() {
        let mut properties = IndexMap::new();
        properties.insert(
            "petId".to_string(),
            SchemaNode::Primitive {
                kind: PrimitiveKind::Integer,
                format: Some("int64".to_string()),
            },
        );
        properties.insert(
            "name".to_string(),
            SchemaNode::Primitive {
                kind: PrimitiveKind::String,
                format: None,
            },
        );

        let mut resolver = TypeResolver::new();
        let fields = resolver.resolve_fields("Pet", &properties, &[]).unwrap();
        assert_eq!(fields[0].ident, "pet_id");
        assert_eq!(fields[0].alias.as_deref(), Some("petId"));
        // unchanged identifiers carry no alias
        assert_eq!(fields[1].ident, "name");
        assert_eq!(fields[1].alias, None);
    }
}
