//! Raw schema objects and their lowering into `SchemaNode`
//!
//! Both document variants declare schemas with the same structural
//! vocabulary (`type`, `format`, `$ref`, `properties`, `items`, `enum`), so
//! one raw type covers them. Lowering decides the tagged-union variant once,
//! here; reference and enum classification take precedence over structural
//! kinds.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use swagger_client_generator_common::document::{PrimitiveKind, SchemaNode};

/// Schema object as it appears in the document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSchema {
    #[serde(rename = "type")]
    #[serde(default)]
    pub schema_type: Option<String>,

    #[serde(default)]
    pub format: Option<String>,

    #[serde(rename = "$ref")]
    #[serde(default)]
    pub ref_path: Option<String>,

    #[serde(default)]
    pub properties: IndexMap<String, RawSchema>,

    #[serde(default)]
    pub required: Vec<String>,

    #[serde(default)]
    pub items: Option<Box<RawSchema>>,

    #[serde(rename = "uniqueItems")]
    #[serde(default)]
    pub unique_items: bool,

    #[serde(rename = "additionalProperties")]
    #[serde(default)]
    pub additional_properties: Option<BoolOrSchema>,

    #[serde(rename = "enum")]
    #[serde(default)]
    pub enum_values: Vec<serde_json::Value>,
}

/// `additionalProperties` is either a flag or a value schema
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoolOrSchema {
    Bool(bool),
    Schema(Box<RawSchema>),
}

/// Lower a raw schema into the tagged union
pub fn convert_schema(schema: &RawSchema) -> SchemaNode {
    if let Some(ref_path) = &schema.ref_path {
        return SchemaNode::Reference(reference_name(ref_path));
    }
    if !schema.enum_values.is_empty() {
        return SchemaNode::Enum(schema.enum_values.iter().map(stringify_literal).collect());
    }

    match schema.schema_type.as_deref() {
        Some("array") => SchemaNode::Array {
            items: Box::new(match &schema.items {
                Some(items) => convert_schema(items),
                // items-less arrays degrade to string elements
                None => SchemaNode::Primitive {
                    kind: PrimitiveKind::String,
                    format: None,
                },
            }),
            unique: schema.unique_items,
        },
        Some("object") => convert_object(schema),
        Some(declared) => primitive_node(declared, schema.format.as_deref()),
        None => {
            if !schema.properties.is_empty() {
                convert_object(schema)
            } else {
                SchemaNode::Primitive {
                    kind: PrimitiveKind::Unknown(None),
                    format: schema.format.clone(),
                }
            }
        }
    }
}

fn convert_object(schema: &RawSchema) -> SchemaNode {
    match &schema.additional_properties {
        Some(BoolOrSchema::Schema(value)) => SchemaNode::Map {
            value: Some(Box::new(convert_schema(value))),
        },
        Some(BoolOrSchema::Bool(true)) => SchemaNode::Map { value: None },
        _ => {
            if schema.properties.is_empty() {
                // property-less objects are free-form maps
                SchemaNode::Map { value: None }
            } else {
                SchemaNode::Object {
                    properties: schema
                        .properties
                        .iter()
                        .map(|(name, prop)| (name.clone(), convert_schema(prop)))
                        .collect(),
                    required: schema.required.clone(),
                }
            }
        }
    }
}

fn primitive_node(declared: &str, format: Option<&str>) -> SchemaNode {
    let kind = match declared {
        "string" => match format {
            Some("date") => PrimitiveKind::Date,
            Some("date-time") => PrimitiveKind::DateTime,
            Some("uuid") => PrimitiveKind::Uuid,
            _ => PrimitiveKind::String,
        },
        "boolean" => PrimitiveKind::Boolean,
        "integer" => PrimitiveKind::Integer,
        "number" => PrimitiveKind::Number,
        other => PrimitiveKind::Unknown(Some(other.to_string())),
    };
    SchemaNode::Primitive {
        kind,
        format: format.map(String::from),
    }
}

fn stringify_literal(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Last segment of a reference path, e.g. `#/definitions/Pet` yields `Pet`
pub fn reference_name(ref_path: &str) -> String {
    ref_path
        .rsplit('/')
        .next()
        .unwrap_or(ref_path)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_json(json: &str) -> RawSchema {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_reference_wins_over_structure() {
        let schema = from_json(r##"{"$ref": "#/definitions/Pet", "type": "object"}"##);
        assert_eq!(
            convert_schema(&schema),
            SchemaNode::Reference("Pet".to_string())
        );
    }

    #[test]
    fn test_enum_wins_over_primitive() {
        let schema = from_json(r#"{"type": "string", "enum": ["placed", "approved"]}"#);
        assert_eq!(
            convert_schema(&schema),
            SchemaNode::Enum(vec!["placed".to_string(), "approved".to_string()])
        );
    }

    #[test]
    fn test_numeric_enum_literals_stringify() {
        let schema = from_json(r#"{"type": "integer", "enum": [1, 2]}"#);
        assert_eq!(
            convert_schema(&schema),
            SchemaNode::Enum(vec!["1".to_string(), "2".to_string()])
        );
    }

    #[test]
    fn test_array_unique_items() {
        let schema = from_json(r#"{"type": "array", "uniqueItems": true, "items": {"type": "string"}}"#);
        match convert_schema(&schema) {
            SchemaNode::Array { unique, .. } => assert!(unique),
            other => panic!("expected array, got {:?}", other),
        }
    }

    #[test]
    fn test_additional_properties_is_map() {
        let schema = from_json(r#"{"type": "object", "additionalProperties": {"type": "string"}}"#);
        assert!(matches!(
            convert_schema(&schema),
            SchemaNode::Map { value: Some(_) }
        ));

        let schema = from_json(r#"{"type": "object", "additionalProperties": true}"#);
        assert!(matches!(convert_schema(&schema), SchemaNode::Map { value: None }));
    }

    #[test]
    fn test_string_formats() {
        let schema = from_json(r#"{"type": "string", "format": "date-time"}"#);
        assert_eq!(
            convert_schema(&schema),
            SchemaNode::Primitive {
                kind: PrimitiveKind::DateTime,
                format: Some("date-time".to_string()),
            }
        );
    }

    #[test]
    fn test_unknown_type_keeps_declared_tag() {
        let schema = from_json(r#"{"type": "file"}"#);
        assert_eq!(
            convert_schema(&schema),
            SchemaNode::Primitive {
                kind: PrimitiveKind::Unknown(Some("file".to_string())),
                format: None,
            }
        );
    }

    #[test]
    fn test_reference_name() {
        assert_eq!(reference_name("#/definitions/Pet"), "Pet");
        assert_eq!(reference_name("#/components/schemas/Order"), "Order");
    }
}
