//! Template view-model construction
//!
//! Precomputes every string the tera templates interpolate so the templates
//! stay free of type-rendering logic.

use serde::Serialize;
use swagger_client_generator_common::binding::{
    ClientMethod, FieldSpec, ModelDefinition, ParameterCategory, PrimitiveType, SynthesizedType,
    TypeDescriptor,
};
use swagger_client_generator_common::document::HttpMethod;
use swagger_client_generator_common::naming;

/// Render a descriptor as Rust source text
pub fn rust_type(ty: &TypeDescriptor) -> String {
    match ty {
        TypeDescriptor::Named(name) => name.clone(),
        TypeDescriptor::Primitive(primitive) => primitive_rust_type(*primitive).to_string(),
        TypeDescriptor::Collection { element, unique } => {
            if *unique {
                format!("std::collections::HashSet<{}>", rust_type(element))
            } else {
                format!("Vec<{}>", rust_type(element))
            }
        }
        TypeDescriptor::MapOf(value) => {
            format!("std::collections::HashMap<String, {}>", rust_type(value))
        }
        TypeDescriptor::Status => "StatusOnly".to_string(),
    }
}

fn primitive_rust_type(primitive: PrimitiveType) -> &'static str {
    match primitive {
        PrimitiveType::String => "String",
        PrimitiveType::Bool => "bool",
        PrimitiveType::Int32 => "i32",
        PrimitiveType::Int64 => "i64",
        PrimitiveType::Float32 => "f32",
        PrimitiveType::Float64 => "f64",
        PrimitiveType::Date => "chrono::NaiveDate",
        PrimitiveType::DateTime => "chrono::NaiveDateTime",
        PrimitiveType::Uuid => "uuid::Uuid",
        PrimitiveType::Json => "serde_json::Value",
    }
}

/// One rendered struct field
#[derive(Debug, Serialize)]
pub struct FieldView {
    pub ident: String,
    pub ty: String,
    pub alias: Option<String>,
}

/// One rendered enum variant
#[derive(Debug, Serialize)]
pub struct VariantView {
    pub ident: String,
    pub value: String,
    pub needs_rename: bool,
}

/// One emitted type unit (struct or enum)
#[derive(Debug, Serialize)]
pub struct TypeUnitView {
    pub kind: &'static str,
    pub name: String,
    pub file_name: String,
    pub fields: Vec<FieldView>,
    pub variants: Vec<VariantView>,
}

pub fn model_unit(definition: &ModelDefinition) -> TypeUnitView {
    struct_unit(&definition.name, &definition.fields)
}

pub fn synthesized_unit(ty: &SynthesizedType) -> TypeUnitView {
    match ty {
        SynthesizedType::Object(object) => struct_unit(&object.name, &object.fields),
        SynthesizedType::Enum(e) => TypeUnitView {
            kind: "enum",
            name: e.name.clone(),
            file_name: naming::to_snake_case(&e.name),
            fields: vec![],
            variants: e
                .constants
                .iter()
                .map(|constant| VariantView {
                    ident: constant.ident.clone(),
                    value: constant.value.clone(),
                    needs_rename: constant.ident != constant.value,
                })
                .collect(),
        },
    }
}

fn struct_unit(name: &str, fields: &[FieldSpec]) -> TypeUnitView {
    TypeUnitView {
        kind: "struct",
        name: name.to_string(),
        file_name: naming::to_snake_case(name),
        fields: fields
            .iter()
            .map(|field| FieldView {
                ident: field.ident.clone(),
                ty: if field.required {
                    rust_type(&field.ty)
                } else {
                    format!("Option<{}>", rust_type(&field.ty))
                },
                alias: field.alias.clone(),
            })
            .collect(),
        variants: vec![],
    }
}

/// One path or query value inserted into its parameter map
#[derive(Debug, Serialize)]
pub struct ParamInsertView {
    /// Declared parameter name, the map key
    pub name: String,
    /// Method argument holding the value
    pub ident: String,
}

/// One rendered client method
#[derive(Debug, Serialize)]
pub struct MethodView {
    pub ident: String,
    /// Argument list after `&self`, leading comma included
    pub args: String,
    pub return_ty: String,
    pub path: String,
    pub has_path: bool,
    pub has_query: bool,
    pub path_params: Vec<ParamInsertView>,
    pub query_params: Vec<ParamInsertView>,
    /// Delegated transport call, return type carried as the type argument
    pub call: String,
}

pub fn method_view(method: &ClientMethod) -> MethodView {
    let return_ty = rust_type(&method.return_type);

    let mut args = String::new();
    let mut path_params = Vec::new();
    let mut query_params = Vec::new();
    let mut body_ident: Option<String> = None;
    let mut has_form = false;

    for binding in &method.parameters {
        let ident = naming::field_ident(&binding.name);
        match binding.category {
            ParameterCategory::Path => {
                args.push_str(&format!(", {}: &str", ident));
                path_params.push(ParamInsertView {
                    name: binding.name.clone(),
                    ident,
                });
            }
            ParameterCategory::Query => {
                args.push_str(&format!(", {}: {}", ident, query_arg_type(&binding.ty)));
                query_params.push(ParamInsertView {
                    name: binding.name.clone(),
                    ident,
                });
            }
            ParameterCategory::Body => {
                if body_ident.is_none() {
                    args.push_str(&format!(", {}: &{}", ident, rust_type(&binding.ty)));
                    body_ident = Some(ident);
                }
            }
            // form values collapse into one map argument below; declared
            // header parameters ride in the caller-supplied header map
            ParameterCategory::Form => has_form = true,
            ParameterCategory::Header => {}
        }
    }

    if has_form {
        args.push_str(", form: &HashMap<String, serde_json::Value>");
    }
    args.push_str(", headers: &HashMap<String, String>");

    let call = match method.http_method {
        HttpMethod::Get => format!("get::<{}>(&uri, headers)", return_ty),
        HttpMethod::Post | HttpMethod::Put => {
            let body_arg = body_ident
                .clone()
                .or_else(|| has_form.then(|| "form".to_string()))
                .unwrap_or_else(|| "&()".to_string());
            format!(
                "{}::<{}, _>(&uri, {}, headers)",
                method.http_method.as_str(),
                return_ty,
                body_arg
            )
        }
        // unsupported verbs never reach emission
        HttpMethod::Patch | HttpMethod::Delete => String::new(),
    };

    MethodView {
        ident: naming::method_ident(&method.operation),
        args,
        return_ty,
        path: method.path_template.clone(),
        has_path: !path_params.is_empty(),
        has_query: !query_params.is_empty(),
        path_params,
        query_params,
        call,
    }
}

fn query_arg_type(ty: &TypeDescriptor) -> String {
    match ty {
        TypeDescriptor::Primitive(PrimitiveType::String) => "&str".to_string(),
        other => rust_type(other),
    }
}
