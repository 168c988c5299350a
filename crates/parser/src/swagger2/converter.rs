//! Lowers a Swagger 2.0 document into the unified `ApiDocument` graph

use super::types::{Operation, Parameter, PathItem, SwaggerSpec};
use crate::schema::{self, RawSchema};
use swagger_client_generator_common::document::{
    ApiDocument, HttpMethod, OperationNode, ParameterLocation, ParameterNode, PathEntry,
    ResponseNode,
};
use swagger_client_generator_common::Result;

/// Convert a Swagger 2.0 spec to the unified document graph
pub fn convert(spec: &SwaggerSpec) -> Result<ApiDocument> {
    let schemas = spec
        .definitions
        .iter()
        .map(|(name, raw)| (name.clone(), schema::convert_schema(raw)))
        .collect();

    let paths = spec
        .paths
        .iter()
        .map(|(template, item)| PathEntry {
            template: template.clone(),
            operations: collect_operations(item),
        })
        .collect();

    Ok(ApiDocument {
        title: spec.info.as_ref().and_then(|info| info.title.clone()),
        base_url: base_url(spec),
        schemas,
        paths,
    })
}

fn base_url(spec: &SwaggerSpec) -> Option<String> {
    match (&spec.host, &spec.base_path) {
        (Some(host), Some(base)) => Some(format!("{}{}", host, base)),
        (Some(host), None) => Some(host.clone()),
        (None, Some(base)) => Some(base.clone()),
        (None, None) => None,
    }
}

fn collect_operations(item: &PathItem) -> Vec<(HttpMethod, OperationNode)> {
    let mut operations = Vec::new();
    if let Some(op) = &item.get {
        operations.push((HttpMethod::Get, convert_operation(op)));
    }
    if let Some(op) = &item.post {
        operations.push((HttpMethod::Post, convert_operation(op)));
    }
    if let Some(op) = &item.put {
        operations.push((HttpMethod::Put, convert_operation(op)));
    }
    if let Some(op) = &item.patch {
        operations.push((HttpMethod::Patch, convert_operation(op)));
    }
    if let Some(op) = &item.delete {
        operations.push((HttpMethod::Delete, convert_operation(op)));
    }
    operations
}

fn convert_operation(op: &Operation) -> OperationNode {
    OperationNode {
        id: op.operation_id.clone(),
        parameters: op.parameters.iter().filter_map(convert_parameter).collect(),
        responses: op
            .responses
            .iter()
            .map(|(status, response)| ResponseNode {
                status: status.clone(),
                schema: response.schema.as_ref().map(schema::convert_schema),
            })
            .collect(),
    }
}

fn convert_parameter(param: &Parameter) -> Option<ParameterNode> {
    let location = match param.location.as_str() {
        "path" => ParameterLocation::Path,
        "query" => ParameterLocation::Query,
        "body" => ParameterLocation::Body,
        "formData" => ParameterLocation::Form,
        "header" => ParameterLocation::Header,
        // cookie and friends are not bound
        _ => return None,
    };

    let schema = match &param.schema {
        Some(raw) => Some(schema::convert_schema(raw)),
        None => inline_schema(param).as_ref().map(schema::convert_schema),
    };

    Some(ParameterNode {
        name: param.name.clone(),
        location,
        schema,
    })
}

/// Non-body parameters declare type/format/items inline; rebuild a raw
/// schema so the shared lowering applies.
fn inline_schema(param: &Parameter) -> Option<RawSchema> {
    param.param_type.as_ref()?;
    Some(RawSchema {
        schema_type: param.param_type.clone(),
        format: param.format.clone(),
        items: param.items.clone(),
        enum_values: param.enum_values.clone(),
        ..RawSchema::default()
    })
}
