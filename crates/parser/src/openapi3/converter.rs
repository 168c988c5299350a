//! Lowers an OpenAPI 3.x document into the unified `ApiDocument` graph

use super::types::{OpenApiSpec, Operation, Parameter, PathItem, RequestBody};
use crate::schema;
use swagger_client_generator_common::document::{
    ApiDocument, HttpMethod, OperationNode, ParameterLocation, ParameterNode, PathEntry,
    ResponseNode,
};
use swagger_client_generator_common::Result;

/// Convert an OpenAPI 3.x spec to the unified document graph
pub fn convert(spec: &OpenApiSpec) -> Result<ApiDocument> {
    let schemas = spec
        .components
        .as_ref()
        .map(|components| {
            components
                .schemas
                .iter()
                .map(|(name, raw)| (name.clone(), schema::convert_schema(raw)))
                .collect()
        })
        .unwrap_or_default();

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
        base_url: spec.servers.first().map(|server| server.url.clone()),
        schemas,
        paths,
    })
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
    let mut parameters: Vec<ParameterNode> =
        op.parameters.iter().filter_map(convert_parameter).collect();

    // The request body is not a declared parameter in 3.x; lower it to a
    // body/form parameter node so classification stays uniform.
    if let Some(body) = &op.request_body {
        if let Some(param) = request_body_parameter(body) {
            parameters.push(param);
        }
    }

    OperationNode {
        id: op.operation_id.clone(),
        parameters,
        responses: op
            .responses
            .iter()
            .map(|(status, response)| ResponseNode {
                status: status.clone(),
                schema: response
                    .content
                    .values()
                    .next()
                    .and_then(|media| media.schema.as_ref())
                    .map(schema::convert_schema),
            })
            .collect(),
    }
}

fn convert_parameter(param: &Parameter) -> Option<ParameterNode> {
    let location = match param.location.as_str() {
        "path" => ParameterLocation::Path,
        "query" => ParameterLocation::Query,
        "header" => ParameterLocation::Header,
        // cookie parameters are not bound
        _ => return None,
    };

    Some(ParameterNode {
        name: param.name.clone(),
        location,
        schema: param.schema.as_ref().map(schema::convert_schema),
    })
}

fn request_body_parameter(body: &RequestBody) -> Option<ParameterNode> {
    let (content_type, media) = body.content.iter().next()?;
    let form = content_type.contains("form");
    Some(ParameterNode {
        name: if form { "formData" } else { "body" }.to_string(),
        location: if form {
            ParameterLocation::Form
        } else {
            ParameterLocation::Body
        },
        schema: media.schema.as_ref().map(schema::convert_schema),
    })
}
