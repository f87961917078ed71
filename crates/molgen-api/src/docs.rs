//! OpenAPI-style JSON description of the generator API.
//!
//! Built from the category catalog so the documented identifiers and
//! defaults always match what the generators do. The document is
//! deterministic and has no I/O.

use molgen_core::catalog;
use molgen_types::AlgorithmCategory;
use serde_json::{Map, Value, json};

/// Build the OpenAPI document served by `GET /docs?format=json`.
pub fn openapi_doc() -> Value {
    let identifiers: Vec<&str> = AlgorithmCategory::ALL
        .into_iter()
        .map(AlgorithmCategory::as_str)
        .collect();

    let mut categories = Map::new();
    for entry in catalog::all() {
        let parameters: Map<String, Value> = entry
            .parameters
            .iter()
            .map(|p| {
                (
                    p.input.to_owned(),
                    json!({
                        "type": p.kind,
                        "default": p.default,
                        "resolvedAs": p.resolved_as,
                        "description": p.description,
                    }),
                )
            })
            .collect();
        categories.insert(
            entry.category.as_str().to_owned(),
            json!({
                "name": entry.name,
                "summary": entry.summary,
                "parameters": parameters,
            }),
        );
    }

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": catalog::SERVICE_MESSAGE,
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Returns pseudocode, complexity notes and use cases for six drug-discovery algorithm families. No chemistry is computed.",
        },
        "paths": {
            "/generate": {
                "get": {
                    "operationId": "getServiceInfo",
                    "summary": "List available algorithm types",
                    "responses": {
                        "200": json_response("Service information", "ServiceInfo"),
                    },
                },
                "post": {
                    "operationId": "generateAlgorithm",
                    "summary": "Generate an algorithm description",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/GenerateRequest" },
                            },
                        },
                    },
                    "responses": {
                        "200": json_response("Generated algorithm", "GeneratedAlgorithm"),
                        "400": json_response("Invalid algorithm type", "Error"),
                        "500": json_response("Failed to generate algorithm", "Error"),
                    },
                },
            },
            "/docs": {
                "get": {
                    "operationId": "getDocs",
                    "summary": "API documentation",
                    "parameters": [{
                        "name": "format",
                        "in": "query",
                        "required": false,
                        "schema": { "type": "string", "enum": ["json"] },
                        "description": "Return this document instead of the HTML page.",
                    }],
                    "responses": {
                        "200": { "description": "HTML page, or this document when format=json" },
                    },
                },
            },
        },
        "components": {
            "schemas": {
                "AlgorithmType": { "type": "string", "enum": identifiers },
                "Parameters": {
                    "type": "object",
                    "properties": {
                        "threshold": { "type": "number" },
                        "method": {
                            "type": "string",
                            "description": "Documented values: tanimoto, dice, cosine, euclidean. Other values are interpolated as given.",
                        },
                        "maxCompounds": {
                            "type": "number",
                            "description": "Not range-checked; echoed and interpolated as given.",
                        },
                        "iterations": {
                            "type": "number",
                            "description": "Not range-checked; echoed as given.",
                        },
                    },
                },
                "GenerateRequest": {
                    "type": "object",
                    "required": ["type"],
                    "properties": {
                        "type": { "$ref": "#/components/schemas/AlgorithmType" },
                        "parameters": { "$ref": "#/components/schemas/Parameters" },
                    },
                },
                "GeneratedAlgorithm": {
                    "type": "object",
                    "required": ["name", "type", "description", "parameters", "pseudocode", "complexity", "useCases"],
                    "properties": {
                        "name": { "type": "string" },
                        "type": { "$ref": "#/components/schemas/AlgorithmType" },
                        "description": { "type": "string" },
                        "parameters": { "type": "object", "description": "Resolved values; shape depends on type." },
                        "pseudocode": { "type": "string" },
                        "complexity": { "type": "string" },
                        "useCases": { "type": "array", "items": { "type": "string" } },
                    },
                },
                "ServiceInfo": {
                    "type": "object",
                    "properties": {
                        "message": { "type": "string" },
                        "version": { "type": "string" },
                        "availableAlgorithms": {
                            "type": "array",
                            "items": { "$ref": "#/components/schemas/AlgorithmType" },
                        },
                        "usage": { "type": "string" },
                    },
                },
                "Error": {
                    "type": "object",
                    "required": ["error"],
                    "properties": { "error": { "type": "string" } },
                },
            },
        },
        "x-algorithm-types": categories,
    })
}

fn json_response(description: &str, schema: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": { "$ref": format!("#/components/schemas/{schema}") },
            },
        },
    })
}
