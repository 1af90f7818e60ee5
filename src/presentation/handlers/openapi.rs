use axum::Json;
use serde_json::{Value, json};

use super::root::SERVICE_VERSION;

fn json_body(schema: &str) -> Value {
    json!({
        "required": true,
        "content": { "application/json": { "schema": { "$ref": format!("#/components/schemas/{}", schema) } } }
    })
}

fn ok_response(schema: Value) -> Value {
    json!({
        "200": {
            "description": "Successful Response",
            "content": { "application/json": { "schema": schema } }
        }
    })
}

fn validated_responses(schema: &str) -> Value {
    let mut responses = ok_response(json!({ "$ref": format!("#/components/schemas/{}", schema) }));
    responses["422"] = json!({
        "description": "Validation Error",
        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ErrorBody" } } }
    });
    responses
}

/// OpenAPI 3 description of the public endpoints.
pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.1.0",
        "info": {
            "title": "Automotive RAG System",
            "description": "AI-powered automotive knowledge assistant",
            "version": SERVICE_VERSION
        },
        "paths": {
            "/": { "get": { "summary": "Root", "responses": ok_response(json!({})) } },
            "/health": { "get": { "summary": "Health Check", "responses": ok_response(json!({})) } },
            "/query": {
                "post": {
                    "summary": "Query Knowledge",
                    "description": "Query the automotive knowledge base",
                    "requestBody": json_body("QueryRequest"),
                    "responses": validated_responses("QueryResponse")
                }
            },
            "/upload": {
                "post": {
                    "summary": "Upload Document",
                    "description": "Upload automotive document (placeholder: content is not stored)",
                    "requestBody": json_body("DocumentUpload"),
                    "responses": validated_responses("UploadResponse")
                }
            },
            "/documents": {
                "get": {
                    "summary": "List Documents",
                    "description": "List all knowledge base topics",
                    "responses": ok_response(json!({ "$ref": "#/components/schemas/DocumentsResponse" }))
                }
            }
        },
        "components": {
            "schemas": {
                "QueryRequest": {
                    "type": "object",
                    "required": ["question"],
                    "properties": {
                        "question": { "type": "string" },
                        "max_results": { "type": ["integer", "null"], "default": 5 }
                    }
                },
                "QueryResponse": {
                    "type": "object",
                    "required": ["answer", "sources", "confidence"],
                    "properties": {
                        "answer": { "type": "string" },
                        "sources": { "type": "array", "items": { "type": "string" } },
                        "confidence": { "type": "number" }
                    }
                },
                "DocumentUpload": {
                    "type": "object",
                    "required": ["filename", "content", "document_type"],
                    "properties": {
                        "filename": { "type": "string" },
                        "content": { "type": "string" },
                        "document_type": { "type": "string" }
                    }
                },
                "UploadResponse": {
                    "type": "object",
                    "properties": {
                        "message": { "type": "string" },
                        "type": { "type": "string" },
                        "size": { "type": "integer" },
                        "status": { "type": "string" }
                    }
                },
                "DocumentsResponse": {
                    "type": "object",
                    "properties": {
                        "documents": { "type": "array", "items": { "type": "string" } },
                        "total": { "type": "integer" }
                    }
                },
                "ErrorBody": {
                    "type": "object",
                    "properties": {
                        "error": {
                            "type": "object",
                            "properties": {
                                "code": { "type": "string" },
                                "message": { "type": "string" }
                            }
                        }
                    }
                }
            }
        }
    })
}

pub async fn openapi_handler() -> Json<Value> {
    Json(openapi_document())
}
