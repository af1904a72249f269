//! Auto-generated OpenAPI 3.1 specification for the invstat server.
//!
//! Served at `GET /v1/openapi.json`.

use serde_json::{json, Value};

pub fn openapi_spec() -> Value {
    json!({
        "openapi": "3.1.0",
        "info": {
            "title": "invstat Dashboard API",
            "description": "Inventory analytics render cycle over HTTP: upload a CSV, get back previews, statistics, chart artifacts and insights.",
            "version": inv_core::VERSION,
            "license": { "name": "MIT" }
        },
        "servers": [
            { "url": "http://localhost:3750", "description": "Local dev server" }
        ],
        "components": {
            "schemas": {
                "Frame": {
                    "type": "object",
                    "required": ["columns", "rows"],
                    "properties": {
                        "columns": { "type": "array", "items": { "type": "string" } },
                        "rows": {
                            "type": "array",
                            "items": { "type": "array", "items": { "type": "string" } }
                        }
                    }
                },
                "ColumnSummary": {
                    "type": "object",
                    "required": ["name", "count", "mean", "min", "q25", "q50", "q75", "max"],
                    "properties": {
                        "name": { "type": "string" },
                        "count": { "type": "integer" },
                        "mean": { "type": "number" },
                        "std": { "type": "number", "description": "Absent with fewer than two values." },
                        "min": { "type": "number" },
                        "q25": { "type": "number" },
                        "q50": { "type": "number" },
                        "q75": { "type": "number" },
                        "max": { "type": "number" }
                    }
                },
                "Insights": {
                    "type": "object",
                    "required": ["location", "total_count", "total_value"],
                    "properties": {
                        "location": { "type": "string" },
                        "total_count": { "type": "number" },
                        "total_value": { "type": "number" }
                    }
                },
                "RenderResponse": {
                    "type": "object",
                    "description": "One full render cycle for one upload and one selected location.",
                    "required": [
                        "filename", "saved_path", "n_rows", "n_cols", "preview", "summary",
                        "locations", "location", "filtered_rows", "filtered",
                        "bar", "pie", "scatter", "heatmap", "insights"
                    ],
                    "properties": {
                        "filename": { "type": "string" },
                        "saved_path": { "type": "string" },
                        "n_rows": { "type": "integer" },
                        "n_cols": { "type": "integer" },
                        "preview": { "$ref": "#/components/schemas/Frame" },
                        "summary": {
                            "type": "array",
                            "items": { "$ref": "#/components/schemas/ColumnSummary" }
                        },
                        "locations": { "type": "array", "items": { "type": "string" } },
                        "location": { "type": "string" },
                        "filtered_rows": { "type": "integer" },
                        "filtered": { "$ref": "#/components/schemas/Frame" },
                        "bar": { "type": "object", "description": "invstat_bar_v0 artifact" },
                        "pie": { "type": "object", "description": "invstat_pie_v0 artifact" },
                        "scatter": { "type": "object", "description": "invstat_scatter_v0 artifact" },
                        "heatmap": { "type": "object", "description": "invstat_heatmap_v0 artifact" },
                        "insights": { "$ref": "#/components/schemas/Insights" }
                    }
                },
                "Error": {
                    "type": "object",
                    "required": ["error"],
                    "properties": { "error": { "type": "string" } }
                }
            }
        },
        "paths": {
            "/v1/upload/{filename}": {
                "post": {
                    "summary": "Upload a CSV and run a full render cycle",
                    "description": "The body is written verbatim to durable storage (overwriting any file of the same name) before parsing, so malformed uploads still land on disk.",
                    "parameters": [
                        {
                            "name": "filename", "in": "path", "required": true,
                            "schema": { "type": "string" },
                            "description": "Flat filename; path separators are rejected."
                        },
                        {
                            "name": "location", "in": "query", "required": false,
                            "schema": { "type": "string" },
                            "description": "Location to filter to; defaults to the first listed location."
                        }
                    ],
                    "requestBody": {
                        "required": true,
                        "content": { "text/csv": { "schema": { "type": "string" } } }
                    },
                    "responses": {
                        "200": {
                            "description": "Render payload",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/RenderResponse" } } }
                        },
                        "400": {
                            "description": "Malformed upload, missing column or invalid filename",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Error" } } }
                        }
                    }
                }
            },
            "/v1/render/{filename}": {
                "get": {
                    "summary": "Re-render a stored upload",
                    "parameters": [
                        {
                            "name": "filename", "in": "path", "required": true,
                            "schema": { "type": "string" }
                        },
                        {
                            "name": "location", "in": "query", "required": false,
                            "schema": { "type": "string" }
                        }
                    ],
                    "responses": {
                        "200": {
                            "description": "Render payload",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/RenderResponse" } } }
                        },
                        "404": {
                            "description": "No upload with this name",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Error" } } }
                        }
                    }
                }
            },
            "/v1/health": {
                "get": {
                    "summary": "Server status",
                    "responses": {
                        "200": { "description": "Status, version, uptime and request counters" }
                    }
                }
            },
            "/v1/openapi.json": {
                "get": {
                    "summary": "This document",
                    "responses": { "200": { "description": "OpenAPI 3.1 specification" } }
                }
            }
        }
    })
}
