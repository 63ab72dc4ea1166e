use axum::Json;

pub async fn api_docs() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Host Metrics Dashboard",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/": { "get": { "summary": "Dashboard page; samples and records one reading" } },
            "/metrics": { "get": { "summary": "Current reading plus rolling history; samples and records one reading" } },
            "/health": { "get": { "summary": "Health check (does not sample)" } },
            "/api/v1/docs": { "get": { "summary": "OpenAPI spec" } }
        }
    }))
}
