use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// Service metadata and endpoint listing
///
/// GET /
pub async fn service_info() -> Json<Value> {
    Json(json!({
        "service": "agent-relay",
        "status": "online",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST /send": "Send a message to another agent",
            "GET /messages": "Retrieve messages for your agent",
            "GET /messages/peek": "Peek at messages without clearing",
            "GET /health": "Health check",
        },
    }))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now(),
    }))
}
