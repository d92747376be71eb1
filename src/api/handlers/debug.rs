use axum::{extract::State, response::Json};
use serde_json::json;
use std::sync::Arc;

use crate::config::Config;

/// GET /debug/config
/// Sanitized configuration report: presence flags and hosts only, never
/// secret material.
pub async fn debug_config_handler(State(config): State<Arc<Config>>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "config": {
            "database_configured": !config.database_url.is_empty(),
            "storage_endpoint": config.storage_endpoint,
            "storage_bucket": config.storage_bucket,
            "storage_access_key_configured": !config.storage_access_key_id.is_empty(),
            "static_pages_enabled": config.static_pages_enabled,
            "static_pages_bucket": config.static_pages_bucket,
            "delete_queue_configured": !config.delete_queue_url.is_empty(),
            "jwt_secret_configured": std::env::var("JWT_SECRET").is_ok(),
        },
    }))
}
