//! Root route. Nothing is served here; the body points callers at the two
//! real endpoints.

use axum::Json;
use serde_json::json;

pub async fn homepage() -> Json<serde_json::Value> {
    Json(json!({
        "error": "Nothing to see here, use /i/ to fetch and /u/ to upload"
    }))
}
