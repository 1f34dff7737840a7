use axum::Json;
use serde_json::{json, Value};

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "Fitness Studio Booking API is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
