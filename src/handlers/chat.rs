use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::db::queries;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::Intent;
use crate::services::chat::rules::MAX_LISTED_CLASSES;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub intent: Intent,
}

// POST /chat
pub async fn chat(
    State(state): State<Arc<AppState>>,
    AppJson(body): AppJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let message = body.message.trim();
    if message.is_empty() {
        return Err(AppError::BadRequest("message cannot be empty".to_string()));
    }

    let classes = {
        let db = state.db()?;
        queries::open_class_summaries(&db, &Utc::now().naive_utc(), MAX_LISTED_CLASSES)?
    };

    let reply = state.responder.reply(message, &classes);
    tracing::info!(intent = reply.intent.as_str(), "answered chat message");

    Ok(Json(ChatResponse {
        reply: reply.text,
        intent: reply.intent,
    }))
}
