use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse, HealthStatus},
    state::SharedState,
};

pub async fn health_handler(State(state): State<SharedState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        model: state.config.ollama_model.clone(),
        ollama_url: state.config.ollama_url.clone(),
    })
}

pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    // No trimming and no non-empty check: the message goes upstream as sent.
    let Json(payload) = payload?;

    let bot_response = state.ollama.chat(&payload.user_message).await?;

    Ok(Json(ChatResponse { bot_response }))
}
