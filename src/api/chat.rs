//! Chat relay endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::ChatMessage;
use crate::AppState;

/// POST /api/chat - Forward a visitor message to the chat service.
pub async fn send_chat_message(
    State(state): State<AppState>,
    payload: Result<Json<ChatMessage>, JsonRejection>,
) -> ApiResult<ChatMessage> {
    let Json(message) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let reply = state.chat.relay(&message).await?;
    success(reply)
}
