use axum::{
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde::Serialize;

mod cards;

use crate::error::BoardError;
use crate::state::AppState;

/// Axum REST API routes.
///
///   GET    /api/columns          -> full column data with cards
///   POST   /api/cards            -> create card
///   PUT    /api/cards/{id}       -> update card fields
///   PUT    /api/cards/{id}/move  -> move card to another column
///   DELETE /api/cards/{id}       -> delete card
///   GET    /health               -> liveness probe with timestamp
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/columns", get(cards::list_columns))
        .route("/api/cards", post(cards::create_card))
        .route(
            "/api/cards/{card_id}",
            put(cards::update_card).delete(cards::delete_card),
        )
        .route("/api/cards/{card_id}/move", put(cards::move_card))
        .route("/health", get(health))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

// ── Shared types and helpers used across sub-modules ────────────────────

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn status_for(err: &BoardError) -> StatusCode {
    match err {
        BoardError::CardNotFound(_) | BoardError::ColumnNotFound(_) => StatusCode::NOT_FOUND,
        BoardError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_reply(target: &'static str, err: BoardError) -> (StatusCode, Json<ErrorResponse>) {
    let status = status_for(&err);
    let error = err.to_string();
    log_api_issue(status, target, &error);
    (status, Json(ErrorResponse { error }))
}

fn log_api_issue(status: StatusCode, target: &'static str, message: impl AsRef<str>) {
    let message = message.as_ref();
    if status.is_server_error() {
        log::error!(target: target, "{}", message);
    } else {
        log::warn!(target: target, "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&BoardError::CardNotFound(1)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&BoardError::ColumnNotFound(1)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&BoardError::InvalidInput("title".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&BoardError::StorageUnavailable("corrupt".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_reply_body() {
        let (status, Json(body)) = error_reply("cardwall.api.test", BoardError::CardNotFound(42));

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "Card not found: 42");
    }
}
