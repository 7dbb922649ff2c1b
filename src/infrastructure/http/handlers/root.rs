//! Root Handler
//!
//! 存活检查

use axum::Json;

use crate::infrastructure::http::dto::MessageResponse;

/// GET /
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Mini App Store API running".to_string(),
    })
}
