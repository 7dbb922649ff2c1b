//! Diagnostic Handler
//!
//! 报告 API 与数据库状态，本接口永不返回错误

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{InspectStore, StoreStatus};
use crate::infrastructure::http::dto::DiagnosticResponse;
use crate::infrastructure::http::state::AppState;

/// 错误信息截断长度
const ERROR_PREVIEW_CHARS: usize = 50;

fn set_or_not(is_set: bool) -> String {
    let label = if is_set { "✅ Set" } else { "❌ Not Set" };
    label.to_string()
}

fn preview(error: &str) -> String {
    error.chars().take(ERROR_PREVIEW_CHARS).collect()
}

/// GET /test
pub async fn diagnostic(State(state): State<Arc<AppState>>) -> Json<DiagnosticResponse> {
    let status = state.inspect_store_handler.handle(InspectStore).await;

    let (database, connection_status, collections) = match status {
        StoreStatus::NotInitialized => (
            "⚠️  Available but not initialized".to_string(),
            "Not Connected",
            Vec::new(),
        ),
        StoreStatus::Connected { collections, .. } => (
            "✅ Connected & Working".to_string(),
            "Connected",
            collections,
        ),
        StoreStatus::Degraded { error, .. } => (
            format!("⚠️  Connected but Error: {}", preview(&error)),
            "Connected",
            Vec::new(),
        ),
    };

    Json(DiagnosticResponse {
        backend: "✅ Running".to_string(),
        database,
        database_url: set_or_not(state.database.url_is_set()),
        database_name: set_or_not(state.database.name_is_set()),
        connection_status: connection_status.to_string(),
        collections,
    })
}
