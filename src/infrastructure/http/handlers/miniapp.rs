//! MiniApp HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{CreateMiniApp, ListMiniApps};
use crate::infrastructure::http::dto::{CreateMiniAppRequest, CreatedResponse, ItemsResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::ApiJson;
use crate::infrastructure::http::state::AppState;

/// 提交小程序
pub async fn create_miniapp(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateMiniAppRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let id = state
        .create_miniapp_handler
        .handle(CreateMiniApp::from(req))
        .await?;

    Ok(Json(CreatedResponse::new(id)))
}

/// 列出小程序（最多 100 个）
pub async fn list_miniapps(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ItemsResponse>, ApiError> {
    let items = state.list_miniapps_handler.handle(ListMiniApps).await?;
    Ok(Json(ItemsResponse::new(items)))
}
