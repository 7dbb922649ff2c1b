//! Transfer HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{ListTransfers, LogTransfer};
use crate::infrastructure::http::dto::{
    CreatedResponse, ItemsResponse, ListTransfersParams, LogTransferRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{ApiJson, ApiQuery};
use crate::infrastructure::http::state::AppState;

/// 记录一次转账（签名在客户端完成）
pub async fn log_transfer(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<LogTransferRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let id = state
        .log_transfer_handler
        .handle(LogTransfer::from(req))
        .await?;

    Ok(Json(CreatedResponse::new(id)))
}

/// 列出转账日志，默认 50 条
pub async fn list_transfers(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<ListTransfersParams>,
) -> Result<Json<ItemsResponse>, ApiError> {
    let items = state
        .list_transfers_handler
        .handle(ListTransfers {
            limit: params.limit,
        })
        .await?;

    Ok(Json(ItemsResponse::new(items)))
}
