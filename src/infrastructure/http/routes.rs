//! HTTP Routes
//!
//! API Endpoints:
//! - /                      GET   存活检查
//! - /api/miniapps          POST  提交小程序
//! - /api/miniapps          GET   列出小程序（最多 100）
//! - /api/transfers/log     POST  记录转账
//! - /api/transfers         GET   列出转账日志（?limit=N，默认 50）
//! - /test                  GET   数据库诊断

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::root))
        .route("/test", get(handlers::diagnostic))
        .nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/miniapps",
            get(handlers::list_miniapps).post(handlers::create_miniapp),
        )
        .route("/transfers", get(handlers::list_transfers))
        .route("/transfers/log", post(handlers::log_transfer))
}
