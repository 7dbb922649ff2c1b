//! Application State
//!
//! 启动时构造一次，请求间只读共享

use crate::application::{
    // Command handlers
    CreateMiniAppHandler, LogTransferHandler,
    // Query handlers
    InspectStoreHandler, ListMiniAppsHandler, ListTransfersHandler,
    // Ports
    StoreHandle,
};
use crate::config::DatabaseConfig;

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub store: StoreHandle,

    /// 数据库连接参数（诊断接口使用）
    pub database: DatabaseConfig,

    // ========== Command Handlers ==========
    pub create_miniapp_handler: CreateMiniAppHandler,
    pub log_transfer_handler: LogTransferHandler,

    // ========== Query Handlers ==========
    pub list_miniapps_handler: ListMiniAppsHandler,
    pub list_transfers_handler: ListTransfersHandler,
    pub inspect_store_handler: InspectStoreHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(store: StoreHandle, database: DatabaseConfig) -> Self {
        Self {
            store: store.clone(),
            database,

            // Command handlers
            create_miniapp_handler: CreateMiniAppHandler::new(store.clone()),
            log_transfer_handler: LogTransferHandler::new(store.clone()),

            // Query handlers
            list_miniapps_handler: ListMiniAppsHandler::new(store.clone()),
            list_transfers_handler: ListTransfersHandler::new(store.clone()),
            inspect_store_handler: InspectStoreHandler::new(store),
        }
    }
}
