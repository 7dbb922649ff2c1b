//! Mini App Store - 小程序商店与转账日志服务

use std::sync::Arc;

use miniapp_store::application::StoreHandle;
use miniapp_store::config::{load_config, print_config, LogConfig};
use miniapp_store::infrastructure::http::{AppState, HttpServer};
use miniapp_store::infrastructure::persistence::{SledDocumentStore, SledStoreConfig};

fn init_tracing(log: &LogConfig) {
    let log_filter = format!(
        "{},miniapp_store={},tower_http=debug",
        log.level, log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：平台环境变量 > MINIAPP_ 环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Mini App Store API");
    print_config(&config);

    // 打开文档存储（启动时获取一次，关闭时刷新）
    let sled_store = match config.database.connection() {
        Some((url, name)) => match SledDocumentStore::new(&SledStoreConfig::new(url, name)) {
            Ok(store) => Some(store.arc()),
            Err(e) => {
                tracing::error!(error = %e, "Failed to open database, continuing without it");
                None
            }
        },
        None => {
            tracing::warn!("DATABASE_URL / DATABASE_NAME not set, database disabled");
            None
        }
    };

    let store = match &sled_store {
        Some(store) => StoreHandle::connected(store.clone()),
        None => StoreHandle::disconnected(),
    };

    let state = AppState::new(store, config.database.clone());
    let server = HttpServer::new(config.server.addr(), state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    if let Some(store) = sled_store {
        store.flush()?;
        tracing::info!("Database flushed");
    }

    tracing::info!("Server shutdown complete");

    Ok(())
}
