//! Store Query Handlers

use crate::application::ports::StoreHandle;
use crate::application::queries::InspectStore;

/// 最多展示的集合数
pub const MAX_LISTED_COLLECTIONS: usize = 10;

/// 存储状态
#[derive(Debug, Clone, PartialEq)]
pub enum StoreStatus {
    /// 未配置数据库
    NotInitialized,
    /// 已连接，集合内省成功
    Connected {
        database_name: String,
        collections: Vec<String>,
    },
    /// 已连接，但集合内省失败
    Degraded { database_name: String, error: String },
}

/// InspectStore Handler - 从不失败，错误折叠进状态
pub struct InspectStoreHandler {
    store: StoreHandle,
}

impl InspectStoreHandler {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _query: InspectStore) -> StoreStatus {
        let Ok(store) = self.store.get() else {
            return StoreStatus::NotInitialized;
        };

        let database_name = store.name().to_string();
        match store.collection_names().await {
            Ok(mut collections) => {
                collections.truncate(MAX_LISTED_COLLECTIONS);
                StoreStatus::Connected {
                    database_name,
                    collections,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to list collections");
                StoreStatus::Degraded {
                    database_name,
                    error: e.to_string(),
                }
            }
        }
    }
}
