//! Document Store Port - 出站端口
//!
//! 按集合名寻址的文档存储抽象
//! 具体实现在 infrastructure 层（Sled）

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// 无 schema 的 JSON 文档
pub type Document = serde_json::Map<String, Value>;

/// 存储错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database not available: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid collection name: {0}")]
    InvalidCollection(String),
}

/// 查询条件 - 顶层字段相等匹配，空条件匹配全部
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentFilter {
    fields: Document,
}

impl DocumentFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn matches(&self, document: &Document) -> bool {
        self.fields
            .iter()
            .all(|(field, expected)| document.get(field) == Some(expected))
    }
}

/// 已持久化的文档（带存储分配的 id）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredDocument {
    pub id: String,
    #[serde(flatten)]
    pub fields: Document,
}

/// 文档存储端口
#[async_trait]
pub trait DocumentStorePort: Send + Sync {
    /// 数据库名
    fn name(&self) -> &str;

    /// 写入一个文档，返回新分配的唯一 id
    async fn create(&self, collection: &str, document: Document) -> Result<String, StoreError>;

    /// 按自然顺序返回最多 limit 个匹配的文档
    async fn list(
        &self,
        collection: &str,
        filter: &DocumentFilter,
        limit: usize,
    ) -> Result<Vec<StoredDocument>, StoreError>;

    /// 列出所有集合名
    async fn collection_names(&self) -> Result<Vec<String>, StoreError>;
}

/// 将记录序列化为文档（必须是 JSON 对象）
pub fn to_document<T: Serialize>(record: &T) -> Result<Document, StoreError> {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(StoreError::SerializationError(format!(
            "expected an object, got {}",
            other
        ))),
        Err(e) => Err(StoreError::SerializationError(e.to_string())),
    }
}

/// 存储句柄
///
/// 启动时构造一次，之后只读；未配置数据库时为空
#[derive(Clone, Default)]
pub struct StoreHandle {
    store: Option<Arc<dyn DocumentStorePort>>,
}

impl StoreHandle {
    pub fn connected(store: Arc<dyn DocumentStorePort>) -> Self {
        Self { store: Some(store) }
    }

    pub fn disconnected() -> Self {
        Self { store: None }
    }

    pub fn is_connected(&self) -> bool {
        self.store.is_some()
    }

    /// 获取存储，未连接时返回 Unavailable
    pub fn get(&self) -> Result<&Arc<dyn DocumentStorePort>, StoreError> {
        self.store
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("database is not configured".to_string()))
    }
}

impl std::fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreHandle")
            .field("connected", &self.is_connected())
            .finish()
    }
}
