//! Sled-based Document Store Implementation
//!
//! 每个集合对应一个 sled Tree，文档以 JSON 存储
//! key 为 UUID v7 字节，Tree 的自然顺序即创建顺序（毫秒精度）

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use sled::Db;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::ports::{
    Document, DocumentFilter, DocumentStorePort, StoreError, StoredDocument,
};

/// sled 内部默认 Tree 名，不作为集合暴露
const DEFAULT_TREE_NAME: &[u8] = b"__sled__default";

/// Sled 文档存储配置
#[derive(Debug, Clone)]
pub struct SledStoreConfig {
    /// 数据库目录
    pub db_path: PathBuf,
    /// 数据库名
    pub name: String,
}

impl SledStoreConfig {
    /// 由连接位置和数据库名组合出目录：`<url>/<name>`
    pub fn new(url: impl AsRef<Path>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            db_path: url.as_ref().join(&name),
            name,
        }
    }
}

/// Sled 文档存储
pub struct SledDocumentStore {
    db: Db,
    name: String,
}

impl SledDocumentStore {
    /// 打开（或创建）文档存储
    pub fn new(config: &SledStoreConfig) -> Result<Self, StoreError> {
        let db = sled::open(&config.db_path).map_err(|e| StoreError::Unavailable(e.to_string()))?;

        tracing::info!(
            db_path = %config.db_path.display(),
            name = %config.name,
            "SledDocumentStore initialized"
        );

        Ok(Self {
            db,
            name: config.name.clone(),
        })
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 刷新数据库
    pub fn flush(&self) -> Result<(), StoreError> {
        self.db
            .flush()
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    fn check_collection(collection: &str) -> Result<(), StoreError> {
        if collection.is_empty() || collection.as_bytes() == DEFAULT_TREE_NAME {
            return Err(StoreError::InvalidCollection(collection.to_string()));
        }
        Ok(())
    }

    fn has_collection(&self, collection: &str) -> bool {
        self.db
            .tree_names()
            .iter()
            .any(|name| &name[..] == collection.as_bytes())
    }

    fn decode(key: &[u8], value: &[u8]) -> Result<StoredDocument, StoreError> {
        let id = Uuid::from_slice(key)
            .map_err(|e| StoreError::SerializationError(format!("invalid document key: {}", e)))?;
        let fields: Document = serde_json::from_slice(value)
            .map_err(|e| StoreError::SerializationError(e.to_string()))?;

        Ok(StoredDocument {
            id: id.to_string(),
            fields,
        })
    }
}

#[async_trait]
impl DocumentStorePort for SledDocumentStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn create(&self, collection: &str, mut document: Document) -> Result<String, StoreError> {
        Self::check_collection(collection)?;

        let tree = self
            .db
            .open_tree(collection)
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        // id 只在这里分配，调用方传入的 id 字段一律丢弃
        document.remove("id");
        document.remove("_id");

        let now = Value::String(Utc::now().to_rfc3339());
        document.insert("created_at".to_string(), now.clone());
        document.insert("updated_at".to_string(), now);

        let bytes = serde_json::to_vec(&document)
            .map_err(|e| StoreError::SerializationError(e.to_string()))?;

        let id = Uuid::now_v7();
        tree.insert(id.as_bytes(), bytes)
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;
        tree.flush()
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        tracing::debug!(collection = %collection, id = %id, "Document created");

        Ok(id.to_string())
    }

    async fn list(
        &self,
        collection: &str,
        filter: &DocumentFilter,
        limit: usize,
    ) -> Result<Vec<StoredDocument>, StoreError> {
        Self::check_collection(collection)?;

        // 只读操作不创建集合
        if limit == 0 || !self.has_collection(collection) {
            return Ok(Vec::new());
        }

        let tree = self
            .db
            .open_tree(collection)
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        let mut documents = Vec::new();
        for item in tree.iter() {
            let (key, value) = item.map_err(|e| StoreError::DatabaseError(e.to_string()))?;
            let document = Self::decode(&key, &value)?;
            if filter.matches(&document.fields) {
                documents.push(document);
                if documents.len() >= limit {
                    break;
                }
            }
        }

        tracing::debug!(
            collection = %collection,
            count = documents.len(),
            limit = limit,
            "Documents listed"
        );

        Ok(documents)
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        let mut names = Vec::new();
        for name in self.db.tree_names() {
            if &name[..] == DEFAULT_TREE_NAME {
                continue;
            }
            let name = String::from_utf8(name.to_vec())
                .map_err(|e| StoreError::SerializationError(e.to_string()))?;
            names.push(name);
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;
    use tempfile::tempdir;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn open_store(dir: &Path) -> SledDocumentStore {
        SledDocumentStore::new(&SledStoreConfig::new(dir, "test")).unwrap()
    }

    #[test]
    fn test_config_joins_url_and_name() {
        let config = SledStoreConfig::new("/data/store", "miniapps");
        assert_eq!(config.db_path, PathBuf::from("/data/store/miniapps"));
        assert_eq!(config.name, "miniapps");
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let dir = tempdir().unwrap();
        let store = open_store(dir.path());

        let id = store
            .create("miniapp", doc(json!({"name": "Coin Flip"})))
            .await
            .unwrap();
        assert!(!id.is_empty());

        let items = store
            .list("miniapp", &DocumentFilter::all(), 100)
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, id);
        assert_eq!(items[0].fields["name"], json!("Coin Flip"));
        assert!(items[0].fields.contains_key("created_at"));
        assert!(items[0].fields.contains_key("updated_at"));
    }

    #[tokio::test]
    async fn test_ids_are_unique_and_caller_ids_ignored() {
        let dir = tempdir().unwrap();
        let store = open_store(dir.path());

        let mut ids = HashSet::new();
        for i in 0..20 {
            let id = store
                .create("transferlog", doc(json!({"n": i, "id": "forged", "_id": "forged"})))
                .await
                .unwrap();
            assert!(ids.insert(id));
        }
        assert!(!ids.contains("forged"));

        let items = store
            .list("transferlog", &DocumentFilter::all(), 100)
            .await
            .unwrap();
        assert_eq!(items.len(), 20);
        assert!(items.iter().all(|d| !d.fields.contains_key("id")));
        assert!(items.iter().all(|d| !d.fields.contains_key("_id")));
    }

    #[tokio::test]
    async fn test_list_respects_limit_and_order() {
        let dir = tempdir().unwrap();
        let store = open_store(dir.path());

        for i in 0..10 {
            store
                .create("transferlog", doc(json!({"n": i})))
                .await
                .unwrap();
            // 跨毫秒，保证 v7 时间戳递增
            tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        }

        let items = store
            .list("transferlog", &DocumentFilter::all(), 5)
            .await
            .unwrap();
        assert_eq!(items.len(), 5);
        let ns: Vec<i64> = items
            .iter()
            .map(|d| d.fields["n"].as_i64().unwrap())
            .collect();
        assert_eq!(ns, vec![0, 1, 2, 3, 4]);

        let none = store
            .list("transferlog", &DocumentFilter::all(), 0)
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_list_with_filter() {
        let dir = tempdir().unwrap();
        let store = open_store(dir.path());

        store
            .create("transferlog", doc(json!({"network": "devnet"})))
            .await
            .unwrap();
        store
            .create("transferlog", doc(json!({"network": "mainnet-beta"})))
            .await
            .unwrap();

        let filter = DocumentFilter::all().eq("network", "devnet");
        let items = store.list("transferlog", &filter, 50).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].fields["network"], json!("devnet"));
    }

    #[tokio::test]
    async fn test_list_missing_collection_does_not_create_it() {
        let dir = tempdir().unwrap();
        let store = open_store(dir.path());

        let items = store
            .list("miniapp", &DocumentFilter::all(), 100)
            .await
            .unwrap();
        assert!(items.is_empty());
        assert!(store.collection_names().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_collection_names() {
        let dir = tempdir().unwrap();
        let store = open_store(dir.path());

        store.create("transferlog", Document::new()).await.unwrap();
        store.create("miniapp", Document::new()).await.unwrap();

        let names = store.collection_names().await.unwrap();
        assert_eq!(names, vec!["miniapp".to_string(), "transferlog".to_string()]);
        assert_eq!(store.name(), "test");
    }

    #[tokio::test]
    async fn test_invalid_collection_name() {
        let dir = tempdir().unwrap();
        let store = open_store(dir.path());

        let result = store.create("", Document::new()).await;
        assert!(matches!(result, Err(StoreError::InvalidCollection(_))));

        let result = store
            .list("__sled__default", &DocumentFilter::all(), 10)
            .await;
        assert!(matches!(result, Err(StoreError::InvalidCollection(_))));
    }

    #[tokio::test]
    async fn test_documents_survive_reopen() {
        let dir = tempdir().unwrap();
        let id = {
            let store = open_store(dir.path());
            let id = store
                .create("miniapp", doc(json!({"name": "Persisted"})))
                .await
                .unwrap();
            store.flush().unwrap();
            id
        };

        let store = open_store(dir.path());
        let items = store
            .list("miniapp", &DocumentFilter::all(), 100)
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, id);
    }
}
