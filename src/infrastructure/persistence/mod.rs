//! Persistence Layer - 数据持久化
//!
//! Sled 文档存储实现

pub mod sled;

pub use self::sled::{SledDocumentStore, SledStoreConfig};
