//! Sled 文档存储

mod document_store;

pub use document_store::{SledDocumentStore, SledStoreConfig};
