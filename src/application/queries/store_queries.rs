//! Store Queries

/// 检查存储连接状态
#[derive(Debug, Clone)]
pub struct InspectStore;
