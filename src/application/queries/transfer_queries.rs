//! Transfer Queries

/// 列出转账日志
#[derive(Debug, Clone, Default)]
pub struct ListTransfers {
    /// 为空时默认 50
    pub limit: Option<usize>,
}
