//! MiniApp Queries

/// 列出小程序（固定上限 100）
#[derive(Debug, Clone)]
pub struct ListMiniApps;
