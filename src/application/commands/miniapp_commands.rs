//! MiniApp Commands

/// 提交小程序命令
#[derive(Debug, Clone)]
pub struct CreateMiniApp {
    pub name: String,
    pub description: String,
    pub url: String,
    pub icon: Option<String>,
    pub author: Option<String>,
    pub tags: Vec<String>,
}
