//! Transfer Commands

/// 记录转账命令
#[derive(Debug, Clone)]
pub struct LogTransfer {
    pub from_pubkey: String,
    pub to_pubkey: String,
    pub amount_sol: f64,
    pub signature: Option<String>,
    /// 为空时使用 mainnet-beta
    pub network: Option<String>,
    pub note: Option<String>,
}
