//! Transfer Context - 转账日志
//!
//! 签名在客户端完成，这里只记录转账元数据

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::schema::{self, SchemaError};

/// 集合名
pub const COLLECTION: &str = "transferlog";

/// 默认网络
pub const DEFAULT_NETWORK: &str = "mainnet-beta";

/// 列表接口默认返回数量
pub const DEFAULT_LIST_LIMIT: usize = 50;

/// 列表接口允许的最大 limit
pub const MAX_LIST_LIMIT: usize = 1000;

fn default_network() -> String {
    DEFAULT_NETWORK.to_string()
}

/// 一次转账的日志记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TransferLog {
    /// 发送方钱包地址 (base58)
    pub from_pubkey: String,

    /// 接收方钱包地址 (base58)
    pub to_pubkey: String,

    /// 金额（SOL），必须大于 0
    #[validate(range(exclusive_min = 0.0, message = "amount_sol must be greater than 0"))]
    pub amount_sol: f64,

    /// 交易签名（客户端签名成功时才有）
    pub signature: Option<String>,

    /// 集群: devnet / testnet / mainnet-beta
    #[serde(default = "default_network")]
    pub network: String,

    /// 备注
    pub note: Option<String>,
}

impl TransferLog {
    pub fn new(from_pubkey: impl Into<String>, to_pubkey: impl Into<String>, amount_sol: f64) -> Self {
        Self {
            from_pubkey: from_pubkey.into(),
            to_pubkey: to_pubkey.into(),
            amount_sol,
            signature: None,
            network: default_network(),
            note: None,
        }
    }

    /// 按 schema 校验
    pub fn validated(self) -> Result<Self, SchemaError> {
        schema::validate(self)
    }
}

/// 将请求中的 limit 规整到允许范围
pub fn effective_limit(requested: Option<usize>) -> usize {
    requested.unwrap_or(DEFAULT_LIST_LIMIT).min(MAX_LIST_LIMIT)
}
