//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::{CreateMiniApp, LogTransfer, StoredDocument};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 创建成功
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub ok: bool,
    pub id: String,
}

impl CreatedResponse {
    pub fn new(id: String) -> Self {
        Self { ok: true, id }
    }
}

/// 列表响应
#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub ok: bool,
    pub items: Vec<StoredDocument>,
}

impl ItemsResponse {
    pub fn new(items: Vec<StoredDocument>) -> Self {
        Self { ok: true, items }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// MiniApp DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateMiniAppRequest {
    pub name: String,
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    /// null 与缺省都视为空
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl From<CreateMiniAppRequest> for CreateMiniApp {
    fn from(req: CreateMiniAppRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            url: req.url,
            icon: req.icon,
            author: req.author,
            tags: req.tags.unwrap_or_default(),
        }
    }
}

// ============================================================================
// Transfer DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LogTransferRequest {
    pub from_pubkey: String,
    pub to_pubkey: String,
    pub amount_sol: f64,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl From<LogTransferRequest> for LogTransfer {
    fn from(req: LogTransferRequest) -> Self {
        Self {
            from_pubkey: req.from_pubkey,
            to_pubkey: req.to_pubkey,
            amount_sol: req.amount_sol,
            signature: req.signature,
            network: req.network,
            note: req.note,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListTransfersParams {
    pub limit: Option<usize>,
}

// ============================================================================
// Diagnostic DTOs
// ============================================================================

/// /test 诊断响应
#[derive(Debug, Serialize)]
pub struct DiagnosticResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}
