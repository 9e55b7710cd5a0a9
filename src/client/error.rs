//! API 客户端错误类型定义

use super::envelope::Envelope;

/// API 调用错误
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 网络层失败（DNS、连接被拒绝、读取响应体失败等）
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// 服务端返回非 2xx 状态码
    #[error("HTTP {status}: {envelope}")]
    Http { status: u16, envelope: Envelope },

    /// Base URL 无法解析
    #[error("Base URL 无效: {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// 请求头名称或值不合法
    #[error("请求头无效: {0}")]
    InvalidHeader(String),

    /// 请求体序列化失败
    #[error("请求体序列化失败: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP 状态码（仅 Http 错误）
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 检查是否为 HTTP 状态错误
    pub fn is_http(&self) -> bool {
        matches!(self, ApiError::Http { .. })
    }

    /// 检查是否为网络层错误
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}
