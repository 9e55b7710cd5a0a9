//! 凭据存储错误类型定义

use std::path::PathBuf;

/// 存储操作错误
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// 存储文件读取失败
    #[error("读取存储文件失败: {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 存储文件写入失败
    #[error("写入存储文件失败: {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 存储文件格式错误
    #[error("存储文件格式错误: {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON 错误
    #[error("JSON 错误: {0}")]
    Json(#[from] serde_json::Error),
}

impl StorageError {
    /// 检查是否为"格式错误"
    pub fn is_malformed(&self) -> bool {
        matches!(self, StorageError::Malformed { .. })
    }
}
