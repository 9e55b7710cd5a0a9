//! 凭据存储
//!
//! 保存 Admin API Key，读写都经过注入的 [`KeyValueStorage`]。

use std::sync::Arc;

use super::error::StorageError;
use super::storage::{KeyValueStorage, MemoryStorage};

/// API Key 在存储中的固定键名
pub const CREDENTIAL_KEY: &str = "panel_api_key";

/// 凭据存储句柄
///
/// 克隆后共享同一份底层存储，任一句柄 `set` 后其他句柄立即可见。
#[derive(Clone)]
pub struct CredentialStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl CredentialStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// 基于内存存储创建
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// 读取凭据，从未设置时返回空字符串
    pub fn get(&self) -> String {
        self.storage.get_item(CREDENTIAL_KEY).unwrap_or_default()
    }

    /// 覆盖凭据（不做格式校验，空字符串表示"无凭据"）
    pub fn set(&self, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(CREDENTIAL_KEY, value)?;
        tracing::info!("API Key 已更新: {}", mask_key(value));
        Ok(())
    }

    /// 清除凭据
    pub fn clear(&self) -> Result<(), StorageError> {
        self.set("")
    }

    /// 是否已设置非空凭据
    pub fn is_set(&self) -> bool {
        !self.get().is_empty()
    }

    /// 脱敏后的凭据
    pub fn masked(&self) -> String {
        mask_key(&self.get())
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("credential", &self.masked())
            .finish()
    }
}

/// 脱敏显示（只显示前 8 位）
pub fn mask_key(key: &str) -> String {
    if key.is_empty() {
        return "(未设置)".to_string();
    }

    match key.char_indices().nth(8) {
        Some((idx, _)) => format!("{}***", &key[..idx]),
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_before_set_is_empty() {
        let store = CredentialStore::in_memory();
        assert_eq!(store.get(), "");
        assert!(!store.is_set());
    }

    #[test]
    fn test_set_then_get() {
        let store = CredentialStore::in_memory();
        for value in ["secret", "  padded  ", "ключ-🔑", ""] {
            store.set(value).unwrap();
            assert_eq!(store.get(), value);
        }
    }

    #[test]
    fn test_clones_share_storage() {
        let store = CredentialStore::in_memory();
        let other = store.clone();

        store.set("shared").unwrap();
        assert_eq!(other.get(), "shared");

        other.clear().unwrap();
        assert_eq!(store.get(), "");
    }

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key(""), "(未设置)");
        assert_eq!(mask_key("short"), "***");
        assert_eq!(mask_key("12345678"), "***");
        assert_eq!(mask_key("sk-abcdefghijk"), "sk-abcde***");
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let store = CredentialStore::in_memory();
        store.set("sk-very-secret-value").unwrap();
        let debug = format!("{:?}", store);
        assert!(!debug.contains("secret-value"));
    }
}
