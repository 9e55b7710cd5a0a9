//! 键值持久化存储
//!
//! 凭据存储只依赖 [`KeyValueStorage`] 接口，具体介质由调用方注入：
//! - [`MemoryStorage`]：进程内存，适用于测试和临时会话
//! - [`FileStorage`]：JSON 文件，跨进程持久化

use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::StorageError;

/// 字符串键值存储接口
pub trait KeyValueStorage: Send + Sync {
    /// 读取值，不存在时返回 None
    fn get_item(&self, key: &str) -> Option<String>;

    /// 写入值（覆盖）
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// 内存存储
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.read().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON 文件存储
///
/// 打开时整体加载到内存，每次写入立即落盘。文件中与本程序无关的键原样保留。
#[derive(Debug)]
pub struct FileStorage {
    items: RwLock<Map<String, Value>>,
    file_path: PathBuf,
}

impl FileStorage {
    /// 打开存储文件（文件不存在或为空时视为空存储）
    pub fn open<P: AsRef<Path>>(file_path: P) -> Result<Self, StorageError> {
        let file_path = file_path.as_ref().to_path_buf();
        let items = Self::load_from_file(&file_path)?;

        Ok(Self {
            items: RwLock::new(items),
            file_path,
        })
    }

    /// 存储文件路径
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<Map<String, Value>, StorageError> {
        if !path.exists() {
            return Ok(Map::new());
        }

        let content = fs::read_to_string(path).map_err(|source| StorageError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        serde_json::from_str(&content).map_err(|source| StorageError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    fn persist(&self, items: &Map<String, Value>) -> Result<(), StorageError> {
        // 确保目录存在
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let content = serde_json::to_string_pretty(items)?;
        fs::write(&self.file_path, content).map_err(|source| StorageError::Write {
            path: self.file_path.clone(),
            source,
        })
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        match self.items.read().get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.write();

        // 落盘成功后才更新内存，写入失败时保留旧值
        let mut updated = items.clone();
        updated.insert(key.to_string(), Value::String(value.to_string()));
        self.persist(&updated)?;

        *items = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("k"), None);

        storage.set_item("k", "v1").unwrap();
        storage.set_item("k", "v2").unwrap();
        assert_eq!(storage.get_item("k"), Some("v2".to_string()));
    }

    #[test]
    fn test_file_storage_missing_file() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("state.json")).unwrap();
        assert_eq!(storage.get_item("panel_api_key"), None);
    }

    #[test]
    fn test_file_storage_blank_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "  \n").unwrap();

        let storage = FileStorage::open(&path).unwrap();
        assert_eq!(storage.get_item("panel_api_key"), None);
    }

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let storage = FileStorage::open(&path).unwrap();
        storage.set_item("panel_api_key", "secret").unwrap();
        drop(storage);

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.get_item("panel_api_key"), Some("secret".to_string()));
    }

    #[test]
    fn test_file_storage_preserves_other_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, r#"{"theme":"dark","count":3}"#).unwrap();

        let storage = FileStorage::open(&path).unwrap();
        storage.set_item("panel_api_key", "k").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let value: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["theme"], "dark");
        assert_eq!(value["count"], 3);
        assert_eq!(value["panel_api_key"], "k");
        assert_eq!(storage.get_item("count"), Some("3".to_string()));
    }

    #[test]
    fn test_file_storage_failed_write_keeps_old_value() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");

        let storage = FileStorage::open(&path).unwrap();
        storage.set_item("panel_api_key", "old").unwrap();

        // 用目录替换存储文件，使后续写入失败
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        let err = storage.set_item("panel_api_key", "new").unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
        assert_eq!(storage.get_item("panel_api_key"), Some("old".to_string()));
    }

    #[test]
    fn test_file_storage_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "not json").unwrap();

        let err = FileStorage::open(&path).unwrap_err();
        assert!(err.is_malformed());
    }
}
