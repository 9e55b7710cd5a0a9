//! 凭据存储模块
//!
//! 持久化保存单个 Admin API Key

mod error;
mod storage;
mod store;

pub use error::StorageError;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{CREDENTIAL_KEY, CredentialStore, mask_key};
