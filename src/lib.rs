//! Panel Client Library
//!
//! 提供 Admin API 客户端功能和 API Key 凭据管理

pub mod client;
pub mod credential;
pub mod http_client;
pub mod model;
pub mod panel;

pub use client::{ApiClient, ApiError, Envelope, RequestOptions};
pub use credential::{CredentialStore, FileStorage, KeyValueStorage, MemoryStorage};
pub use panel::{BanRequest, PanelService, UserSummary};
