//! Admin API 端点封装
//!
//! # 端点
//! - `GET /api/health` - 健康检查
//! - `GET /api/users?limit=N` - 用户列表
//! - `POST /api/user/{id}/ban` - 封禁用户
//! - `POST /api/user/{id}/unban` - 解封用户

mod service;
pub mod types;

pub use service::PanelService;
pub use types::{BanRequest, UserSummary};
