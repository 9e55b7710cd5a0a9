//! Admin API 业务封装

use crate::client::{ApiClient, ApiError, Envelope, RequestOptions};

use super::types::{BanRequest, UserSummary};

/// Admin API 服务
///
/// 在 [`ApiClient`] 之上封装四个管理端点。
#[derive(Debug, Clone)]
pub struct PanelService {
    client: ApiClient,
}

impl PanelService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// GET /api/health
    pub async fn health(&self) -> Result<Envelope, ApiError> {
        self.client.request("/api/health", RequestOptions::get()).await
    }

    /// GET /api/users?limit=N
    pub async fn list_users(&self, limit: u32) -> Result<Vec<UserSummary>, ApiError> {
        let path = format!("/api/users?limit={}", limit);
        let envelope = self.client.request(&path, RequestOptions::get()).await?;
        Ok(UserSummary::from_envelope(&envelope))
    }

    /// POST /api/user/{id}/ban
    pub async fn ban_user(&self, user_id: &str, req: &BanRequest) -> Result<Envelope, ApiError> {
        let path = format!("/api/user/{}/ban", encode_user_id(user_id));
        let options = RequestOptions::post().json_body(req)?;
        self.client.request(&path, options).await
    }

    /// POST /api/user/{id}/unban
    pub async fn unban_user(&self, user_id: &str) -> Result<Envelope, ApiError> {
        let path = format!("/api/user/{}/unban", encode_user_id(user_id));
        self.client.request(&path, RequestOptions::post()).await
    }
}

fn encode_user_id(user_id: &str) -> String {
    urlencoding::encode(user_id.trim()).into_owned()
}
