//! Admin API 客户端
//!
//! 每次调用执行一次带认证的 HTTP 交换：注入 `X-API-Key`、发送请求、
//! 将响应体归一化为 [`Envelope`]，非 2xx 状态统一转为 [`ApiError::Http`]。
//!
//! # 使用
//! ```ignore
//! let credentials = CredentialStore::new(Arc::new(FileStorage::open("config/panel_state.json")?));
//! let client = ApiClient::new("http://127.0.0.1:8000", credentials, None)?;
//! let health = client.request("/api/health", RequestOptions::get()).await?;
//! ```

mod envelope;
mod error;
mod request;

pub use envelope::Envelope;
pub use error::ApiError;
pub use request::{PreparedRequest, RequestOptions};

use http::header::{HeaderName, HeaderValue};
use reqwest::{Client, Url};

use crate::credential::{CredentialStore, mask_key};
use crate::http_client::{ProxyConfig, build_client};

/// 认证请求头名称
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Admin API 客户端
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    credentials: CredentialStore,
}

impl ApiClient {
    /// 创建客户端
    pub fn new(
        base_url: &str,
        credentials: CredentialStore,
        proxy: Option<&ProxyConfig>,
    ) -> Result<Self, ApiError> {
        let client = build_client(proxy)?;
        Self::with_client(client, base_url, credentials)
    }

    /// 使用已有的 reqwest Client 创建
    pub fn with_client(
        client: Client,
        base_url: &str,
        credentials: CredentialStore,
    ) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "不能作为 Base URL".to_string(),
            });
        }

        Ok(Self {
            client,
            base_url,
            credentials,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// 执行一次认证请求并返回归一化后的响应体
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Envelope, ApiError> {
        let prepared = self.prepare(path, options)?;
        self.send(prepared).await
    }

    /// 构造请求并注入当前凭据
    ///
    /// `path` 必须已经过百分号编码，这里只做拼接。
    pub fn prepare(&self, path: &str, options: RequestOptions) -> Result<PreparedRequest, ApiError> {
        let url = self.resolve(path)?;

        let mut headers = options.headers;
        let key = self.credentials.get();
        if !key.is_empty() {
            let value = HeaderValue::from_str(&key)
                .map_err(|e| ApiError::InvalidHeader(format!("{}: {}", API_KEY_HEADER, e)))?;
            headers.insert(HeaderName::from_static("x-api-key"), value);
        }

        let mut builder = self.client.request(options.method, url).headers(headers);
        if let Some(body) = options.body {
            builder = builder.body(body);
        }
        let request = builder.build()?;

        tracing::debug!(
            method = %request.method(),
            url = %request.url(),
            api_key = %mask_key(&key),
            "发送 Admin API 请求"
        );

        Ok(PreparedRequest { request })
    }

    /// 发送已构造的请求
    pub async fn send(&self, prepared: PreparedRequest) -> Result<Envelope, ApiError> {
        let response = self.client.execute(prepared.request).await?;

        let status = response.status();
        let text = response.text().await?;
        let envelope = Envelope::from_text(text);

        tracing::debug!(status = status.as_u16(), parsed = envelope.is_parsed(), "收到响应");

        if !status.is_success() {
            tracing::warn!("Admin API 返回错误状态: {}", status);
            return Err(ApiError::Http {
                status: status.as_u16(),
                envelope,
            });
        }

        Ok(envelope)
    }

    fn resolve(&self, path: &str) -> Result<Url, ApiError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let joined = if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        };

        Url::parse(&joined).map_err(|e| ApiError::InvalidBaseUrl {
            url: joined,
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with_key(key: &str) -> ApiClient {
        let credentials = CredentialStore::in_memory();
        credentials.set(key).unwrap();
        ApiClient::with_client(Client::new(), "http://127.0.0.1:8000", credentials).unwrap()
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ApiClient::with_client(Client::new(), "not a url", CredentialStore::in_memory())
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));

        let err = ApiClient::with_client(Client::new(), "mailto:a@b.c", CredentialStore::in_memory())
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_resolve_keeps_base_prefix() {
        let client = ApiClient::with_client(
            Client::new(),
            "http://example.com/panel/",
            CredentialStore::in_memory(),
        )
        .unwrap();

        let url = client.resolve("/api/users?limit=100").unwrap();
        assert_eq!(url.as_str(), "http://example.com/panel/api/users?limit=100");

        let url = client.resolve("api/health").unwrap();
        assert_eq!(url.as_str(), "http://example.com/panel/api/health");
    }

    #[test]
    fn test_prepare_injects_key() {
        let client = client_with_key("secret");
        let prepared = client.prepare("/api/health", RequestOptions::get()).unwrap();
        assert_eq!(prepared.headers()[API_KEY_HEADER], "secret");
        assert_eq!(*prepared.method(), http::Method::GET);
    }

    #[test]
    fn test_prepare_without_key_sends_no_header() {
        let client = client_with_key("");
        let prepared = client.prepare("/api/health", RequestOptions::get()).unwrap();
        assert!(prepared.headers().get(API_KEY_HEADER).is_none());
    }

    #[test]
    fn test_injected_key_overrides_caller_header() {
        let client = client_with_key("stored");
        let options = RequestOptions::get()
            .header("X-API-Key", "from-caller")
            .unwrap()
            .header("X-Trace", "1")
            .unwrap();

        let prepared = client.prepare("/api/health", options).unwrap();
        assert_eq!(prepared.headers()[API_KEY_HEADER], "stored");
        assert_eq!(prepared.headers()["x-trace"], "1");
    }

    #[test]
    fn test_caller_header_kept_when_no_key() {
        let client = client_with_key("");
        let options = RequestOptions::get().header("X-API-Key", "from-caller").unwrap();

        let prepared = client.prepare("/api/health", options).unwrap();
        assert_eq!(prepared.headers()[API_KEY_HEADER], "from-caller");
    }

    #[test]
    fn test_key_with_invalid_header_chars() {
        let client = client_with_key("bad\nkey");
        let err = client.prepare("/api/health", RequestOptions::get()).unwrap_err();
        assert!(matches!(err, ApiError::InvalidHeader(_)));
    }
}
