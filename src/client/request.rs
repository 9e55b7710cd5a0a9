//! 请求描述

use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::Method;

use super::error::ApiError;

/// 单次请求的可选参数
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP 方法，默认 GET
    pub method: Method,
    /// 附加请求头（`X-API-Key` 由客户端注入，不以此处为准）
    pub headers: HeaderMap,
    /// 请求体
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get() -> Self {
        Self::default()
    }

    pub fn post() -> Self {
        Self::default().method(Method::POST)
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// 添加请求头
    pub fn header(mut self, name: &str, value: &str) -> Result<Self, ApiError> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ApiError::InvalidHeader(format!("{}: {}", name, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ApiError::InvalidHeader(format!("{}: {}", name, e)))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// 以 JSON 序列化请求体并设置 `Content-Type: application/json`
    pub fn json_body<T: serde::Serialize>(mut self, body: &T) -> Result<Self, serde_json::Error> {
        self.headers.insert(
            http::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        self.body = Some(serde_json::to_string(body)?);
        Ok(self)
    }
}

/// 已完成凭据注入、等待发送的请求
///
/// 凭据在构造时读取一次，之后凭据存储的变化不会影响此请求。
#[derive(Debug)]
pub struct PreparedRequest {
    pub(crate) request: reqwest::Request,
}

impl PreparedRequest {
    pub fn method(&self) -> &Method {
        self.request.method()
    }

    pub fn url(&self) -> &reqwest::Url {
        self.request.url()
    }

    pub fn headers(&self) -> &HeaderMap {
        self.request.headers()
    }
}
