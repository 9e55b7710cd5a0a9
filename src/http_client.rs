//! HTTP Client 构建模块
//!
//! 提供统一的 reqwest Client 构建，支持 http/https/socks5 代理

use reqwest::{Client, Proxy};

/// 代理配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// 代理地址，支持 http/https/socks5
    pub url: String,
    /// 代理认证用户名
    pub username: Option<String>,
    /// 代理认证密码
    pub password: Option<String>,
}

impl ProxyConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: None,
            password: None,
        }
    }

    /// 设置认证信息
    pub fn with_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }
}

/// 构建 HTTP Client
///
/// 不设置超时：请求的完成与否完全由底层传输决定。
pub fn build_client(proxy: Option<&ProxyConfig>) -> reqwest::Result<Client> {
    let mut builder = Client::builder().use_rustls_tls();

    if let Some(proxy_config) = proxy {
        let mut proxy = Proxy::all(proxy_config.url.as_str())?;

        // 设置代理认证
        if let (Some(username), Some(password)) = (&proxy_config.username, &proxy_config.password)
        {
            proxy = proxy.basic_auth(username, password);
        }

        builder = builder.proxy(proxy);
        tracing::debug!("HTTP Client 使用代理: {}", proxy_config.url);
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proxy_config_with_auth() {
        let proxy = ProxyConfig::new("socks5://127.0.0.1:1080").with_auth("user", "pass");
        assert_eq!(proxy.url, "socks5://127.0.0.1:1080");
        assert_eq!(proxy.username.as_deref(), Some("user"));
        assert_eq!(proxy.password.as_deref(), Some("pass"));
    }

    #[test]
    fn test_build_client_without_proxy() {
        assert!(build_client(None).is_ok());
    }

    #[test]
    fn test_build_client_with_proxy() {
        let proxy = ProxyConfig::new("http://127.0.0.1:7890");
        assert!(build_client(Some(&proxy)).is_ok());
    }
}
