use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::http_client::ProxyConfig;

/// 服务端允许的用户列表上限
pub const MAX_USER_LIST_LIMIT: u32 = 200;

/// 管理面板客户端配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PanelConfig {
    /// Admin API 地址
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API Key 持久化文件路径
    #[serde(default = "default_state_file")]
    pub state_file: String,

    /// 用户列表默认数量
    #[serde(default = "default_user_list_limit")]
    pub user_list_limit: u32,

    /// 默认封禁天数
    #[serde(default = "default_ban_days")]
    pub default_ban_days: u32,

    /// HTTP 代理地址（可选）
    /// 支持格式: http://host:port, https://host:port, socks5://host:port
    #[serde(default)]
    pub proxy_url: Option<String>,

    /// 代理认证用户名（可选）
    #[serde(default)]
    pub proxy_username: Option<String>,

    /// 代理认证密码（可选）
    #[serde(default)]
    pub proxy_password: Option<String>,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_state_file() -> String {
    "config/panel_state.json".to_string()
}

fn default_user_list_limit() -> u32 {
    100
}

fn default_ban_days() -> u32 {
    7
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            state_file: default_state_file(),
            user_list_limit: default_user_list_limit(),
            default_ban_days: default_ban_days(),
            proxy_url: None,
            proxy_username: None,
            proxy_password: None,
        }
    }
}

impl PanelConfig {
    /// 获取默认配置文件路径
    pub fn default_config_path() -> &'static str {
        "config/panel.json"
    }

    /// 从文件加载配置
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            // 配置文件不存在，返回默认配置
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: PanelConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// 保存配置到文件
    pub fn save<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 构建代理配置
    pub fn proxy_config(&self) -> Option<ProxyConfig> {
        self.proxy_url
            .as_ref()
            .filter(|url| !url.trim().is_empty())
            .map(|url| {
                let mut proxy = ProxyConfig::new(url);
                if let (Some(username), Some(password)) = (&self.proxy_username, &self.proxy_password)
                {
                    proxy = proxy.with_auth(username, password);
                }
                proxy
            })
    }

    /// 验证配置有效性
    ///
    /// 返回所有发现的问题，而不是遇到第一个就停止
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            errors.push(format!(
                "baseUrl 格式不正确: {}，应以 http:// 或 https:// 开头",
                self.base_url
            ));
        }

        if self.state_file.trim().is_empty() {
            errors.push("stateFile 不能为空".to_string());
        }

        if self.user_list_limit == 0 || self.user_list_limit > MAX_USER_LIST_LIMIT {
            errors.push(format!(
                "userListLimit 超出范围: {}，应在 1..={} 之间",
                self.user_list_limit, MAX_USER_LIST_LIMIT
            ));
        }

        // 检查代理 URL 格式
        if let Some(ref proxy_url) = self.proxy_url {
            if !proxy_url.is_empty()
                && !proxy_url.starts_with("http://")
                && !proxy_url.starts_with("https://")
                && !proxy_url.starts_with("socks5://")
            {
                errors.push(format!(
                    "proxyUrl 格式不正确: {}，应以 http://、https:// 或 socks5:// 开头",
                    proxy_url
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
