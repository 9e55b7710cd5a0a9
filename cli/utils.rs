//! CLI 公共工具：加载配置、构建客户端、渲染输出

use anyhow::{Context, Result};
use std::sync::Arc;

use panel_client::model::config::PanelConfig;
use panel_client::panel::UserSummary;
use panel_client::{ApiClient, CredentialStore, FileStorage, PanelService};

/// 加载并验证配置
pub fn load_config(config_path: &str, base_url: Option<&str>) -> Result<PanelConfig> {
    let mut config = PanelConfig::load(config_path)
        .with_context(|| format!("加载配置文件失败: {}", config_path))?;

    if let Some(url) = base_url {
        config.base_url = url.to_string();
    }

    if let Err(errors) = config.validate() {
        anyhow::bail!("配置验证失败:\n  - {}", errors.join("\n  - "));
    }

    Ok(config)
}

/// 打开 API Key 存储
pub fn open_credentials(config: &PanelConfig) -> Result<CredentialStore> {
    let storage = FileStorage::open(&config.state_file)
        .with_context(|| format!("打开 API Key 存储失败: {}", config.state_file))?;
    Ok(CredentialStore::new(Arc::new(storage)))
}

/// 构建 Admin API 服务
pub fn build_service(config: &PanelConfig) -> Result<PanelService> {
    let credentials = open_credentials(config)?;
    if !credentials.is_set() {
        tracing::warn!("未设置 API Key，请求将不携带认证头（使用 'key set' 命令设置）");
    }

    let proxy = config.proxy_config();
    let client = ApiClient::new(&config.base_url, credentials, proxy.as_ref())
        .with_context(|| format!("创建 Admin API 客户端失败: {}", config.base_url))?;

    Ok(PanelService::new(client))
}

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    #[value(alias = "yml")]
    Yaml,
}

/// 渲染用户列表
pub fn render_users(users: &[UserSummary], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_users_table(users)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(users).with_context(|| "序列化为 JSON 失败")
        }
        OutputFormat::Yaml => serde_yaml::to_string(users).with_context(|| "序列化为 YAML 失败"),
    }
}

fn render_users_table(users: &[UserSummary]) -> String {
    if users.is_empty() {
        return "没有找到用户\n".to_string();
    }

    let mut out = format!("共 {} 个用户:\n\n", users.len());
    for user in users {
        out.push_str(&format!("ID: {}\n", user.discord_user_id));
        out.push_str(&format!("  余额: {}\n", user.balance));
        out.push_str(&format!(
            "  Remanga: {}\n",
            user.remanga_profile_url.as_deref().unwrap_or("—")
        ));
        out.push('\n');
    }
    out
}
