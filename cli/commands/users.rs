//! 用户列表命令

use anyhow::Result;

use crate::utils::{OutputFormat, build_service, load_config, render_users};

/// 列出用户
pub async fn list(
    config_path: &str,
    base_url: Option<&str>,
    limit: Option<u32>,
    format: OutputFormat,
) -> Result<()> {
    let config = load_config(config_path, base_url)?;
    let service = build_service(&config)?;

    let limit = limit.unwrap_or(config.user_list_limit);
    let users = service.list_users(limit).await?;

    print!("{}", render_users(&users, format)?);
    Ok(())
}
