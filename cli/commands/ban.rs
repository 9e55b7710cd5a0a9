//! 封禁/解封命令

use anyhow::Result;

use panel_client::BanRequest;

use crate::utils::{build_service, load_config};

/// 封禁用户
pub async fn ban(
    config_path: &str,
    base_url: Option<&str>,
    user_id: &str,
    days: Option<u32>,
    reason: &str,
) -> Result<()> {
    let user_id = user_id.trim();
    if user_id.is_empty() {
        anyhow::bail!("用户 ID 不能为空");
    }

    let config = load_config(config_path, base_url)?;
    let service = build_service(&config)?;

    let req = BanRequest::new(days.unwrap_or(config.default_ban_days), reason);
    let envelope = service.ban_user(user_id, &req).await?;
    println!("{}", envelope.to_pretty_string());

    Ok(())
}

/// 解封用户
pub async fn unban(config_path: &str, base_url: Option<&str>, user_id: &str) -> Result<()> {
    let user_id = user_id.trim();
    if user_id.is_empty() {
        anyhow::bail!("用户 ID 不能为空");
    }

    let config = load_config(config_path, base_url)?;
    let service = build_service(&config)?;

    let envelope = service.unban_user(user_id).await?;
    println!("{}", envelope.to_pretty_string());

    Ok(())
}
