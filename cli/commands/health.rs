//! 健康检查命令

use anyhow::Result;

use crate::utils::{build_service, load_config};

/// GET /api/health
pub async fn check(config_path: &str, base_url: Option<&str>) -> Result<()> {
    let config = load_config(config_path, base_url)?;
    let service = build_service(&config)?;

    let envelope = service.health().await?;
    println!("{}", envelope.to_pretty_string());

    Ok(())
}
