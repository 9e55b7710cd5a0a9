//! API Key 管理命令

use anyhow::{Context, Result};

use crate::utils::{load_config, open_credentials};

/// 保存 API Key（去除首尾空白）
pub fn set(config_path: &str, value: &str) -> Result<()> {
    let config = load_config(config_path, None)?;
    let credentials = open_credentials(&config)?;

    let value = value.trim();
    credentials
        .set(value)
        .with_context(|| format!("保存 API Key 失败: {}", config.state_file))?;

    if value.is_empty() {
        println!("API Key 已清空");
    } else {
        println!("API Key 已保存: {}", credentials.masked());
    }

    Ok(())
}

/// 显示当前 API Key（脱敏）
pub fn show(config_path: &str) -> Result<()> {
    let config = load_config(config_path, None)?;
    let credentials = open_credentials(&config)?;

    println!("API Key: {}", credentials.masked());
    println!("存储文件: {}", config.state_file);

    Ok(())
}

/// 清除 API Key
pub fn clear(config_path: &str) -> Result<()> {
    let config = load_config(config_path, None)?;
    let credentials = open_credentials(&config)?;

    credentials
        .clear()
        .with_context(|| format!("清除 API Key 失败: {}", config.state_file))?;

    println!("API Key 已清空");
    Ok(())
}
