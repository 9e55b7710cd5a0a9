//! Admin API 数据类型

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::client::Envelope;

/// 用户列表中的单个用户
///
/// 所有字段在响应中都可能缺失，缺失时取默认值；单个字段类型不符时
/// 只影响该字段，不丢弃整条记录。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// Discord 用户 ID
    #[serde(default, deserialize_with = "lenient_i64")]
    pub discord_user_id: i64,
    /// 余额
    #[serde(default, deserialize_with = "lenient_i64")]
    pub balance: i64,
    /// Remanga 个人主页
    #[serde(default, deserialize_with = "lenient_string")]
    pub remanga_profile_url: Option<String>,
}

/// 整数字段：接受整数、浮点数（截断）和数字字符串，其余取 0
fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Null => Some(0),
        _ => None,
    };

    Ok(parsed.unwrap_or_else(|| {
        tracing::warn!("用户字段不是整数，使用默认值 0: {}", value);
        0
    }))
}

/// 字符串字段：null 和空字符串视为缺失，其他类型按 JSON 文本保留
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

impl UserSummary {
    /// 从用户列表响应中提取 `items`
    ///
    /// `items` 缺失或不是数组时返回空列表，无法识别的条目被跳过。
    pub fn from_envelope(envelope: &Envelope) -> Vec<UserSummary> {
        let Some(Value::Array(items)) = envelope.get("items") else {
            return Vec::new();
        };

        items
            .iter()
            .filter_map(|item| match serde_json::from_value(item.clone()) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::warn!("跳过无法识别的用户条目: {}", e);
                    None
                }
            })
            .collect()
    }
}

/// 封禁用户请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanRequest {
    /// 封禁天数（0 表示不设截止时间）
    pub days: u32,
    /// 封禁原因
    pub reason: String,
}

impl BanRequest {
    pub fn new(days: u32, reason: impl Into<String>) -> Self {
        Self {
            days,
            reason: reason.into().trim().to_string(),
        }
    }
}
