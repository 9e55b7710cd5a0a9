//! 响应信封
//!
//! 服务端响应体统一归一化为 [`Envelope`]：能解析为 JSON 的保留解析结果，
//! 否则保留原始文本。

use serde::{Serialize, Serializer};
use serde_json::{Value, json};
use std::fmt;

/// 归一化后的响应体
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// 成功解析的 JSON
    Parsed(Value),
    /// 无法解析为 JSON 的原始文本
    Unparsed(String),
}

impl Envelope {
    /// 从响应文本构造
    pub fn from_text(text: String) -> Self {
        match serde_json::from_str(&text) {
            Ok(value) => Envelope::Parsed(value),
            Err(_) => Envelope::Unparsed(text),
        }
    }

    /// JSON 形式（未解析的文本表示为 `{"raw": text}`）
    pub fn to_value(&self) -> Value {
        match self {
            Envelope::Parsed(value) => value.clone(),
            Envelope::Unparsed(text) => json!({ "raw": text }),
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Envelope::Parsed(value) => value,
            Envelope::Unparsed(text) => json!({ "raw": text }),
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, Envelope::Parsed(_))
    }

    /// 按字段名探测 JSON 对象中的值
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Envelope::Parsed(value) => value.get(key),
            Envelope::Unparsed(_) => None,
        }
    }

    /// 格式化为带缩进的 JSON
    pub fn to_pretty_string(&self) -> String {
        serde_json::to_string_pretty(&self.to_value()).unwrap_or_else(|_| self.to_string())
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Envelope::Parsed(value) => value.serialize(serializer),
            Envelope::Unparsed(text) => json!({ "raw": text }).serialize(serializer),
        }
    }
}

/// 紧凑 JSON 形式
impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Envelope::Parsed(value) => write!(f, "{}", value),
            Envelope::Unparsed(_) => write!(f, "{}", self.to_value()),
        }
    }
}
