// 错误处理系统
// 开发心理：统一的错误类型系统，区分未找到、数据异常、网络瞬时故障三类远程错误
// 使用Rust的Result类型确保错误处理的安全性和一致性

use std::{error::Error as StdError, fmt};

// 图鉴主要错误类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PokedexError {
    // 远程数据错误
    NotFound(String),
    MalformedData(String),
    TransientFetch(String),

    // 本地错误
    Config(String),
    InvalidInput(String),
}

// Result类型别名
pub type Result<T> = std::result::Result<T, PokedexError>;

impl fmt::Display for PokedexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PokedexError::NotFound(msg) => write!(f, "条目未找到: {}", msg),
            PokedexError::MalformedData(msg) => write!(f, "远程数据结构异常: {}", msg),
            PokedexError::TransientFetch(msg) => write!(f, "网络请求失败: {}", msg),

            PokedexError::Config(msg) => write!(f, "配置错误: {}", msg),
            PokedexError::InvalidInput(msg) => write!(f, "输入无效: {}", msg),
        }
    }
}

impl StdError for PokedexError {}

// 错误转换实现
impl From<reqwest::Error> for PokedexError {
    fn from(error: reqwest::Error) -> Self {
        if error.status() == Some(reqwest::StatusCode::NOT_FOUND) {
            return PokedexError::NotFound(error.to_string());
        }
        if error.is_decode() {
            return PokedexError::MalformedData(error.to_string());
        }
        // 连接、超时、非404状态码都按瞬时故障处理
        PokedexError::TransientFetch(error.to_string())
    }
}

impl From<serde_json::Error> for PokedexError {
    fn from(error: serde_json::Error) -> Self {
        PokedexError::MalformedData(error.to_string())
    }
}

impl From<toml::de::Error> for PokedexError {
    fn from(error: toml::de::Error) -> Self {
        PokedexError::Config(error.to_string())
    }
}

impl From<url::ParseError> for PokedexError {
    fn from(error: url::ParseError) -> Self {
        PokedexError::Config(error.to_string())
    }
}

impl PokedexError {
    // 获取错误的严重程度
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PokedexError::Config(_) => ErrorSeverity::Critical,
            PokedexError::MalformedData(_) => ErrorSeverity::High,
            PokedexError::TransientFetch(_) => ErrorSeverity::Medium,
            PokedexError::NotFound(_) | PokedexError::InvalidInput(_) => ErrorSeverity::Low,
        }
    }

    // 检查是否值得重试（重试本身由调用方决定）
    pub fn is_recoverable(&self) -> bool {
        matches!(self, PokedexError::TransientFetch(_))
    }

    // 面向展示层的提示文案，任何抓取失败都渲染为说明文字而不是崩溃
    pub fn user_message(&self) -> &'static str {
        match self {
            PokedexError::NotFound(_) => "未找到对应的宝可梦条目。",
            PokedexError::MalformedData(_) => "远程数据不完整，暂时无法展示。",
            PokedexError::TransientFetch(_) => "网络异常，请稍后重试。",
            PokedexError::Config(_) => "客户端配置有误。",
            PokedexError::InvalidInput(_) => "请求参数无效。",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}
