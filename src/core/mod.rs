// 核心模块 - 图鉴基础系统
// 开发心理：建立稳固的基础架构，为上层功能提供可靠的底层支持
// 包含错误处理和配置管理

pub mod config;
pub mod error;

// 重新导出核心类型
pub use config::ApiConfig;
pub use error::{ErrorSeverity, PokedexError, Result};
