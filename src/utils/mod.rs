// 工具模块 - 通用工具和辅助函数
// 开发心理：提供展示文本处理的常用函数，保持代码的可重用性和简洁性

pub mod text;

pub use text::{capitalize_first, format_dex_number, hyphens_to_spaces};
