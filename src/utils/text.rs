// 文本处理和格式化系统
// 开发心理：PokéAPI的标识符统一为小写加连字符，展示层需要可读的文本形式

// 首字母大写，其余保持不变
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// 连字符转空格，"water-stone" -> "water stone"
pub fn hyphens_to_spaces(value: &str) -> String {
    value.replace('-', " ")
}

// 图鉴编号展示格式，25 -> "#025"
pub fn format_dex_number(number: u32) -> String {
    format!("#{:03}", number)
}
