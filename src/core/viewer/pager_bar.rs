//! 分页按钮栏渲染

use colored::*;

use crate::core::pagination::range::{PageButton, PaginationView};

/// 把按钮序列渲染成一行文本
///
/// 当前页显示为 `[n]`，其余页码为 ` n `，左右翻页为 `‹` / `›`。
pub fn render_bar(view: &PaginationView, use_color: bool) -> String {
    view.buttons()
        .iter()
        .map(|button| render_button(button, use_color))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_button(button: &PageButton, use_color: bool) -> String {
    let (text, is_current) = match button {
        PageButton::Prev => ("‹".to_string(), false),
        PageButton::Next => ("›".to_string(), false),
        PageButton::Page {
            label,
            is_current: true,
            ..
        } => (format!("[{}]", label), true),
        PageButton::Page { label, .. } => (format!(" {} ", label), false),
    };

    if !use_color {
        text
    } else if is_current {
        text.on_bright_cyan().black().bold().to_string()
    } else {
        text.bright_white().to_string()
    }
}
