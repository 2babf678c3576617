//! 列表显示模块

pub mod display_utils;
pub mod pager_bar;
pub mod terminal;
