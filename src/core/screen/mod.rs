//! 后台页面模块

pub mod list;
pub mod menu;
