//! 商品目录数据模块

pub mod loader;
pub mod models;
