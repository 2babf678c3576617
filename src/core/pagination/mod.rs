//! 分页模块

pub mod controller;
pub mod range;
