//! 表单校验模块

pub mod errors;
pub mod validate;
