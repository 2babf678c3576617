//! 应用程序基础设施

pub mod config;
pub mod error;
pub mod logging;
