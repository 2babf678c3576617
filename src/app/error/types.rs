//! 错误类型定义

use std::path::PathBuf;

use thiserror::Error;

/// 分页查看器错误类型
#[derive(Error, Debug)]
pub enum PagerError {
    #[error("Catalog file not found: {}", .0.display())]
    CatalogNotFound(PathBuf),

    #[error("Invalid catalog {}: {reason}", .path.display())]
    InvalidCatalog { path: PathBuf, reason: String },

    #[error("Invalid config {}: {reason}", .path.display())]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("Unknown screen: {0}")]
    UnknownScreen(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 应用程序通用结果类型
pub type Result<T> = anyhow::Result<T>;
