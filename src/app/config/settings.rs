//! 配置文件加载
//!
//! 配置按 默认值 → 配置文件 → 命令行参数 的顺序覆盖。

use std::path::{Path, PathBuf};

use path_absolutize::Absolutize;
use serde::Deserialize;
use tracing::debug;

use crate::app::error::types::{PagerError, Result};
use crate::cli::args::CliArgs;
use crate::core::input::keyboard::DEFAULT_DEBOUNCE_MS;
use crate::core::pagination::range::WindowPolicy;

const APP_DIR: &str = "storefront-pager";
const CONFIG_FILE: &str = "config.toml";

/// 运行配置
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub items_per_page: usize,
    pub policy: WindowPolicy,
    pub debounce_ms: u64,
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            items_per_page: 10,
            policy: WindowPolicy::Legacy,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            color: true,
        }
    }
}

impl Settings {
    /// 用户配置目录下的默认配置文件路径
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// 加载配置
    ///
    /// 显式指定的文件必须存在；默认位置的文件不存在时使用默认值。
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path().filter(|path| path.exists()) {
            Some(path) => Self::from_file(&path),
            None => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// 从 TOML 文件读取配置
    pub fn from_file(path: &Path) -> Result<Self> {
        let display_path = path.absolutize()?.to_path_buf();
        let content = std::fs::read_to_string(path)?;
        let invalid = |reason: String| PagerError::InvalidConfig {
            path: display_path.clone(),
            reason,
        };

        let settings = toml::from_str::<Settings>(&content)
            .map_err(|e| invalid(e.message().to_string()))?;
        if settings.items_per_page == 0 {
            return Err(invalid(
                "items_per_page must be at least 1".to_string(),
            )
            .into());
        }

        debug!(path = %display_path.display(), ?settings, "config loaded");
        Ok(settings)
    }

    /// 用命令行参数覆盖配置
    pub fn apply_args(&mut self, args: &CliArgs) {
        if let Some(per_page) = args.per_page {
            self.items_per_page = per_page.max(1);
        }
        if let Some(policy) = args.policy {
            self.policy = policy;
        }
        if args.no_color {
            self.color = false;
        }
    }
}
