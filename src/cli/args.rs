//! 命令行参数定义

use clap::Parser;
use std::path::PathBuf;

use crate::core::pagination::range::WindowPolicy;
use crate::core::screen::menu::AdminScreen;

/// 外卖商城后台列表查看器 - 按页浏览分类、商品、订单与用户
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// 目录文件路径 (TOML)
    #[arg(short = 'f', long, value_name = "FILE")]
    pub catalog: PathBuf,

    /// 后台页面: categories | products | orders | users
    #[arg(short = 'S', long, default_value = "products")]
    pub screen: AdminScreen,

    /// 起始页码，超出范围时自动限制 (默认: 1)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// 每页条数 (默认: 配置文件或 10)
    #[arg(short = 'n', long = "per-page")]
    pub per_page: Option<usize>,

    /// 搜索词，不区分大小写
    #[arg(short, long)]
    pub search: Option<String>,

    /// 页码窗口策略
    #[arg(long, value_enum)]
    pub policy: Option<WindowPolicy>,

    /// 配置文件路径
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// 禁用颜色输出
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// 交互模式
    #[arg(short, long)]
    pub interactive: bool,

    /// 只校验目录数据，有错误时以非零状态退出
    #[arg(long)]
    pub check: bool,

    /// 详细模式 - 输出调试日志
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args =
            CliArgs::parse_from(["storefront-pager", "-f", "menu.toml"]);
        assert_eq!(args.screen, AdminScreen::Products);
        assert_eq!(args.page, 1);
        assert!(args.per_page.is_none());
        assert!(!args.interactive);
    }

    #[test]
    fn screen_is_parsed_from_name() {
        let args = CliArgs::parse_from([
            "storefront-pager",
            "-f",
            "menu.toml",
            "--screen",
            "users",
        ]);
        assert_eq!(args.screen, AdminScreen::Users);
    }

    #[test]
    fn unknown_screen_is_rejected() {
        let result = CliArgs::try_parse_from([
            "storefront-pager",
            "-f",
            "menu.toml",
            "--screen",
            "kitchen",
        ]);
        assert!(result.is_err());
    }
}
