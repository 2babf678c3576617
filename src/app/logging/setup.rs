//! 日志系统初始化

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 初始化日志系统
///
/// 日志写入 stderr，避免与列表输出混在一起。`verbose` 时默认级别提升到 debug。
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "storefront_pager=debug"
    } else {
        "storefront_pager=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr),
        )
        .init();
}
