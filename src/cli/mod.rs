//! 命令行界面模块

pub mod args;
pub mod list_viewer;

use colored::*;
use tracing::warn;

use crate::app::config::settings::Settings;
use crate::app::error::types::Result;
use crate::core::catalog::loader::Catalog;
use crate::core::screen::menu::ModalKind;

use self::args::CliArgs;
use self::list_viewer::ListViewer;

/// 运行命令行界面
pub fn run_cli(args: CliArgs) -> Result<()> {
    let mut settings = Settings::load(args.config.as_deref())?;
    settings.apply_args(&args);
    if !settings.color {
        colored::control::set_override(false);
    }

    let catalog = Catalog::load(&args.catalog)?;

    if args.check {
        return check_catalog(&catalog);
    }

    let mut viewer = ListViewer::new(
        catalog,
        settings,
        args.screen,
        args.search.as_deref(),
        args.page,
    );

    if args.interactive {
        viewer.run_interactive()
    } else {
        viewer.print_page();
        Ok(())
    }
}

/// 校验目录数据，逐条输出错误
fn check_catalog(catalog: &Catalog) -> Result<()> {
    let records = catalog.validate();
    if records.is_empty() {
        println!("{}", "目录校验通过".bright_green());
        return Ok(());
    }

    for record in &records {
        println!(
            "{} {}",
            ModalKind::Edit(record.id).title(record.screen).bold(),
            record.errors.to_string().bright_red()
        );
    }
    warn!(records = records.len(), "catalog has invalid records");
    std::process::exit(1);
}
