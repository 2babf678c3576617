//! 交互式列表使用的终端状态
//!
//! 列表每次重绘都整屏输出，翻页时不保留上一页的内容。

use crate::app::error::types::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Write};

/// 列表行以外占用的行数：标题与分隔线 2 行，分隔线、按钮栏、
/// 状态行 3 行，帮助 1 行，弹窗 5 行
pub const RESERVED_LINES: usize = 11;

/// 交互期间持有终端，退出查看器时恢复光标和行缓冲
#[derive(Default)]
pub struct TerminalManager {
    is_raw_mode: bool,
}

impl TerminalManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// 逐键读取翻页按键，同时隐藏光标
    pub fn enter_raw_mode(&mut self) -> Result<()> {
        if !self.is_raw_mode {
            terminal::enable_raw_mode()?;
            execute!(io::stdout(), Hide)?;
            self.is_raw_mode = true;
        }
        Ok(())
    }

    /// 回到行缓冲模式，查看器退出或出错时调用
    pub fn exit_raw_mode(&mut self) -> Result<()> {
        if self.is_raw_mode {
            terminal::disable_raw_mode()?;
            execute!(io::stdout(), Show)?;
            self.is_raw_mode = false;
        }
        Ok(())
    }

    /// 重绘整页前清屏
    pub fn clear_screen(&self) -> Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    pub fn flush(&self) -> Result<()> {
        io::stdout().flush()?;
        Ok(())
    }

    /// 终端宽高，取不到时按 80x24 处理
    pub fn get_size(&self) -> (usize, usize) {
        terminal::size()
            .map(|(w, h)| (w as usize, h as usize))
            .unwrap_or((80, 24))
    }

    /// 一页最多能显示的记录行数，至少为 1
    pub fn calculate_display_lines(&self) -> usize {
        let (_, height) = self.get_size();
        rows_for_height(height)
    }
}

fn rows_for_height(height: usize) -> usize {
    height.saturating_sub(RESERVED_LINES).max(1)
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        let _ = self.exit_raw_mode();
    }
}
