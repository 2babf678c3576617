//! 键盘输入处理

use crossterm::event::KeyCode;
use std::time::{Duration, Instant};

/// 默认防抖间隔
pub const DEFAULT_DEBOUNCE_MS: u64 = 150;

/// 列表界面的键盘动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    PrevPage,
    NextPage,
    FirstPage,
    LastPage,
    /// 点击第 n 个可点击页码（从1开始）
    ClickNth(usize),
    NextScreen,
    Redraw,
    CursorUp,
    CursorDown,
    /// 打开新建弹窗
    Create,
    /// 以下三个作用于光标所在行
    View,
    Edit,
    Delete,
}

/// 把按键映射为列表动作
pub fn map_key(code: KeyCode) -> Option<KeyAction> {
    match code {
        KeyCode::Esc | KeyCode::Char('q') => Some(KeyAction::Quit),
        KeyCode::Left => Some(KeyAction::PrevPage),
        KeyCode::Right => Some(KeyAction::NextPage),
        KeyCode::Home => Some(KeyAction::FirstPage),
        KeyCode::End => Some(KeyAction::LastPage),
        KeyCode::Tab => Some(KeyAction::NextScreen),
        KeyCode::Char('r') => Some(KeyAction::Redraw),
        KeyCode::Up => Some(KeyAction::CursorUp),
        KeyCode::Down => Some(KeyAction::CursorDown),
        KeyCode::Char('n') => Some(KeyAction::Create),
        KeyCode::Enter => Some(KeyAction::View),
        KeyCode::Char('e') => Some(KeyAction::Edit),
        KeyCode::Char('d') => Some(KeyAction::Delete),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|n| KeyAction::ClickNth(n as usize)),
        _ => None,
    }
}

/// 键盘输入处理器
pub struct KeyboardHandler {
    last_key_time: Instant,
    last_key_code: Option<KeyCode>,
    debounce: Duration,
}

impl KeyboardHandler {
    /// 创建新的键盘处理器
    pub fn new(debounce_duration_ms: u64) -> Self {
        Self {
            last_key_time: Instant::now(),
            last_key_code: None,
            debounce: Duration::from_millis(debounce_duration_ms),
        }
    }

    /// 判断是否应该处理按键（防抖处理）
    pub fn should_process_key(&mut self, code: &KeyCode) -> bool {
        self.should_process_key_at(code, Instant::now())
    }

    fn should_process_key_at(
        &mut self,
        code: &KeyCode,
        now: Instant,
    ) -> bool {
        // 防抖逻辑：同一个键必须间隔指定时间
        let is_same_key = self.last_key_code.as_ref() == Some(code);
        if is_same_key
            && now.duration_since(self.last_key_time) < self.debounce
        {
            return false;
        }

        self.last_key_code = Some(*code);
        self.last_key_time = now;
        true
    }
}

impl Default for KeyboardHandler {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}
