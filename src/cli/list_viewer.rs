//! 后台列表查看器

use colored::*;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tracing::{debug, info};

use crate::app::config::settings::Settings;
use crate::app::error::types::Result;
use crate::core::catalog::loader::{Catalog, Row};
use crate::core::input::keyboard::{map_key, KeyAction, KeyboardHandler};
use crate::core::pagination::controller::PaginationHost;
use crate::core::pagination::range::PageButton;
use crate::core::screen::list::ListScreen;
use crate::core::screen::menu::{AdminScreen, ModalKind};
use crate::core::viewer::pager_bar::render_bar;
use crate::core::viewer::terminal::TerminalManager;

/// 翻页后需要把列表滚回顶部
#[derive(Debug, Default)]
struct ScrollHost {
    last_page: Option<usize>,
    scroll_to_top: bool,
}

impl PaginationHost for ScrollHost {
    fn on_page_change(&mut self, page: usize) {
        self.last_page = Some(page);
    }

    fn on_pagination_change(&mut self) {
        self.scroll_to_top = true;
    }
}

/// 后台列表查看器
pub struct ListViewer {
    catalog: Catalog,
    settings: Settings,
    list: ListScreen,
    rows: Vec<Row>,
    host: ScrollHost,
    /// 光标在当前页中的位置，只在交互模式下存在
    cursor: Option<usize>,
    modal: Option<ModalKind>,
    redraw: bool,
}

impl ListViewer {
    /// 创建查看器并跳到起始页
    pub fn new(
        catalog: Catalog,
        settings: Settings,
        screen: AdminScreen,
        search: Option<&str>,
        start_page: usize,
    ) -> Self {
        let list = ListScreen::new(
            screen,
            settings.items_per_page,
            settings.policy,
        );
        let mut viewer = Self {
            catalog,
            settings,
            list,
            rows: Vec::new(),
            host: ScrollHost::default(),
            cursor: None,
            modal: None,
            redraw: false,
        };

        if let Some(search) = search {
            viewer.list.set_search(search);
        }
        viewer.reload_rows();
        viewer.list.go_to(start_page, &mut viewer.host);
        viewer
    }

    /// 打印当前页后退出
    pub fn print_page(&self) {
        for line in self.render_lines() {
            println!("{}", line);
        }
    }

    /// 交互模式
    pub fn run_interactive(&mut self) -> Result<()> {
        if !self.settings.color {
            colored::control::set_override(false);
        }

        let mut terminal = TerminalManager::new();
        let mut keyboard = KeyboardHandler::new(self.settings.debounce_ms);
        terminal.enter_raw_mode()?;
        self.cursor = Some(0);
        self.fit_to_terminal(&terminal);
        self.draw(&terminal)?;

        loop {
            let Event::Key(KeyEvent { code, kind, .. }) = event::read()?
            else {
                continue;
            };
            if kind != KeyEventKind::Press
                || !keyboard.should_process_key(&code)
            {
                continue;
            }
            let Some(action) = map_key(code) else {
                continue;
            };

            if action == KeyAction::Quit && self.modal.is_none() {
                break;
            }
            if action == KeyAction::Redraw {
                self.fit_to_terminal(&terminal);
                self.host.scroll_to_top = true;
            }
            self.apply(action);

            let scrolled = std::mem::take(&mut self.host.scroll_to_top);
            if std::mem::take(&mut self.redraw) || scrolled {
                self.draw(&terminal)?;
            }
        }

        // 恢复终端（由 TerminalManager 的 Drop trait 自动处理）
        info!(page = self.list.current_page(), "viewer closed");
        Ok(())
    }

    /// 执行一个键盘动作
    fn apply(&mut self, action: KeyAction) {
        if self.modal.is_some() {
            // 弹窗打开时只响应关闭
            if action == KeyAction::Quit {
                self.modal = None;
                self.redraw = true;
            }
            return;
        }

        let shown = (self.list.screen(), self.list.current_page());
        match action {
            KeyAction::PrevPage => {
                self.list.click(&PageButton::Prev, &mut self.host);
            }
            KeyAction::NextPage => {
                self.list.click(&PageButton::Next, &mut self.host);
            }
            KeyAction::FirstPage => {
                self.list.go_to(1, &mut self.host);
            }
            KeyAction::LastPage => {
                let last = self.list.total_pages();
                self.list.go_to(last, &mut self.host);
            }
            KeyAction::ClickNth(n) => {
                self.list.click_nth(n, &mut self.host);
            }
            KeyAction::NextScreen => {
                let next = self.list.screen().next();
                self.list.switch_to(next);
                self.reload_rows();
                self.host.scroll_to_top = true;
            }
            KeyAction::CursorUp => self.move_cursor(-1),
            KeyAction::CursorDown => self.move_cursor(1),
            KeyAction::Create => self.open_modal(ModalKind::Create),
            KeyAction::View => {
                if let Some(id) = self.selected_id() {
                    self.open_modal(ModalKind::View(id));
                }
            }
            KeyAction::Edit => {
                if let Some(id) = self.selected_id() {
                    self.open_modal(ModalKind::Edit(id));
                }
            }
            KeyAction::Delete => {
                if let Some(id) = self.selected_id() {
                    self.open_modal(ModalKind::Delete(id));
                }
            }
            KeyAction::Redraw | KeyAction::Quit => {}
        }

        // 换页后光标回到第一行
        if (self.list.screen(), self.list.current_page()) != shown {
            self.cursor = self.cursor.map(|_| 0);
        }
    }

    fn move_cursor(&mut self, step: isize) {
        let Some(cursor) = self.cursor else {
            return;
        };
        let len = self.list.visible_range().len();
        let Some(next) = cursor.checked_add_signed(step) else {
            return;
        };
        if next < len {
            self.cursor = Some(next);
            self.redraw = true;
        }
    }

    fn selected_id(&self) -> Option<u32> {
        let cursor = self.cursor?;
        self.rows[self.list.visible_range()]
            .get(cursor)
            .map(|row| row.id)
    }

    fn open_modal(&mut self, modal: ModalKind) {
        let screen = self.list.screen();
        // 订单只能查看
        if screen == AdminScreen::Orders
            && !matches!(modal, ModalKind::View(_))
        {
            debug!(?modal, "orders are read-only");
            return;
        }
        debug!(%screen, ?modal, "modal opened");
        self.modal = Some(modal);
        self.redraw = true;
    }

    /// 重新取数并刷新分页
    fn reload_rows(&mut self) {
        self.rows =
            self.catalog.rows(self.list.screen(), self.list.search());
        self.list.refresh(self.rows.len());
        debug!(
            screen = %self.list.screen(),
            rows = self.rows.len(),
            pages = self.list.total_pages(),
            "rows reloaded"
        );
    }

    /// 每页条数不超过终端可显示的行数
    fn fit_to_terminal(&mut self, terminal: &TerminalManager) {
        let per_page = self
            .settings
            .items_per_page
            .min(terminal.calculate_display_lines());
        if per_page != self.list.items_per_page() {
            let screen = self.list.screen();
            let search = self.list.search().to_string();
            let first_row = (self.list.current_page() - 1)
                * self.list.items_per_page();
            self.list =
                ListScreen::new(screen, per_page, self.settings.policy);
            self.list.set_search(search);
            self.list.refresh(self.rows.len());
            self.cursor = self.cursor.map(|_| 0);
            // 保持第一条可见记录不变
            self.list.go_to(first_row / per_page + 1, &mut self.host);
        }
    }

    fn draw(&self, terminal: &TerminalManager) -> Result<()> {
        terminal.clear_screen()?;
        for line in self.render_lines() {
            print!("{}\r\n", line);
        }
        print!(
            "{}\r\n",
            "导航: ←→ 翻页 | ↑↓ 选择 | 1-9 点击页码 | Home/End 首页/末页 | Enter 查看 | n/e/d 新建/编辑/删除 | Tab 切换页面 | r 刷新 | ESC/q 退出"
                .bright_black()
        );
        terminal.flush()
    }

    /// 当前页的完整输出：标题、列表行、按钮栏、状态行
    fn render_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        let title = match self.list.search() {
            "" => self.list.screen().title().to_string(),
            search => {
                format!("{} (搜索: {})", self.list.screen().title(), search)
            }
        };
        lines.push(self.paint_title(&title));
        lines.push("=".repeat(80));

        let range = self.list.visible_range();
        if range.is_empty() {
            lines.push("(无数据)".to_string());
        } else {
            lines.extend(self.rows[range].iter().enumerate().map(
                |(index, row)| match self.cursor {
                    Some(cursor) if cursor == index => {
                        format!("> {}", row.text)
                    }
                    Some(_) => format!("  {}", row.text),
                    None => row.text.clone(),
                },
            ));
        }

        lines.push("-".repeat(80));
        lines.push(render_bar(&self.list.view(), self.settings.color));
        lines.push(format!(
            "第 {} 页 / 共 {} 页 (共 {} 条)",
            self.list.current_page(),
            self.list.total_pages().max(1),
            self.list.row_count()
        ));
        if let Some(modal) = self.modal {
            self.render_modal(modal, &mut lines);
        }
        lines
    }

    /// 弹窗内容，追加在状态行之后
    fn render_modal(&self, modal: ModalKind, lines: &mut Vec<String>) {
        let screen = self.list.screen();
        lines.push("-".repeat(80));
        lines.push(self.paint_title(&modal.title(screen)));
        match modal {
            ModalKind::Create => lines.push("  (空白表单)".to_string()),
            ModalKind::Edit(id) => {
                let errors = self.catalog.record_errors(screen, id);
                if errors.is_empty() {
                    lines.push("  表单校验通过".to_string());
                }
                lines.extend(
                    errors
                        .iter()
                        .map(|(field, message)| {
                            format!("  {}: {}", field, message)
                        }),
                );
            }
            ModalKind::View(id) => {
                if let Some(row) = self.rows.iter().find(|row| row.id == id)
                {
                    lines.push(format!("  {}", row.text));
                }
            }
            ModalKind::Delete(_) => lines.push(
                "  确认删除？本地目录只读，不会写回文件".to_string(),
            ),
        }
        lines.push(if modal.has_form() {
            "Esc/q 放弃修改".to_string()
        } else {
            "Esc/q 关闭".to_string()
        });
    }

    fn paint_title(&self, title: &str) -> String {
        if self.settings.color {
            title.bright_white().bold().to_string()
        } else {
            title.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::models::{Category, User};

    fn catalog(count: u32) -> Catalog {
        Catalog {
            categories: (1..=count)
                .map(|id| Category {
                    id,
                    name: format!("Category {}", id),
                    description: String::new(),
                })
                .collect(),
            ..Catalog::default()
        }
    }

    fn plain_settings() -> Settings {
        Settings {
            color: false,
            ..Settings::default()
        }
    }

    fn viewer(count: u32, page: usize) -> ListViewer {
        ListViewer::new(
            catalog(count),
            plain_settings(),
            AdminScreen::Categories,
            None,
            page,
        )
    }

    #[test]
    fn start_page_is_clamped() {
        let viewer = viewer(35, 99);
        assert_eq!(viewer.list.current_page(), 4);
    }

    #[test]
    fn page_lines_show_rows_and_bar() {
        let viewer = viewer(35, 2);
        let lines = viewer.render_lines();
        assert_eq!(lines[0], "分类");
        assert!(lines[2].contains("Category 11"));
        assert_eq!(lines[lines.len() - 2], " 1  [2]  3   4 ");
        assert_eq!(lines[lines.len() - 1], "第 2 页 / 共 4 页 (共 35 条)");
    }

    #[test]
    fn empty_screen_shows_placeholder() {
        let viewer = ListViewer::new(
            catalog(3),
            plain_settings(),
            AdminScreen::Orders,
            None,
            1,
        );
        let lines = viewer.render_lines();
        assert!(lines.contains(&"(无数据)".to_string()));
        assert_eq!(lines[lines.len() - 2], "");
    }

    #[test]
    fn search_filters_rows() {
        let viewer = ListViewer::new(
            catalog(35),
            plain_settings(),
            AdminScreen::Categories,
            Some("category 3"),
            1,
        );
        // Category 3 与 Category 30..=35
        assert_eq!(viewer.list.row_count(), 7);
        assert_eq!(viewer.render_lines()[0], "分类 (搜索: category 3)");
    }

    #[test]
    fn keyboard_actions_move_pages_and_request_redraw() {
        let mut viewer = viewer(100, 1);
        viewer.host.scroll_to_top = false;

        viewer.apply(KeyAction::NextPage);
        assert_eq!(viewer.list.current_page(), 2);
        assert!(viewer.host.scroll_to_top);

        viewer.apply(KeyAction::LastPage);
        assert_eq!(viewer.list.current_page(), 10);

        viewer.apply(KeyAction::NextPage);
        assert_eq!(viewer.list.current_page(), 10);

        viewer.apply(KeyAction::FirstPage);
        viewer.apply(KeyAction::PrevPage);
        assert_eq!(viewer.list.current_page(), 1);
        assert_eq!(viewer.host.last_page, Some(1));
    }

    fn users_viewer() -> ListViewer {
        let users = [(1, "ada@example.com"), (2, "nobody")]
            .into_iter()
            .map(|(id, email)| User {
                id,
                name: format!("User {}", id),
                email: email.to_string(),
                is_admin: false,
            })
            .collect();
        let mut viewer = ListViewer::new(
            Catalog {
                users,
                ..Catalog::default()
            },
            plain_settings(),
            AdminScreen::Users,
            None,
            1,
        );
        viewer.cursor = Some(0);
        viewer
    }

    #[test]
    fn cursor_marks_selected_row_and_stays_on_page() {
        let mut viewer = viewer(35, 1);
        viewer.cursor = Some(0);
        viewer.apply(KeyAction::CursorUp);
        assert_eq!(viewer.cursor, Some(0));
        viewer.apply(KeyAction::CursorDown);
        assert_eq!(viewer.cursor, Some(1));
        let lines = viewer.render_lines();
        assert!(lines[2].starts_with("  "));
        assert!(lines[3].starts_with("> "));

        for _ in 0..20 {
            viewer.apply(KeyAction::CursorDown);
        }
        assert_eq!(viewer.cursor, Some(9));

        viewer.apply(KeyAction::NextPage);
        assert_eq!(viewer.cursor, Some(0));
    }

    #[test]
    fn edit_modal_lists_form_errors() {
        let mut viewer = users_viewer();
        viewer.apply(KeyAction::CursorDown);
        viewer.apply(KeyAction::Edit);
        assert_eq!(viewer.modal, Some(ModalKind::Edit(2)));

        let lines = viewer.render_lines();
        let tail = &lines[lines.len() - 3..];
        assert_eq!(tail[0], "编辑用户 #2");
        assert_eq!(tail[1], "  email: invalid email address");
        assert_eq!(tail[2], "Esc/q 放弃修改");
    }

    #[test]
    fn valid_record_edit_passes() {
        let mut viewer = users_viewer();
        viewer.apply(KeyAction::Edit);
        assert!(viewer
            .render_lines()
            .contains(&"  表单校验通过".to_string()));
    }

    #[test]
    fn view_create_and_delete_modals() {
        let mut viewer = users_viewer();
        viewer.apply(KeyAction::View);
        let lines = viewer.render_lines();
        assert!(lines.contains(&"查看用户 #1".to_string()));
        assert_eq!(lines[lines.len() - 1], "Esc/q 关闭");

        // 弹窗打开时翻页等按键无效，Esc 只关闭弹窗
        viewer.apply(KeyAction::Delete);
        assert_eq!(viewer.modal, Some(ModalKind::View(1)));
        viewer.apply(KeyAction::Quit);
        assert_eq!(viewer.modal, None);

        viewer.apply(KeyAction::Delete);
        assert!(viewer.render_lines().contains(&"删除用户 #1".to_string()));
        viewer.apply(KeyAction::Quit);

        viewer.apply(KeyAction::Create);
        let lines = viewer.render_lines();
        assert!(lines.contains(&"新建用户".to_string()));
        assert!(lines.contains(&"  (空白表单)".to_string()));
    }

    #[test]
    fn print_mode_has_no_cursor_or_modal() {
        let mut viewer = viewer(35, 1);
        viewer.apply(KeyAction::Edit);
        assert_eq!(viewer.modal, None);
        assert_eq!(viewer.render_lines()[2], viewer.rows[0].text);
    }

    #[test]
    fn orders_only_open_view_modal() {
        let mut viewer: ListViewer = ListViewer::new(
            toml::from_str(
                r#"
[[orders]]
id = 100
user_id = 7
total_cents = 1150
status = "paid"
placed_at = "2024-03-01T12:30:00Z"
"#,
            )
            .unwrap(),
            plain_settings(),
            AdminScreen::Orders,
            None,
            1,
        );
        viewer.cursor = Some(0);
        viewer.apply(KeyAction::Edit);
        viewer.apply(KeyAction::Create);
        assert_eq!(viewer.modal, None);
        viewer.apply(KeyAction::View);
        assert_eq!(viewer.modal, Some(ModalKind::View(100)));
    }

    #[test]
    fn tab_switches_screen_and_resets_page() {
        let mut viewer = viewer(100, 5);
        viewer.apply(KeyAction::NextScreen);
        assert_eq!(viewer.list.screen(), AdminScreen::Products);
        assert_eq!(viewer.list.current_page(), 1);
        assert_eq!(viewer.list.row_count(), 0);
    }
}
