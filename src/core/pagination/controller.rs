//! 分页按钮点击处理

use tracing::debug;

use super::range::{
    clamp_page, compute, PageButton, PageState, PaginationView,
    WindowPolicy,
};

/// 持有分页状态的宿主（列表页面）
pub trait PaginationHost {
    /// 页码变化后调用，宿主负责保存新页码并重新取数
    fn on_page_change(&mut self, page: usize);

    /// 每次成功翻页后调用，通常用来把列表滚回顶部
    fn on_pagination_change(&mut self) {}
}

/// 分页控制器
#[derive(Debug, Clone)]
pub struct Paginator {
    state: PageState,
    policy: WindowPolicy,
}

impl Paginator {
    /// 创建新的分页控制器
    pub fn new(state: PageState, policy: WindowPolicy) -> Self {
        Self { state, policy }
    }

    /// 获取当前页码（从1开始）
    pub fn current_page(&self) -> usize {
        self.state.current_page()
    }

    /// 获取总页数
    pub fn total_pages(&self) -> usize {
        self.state.total_pages()
    }

    /// 当前状态对应的按钮序列
    pub fn view(&self) -> PaginationView {
        compute(self.state, self.policy)
    }

    /// 处理按钮点击，返回新的页码
    ///
    /// 当前页按钮是静态的，点击返回 `None` 且不通知宿主。
    pub fn click<H: PaginationHost>(
        &mut self,
        button: &PageButton,
        host: &mut H,
    ) -> Option<usize> {
        let current = self.current_page();
        let target = match *button {
            PageButton::Prev => current.saturating_sub(1),
            PageButton::Next => current + 1,
            PageButton::Page {
                is_current: true, ..
            } => return None,
            PageButton::Page { target, .. } => target,
        };
        Some(self.navigate(target, host))
    }

    /// 点击第 n 个可点击的页码按钮（从1开始），用于键盘快捷键
    pub fn click_nth<H: PaginationHost>(
        &mut self,
        n: usize,
        host: &mut H,
    ) -> Option<usize> {
        let button = self
            .view()
            .clickable_pages()
            .nth(n.checked_sub(1)?)
            .copied()?;
        self.click(&button, host)
    }

    /// 跳转到指定页，超出范围的页码会被限制而不是报错
    pub fn go_to<H: PaginationHost>(
        &mut self,
        page: usize,
        host: &mut H,
    ) -> usize {
        self.navigate(page, host)
    }

    /// 数据刷新后更新总页数，并重新限制当前页
    pub fn set_total_pages(&mut self, total_pages: usize) {
        if total_pages != self.total_pages() {
            debug!(
                from = self.total_pages(),
                to = total_pages,
                "total pages changed"
            );
        }
        self.state =
            PageState::new(self.current_page(), total_pages);
    }

    /// 搜索或筛选条件变化时回到第一页
    pub fn reset(&mut self) {
        self.state = PageState::new(1, self.total_pages());
    }

    fn navigate<H: PaginationHost>(
        &mut self,
        page: usize,
        host: &mut H,
    ) -> usize {
        let total = self.total_pages();
        let page = clamp_page(page, total);
        debug!(
            from = self.current_page(),
            to = page,
            total,
            "page change"
        );
        self.state = PageState::new(page, total);
        host.on_page_change(page);
        host.on_pagination_change();
        page
    }
}
