//! 列表页面状态

use std::ops::Range;

use tracing::debug;

use crate::core::pagination::controller::{PaginationHost, Paginator};
use crate::core::pagination::range::{
    PageButton, PageState, PaginationView, WindowPolicy,
};
use crate::core::screen::menu::AdminScreen;

/// 列表页面：搜索词、每页条数与分页状态
#[derive(Debug, Clone)]
pub struct ListScreen {
    screen: AdminScreen,
    search: String,
    items_per_page: usize,
    row_count: usize,
    paginator: Paginator,
}

impl ListScreen {
    /// 创建新的列表页面
    pub fn new(
        screen: AdminScreen,
        items_per_page: usize,
        policy: WindowPolicy,
    ) -> Self {
        Self {
            screen,
            search: String::new(),
            items_per_page,
            row_count: 0,
            paginator: Paginator::new(PageState::new(1, 0), policy),
        }
    }

    pub fn screen(&self) -> AdminScreen {
        self.screen
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn current_page(&self) -> usize {
        self.paginator.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages()
    }

    pub fn view(&self) -> PaginationView {
        self.paginator.view()
    }

    /// 数据刷新后更新条目数，当前页会被重新限制
    pub fn refresh(&mut self, row_count: usize) {
        self.row_count = row_count;
        let total = PageState::from_items(
            row_count,
            self.items_per_page,
            1,
        )
        .total_pages();
        self.paginator.set_total_pages(total);
    }

    /// 修改搜索词，回到第一页
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        debug!(
            screen = %self.screen,
            search = %self.search,
            "search changed"
        );
        self.paginator.reset();
    }

    /// 切换页面，清空搜索词并回到第一页
    pub fn switch_to(&mut self, screen: AdminScreen) {
        self.screen = screen;
        self.search.clear();
        self.paginator.reset();
    }

    pub fn click<H: PaginationHost>(
        &mut self,
        button: &PageButton,
        host: &mut H,
    ) -> Option<usize> {
        self.paginator.click(button, host)
    }

    pub fn click_nth<H: PaginationHost>(
        &mut self,
        n: usize,
        host: &mut H,
    ) -> Option<usize> {
        self.paginator.click_nth(n, host)
    }

    pub fn go_to<H: PaginationHost>(
        &mut self,
        page: usize,
        host: &mut H,
    ) -> usize {
        self.paginator.go_to(page, host)
    }

    /// 当前页的行下标范围
    pub fn visible_range(&self) -> Range<usize> {
        if self.total_pages() == 0 {
            return 0..0;
        }
        let start = (self.current_page() - 1) * self.items_per_page;
        let end = (start + self.items_per_page).min(self.row_count);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopHost;

    impl PaginationHost for NoopHost {
        fn on_page_change(&mut self, _page: usize) {}
    }

    fn products(rows: usize) -> ListScreen {
        let mut list = ListScreen::new(
            AdminScreen::Products,
            10,
            WindowPolicy::Legacy,
        );
        list.refresh(rows);
        list
    }

    #[test]
    fn refresh_derives_total_pages() {
        let list = products(95);
        assert_eq!(list.total_pages(), 10);
        assert_eq!(list.visible_range(), 0..10);
    }

    #[test]
    fn last_page_range_is_short() {
        let mut list = products(95);
        list.go_to(10, &mut NoopHost);
        assert_eq!(list.visible_range(), 90..95);
    }

    #[test]
    fn empty_list_has_empty_range() {
        let list = products(0);
        assert_eq!(list.visible_range(), 0..0);
        assert!(list.view().is_empty());
    }

    #[test]
    fn search_resets_to_first_page() {
        let mut list = products(95);
        list.go_to(6, &mut NoopHost);
        list.set_search("pizza");
        assert_eq!(list.current_page(), 1);
        assert_eq!(list.search(), "pizza");
    }

    #[test]
    fn shrinking_refresh_keeps_page_in_range() {
        let mut list = products(95);
        list.go_to(9, &mut NoopHost);
        list.refresh(25);
        assert_eq!(list.current_page(), 3);
        assert_eq!(list.visible_range(), 20..25);
    }

    #[test]
    fn switching_screen_clears_search() {
        let mut list = products(95);
        list.set_search("x");
        list.go_to(4, &mut NoopHost);
        list.switch_to(AdminScreen::Orders);
        assert_eq!(list.screen(), AdminScreen::Orders);
        assert!(list.search().is_empty());
        assert_eq!(list.current_page(), 1);
    }
}
