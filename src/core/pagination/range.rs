//! 分页按钮区间计算
//!
//! 根据当前页与总页数生成要渲染的按钮序列。总页数不超过 5 时逐页列出；
//! 超过 5 时固定输出左右翻页按钮，中间为当前页附近的若干页码按钮，不使用省略号。

use clap::ValueEnum;
use serde::Deserialize;

/// 不折叠时最多直接列出的页数
pub const FULL_LIST_LIMIT: usize = 5;

/// 页码窗口策略
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum WindowPolicy {
    /// 保持旧界面的行为，包括第 1、2 页时多出来的按钮
    #[default]
    Legacy,
    /// 连续 5 个页码，无重复按钮，标签与跳转目标一致
    Corrected,
}

/// 分页状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    total_pages: usize,
}

impl PageState {
    /// 创建分页状态，当前页会被限制在 `[1, max(total_pages, 1)]`
    pub fn new(
        current_page: usize,
        total_pages: usize,
    ) -> Self {
        Self {
            current_page: clamp_page(current_page, total_pages),
            total_pages,
        }
    }

    /// 根据条目数与每页条数计算总页数
    pub fn from_items(
        item_count: usize,
        items_per_page: usize,
        current_page: usize,
    ) -> Self {
        let total_pages = if items_per_page == 0 {
            0
        } else {
            item_count.div_ceil(items_per_page)
        };
        Self::new(current_page, total_pages)
    }

    /// 获取当前页码（从1开始）
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// 获取总页数
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }
}

/// 把任意页码限制到 `[1, max(total_pages, 1)]`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// 单个分页按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    /// 页码按钮。`label` 是显示的数字，`target` 是点击后跳转的页
    Page {
        label: usize,
        target: usize,
        is_current: bool,
    },
    Prev,
    Next,
}

impl PageButton {
    fn page(number: usize, current: usize) -> Self {
        PageButton::Page {
            label: number,
            target: number,
            is_current: number == current,
        }
    }

    fn mislabeled(label: usize, target: usize) -> Self {
        PageButton::Page {
            label,
            target,
            is_current: false,
        }
    }

    /// 是否为当前页按钮
    pub fn is_current(&self) -> bool {
        matches!(self, PageButton::Page { is_current: true, .. })
    }
}

/// 一次渲染所需的按钮序列，按从左到右的顺序排列
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationView {
    buttons: Vec<PageButton>,
}

impl PaginationView {
    pub fn buttons(&self) -> &[PageButton] {
        &self.buttons
    }

    /// 可点击的页码按钮（不含当前页和左右翻页）
    pub fn clickable_pages(
        &self,
    ) -> impl Iterator<Item = &PageButton> {
        self.buttons.iter().filter(|button| {
            matches!(button, PageButton::Page { .. })
                && !button.is_current()
        })
    }
}

#[cfg(test)]
impl PaginationView {
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    pub fn has_carets(&self) -> bool {
        self.buttons.first() == Some(&PageButton::Prev)
            && self.buttons.last() == Some(&PageButton::Next)
    }

    pub fn labels(&self) -> Vec<usize> {
        self.buttons
            .iter()
            .filter_map(|button| match button {
                PageButton::Page { label, .. } => Some(*label),
                _ => None,
            })
            .collect()
    }
}

/// 计算分页按钮序列
pub fn compute(
    state: PageState,
    policy: WindowPolicy,
) -> PaginationView {
    let total = state.total_pages();
    if total == 0 {
        return PaginationView::default();
    }
    let current = clamp_page(state.current_page(), total);

    if total <= FULL_LIST_LIMIT {
        return PaginationView {
            buttons: (1..=total)
                .map(|number| PageButton::page(number, current))
                .collect(),
        };
    }

    let mut buttons = Vec::with_capacity(FULL_LIST_LIMIT + 4);
    buttons.push(PageButton::Prev);
    match policy {
        WindowPolicy::Legacy => {
            push_legacy_window(&mut buttons, current, total)
        }
        WindowPolicy::Corrected => {
            push_corrected_window(&mut buttons, current, total)
        }
    }
    buttons.push(PageButton::Next);

    PaginationView { buttons }
}

fn push_legacy_window(
    buttons: &mut Vec<PageButton>,
    current: usize,
    total: usize,
) {
    if current == total {
        buttons.push(PageButton::page(total - 4, current));
        buttons.push(PageButton::page(total - 3, current));
    }
    if current == total - 1 {
        buttons.push(PageButton::page(total - 4, current));
    }

    for number in current.saturating_sub(2)..=current + 2 {
        if (1..=total).contains(&number) {
            buttons.push(PageButton::page(number, current));
        }
    }

    // 旧界面在前两页补齐按钮时两个按钮都跳到第 4 页，这里原样保留
    if current == 1 {
        buttons.push(PageButton::mislabeled(4, 4));
        buttons.push(PageButton::mislabeled(5, 4));
    }
    if current == 2 {
        buttons.push(PageButton::mislabeled(5, 4));
    }
}

fn push_corrected_window(
    buttons: &mut Vec<PageButton>,
    current: usize,
    total: usize,
) {
    let first = current
        .saturating_sub(2)
        .max(1)
        .min(total + 1 - FULL_LIST_LIMIT);
    buttons.extend(
        (first..first + FULL_LIST_LIMIT)
            .map(|number| PageButton::page(number, current)),
    );
}
