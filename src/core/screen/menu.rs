//! 后台菜单与弹窗类型

use std::fmt;
use std::str::FromStr;

use crate::app::error::types::PagerError;

/// 后台列表页面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminScreen {
    Categories,
    Products,
    Orders,
    Users,
}

impl AdminScreen {
    pub const ALL: [AdminScreen; 4] = [
        AdminScreen::Categories,
        AdminScreen::Products,
        AdminScreen::Orders,
        AdminScreen::Users,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdminScreen::Categories => "categories",
            AdminScreen::Products => "products",
            AdminScreen::Orders => "orders",
            AdminScreen::Users => "users",
        }
    }

    /// 页面标题
    pub fn title(&self) -> &'static str {
        match self {
            AdminScreen::Categories => "分类",
            AdminScreen::Products => "商品",
            AdminScreen::Orders => "订单",
            AdminScreen::Users => "用户",
        }
    }

    /// 菜单中的下一个页面，循环切换
    pub fn next(&self) -> Self {
        match self {
            AdminScreen::Categories => AdminScreen::Products,
            AdminScreen::Products => AdminScreen::Orders,
            AdminScreen::Orders => AdminScreen::Users,
            AdminScreen::Users => AdminScreen::Categories,
        }
    }
}

impl FromStr for AdminScreen {
    type Err = PagerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        AdminScreen::ALL
            .into_iter()
            .find(|screen| screen.as_str() == name)
            .ok_or_else(|| PagerError::UnknownScreen(s.to_string()))
    }
}

impl fmt::Display for AdminScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 后台弹窗类型，编辑类弹窗携带记录 id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Create,
    Edit(u32),
    Delete(u32),
    View(u32),
}

impl ModalKind {
    /// 弹窗标题
    pub fn title(&self, screen: AdminScreen) -> String {
        match self {
            ModalKind::Create => format!("新建{}", screen.title()),
            ModalKind::Edit(id) => {
                format!("编辑{} #{}", screen.title(), id)
            }
            ModalKind::Delete(id) => {
                format!("删除{} #{}", screen.title(), id)
            }
            ModalKind::View(id) => {
                format!("查看{} #{}", screen.title(), id)
            }
        }
    }

    /// 是否需要提交表单（需要校验）
    pub fn has_form(&self) -> bool {
        matches!(self, ModalKind::Create | ModalKind::Edit(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screens_parse_case_insensitively() {
        assert_eq!("Orders".parse::<AdminScreen>().unwrap(), AdminScreen::Orders);
        assert!(matches!(
            "kitchen".parse::<AdminScreen>(),
            Err(PagerError::UnknownScreen(name)) if name == "kitchen"
        ));
    }

    #[test]
    fn next_cycles_through_every_screen() {
        let mut screen = AdminScreen::Categories;
        for expected in AdminScreen::ALL.iter().skip(1) {
            screen = screen.next();
            assert_eq!(&screen, expected);
        }
        assert_eq!(screen.next(), AdminScreen::Categories);
    }

    #[test]
    fn modal_titles() {
        assert_eq!(
            ModalKind::Edit(3).title(AdminScreen::Products),
            "编辑商品 #3"
        );
        assert!(ModalKind::Create.has_form());
        assert!(!ModalKind::Delete(1).has_form());
    }
}
