//! 目录文件加载

use std::path::Path;

use path_absolutize::Absolutize;
use serde::Deserialize;
use tracing::{debug, info};

use crate::app::error::types::{PagerError, Result};
use crate::core::catalog::models::{Category, Order, Product, User};
use crate::core::form::errors::FormErrors;
use crate::core::form::validate::{
    validate_category, validate_product, validate_user, CategoryIds,
};
use crate::core::screen::menu::AdminScreen;
use crate::core::viewer::display_utils::{
    format_category_row, format_order_row, format_product_row,
    format_user_row,
};

/// 本地目录，代替后台 REST 接口提供列表数据
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Catalog {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub users: Vec<User>,
}

/// 列表中的一行
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: u32,
    pub text: String,
}

/// 单条记录的校验结果
#[derive(Debug, Clone, PartialEq)]
pub struct RecordErrors {
    pub screen: AdminScreen,
    pub id: u32,
    pub errors: FormErrors,
}

impl Catalog {
    /// 从 TOML 文件加载目录
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let display_path = path.absolutize()?.to_path_buf();

        if !path.exists() {
            return Err(PagerError::CatalogNotFound(display_path).into());
        }

        let content = std::fs::read_to_string(path)?;
        let catalog = toml::from_str::<Catalog>(&content).map_err(
            |e| PagerError::InvalidCatalog {
                path: display_path.clone(),
                reason: e.message().to_string(),
            },
        )?;

        info!(
            path = %display_path.display(),
            categories = catalog.categories.len(),
            products = catalog.products.len(),
            orders = catalog.orders.len(),
            users = catalog.users.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// 某个后台页面的显示行，按搜索词（不区分大小写）过滤
    pub fn rows(
        &self,
        screen: AdminScreen,
        search: &str,
    ) -> Vec<Row> {
        let rows: Vec<Row> = match screen {
            AdminScreen::Categories => self
                .categories
                .iter()
                .map(|category| Row {
                    id: category.id,
                    text: format_category_row(category),
                })
                .collect(),
            AdminScreen::Products => self
                .products
                .iter()
                .map(|product| Row {
                    id: product.id,
                    text: format_product_row(
                        product,
                        self.category_name(product.category_id),
                    ),
                })
                .collect(),
            AdminScreen::Orders => self
                .orders
                .iter()
                .map(|order| Row {
                    id: order.id,
                    text: format_order_row(order),
                })
                .collect(),
            AdminScreen::Users => self
                .users
                .iter()
                .map(|user| Row {
                    id: user.id,
                    text: format_user_row(user),
                })
                .collect(),
        };

        let needle = search.trim().to_lowercase();
        if needle.is_empty() {
            return rows;
        }
        let filtered: Vec<Row> = rows
            .into_iter()
            .filter(|row| row.text.to_lowercase().contains(&needle))
            .collect();
        debug!(
            screen = screen.as_str(),
            search = %needle,
            matches = filtered.len(),
            "rows filtered"
        );
        filtered
    }

    /// 分类名称，找不到时返回 `?`
    pub fn category_name(&self, id: u32) -> &str {
        self.categories
            .iter()
            .find(|category| category.id == id)
            .map(|category| category.name.as_str())
            .unwrap_or("?")
    }

    fn category_ids(&self) -> CategoryIds {
        self.categories.iter().map(|c| c.id).collect()
    }

    /// 单条记录的表单错误，订单只读，没有表单
    pub fn record_errors(
        &self,
        screen: AdminScreen,
        id: u32,
    ) -> FormErrors {
        match screen {
            AdminScreen::Categories => self
                .categories
                .iter()
                .find(|category| category.id == id)
                .map(validate_category),
            AdminScreen::Products => {
                let category_ids = self.category_ids();
                self.products
                    .iter()
                    .find(|product| product.id == id)
                    .map(|product| {
                        validate_product(product, &category_ids)
                    })
            }
            AdminScreen::Users => self
                .users
                .iter()
                .find(|user| user.id == id)
                .map(validate_user),
            AdminScreen::Orders => None,
        }
        .unwrap_or_default()
    }

    /// 校验所有可编辑记录，只返回有错误的记录
    pub fn validate(&self) -> Vec<RecordErrors> {
        let category_ids = self.category_ids();

        let categories = self.categories.iter().map(|category| {
            RecordErrors {
                screen: AdminScreen::Categories,
                id: category.id,
                errors: validate_category(category),
            }
        });
        let products = self.products.iter().map(|product| {
            RecordErrors {
                screen: AdminScreen::Products,
                id: product.id,
                errors: validate_product(product, &category_ids),
            }
        });
        let users = self.users.iter().map(|user| RecordErrors {
            screen: AdminScreen::Users,
            id: user.id,
            errors: validate_user(user),
        });

        categories
            .chain(products)
            .chain(users)
            .filter(|record| !record.errors.is_empty())
            .collect()
    }
}
