//! 目录数据结构

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::core::form::validate::{known_category, not_blank, CategoryIds};

/// 商品分类
#[derive(Debug, Clone, Deserialize, PartialEq, Validate)]
pub struct Category {
    pub id: u32,
    #[validate(
        custom(function = "not_blank"),
        length(max = 64, message = "at most 64 characters")
    )]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// 商品，分类 id 需要结合目录中的分类集合校验
#[derive(Debug, Clone, Deserialize, PartialEq, Validate)]
#[validate(context = CategoryIds)]
pub struct Product {
    pub id: u32,
    #[validate(
        custom(function = "not_blank"),
        length(max = 64, message = "at most 64 characters")
    )]
    pub name: String,
    #[validate(custom(function = "known_category", use_context))]
    pub category_id: u32,
    #[validate(range(min = 1, message = "must be positive"))]
    pub price_cents: i64, // 以分为单位
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

/// 订单状态
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// 订单中的一行
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OrderLine {
    pub product_id: u32,
    pub quantity: u32,
}

/// 订单
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Order {
    pub id: u32,
    pub user_id: u32,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    pub total_cents: i64,
    pub status: OrderStatus,
    pub placed_at: DateTime<Utc>,
}

/// 用户
#[derive(Debug, Clone, Deserialize, PartialEq, Validate)]
pub struct User {
    pub id: u32,
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// 把以分为单位的金额格式化为 `12.50`
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cents_are_formatted_with_two_decimals() {
        assert_eq!(format_cents(1250), "12.50");
        assert_eq!(format_cents(7), "0.07");
        assert_eq!(format_cents(-305), "-3.05");
    }
}
