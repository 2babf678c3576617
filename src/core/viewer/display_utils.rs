//! 列表行格式化

use crate::core::catalog::models::{
    format_cents, Category, Order, Product, User,
};

/// 截断过长文本，保证列对齐
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String =
        text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// 格式化分类行
pub fn format_category_row(category: &Category) -> String {
    format!(
        "#{:<5} {:<24} {}",
        category.id,
        truncate(&category.name, 24),
        truncate(&category.description, 40)
    )
}

/// 格式化商品行
pub fn format_product_row(
    product: &Product,
    category_name: &str,
) -> String {
    format!(
        "#{:<5} {:<24} {:<16} {:>9} {}",
        product.id,
        truncate(&product.name, 24),
        truncate(category_name, 16),
        format_cents(product.price_cents),
        if product.available { "在售" } else { "下架" }
    )
}

/// 格式化订单行
pub fn format_order_row(order: &Order) -> String {
    let quantity: u32 =
        order.items.iter().map(|line| line.quantity).sum();
    format!(
        "#{:<5} 用户 {:<5} {} {:>3} 件 {:>9} {}",
        order.id,
        order.user_id,
        order.placed_at.format("%Y-%m-%d %H:%M"),
        quantity,
        format_cents(order.total_cents),
        order.status.as_str()
    )
}

/// 格式化用户行
pub fn format_user_row(user: &User) -> String {
    format!(
        "#{:<5} {:<20} {:<32}{}",
        user.id,
        truncate(&user.name, 20),
        truncate(&user.email, 32),
        if user.is_admin { " admin" } else { "" }
    )
}
