//! 后台表单校验规则
//!
//! 字段规则写在模型的 `#[validate(...)]` 上，这里放自定义规则和入口函数。

use std::borrow::Cow;
use std::collections::HashSet;

use validator::{Validate, ValidateArgs, ValidationError};

use crate::core::catalog::models::{Category, Product, User};
use crate::core::form::errors::FormErrors;

/// 目录中已有的分类 id，商品校验时作为上下文传入
#[derive(Debug, Clone, Default)]
pub struct CategoryIds(HashSet<u32>);

impl CategoryIds {
    pub fn contains(&self, id: u32) -> bool {
        self.0.contains(&id)
    }
}

impl FromIterator<u32> for CategoryIds {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// 去掉首尾空白后不能为空
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required")
            .with_message(Cow::Borrowed("required")));
    }
    Ok(())
}

/// 分类 id 必须存在于目录中
pub fn known_category(
    id: u32,
    categories: &CategoryIds,
) -> Result<(), ValidationError> {
    if categories.contains(id) {
        return Ok(());
    }
    Err(ValidationError::new("unknown_category")
        .with_message(Cow::Owned(format!("unknown category {}", id))))
}

/// 校验分类表单
pub fn validate_category(category: &Category) -> FormErrors {
    FormErrors::from_result(category.validate())
}

/// 校验商品表单
pub fn validate_product(
    product: &Product,
    categories: &CategoryIds,
) -> FormErrors {
    FormErrors::from_result(product.validate_with_args(categories))
}

/// 校验用户表单
pub fn validate_user(user: &User) -> FormErrors {
    FormErrors::from_result(user.validate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn user(email: &str) -> User {
        User {
            id: 1,
            name: "Ada".into(),
            email: email.into(),
            is_admin: false,
        }
    }

    #[rstest]
    #[case("ada@example.com", true)]
    #[case("a.b@mail.co.uk", true)]
    #[case("ada@@example.com", false)]
    #[case("@example.com", false)]
    #[case("", false)]
    fn email_shapes(#[case] email: &str, #[case] valid: bool) {
        assert_eq!(validate_user(&user(email)).is_empty(), valid);
    }

    #[test]
    fn invalid_email_has_a_readable_message() {
        assert_eq!(
            validate_user(&user("not-an-email")).get("email"),
            Some("invalid email address")
        );
    }

    #[test]
    fn product_collects_every_field_error() {
        let product = Product {
            id: 1,
            name: "  ".into(),
            category_id: 3,
            price_cents: 0,
            available: true,
        };
        let categories = CategoryIds::from_iter([1]);
        let errors = validate_product(&product, &categories);
        assert_eq!(errors.get("name"), Some("required"));
        assert_eq!(errors.get("price_cents"), Some("must be positive"));
        assert_eq!(
            errors.get("category_id"),
            Some("unknown category 3")
        );
    }

    #[test]
    fn product_in_known_category_is_valid() {
        let product = Product {
            id: 1,
            name: "Margherita".into(),
            category_id: 1,
            price_cents: 850,
            available: true,
        };
        let categories = CategoryIds::from_iter([1, 2]);
        assert!(validate_product(&product, &categories).is_empty());
    }

    #[rstest]
    #[case("Soups", true)]
    #[case("   ", false)]
    #[case("", false)]
    fn category_name_rules(#[case] name: &str, #[case] valid: bool) {
        let category = Category {
            id: 1,
            name: name.into(),
            description: String::new(),
        };
        assert_eq!(validate_category(&category).is_empty(), valid);
    }

    #[test]
    fn overlong_category_name_is_rejected() {
        let category = Category {
            id: 1,
            name: "x".repeat(65),
            description: String::new(),
        };
        assert_eq!(
            validate_category(&category).get("name"),
            Some("at most 64 characters")
        );
    }
}
