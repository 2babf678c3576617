//! 表单错误记录
//!
//! 字段名到错误信息的有序映射，界面从这里读取错误文本。

use std::collections::BTreeMap;
use std::fmt;

use validator::ValidationErrors;

/// 表单错误，每个字段只保留第一条信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<String, String>,
}

impl FormErrors {
    /// 由校验结果构造，校验通过时为空
    pub fn from_result(result: Result<(), ValidationErrors>) -> Self {
        match result {
            Ok(()) => Self::default(),
            Err(errors) => Self::from(errors),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }
}

#[cfg(test)]
impl FormErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errors)| {
                let first = errors.first()?;
                let message = first
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| first.code.to_string());
                Some((field.to_string(), message))
            })
            .collect();
        Self { fields }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}
