//! 核心功能模块

pub mod catalog;
pub mod form;
pub mod input;
pub mod pagination;
pub mod screen;
pub mod viewer;
