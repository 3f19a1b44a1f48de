//! 表单状态管理模块
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责：
//! - 数据的持有
//! - 数据的重置
//! - 数据到 `ProductDraft` 的转换

use leptos::prelude::*;
use rentalhub::shared::{CATALOGUE_CATEGORIES, FALLBACK_CATEGORY, ProductDraft};

/// 上传表单状态
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，非常适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct FormState {
    pub name: RwSignal<String>,
    pub brand: RwSignal<String>,
    pub category: RwSignal<String>,
    pub price: RwSignal<String>,
    pub stock: RwSignal<String>,
    pub description: RwSignal<String>,
    pub image_links: RwSignal<String>,
    pub specifications: RwSignal<String>,
    pub tags: RwSignal<String>,
}

fn default_category() -> String {
    CATALOGUE_CATEGORIES
        .first()
        .copied()
        .unwrap_or(FALLBACK_CATEGORY)
        .to_string()
}

impl FormState {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            brand: RwSignal::new(String::new()),
            category: RwSignal::new(default_category()),
            price: RwSignal::new(String::new()),
            stock: RwSignal::new("1".to_string()),
            description: RwSignal::new(String::new()),
            image_links: RwSignal::new(String::new()),
            specifications: RwSignal::new(String::new()),
            tags: RwSignal::new(String::new()),
        }
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.brand.set(String::new());
        self.category.set(default_category());
        self.price.set(String::new());
        self.stock.set("1".to_string());
        self.description.set(String::new());
        self.image_links.set(String::new());
        self.specifications.set(String::new());
        self.tags.set(String::new());
    }

    /// 校验交给核心层，这里只原样收集输入
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.get(),
            brand: self.brand.get(),
            category: self.category.get(),
            price: self.price.get(),
            stock: self.stock.get(),
            description: self.description.get(),
            image_links: self.image_links.get(),
            specifications: self.specifications.get(),
            tags: self.tags.get(),
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
