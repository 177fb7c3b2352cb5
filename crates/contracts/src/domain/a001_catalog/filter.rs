use super::aggregate::{CatalogDocument, CategoryId, Product};
use crate::domain::common::AggregateId;

/// Значение опции "все товары"
pub const ALL_CATEGORIES: &str = "all";

/// Выбранное значение фильтра категорий
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(CategoryId),
    /// Не "all" и не ID: не совпадает ни с одним товаром
    Unparsable(String),
}

impl CategoryFilter {
    pub fn from_value(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            return CategoryFilter::All;
        }
        match CategoryId::from_string(value) {
            Ok(id) => CategoryFilter::Category(id),
            Err(_) => CategoryFilter::Unparsable(value.to_string()),
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(id) => product.category == *id,
            CategoryFilter::Unparsable(_) => false,
        }
    }
}

impl CatalogDocument {
    /// Товары, прошедшие фильтр, в порядке документа
    pub fn products_in(&self, filter: &CategoryFilter) -> Vec<&Product> {
        self.products.iter().filter(|p| filter.matches(p)).collect()
    }
}
