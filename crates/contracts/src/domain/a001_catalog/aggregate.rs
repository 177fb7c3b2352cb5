use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::domain::common::AggregateId;

/// Название для товара, чьей категории нет в документе
pub const FALLBACK_CATEGORY_NAME: &str = "Outros";

// ============================================================================
// ID Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for CategoryId {
    fn as_string(&self) -> String {
        self.0.as_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(CategoryId)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.as_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(ProductId)
    }
}

// ============================================================================
// Entities
// ============================================================================

/// Категория товаров (опция фильтра)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category: CategoryId,
    /// Имя файла относительно каталога изображений
    pub image: String,
    pub description: String,
}

// ============================================================================
// Document
// ============================================================================

/// Документ каталога, загружаемый страницей
///
/// Загружается один раз за сессию страницы и не изменяется; все списки,
/// опции и карточка товара строятся из него.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("product {id} has an invalid price: {price}")]
    InvalidPrice { id: i64, price: f64 },
}

impl CatalogDocument {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Название категории, "Outros" если не найдена
    pub fn category_name(&self, id: CategoryId) -> &str {
        self.category(id)
            .map(|c| c.name.as_str())
            .unwrap_or(FALLBACK_CATEGORY_NAME)
    }

    /// Валидация данных: ошибка делает документ непригодным,
    /// остальные проблемы возвращаются как предупреждения для лога.
    pub fn validate(&self) -> Result<Vec<String>, CatalogError> {
        if let Some(p) = self
            .products
            .iter()
            .find(|p| !p.price.is_finite() || p.price < 0.0)
        {
            return Err(CatalogError::InvalidPrice {
                id: p.id.value(),
                price: p.price,
            });
        }

        let mut warnings = Vec::new();

        let mut seen_categories = HashSet::new();
        for c in &self.categories {
            if !seen_categories.insert(c.id) {
                warnings.push(format!("duplicate category id {}", c.id.value()));
            }
        }

        let mut seen_products = HashSet::new();
        for p in &self.products {
            if !seen_products.insert(p.id) {
                warnings.push(format!("duplicate product id {}", p.id.value()));
            }
            if !seen_categories.contains(&p.category) {
                warnings.push(format!(
                    "product {} references unknown category {}",
                    p.id.value(),
                    p.category.value()
                ));
            }
        }

        Ok(warnings)
    }
}
