//! Строки для отображения, построенные из [`CatalogDocument`]

use super::aggregate::{CatalogDocument, Product, ProductId};
use super::filter::ALL_CATEGORIES;
use crate::domain::common::AggregateId;
use crate::shared::config::CatalogConfig;
use crate::shared::format::format_price;

pub const ALL_CATEGORIES_LABEL: &str = "Todos os produtos";
pub const PRODUCT_PLACEHOLDER_LABEL: &str = "-- Selecione --";

#[derive(Debug, Clone, PartialEq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductOption {
    pub value: String,
    pub label: String,
    /// Цена хранится в опции, чтобы не искать товар повторно
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub image_src: String,
    pub price_text: String,
    pub category_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    pub id: ProductId,
    pub image_src: String,
    pub title: String,
    /// `R$ 10.00 | Categoria`
    pub price_line: String,
    pub description: String,
}

/// Сначала "все товары", затем категории в порядке документа
pub fn category_filter_options(catalog: &CatalogDocument) -> Vec<FilterOption> {
    std::iter::once(FilterOption {
        value: ALL_CATEGORIES.to_string(),
        label: ALL_CATEGORIES_LABEL.to_string(),
    })
    .chain(catalog.categories.iter().map(|c| FilterOption {
        value: c.id.as_string(),
        label: c.name.clone(),
    }))
    .collect()
}

/// Сначала пустая опция, затем товары в порядке документа
pub fn product_select_options(catalog: &CatalogDocument) -> Vec<ProductOption> {
    std::iter::once(ProductOption {
        value: String::new(),
        label: PRODUCT_PLACEHOLDER_LABEL.to_string(),
        price: None,
    })
    .chain(catalog.products.iter().map(|p| ProductOption {
        value: p.id.as_string(),
        label: p.name.clone(),
        price: Some(p.price),
    }))
    .collect()
}

impl ProductCard {
    pub fn build(catalog: &CatalogDocument, product: &Product, config: &CatalogConfig) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            image_src: config.image_src(&product.image),
            price_text: format_price(&config.currency_prefix, product.price),
            category_name: catalog.category_name(product.category).to_string(),
        }
    }
}

impl ProductDetails {
    pub fn build(catalog: &CatalogDocument, product: &Product, config: &CatalogConfig) -> Self {
        Self {
            id: product.id,
            image_src: config.image_src(&product.image),
            title: product.name.clone(),
            price_line: format!(
                "{} | {}",
                format_price(&config.currency_prefix, product.price),
                catalog.category_name(product.category)
            ),
            description: product.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc() -> CatalogDocument {
        serde_json::from_value(json!({
            "categories": [{ "id": 1, "name": "A" }, { "id": 2, "name": "B" }],
            "products": [
                { "id": 1, "name": "X", "price": 10.0, "category": 1, "image": "x.png", "description": "d" },
                { "id": 2, "name": "Y", "price": 2.5, "category": 5, "image": "y.png", "description": "e" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_category_filter_options() {
        let options = category_filter_options(&doc());
        let pairs: Vec<(&str, &str)> = options
            .iter()
            .map(|o| (o.value.as_str(), o.label.as_str()))
            .collect();
        assert_eq!(pairs, vec![("all", "Todos os produtos"), ("1", "A"), ("2", "B")]);
    }

    #[test]
    fn test_product_select_options() {
        let options = product_select_options(&doc());
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].value, "");
        assert_eq!(options[0].label, "-- Selecione --");
        assert_eq!(options[0].price, None);
        assert_eq!(options[2].value, "2");
        assert_eq!(options[2].price, Some(2.5));
    }

    #[test]
    fn test_card() {
        let d = doc();
        let card = ProductCard::build(&d, &d.products[0], &CatalogConfig::default());
        assert_eq!(card.name, "X");
        assert_eq!(card.image_src, "images/x.png");
        assert_eq!(card.price_text, "R$ 10.00");
        assert_eq!(card.category_name, "A");
    }

    #[test]
    fn test_details_with_unknown_category() {
        let d = doc();
        let details = ProductDetails::build(&d, &d.products[1], &CatalogConfig::default());
        assert_eq!(details.title, "Y");
        assert_eq!(details.price_line, "R$ 2.50 | Outros");
        assert_eq!(details.description, "e");
        assert_eq!(details.image_src, "images/y.png");
    }
}
