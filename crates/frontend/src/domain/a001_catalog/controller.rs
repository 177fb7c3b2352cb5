//! Catalog Controller
//!
//! Owns the loaded catalog for the page session and drives the display
//! exclusively through [`CatalogView`], so every handler here can be
//! exercised without a browser.

use contracts::domain::a001_catalog::presentation::{
    category_filter_options, product_select_options,
};
use contracts::domain::a001_catalog::{
    quote, CatalogDocument, CategoryFilter, FilterOption, Product, ProductCard, ProductDetails,
    ProductId, ProductOption,
};
use contracts::shared::config::CatalogConfig;
use contracts::shared::format::format_total;

use super::model::LoadError;

pub const LOAD_ERROR_MESSAGE: &str =
    "Erro ao carregar os produtos. Por favor, recarregue a página.";

/// What the product grid area currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum GridContent {
    Loading,
    Failed(String),
    Empty,
    Cards(Vec<ProductCard>),
}

/// Display capabilities the controller needs
pub trait CatalogView {
    fn set_filter_options(&self, options: Vec<FilterOption>);
    fn set_product_options(&self, options: Vec<ProductOption>);
    /// Replaces the whole grid area
    fn render_grid(&self, content: GridContent);
    fn show_overlay(&self, details: ProductDetails);
    fn hide_overlay(&self);
    fn show_total(&self, text: String);
    /// Blocking user-facing message
    fn alert(&self, message: &str);
}

pub struct CatalogController<V> {
    config: CatalogConfig,
    catalog: Option<CatalogDocument>,
    view: V,
}

impl<V: CatalogView> CatalogController<V> {
    pub fn new(config: CatalogConfig, view: V) -> Self {
        Self {
            config,
            catalog: None,
            view,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn catalog(&self) -> Option<&CatalogDocument> {
        self.catalog.as_ref()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Completion of the startup fetch. Failures are terminal for the session.
    pub fn on_loaded(&mut self, result: Result<CatalogDocument, LoadError>) {
        let catalog = match result.and_then(|doc| {
            let warnings = doc.validate().map_err(LoadError::Invalid)?;
            for w in warnings {
                log::warn!("catalog: {}", w);
            }
            Ok(doc)
        }) {
            Ok(doc) => doc,
            Err(e) => {
                log::error!("Erro ao carregar o catálogo: {}", e);
                self.catalog = None;
                self.view
                    .render_grid(GridContent::Failed(LOAD_ERROR_MESSAGE.to_string()));
                return;
            }
        };

        log::info!(
            "catalog loaded: {} categories, {} products",
            catalog.categories.len(),
            catalog.products.len()
        );

        self.view.set_filter_options(category_filter_options(&catalog));
        self.view.set_product_options(product_select_options(&catalog));
        self.catalog = Some(catalog);
        self.display(&CategoryFilter::All);
    }

    pub fn on_filter_change(&self, value: &str) {
        if self.catalog.is_none() {
            log::debug!("filter change to {:?} ignored: catalog not loaded", value);
            return;
        }
        let filter = CategoryFilter::from_value(value);
        log::debug!("filter: {:?}", filter);
        self.display(&filter);
    }

    /// Opens the overlay; unknown ids leave it untouched.
    pub fn show_details(&self, id: ProductId) {
        let Some(catalog) = &self.catalog else {
            return;
        };
        let Some(product) = catalog.product(id) else {
            log::debug!("details requested for unknown product {}", id.value());
            return;
        };
        self.view
            .show_overlay(ProductDetails::build(catalog, product, &self.config));
    }

    pub fn hide_details(&self) {
        self.view.hide_overlay();
    }

    /// Calculator form submission
    pub fn on_submit(&self, selected_product: &str, quantity: &str) {
        let empty = CatalogDocument::default();
        let catalog = self.catalog.as_ref().unwrap_or(&empty);
        match quote(catalog, selected_product, quantity) {
            Ok(q) => {
                log::debug!(
                    "quote: product {} x {} = {:.2}",
                    q.product_id.value(),
                    q.quantity,
                    q.total
                );
                self.view
                    .show_total(format_total(&self.config.currency_prefix, q.total));
            }
            Err(e) => self.view.alert(&e.to_string()),
        }
    }

    fn display(&self, filter: &CategoryFilter) {
        let Some(catalog) = &self.catalog else {
            return;
        };
        let products: Vec<&Product> = catalog.products_in(filter);
        if products.is_empty() {
            self.view.render_grid(GridContent::Empty);
            return;
        }
        let cards = products
            .into_iter()
            .map(|p| ProductCard::build(catalog, p, &self.config))
            .collect();
        self.view.render_grid(GridContent::Cards(cards));
    }
}
