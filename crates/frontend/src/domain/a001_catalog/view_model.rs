use contracts::domain::a001_catalog::{FilterOption, ProductDetails, ProductOption};
use leptos::prelude::*;

use super::controller::{CatalogView, GridContent};

/// Signal-backed [`CatalogView`] the page components render from
#[derive(Clone, Copy)]
pub struct CatalogViewModel {
    pub filter_options: RwSignal<Vec<FilterOption>>,
    pub product_options: RwSignal<Vec<ProductOption>>,
    pub grid: RwSignal<GridContent>,
    /// `Some` while the overlay is visible
    pub overlay: RwSignal<Option<ProductDetails>>,
    pub total: RwSignal<Option<String>>,
}

impl CatalogViewModel {
    pub fn new() -> Self {
        Self {
            filter_options: RwSignal::new(Vec::new()),
            product_options: RwSignal::new(Vec::new()),
            grid: RwSignal::new(GridContent::Loading),
            overlay: RwSignal::new(None),
            total: RwSignal::new(None),
        }
    }
}

impl Default for CatalogViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogView for CatalogViewModel {
    fn set_filter_options(&self, options: Vec<FilterOption>) {
        self.filter_options.set(options);
    }

    fn set_product_options(&self, options: Vec<ProductOption>) {
        self.product_options.set(options);
    }

    fn render_grid(&self, content: GridContent) {
        self.grid.set(content);
    }

    fn show_overlay(&self, details: ProductDetails) {
        self.overlay.set(Some(details));
    }

    fn hide_overlay(&self) {
        self.overlay.set(None);
    }

    fn show_total(&self, text: String) {
        self.total.set(Some(text));
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("alert failed: {:?}", e);
            }
        }
    }
}
