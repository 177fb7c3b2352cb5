use crate::domain::a001_catalog::ui::CatalogPage;
use crate::shared::config::load_config;
use contracts::shared::config::CatalogConfig;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("Failed to load configuration, using defaults: {}", e);
        CatalogConfig::default()
    });

    view! {
        <ConfigProvider>
            <CatalogPage config=config />
        </ConfigProvider>
    }
}
