pub mod calculator;
pub mod filter;
pub mod grid;
pub mod overlay;

use contracts::domain::a001_catalog::ProductId;
use contracts::shared::config::CatalogConfig;
use leptos::prelude::*;

use self::calculator::PriceCalculator;
use self::filter::CategoryFilterSelect;
use self::grid::ProductGrid;
use self::overlay::DetailOverlay;
use super::controller::CatalogController;
use super::model::fetch_catalog;
use super::view_model::CatalogViewModel;

#[component]
pub fn CatalogPage(config: CatalogConfig) -> impl IntoView {
    let vm = CatalogViewModel::new();
    let catalog_url = config.catalog_url.clone();
    let controller = StoredValue::new(CatalogController::new(config, vm));

    wasm_bindgen_futures::spawn_local(async move {
        let result = fetch_catalog(&catalog_url).await;
        controller.update_value(|c| c.on_loaded(result));
    });

    let on_filter = Callback::new(move |value: String| {
        controller.with_value(|c| c.on_filter_change(&value));
    });
    let on_details = Callback::new(move |id: ProductId| {
        controller.with_value(|c| c.show_details(id));
    });
    let on_close = Callback::new(move |_: ()| {
        controller.with_value(|c| c.hide_details());
    });
    let on_calculate = Callback::new(move |(product, quantity): (String, String)| {
        controller.with_value(|c| c.on_submit(&product, &quantity));
    });

    view! {
        <div class="catalog">
            <header class="catalog-header">
                <h1>{"Catálogo de Produtos"}</h1>
                <CategoryFilterSelect options=vm.filter_options on_change=on_filter />
            </header>
            <ProductGrid content=vm.grid on_details=on_details />
            <section class="calculator">
                <h2>{"Calculadora de Preço"}</h2>
                <PriceCalculator
                    options=vm.product_options
                    total=vm.total
                    on_calculate=on_calculate
                />
            </section>
            <DetailOverlay details=vm.overlay on_close=on_close />
        </div>
    }
}
