use contracts::domain::a001_catalog::{ProductCard, ProductId};
use contracts::domain::common::AggregateId;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::domain::a001_catalog::controller::GridContent;

/// Attribute carrying the product id on every details action
const PRODUCT_ID_ATTR: &str = "data-product-id";

#[component]
pub fn ProductGrid(content: RwSignal<GridContent>, on_details: Callback<ProductId>) -> impl IntoView {
    // One listener for the whole grid; the id is read from the clicked action
    let handle_click = move |ev: ev::MouseEvent| {
        if let Some(id) = product_id_from_event(&ev) {
            on_details.run(id);
        }
    };

    view! {
        <div id="products-container" class="products-grid" on:click=handle_click>
            {move || match content.get() {
                GridContent::Loading => {
                    view! { <p class="loading">{"Carregando produtos..."}</p> }.into_any()
                }
                GridContent::Failed(message) => {
                    view! { <p class="error">{message}</p> }.into_any()
                }
                GridContent::Empty => {
                    view! { <p class="no-products">{"Nenhum produto encontrado."}</p> }.into_any()
                }
                GridContent::Cards(cards) => {
                    cards.into_iter().map(product_card).collect_view().into_any()
                }
            }}
        </div>
    }
}

fn product_card(card: ProductCard) -> impl IntoView {
    let alt = card.name.clone();
    view! {
        <div class="product-card">
            <img src=card.image_src alt=alt class="product-image" />
            <div class="product-info">
                <h3 class="product-title">{card.name}</h3>
                <p class="product-price">{card.price_text}</p>
                <p class="product-category">{card.category_name}</p>
                <div class="product-actions">
                    <button class="btn btn-details" data-product-id=card.id.as_string()>
                        {"Ver Detalhes"}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn product_id_from_event(ev: &ev::MouseEvent) -> Option<ProductId> {
    let element = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let action = element.closest(&format!("[{}]", PRODUCT_ID_ATTR)).ok()??;
    parse_product_id(action.get_attribute(PRODUCT_ID_ATTR))
}

/// Id carried by a details action; missing or malformed values are ignored
fn parse_product_id(raw: Option<String>) -> Option<ProductId> {
    ProductId::from_string(&raw?).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product_id() {
        assert_eq!(parse_product_id(Some("7".to_string())), Some(ProductId(7)));
        assert_eq!(parse_product_id(Some(" 12 ".to_string())), Some(ProductId(12)));
    }

    #[test]
    fn test_parse_product_id_rejects_missing_or_garbage() {
        assert_eq!(parse_product_id(None), None);
        assert_eq!(parse_product_id(Some(String::new())), None);
        assert_eq!(parse_product_id(Some("abc".to_string())), None);
    }

    #[test]
    fn test_card_id_round_trips_through_attribute() {
        let id = ProductId(42);
        assert_eq!(parse_product_id(Some(id.as_string())), Some(id));
    }
}
