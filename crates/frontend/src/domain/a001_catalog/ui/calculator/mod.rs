use contracts::domain::a001_catalog::ProductOption;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PriceCalculator(
    options: RwSignal<Vec<ProductOption>>,
    total: RwSignal<Option<String>>,
    /// Receives `(selected product value, quantity text)`
    on_calculate: Callback<(String, String)>,
) -> impl IntoView {
    let product = RwSignal::new(String::new());
    let quantity = RwSignal::new("1".to_string());

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_calculate.run((product.get_untracked(), quantity.get_untracked()));
    };

    view! {
        <form id="price-calculator" class="price-calculator" on:submit=handle_submit>
            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Produto:"</Label>
                <Select value=product>
                    {move || {
                        options
                            .get()
                            .into_iter()
                            .map(|o| {
                                let price = o.price.map(|p| p.to_string()).unwrap_or_default();
                                view! { <option value=o.value data-price=price>{o.label}</option> }
                            })
                            .collect_view()
                    }}
                </Select>
                <Label>"Quantidade:"</Label>
                <input
                    type="number"
                    id="quantity"
                    min="1"
                    prop:value=move || quantity.get()
                    on:input=move |ev| quantity.set(event_target_value(&ev))
                />
                <button type="submit" class="button button--primary">{"Calcular"}</button>
            </Flex>
            <p id="total-price" class="total-price">{move || total.get().unwrap_or_default()}</p>
        </form>
    }
}
