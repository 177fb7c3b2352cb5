use contracts::domain::a001_catalog::FilterOption;
use leptos::prelude::*;

#[component]
pub fn CategoryFilterSelect(
    options: RwSignal<Vec<FilterOption>>,
    /// Receives the raw option value, `all` included
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="filter">
            <label for="category-filter">{"Categoria:"}</label>
            <select
                id="category-filter"
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|o| view! { <option value=o.value>{o.label}</option> })
                        .collect_view()
                }}
            </select>
        </div>
    }
}
