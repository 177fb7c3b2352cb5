use contracts::domain::a001_catalog::ProductDetails;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

#[component]
pub fn DetailOverlay(
    /// Visible while `Some`
    details: RwSignal<Option<ProductDetails>>,
    on_close: Callback<()>,
) -> impl IntoView {
    // Handle Escape key
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape"
                    && details.with_untracked(|d| d.is_some())
                {
                    on_close.run(());
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    // Only clicks on the backdrop itself close the overlay
    let handle_overlay_click = move |ev: ev::MouseEvent| {
        if is_backdrop_click(ev.target(), ev.current_target()) {
            on_close.run(());
        }
    };

    let handle_close = move |_| {
        on_close.run(());
    };

    view! {
        <div
            id="lightbox"
            class="lightbox"
            style:display=move || if details.with(|d| d.is_some()) { "block" } else { "none" }
            on:click=handle_overlay_click
        >
            <div class="lightbox-content">
                <span class="close-lightbox" on:click=handle_close>{"×"}</span>
                {move || details.get().map(|d| {
                    let alt = d.title.clone();
                    view! {
                        <img id="lightbox-image" src=d.image_src alt=alt />
                        <h2 id="lightbox-title">{d.title}</h2>
                        <p id="lightbox-price">{d.price_line}</p>
                        <p id="lightbox-description">{d.description}</p>
                    }
                })}
            </div>
        </div>
    }
}

/// True when the click landed on the backdrop itself rather than on the
/// content inside it
fn is_backdrop_click<T: PartialEq>(target: Option<T>, current_target: Option<T>) -> bool {
    matches!((target, current_target), (Some(t), Some(c)) if t == c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_on_backdrop_closes() {
        assert!(is_backdrop_click(Some("lightbox"), Some("lightbox")));
    }

    #[test]
    fn test_click_inside_content_does_not_close() {
        assert!(!is_backdrop_click(Some("lightbox-title"), Some("lightbox")));
        assert!(!is_backdrop_click(Some("lightbox-image"), Some("lightbox")));
    }

    #[test]
    fn test_missing_targets_do_not_close() {
        assert!(!is_backdrop_click::<&str>(None, Some("lightbox")));
        assert!(!is_backdrop_click::<&str>(None, None));
    }
}
