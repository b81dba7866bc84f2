//! Recognition error banner

use leptos::prelude::*;

use crate::store::Store;

#[component]
pub fn ErrorMessage() -> impl IntoView {
    let store = expect_context::<Store>();

    view! {
        <Show when=move || store.error.get().is_some()>
            <div class="error-banner">
                {move || store.error.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
