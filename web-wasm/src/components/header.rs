//! Header component: title, catalog size, info panel and dark-mode toggle

use leptos::prelude::*;

use crate::store::Store;

#[component]
pub fn Header() -> impl IntoView {
    let store = expect_context::<Store>();
    let (show_info, set_show_info) = signal(false);

    let database_label = move || {
        store
            .database_info
            .get()
            .map(|info| format!("{} whiskies", info.database_size))
            .unwrap_or_else(|| "Loading database...".to_string())
    };

    view! {
        <header class="header">
            <div class="header-row">
                <h1>"Whisky Goggles"</h1>
                <div class="header-tools">
                    <span class="db-size">{database_label}</span>
                    <button
                        class="icon-btn"
                        aria-label="Information"
                        on:click=move |_| set_show_info.update(|open| *open = !*open)
                    >
                        "i"
                    </button>
                    <button
                        class="icon-btn"
                        aria-label="Toggle dark mode"
                        on:click=move |_| store.toggle_theme()
                    >
                        {move || if store.dark_mode.get() { "☀" } else { "☾" }}
                    </button>
                </div>
            </div>

            <Show when=move || show_info.get()>
                <div class="info-panel">
                    <p>
                        "Identify whisky bottles from a photo. Upload an image or take one "
                        "with your camera to get candidate matches with confidence scores."
                    </p>
                    <p class="text-muted">
                        "Recognition runs on a remote service; recorded prices stay in your browser."
                    </p>
                </div>
            </Show>
        </header>
    }
}
