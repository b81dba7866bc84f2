//! Main application component

use leptos::prelude::*;
use whisky_goggles_common::WizardState;

use crate::components::{
    camera_capture::CameraCapture, error_message::ErrorMessage, header::Header,
    image_uploader::ImageUploader, price_history::PriceHistory, tab_navigation::TabNavigation,
    whisky_results::WhiskyResults,
};
use crate::store::Store;

/// Image input tabs.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum InputTab {
    Upload,
    Camera,
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new();
    provide_context(store);
    store.fetch_database_info();

    let (active_tab, set_active_tab) = signal(InputTab::Upload);

    // theme flag -> "dark" class on <html>
    Effect::new(move |_| apply_theme(store.dark_mode.get()));

    // switching tabs always discards the current scan, even mid-analysis
    let on_tab_change = move |tab: InputTab| {
        set_active_tab.set(tab);
        store.reset_recognition();
    };

    let wizard = move || store.wizard_state();
    let show_analyze = move || {
        matches!(
            wizard(),
            WizardState::ImageSelected | WizardState::Analyzing | WizardState::Failed
        )
    };
    let analyzing = move || wizard() == WizardState::Analyzing;

    view! {
        <div class="container">
            <Header />

            <div class="panel">
                <TabNavigation active_tab=active_tab on_tab_change=on_tab_change />

                <Show
                    when=move || active_tab.get() == InputTab::Upload
                    fallback=|| view! { <CameraCapture /> }
                >
                    <ImageUploader />
                </Show>

                <Show when=show_analyze>
                    <div class="actions">
                        <button
                            class="btn btn-primary"
                            disabled=analyzing
                            on:click=move |_| store.analyze()
                        >
                            {move || if analyzing() { "Analyzing..." } else { "Identify Whisky" }}
                        </button>
                    </div>
                </Show>

                <ErrorMessage />
                <WhiskyResults />
            </div>

            <PriceHistory />
        </div>
    }
}

fn apply_theme(dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    let result = if dark {
        root.class_list().add_1("dark")
    } else {
        root.class_list().remove_1("dark")
    };
    if let Err(err) = result {
        gloo::console::error!("failed to apply theme:", err);
    }
}
