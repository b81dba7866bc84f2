//! Input tab navigation (upload / camera)

use leptos::prelude::*;

use crate::app::InputTab;

#[component]
pub fn TabNavigation<F>(active_tab: ReadSignal<InputTab>, on_tab_change: F) -> impl IntoView
where
    F: Fn(InputTab) + 'static + Clone + Send,
{
    let select_upload = {
        let on_tab_change = on_tab_change.clone();
        move |_| on_tab_change(InputTab::Upload)
    };
    let select_camera = move |_| on_tab_change(InputTab::Camera);

    view! {
        <div class="tabs">
            <button
                class="tab"
                class:active=move || active_tab.get() == InputTab::Upload
                on:click=select_upload
            >
                "Upload"
            </button>
            <button
                class="tab"
                class:active=move || active_tab.get() == InputTab::Camera
                on:click=select_camera
            >
                "Camera"
            </button>
        </div>
    }
}
