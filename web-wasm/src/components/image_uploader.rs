//! Upload tab: drag-and-drop area and file picker
//!
//! Accepts exactly one image file per selection; non-image MIME types are
//! ignored. A successful pick replaces any previous pending image.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, File, HtmlInputElement};

use crate::store::Store;

/// Installs a picked file as the pending image. Non-image MIME types are
/// ignored with a console warning.
pub(crate) fn accept_image_file(store: &Store, file: File) {
    if !file.type_().starts_with("image/") {
        gloo::console::warn!(format!("ignoring non-image file: {}", file.name()));
        return;
    }
    store.select_file(file);
}

#[component]
pub fn ImageUploader() -> impl IntoView {
    let store = expect_context::<Store>();
    let (is_dragover, set_is_dragover) = signal(false);
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let accept_file = move |file: File| accept_image_file(&store, file);

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);
        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            // one file per selection; extras in the drop are ignored
            if let Some(file) = files.get(0) {
                accept_file(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| set_is_dragover.set(false);

    let on_click = move |_| {
        if let Some(input) = file_input_ref.get_untracked() {
            input.click();
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok());
        if let Some(file) = input.and_then(|input| input.files()).and_then(|f| f.get(0)) {
            accept_file(file);
        }
    };

    let preview = move || {
        store
            .pending
            .get()
            .map(|image| image.preview_url().to_string())
    };

    view! {
        <div
            class="upload-area"
            class:dragover=move || is_dragover.get()
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <input
                type="file"
                accept="image/*"
                class="hidden"
                node_ref=file_input_ref
                on:click=|ev| ev.stop_propagation()
                on:change=on_change
            />
            <Show
                when=move || preview().is_some()
                fallback=|| {
                    view! {
                        <div class="upload-icon">"🥃"</div>
                        <p>"Drag & drop an image here, or click to select"</p>
                        <p class="text-muted">"Supports JPEG, PNG, WEBP"</p>
                    }
                }
            >
                <div class="preview">
                    <img src=move || preview().unwrap_or_default() alt="Selected bottle" />
                    <button
                        class="btn btn-small btn-tertiary"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            store.reset_recognition();
                        }
                    >
                        "Remove"
                    </button>
                </div>
            </Show>
        </div>
    }
}
