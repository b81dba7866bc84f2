//! Camera tab: live preview, shutter and stream lifecycle
//!
//! The stream opens only on explicit user action and is stopped on every
//! exit path: capture, cancel, capture error, and component teardown (which
//! includes tab switches). When capture is unsupported or fails, the tab
//! falls back to a plain file picker.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, MediaStream};
use whisky_goggles_common::CameraError;

use crate::camera;
use crate::components::image_uploader::accept_image_file;
use crate::store::Store;

#[component]
pub fn CameraCapture() -> impl IntoView {
    let store = expect_context::<Store>();
    let (camera_active, set_camera_active) = signal(false);
    let (camera_error, set_camera_error) = signal(None::<String>);
    let video_ref = NodeRef::<leptos::html::Video>::new();
    let supported = camera::is_supported();

    // MediaStream is a JS handle; keep it in thread-local storage
    let stream_handle = StoredValue::new_local(None::<MediaStream>);

    let release_stream = move || {
        if let Some(stream) = stream_handle.try_update_value(|slot| slot.take()).flatten() {
            camera::stop_stream(&stream);
        }
    };

    on_cleanup(release_stream);

    let start_camera = move |_| {
        set_camera_error.set(None);
        spawn_local(async move {
            match camera::open_stream().await {
                Ok(stream) => {
                    let Some(video) = video_ref.get_untracked() else {
                        camera::stop_stream(&stream);
                        set_camera_error.set(Some(
                            CameraError::Device("video element is not mounted".to_string())
                                .to_string(),
                        ));
                        return;
                    };
                    video.set_src_object(Some(&stream));
                    let _ = video.play();
                    stream_handle.set_value(Some(stream));
                    set_camera_active.set(true);
                }
                Err(err) => set_camera_error.set(Some(err.to_string())),
            }
        });
    };

    let capture = move |_| {
        if let Some(video) = video_ref.get_untracked() {
            match camera::capture_frame(&video) {
                Ok(data_url) => store.select_snapshot(data_url),
                Err(err) => set_camera_error.set(Some(err.to_string())),
            }
        }
        release_stream();
        set_camera_active.set(false);
    };

    let cancel = move |_| {
        release_stream();
        set_camera_active.set(false);
    };

    // fallback picker, shown when the camera is unsupported or errored
    let fallback_input_ref = NodeRef::<leptos::html::Input>::new();
    let open_fallback_picker = move |_| {
        if let Some(input) = fallback_input_ref.get_untracked() {
            input.click();
        }
    };
    let on_fallback_change = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok());
        if let Some(file) = input.and_then(|input| input.files()).and_then(|f| f.get(0)) {
            accept_image_file(&store, file);
        }
    };

    let has_pending = move || store.pending.get().is_some();

    view! {
        <div class="camera-capture">
            <input
                type="file"
                accept="image/*"
                class="hidden"
                node_ref=fallback_input_ref
                on:change=on_fallback_change
            />

            <Show when=move || !supported>
                <div class="error-banner">
                    <p>{CameraError::Unavailable.to_string()}</p>
                    <button class="btn btn-small" on:click=open_fallback_picker>
                        "Upload a Photo Instead"
                    </button>
                </div>
            </Show>

            <Show when=move || camera_error.get().is_some()>
                <div class="error-banner">
                    <p>{move || camera_error.get().unwrap_or_default()}</p>
                    <button class="btn btn-small" on:click=open_fallback_picker>
                        "Upload a Photo Instead"
                    </button>
                </div>
            </Show>

            <Show when=has_pending>
                <div class="preview">
                    <img
                        src=move || {
                            store
                                .pending
                                .get()
                                .map(|image| image.preview_url().to_string())
                                .unwrap_or_default()
                        }
                        alt="Captured bottle"
                    />
                    <button
                        class="btn btn-small btn-tertiary"
                        on:click=move |_| store.reset_recognition()
                    >
                        "Discard"
                    </button>
                </div>
            </Show>

            <div class="camera-stage" class:hidden=move || !camera_active.get()>
                <video node_ref=video_ref autoplay=true muted=true playsinline=true></video>
                <div class="camera-controls">
                    <button class="btn btn-primary shutter" on:click=capture>
                        "Capture"
                    </button>
                    <button class="btn btn-secondary" on:click=cancel>
                        "Cancel"
                    </button>
                </div>
            </div>

            <Show when=move || supported && !camera_active.get() && !has_pending()>
                <div class="actions">
                    <button class="btn btn-primary" on:click=start_camera>
                        "Start Camera"
                    </button>
                </div>
            </Show>
        </div>
    }
}
