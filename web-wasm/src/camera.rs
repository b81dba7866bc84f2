//! Camera stream lifecycle and frame capture
//!
//! The stream is an exclusive hardware resource: acquired lazily on explicit
//! user action, never eagerly, and stopped on every exit path (capture,
//! cancel, error, tab switch, component teardown).

use serde::Serialize as _;
use serde_json::json;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};
use whisky_goggles_common::CameraError;

/// Whether the runtime exposes `navigator.mediaDevices.getUserMedia`. Both
/// properties are checked: older engines ship `mediaDevices` without the
/// capture method.
pub fn is_supported() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let navigator = window.navigator();
    let devices = match js_sys::Reflect::get(navigator.as_ref(), &JsValue::from_str("mediaDevices"))
    {
        Ok(devices) if !devices.is_undefined() && !devices.is_null() => devices,
        _ => return false,
    };
    matches!(
        js_sys::Reflect::get(&devices, &JsValue::from_str("getUserMedia")),
        Ok(get_user_media) if get_user_media.is_function()
    )
}

/// Requests a video stream from the rear camera. Permission prompts happen
/// here, on demand.
pub async fn open_stream() -> Result<MediaStream, CameraError> {
    let window = web_sys::window().ok_or(CameraError::Unavailable)?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|_| CameraError::Unavailable)?;

    let constraints = MediaStreamConstraints::new();
    let video = json!({
        "facingMode": "environment",
        "width": { "ideal": 1280 },
        "height": { "ideal": 720 },
    })
    .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
    .map_err(|err| CameraError::Device(err.to_string()))?;
    constraints.set_video(&video);

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(map_dom_error)?;
    let stream = JsFuture::from(promise).await.map_err(map_dom_error)?;
    stream
        .dyn_into::<MediaStream>()
        .map_err(|_| CameraError::Device("unexpected getUserMedia result".to_string()))
}

/// Stops every track, releasing the hardware.
pub fn stop_stream(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        let track: MediaStreamTrack = track.unchecked_into();
        track.stop();
    }
}

/// Draws the current video frame to an offscreen canvas and returns it as a
/// JPEG data URL.
pub fn capture_frame(video: &HtmlVideoElement) -> Result<String, CameraError> {
    let width = video.video_width();
    let height = video.video_height();
    if width == 0 || height == 0 {
        return Err(CameraError::Device(
            "the video stream has not produced a frame yet".to_string(),
        ));
    }

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(CameraError::Unavailable)?;
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(device)?
        .dyn_into()
        .map_err(|_| CameraError::Device("canvas creation failed".to_string()))?;
    canvas.set_width(width);
    canvas.set_height(height);

    let context = canvas
        .get_context("2d")
        .map_err(device)?
        .ok_or_else(|| CameraError::Device("2d context unavailable".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| CameraError::Device("2d context unavailable".to_string()))?;
    context
        .draw_image_with_html_video_element(video, 0.0, 0.0)
        .map_err(device)?;

    canvas.to_data_url_with_type("image/jpeg").map_err(device)
}

/// Maps a getUserMedia DOMException to the camera error taxonomy.
fn map_dom_error(err: JsValue) -> CameraError {
    let name = js_sys::Reflect::get(&err, &JsValue::from_str("name"))
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_default();
    match name.as_str() {
        "NotAllowedError" | "SecurityError" => CameraError::PermissionDenied,
        "" => CameraError::Device(
            err.as_string()
                .unwrap_or_else(|| "unknown camera error".to_string()),
        ),
        other => CameraError::Device(other.to_string()),
    }
}

fn device(err: JsValue) -> CameraError {
    CameraError::Device(format!("{err:?}"))
}
