//! Recognition API client
//!
//! Owns the two outbound calls: the startup database-info fetch and the
//! multipart recognize request. Transport failures, backend-flagged failures
//! and undecodable bodies map to distinct `RecognizeError` variants. No
//! retries; the user re-triggers the analyze button manually.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use js_sys::Uint8Array;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, Response};
use whisky_goggles_common::{
    extract_base64, extract_mime_type, DatabaseInfo, RecognitionResponse, RecognitionResult,
    RecognizeError,
};

use crate::store::PendingImage;

/// Same-origin proxy path to the recognition backend (avoids CORS).
const API_BASE: &str = "/api";

/// Fixed attachment name for camera snapshots.
const SNAPSHOT_FILE_NAME: &str = "webcam-capture.jpeg";

/// Fetches the size of the backend's reference catalog.
pub async fn fetch_database_info() -> Result<DatabaseInfo, RecognizeError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    let request = Request::new_with_str_and_init(&format!("{API_BASE}/database_info"), &opts)
        .map_err(transport)?;
    fetch_json(&request).await
}

/// Sends the pending image to the backend and returns the parsed matches.
///
/// Uploads keep their original bytes and file name; camera snapshots are
/// decoded from their data URL and packaged as a JPEG attachment with a
/// deterministic name. The multipart field is always `image`.
pub async fn recognize(image: &PendingImage) -> Result<RecognitionResult, RecognizeError> {
    let form = build_form_data(image)?;
    let opts = RequestInit::new();
    opts.set_method("POST");
    let body: &JsValue = form.as_ref();
    opts.set_body(body);
    let request = Request::new_with_str_and_init(&format!("{API_BASE}/recognize"), &opts)
        .map_err(transport)?;
    let response: RecognitionResponse = fetch_json(&request).await?;
    response.into_result()
}

fn build_form_data(image: &PendingImage) -> Result<FormData, RecognizeError> {
    let form = FormData::new().map_err(transport)?;
    match image {
        PendingImage::Upload {
            file_name,
            mime_type,
            bytes,
            ..
        } => {
            let blob = bytes_to_blob(bytes, mime_type)?;
            form.append_with_blob_and_filename("image", &blob, file_name)
                .map_err(transport)?;
        }
        PendingImage::Snapshot { data_url } => {
            let encoded = extract_base64(data_url)
                .ok_or_else(|| RecognizeError::Decode("snapshot is not a data URL".to_string()))?;
            let bytes = STANDARD
                .decode(encoded)
                .map_err(|err| RecognizeError::Decode(format!("snapshot decode failed: {err}")))?;
            let blob = bytes_to_blob(&bytes, extract_mime_type(data_url))?;
            form.append_with_blob_and_filename("image", &blob, SNAPSHOT_FILE_NAME)
                .map_err(transport)?;
        }
    }
    Ok(form)
}

fn bytes_to_blob(bytes: &[u8], mime_type: &str) -> Result<Blob, RecognizeError> {
    let parts = js_sys::Array::new();
    parts.push(&Uint8Array::from(bytes));
    let props = BlobPropertyBag::new();
    props.set_type(mime_type);
    Blob::new_with_u8_array_sequence_and_options(&parts, &props).map_err(transport)
}

async fn fetch_json<T: DeserializeOwned>(request: &Request) -> Result<T, RecognizeError> {
    let window = web_sys::window()
        .ok_or_else(|| RecognizeError::Transport("no window available".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(transport)?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| RecognizeError::Transport("unexpected fetch result".to_string()))?;
    if !resp.ok() {
        return Err(RecognizeError::Transport(format!(
            "server returned HTTP {}",
            resp.status()
        )));
    }
    let json = JsFuture::from(resp.json().map_err(transport)?)
        .await
        .map_err(transport)?;
    serde_wasm_bindgen::from_value(json).map_err(|err| RecognizeError::Decode(err.to_string()))
}

fn transport(err: JsValue) -> RecognizeError {
    RecognizeError::Transport(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}
