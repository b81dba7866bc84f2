//! Application state store
//!
//! One store per app, created at mount and shared through Leptos context.
//! It owns the whole wizard state: the pending image, the last recognition
//! result, the in-flight flag, the last error, price drafts, the persisted
//! price ledger, the database info and the theme flag.

use std::collections::HashMap;

use js_sys::Uint8Array;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, Url};
use whisky_goggles_common::{
    derive_state, upsert_price, DatabaseInfo, PriceRecord, RecognitionResult, RecognizeError,
    WizardState,
};

use crate::{api, storage};

/// Image waiting to be analyzed. At most one alive at a time; replaced on a
/// new selection, cleared on reset.
#[derive(Clone, PartialEq)]
pub enum PendingImage {
    /// User-picked file, read into memory, plus an object URL for the preview.
    Upload {
        file_name: String,
        mime_type: String,
        bytes: Vec<u8>,
        preview_url: String,
    },
    /// Camera snapshot as a JPEG data URL. The data URL doubles as the preview.
    Snapshot { data_url: String },
}

impl PendingImage {
    pub fn preview_url(&self) -> &str {
        match self {
            PendingImage::Upload { preview_url, .. } => preview_url,
            PendingImage::Snapshot { data_url } => data_url,
        }
    }

    /// Object URLs are manually managed; revoke before dropping the image.
    fn revoke_preview(&self) {
        if let PendingImage::Upload { preview_url, .. } = self {
            let _ = Url::revoke_object_url(preview_url);
        }
    }
}

#[derive(Clone, Copy)]
pub struct Store {
    pub pending: RwSignal<Option<PendingImage>>,
    pub results: RwSignal<Option<RecognitionResult>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub price_drafts: RwSignal<HashMap<String, f64>>,
    pub saved_prices: RwSignal<Vec<PriceRecord>>,
    pub database_info: RwSignal<Option<DatabaseInfo>>,
    pub dark_mode: RwSignal<bool>,
    /// Bumped on every reset. A recognition call that settles after its
    /// snapshot of this counter went stale discards its outcome instead of
    /// overwriting fresher state.
    generation: RwSignal<u64>,
    /// Bumped on every selection and reset. An async file read holding a
    /// stale ticket discards its result, so the last-selected image wins
    /// regardless of read completion order.
    selection: RwSignal<u64>,
}

impl Store {
    /// Builds the store, loading the persisted theme and price ledger.
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(None),
            results: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            price_drafts: RwSignal::new(HashMap::new()),
            saved_prices: RwSignal::new(storage::load_price_records()),
            database_info: RwSignal::new(None),
            dark_mode: RwSignal::new(storage::load_theme()),
            generation: RwSignal::new(0),
            selection: RwSignal::new(0),
        }
    }

    /// Current wizard step, derived reactively from the store fields.
    pub fn wizard_state(&self) -> WizardState {
        derive_state(
            self.pending.get().is_some(),
            self.loading.get(),
            self.results.get().is_some(),
            self.error.get().is_some(),
        )
    }

    /// Installs a user-picked file as the pending image. The file is read
    /// into memory so the original bytes can be sent on analyze; an object
    /// URL is created for the preview. The read holds a selection ticket:
    /// if another selection (or a reset) happens before it completes, the
    /// result is dropped rather than installed.
    pub fn select_file(&self, file: File) {
        let store = *self;
        let ticket = self.next_selection();
        spawn_local(async move {
            let preview_url = match Url::create_object_url_with_blob(&file) {
                Ok(url) => url,
                Err(err) => {
                    gloo::console::error!("failed to create preview URL:", err);
                    return;
                }
            };
            let buffer = match JsFuture::from(file.array_buffer()).await {
                Ok(buffer) => buffer,
                Err(err) => {
                    let _ = Url::revoke_object_url(&preview_url);
                    gloo::console::error!("failed to read file:", err);
                    return;
                }
            };
            if store.selection.get_untracked() != ticket {
                let _ = Url::revoke_object_url(&preview_url);
                return;
            }
            store.install_pending(PendingImage::Upload {
                file_name: file.name(),
                mime_type: file.type_(),
                bytes: Uint8Array::new(&buffer).to_vec(),
                preview_url,
            });
        });
    }

    /// Installs a camera snapshot (JPEG data URL) as the pending image.
    pub fn select_snapshot(&self, data_url: String) {
        self.next_selection();
        self.install_pending(PendingImage::Snapshot { data_url });
    }

    fn next_selection(&self) -> u64 {
        self.selection.update(|ticket| *ticket += 1);
        self.selection.get_untracked()
    }

    fn install_pending(&self, image: PendingImage) {
        if let Some(old) = self.pending.get_untracked() {
            old.revoke_preview();
        }
        self.pending.set(Some(image));
        self.results.set(None);
        self.error.set(None);
    }

    /// Sends the pending image to the recognition backend. No-op while a call
    /// is already in flight or when nothing is selected. On settle exactly one
    /// of results/error is set and loading goes back to false; a settle whose
    /// generation snapshot went stale (reset or tab switch happened meanwhile)
    /// is discarded.
    pub fn analyze(&self) {
        if self.loading.get_untracked() {
            return;
        }
        let Some(image) = self.pending.get_untracked() else {
            return;
        };
        let store = *self;
        let generation = self.generation.get_untracked();
        self.loading.set(true);
        self.error.set(None);
        spawn_local(async move {
            let outcome = api::recognize(&image).await;
            store.apply_outcome(generation, outcome);
        });
    }

    /// Applies a settled recognition outcome. A settle whose generation
    /// snapshot went stale belongs to an abandoned call: reset already
    /// cleared the loading flag, and touching it here would re-enable the
    /// button under a newer in-flight call, so the whole settle is dropped.
    fn apply_outcome(&self, generation: u64, outcome: Result<RecognitionResult, RecognizeError>) {
        if self.generation.get_untracked() != generation {
            return;
        }
        self.loading.set(false);
        match outcome {
            Ok(result) => self.results.set(Some(result)),
            Err(err) => self.error.set(Some(err.to_string())),
        }
    }

    /// Clears the pending image, the result, the error and the in-flight
    /// flag, returning the wizard to Idle even mid-analysis. Used when the
    /// user discards the current scan or switches input tabs.
    pub fn reset_recognition(&self) {
        if let Some(old) = self.pending.get_untracked() {
            old.revoke_preview();
        }
        self.pending.set(None);
        self.results.set(None);
        self.error.set(None);
        self.loading.set(false);
        self.generation.update(|generation| *generation += 1);
        self.next_selection();
    }

    /// Records or clears a transient price draft for one candidate. Nothing
    /// is persisted until `commit_price`.
    pub fn update_price_draft(&self, name: &str, value: Option<f64>) {
        self.price_drafts.update(|drafts| match value {
            Some(price) => {
                drafts.insert(name.to_string(), price);
            }
            None => {
                drafts.remove(name);
            }
        });
    }

    /// Moves the draft for `name` into the persisted ledger, replacing any
    /// prior record for the same name. No-op without a positive draft.
    pub fn commit_price(&self, name: &str) {
        let Some(price) = self.price_drafts.get_untracked().get(name).copied() else {
            return;
        };
        if price <= 0.0 {
            return;
        }
        let timestamp = js_sys::Date::now();
        self.saved_prices
            .update(|records| upsert_price(records, name, price, timestamp));
        storage::save_price_records(&self.saved_prices.get_untracked());
    }

    /// Flips the dark-mode flag and persists it. The visual effect is applied
    /// by an effect in the app root watching this signal.
    pub fn toggle_theme(&self) {
        let dark = !self.dark_mode.get_untracked();
        self.dark_mode.set(dark);
        storage::save_theme(dark);
    }

    /// One-shot background fetch of the backend catalog size. Failures are
    /// logged and ignored; the header shows a placeholder instead.
    pub fn fetch_database_info(&self) {
        let store = *self;
        spawn_local(async move {
            match api::fetch_database_info().await {
                Ok(info) if info.success => store.database_info.set(Some(info)),
                Ok(_) => {}
                Err(err) => {
                    gloo::console::error!(format!("database info fetch failed: {err}"));
                }
            }
        });
    }
}
