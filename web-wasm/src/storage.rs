//! localStorage persistence for the theme preference and the price ledger
//!
//! Reads are best-effort: malformed stored data is logged and treated as
//! absent so a corrupted value can never block the wizard. Writes are
//! synchronous; last write wins.

use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use whisky_goggles_common::PriceRecord;

const THEME_KEY: &str = "darkMode";
const PRICES_KEY: &str = "savedPrices";

pub fn load_theme() -> bool {
    match LocalStorage::get(THEME_KEY) {
        Ok(dark) => dark,
        Err(StorageError::KeyNotFound(_)) => false,
        Err(err) => {
            gloo::console::warn!(format!("ignoring stored theme preference: {err}"));
            false
        }
    }
}

pub fn save_theme(dark: bool) {
    if let Err(err) = LocalStorage::set(THEME_KEY, dark) {
        gloo::console::error!(format!("failed to persist theme preference: {err}"));
    }
}

pub fn load_price_records() -> Vec<PriceRecord> {
    match LocalStorage::get(PRICES_KEY) {
        Ok(records) => records,
        Err(StorageError::KeyNotFound(_)) => Vec::new(),
        Err(err) => {
            gloo::console::warn!(format!("ignoring stored price history: {err}"));
            Vec::new()
        }
    }
}

pub fn save_price_records(records: &[PriceRecord]) {
    if let Err(err) = LocalStorage::set(PRICES_KEY, records) {
        gloo::console::error!(format!("failed to persist price history: {err}"));
    }
}
