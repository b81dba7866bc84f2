//! Whisky Goggles Common Library
//!
//! Types and pure logic shared between the WASM app and native tests:
//! recognition API wire types, error taxonomy, price ledger operations,
//! data URL helpers and wizard state derivation.

pub mod data_url;
pub mod error;
pub mod prices;
pub mod types;
pub mod wizard;

pub use data_url::{extract_base64, extract_mime_type};
pub use error::{CameraError, RecognizeError};
pub use prices::{parse_price, upsert_price};
pub use types::{
    CandidateMatch, DatabaseInfo, PriceRecord, RecognitionResponse, RecognitionResult, ResultGroup,
};
pub use wizard::{derive_state, WizardState};
