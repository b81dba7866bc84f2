//! Recognition API and price ledger types
//!
//! Wire shapes match the backend:
//! - GET /api/database_info -> DatabaseInfo
//! - POST /api/recognize -> RecognitionResponse
//!
//! All deserialization is lenient: missing fields fall back to defaults so a
//! partially filled response never fails to parse.

use serde::{Deserialize, Serialize};

use crate::error::RecognizeError;

/// One whisky identification guess returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateMatch {
    pub name: String,
    /// Either a 0-1 fraction or an already-scaled percentage; the backend is
    /// not consistent about which it sends.
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vintage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl CandidateMatch {
    /// Confidence normalized to a percentage. Values above 1.0 are treated as
    /// already-scaled percentages.
    pub fn confidence_percent(&self) -> f64 {
        if self.confidence > 1.0 {
            self.confidence
        } else {
            self.confidence * 100.0
        }
    }

    /// Display label for the confidence badge, e.g. "92.0%".
    pub fn confidence_label(&self) -> String {
        if self.confidence > 0.0 {
            format!("{:.1}%", self.confidence_percent())
        } else {
            "N/A".to_string()
        }
    }
}

/// One detected label region and its ordered candidate matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultGroup {
    pub label: String,
    pub matches: Vec<CandidateMatch>,
}

/// Parsed outcome of one successful recognition call. Immutable once built;
/// replaced wholesale by the next call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecognitionResult {
    pub bottle_detected: bool,
    pub groups: Vec<ResultGroup>,
}

/// Wire shape of POST /api/recognize.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionResponse {
    pub success: bool,
    pub bottle_detected: Option<bool>,
    pub results: Option<Vec<ResultGroup>>,
    pub error: Option<String>,
}

impl RecognitionResponse {
    /// Maps the body-level success flag into a typed outcome. An HTTP-level
    /// success with `success: false` carries the backend's error message.
    pub fn into_result(self) -> Result<RecognitionResult, RecognizeError> {
        if self.success {
            Ok(RecognitionResult {
                bottle_detected: self.bottle_detected.unwrap_or(false),
                groups: self.results.unwrap_or_default(),
            })
        } else {
            Err(RecognizeError::Backend(self.error.unwrap_or_else(|| {
                "Failed to analyze image. Please try again.".to_string()
            })))
        }
    }
}

/// Wire shape of GET /api/database_info. Informational only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseInfo {
    pub success: bool,
    pub database_size: u64,
}

/// One persisted price observation. `timestamp` is milliseconds since the
/// Unix epoch (JS `Date.now()`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceRecord {
    pub name: String,
    pub price: f64,
    pub timestamp: f64,
}
