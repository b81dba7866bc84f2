//! End-to-end recognition response scenarios against real backend payloads.

use whisky_goggles_common::{RecognitionResponse, RecognizeError};

#[test]
fn test_buffalo_trace_scenario() {
    let body = r#"{
        "success": true,
        "bottle_detected": true,
        "results": [
            {
                "label": "front",
                "matches": [
                    { "name": "Buffalo Trace", "confidence": 0.92 }
                ]
            }
        ]
    }"#;

    let response: RecognitionResponse = serde_json::from_str(body).expect("parse failed");
    let result = response.into_result().expect("should succeed");

    assert!(result.bottle_detected);
    assert_eq!(result.groups.len(), 1);
    assert_eq!(result.groups[0].label, "front");
    let top = &result.groups[0].matches[0];
    assert_eq!(top.name, "Buffalo Trace");
    assert_eq!(top.confidence_label(), "92.0%");
}

#[test]
fn test_backend_failure_scenario() {
    let body = r#"{ "success": false, "error": "no label found" }"#;

    let response: RecognitionResponse = serde_json::from_str(body).expect("parse failed");
    let err = response.into_result().unwrap_err();

    assert_eq!(err, RecognizeError::Backend("no label found".to_string()));
    assert_eq!(err.to_string(), "no label found");
}

#[test]
fn test_multiple_groups_preserve_order() {
    let body = r#"{
        "success": true,
        "bottle_detected": true,
        "results": [
            {
                "label": "front",
                "matches": [
                    { "name": "Buffalo Trace", "confidence": 0.92 },
                    { "name": "Eagle Rare 10", "confidence": 0.61 }
                ]
            },
            {
                "label": "neck",
                "matches": [
                    { "name": "Buffalo Trace", "confidence": 88.0 }
                ]
            }
        ]
    }"#;

    let response: RecognitionResponse = serde_json::from_str(body).expect("parse failed");
    let result = response.into_result().expect("should succeed");

    assert_eq!(result.groups.len(), 2);
    assert_eq!(result.groups[0].matches.len(), 2);
    assert_eq!(result.groups[0].matches[1].name, "Eagle Rare 10");
    // second group uses already-scaled confidence
    assert_eq!(result.groups[1].matches[0].confidence_label(), "88.0%");
}

#[test]
fn test_optional_match_fields() {
    let body = r#"{
        "success": true,
        "results": [
            {
                "label": "front",
                "matches": [
                    {
                        "name": "Macallan 12",
                        "confidence": 0.78,
                        "vintage": "Sherry Oak",
                        "description": "Speyside single malt",
                        "price": 89.99,
                        "image_url": "https://example.com/macallan.jpg"
                    }
                ]
            }
        ]
    }"#;

    let response: RecognitionResponse = serde_json::from_str(body).expect("parse failed");
    let result = response.into_result().expect("should succeed");
    let top = &result.groups[0].matches[0];

    assert_eq!(top.vintage.as_deref(), Some("Sherry Oak"));
    assert_eq!(top.description.as_deref(), Some("Speyside single malt"));
    assert_eq!(top.price, Some(89.99));
    assert!(top.image_url.is_some());
}
