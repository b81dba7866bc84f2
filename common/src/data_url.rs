//! Data URL helpers
//!
//! Camera snapshots arrive as "data:image/jpeg;base64,..." strings; the
//! recognition client needs the raw base64 payload and the MIME type.

/// Extracts the base64 data portion of a data URL.
///
/// Returns `None` when the string has no comma separator.
pub fn extract_base64(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Extracts the MIME type of a data URL, defaulting to "image/jpeg".
pub fn extract_mime_type(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .unwrap_or("image/jpeg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_base64_jpeg() {
        let data_url = "data:image/jpeg;base64,/9j/4AAQSkZJRg==";
        assert_eq!(extract_base64(data_url), Some("/9j/4AAQSkZJRg=="));
    }

    #[test]
    fn test_extract_base64_png() {
        let data_url = "data:image/png;base64,iVBORw0KGgo=";
        assert_eq!(extract_base64(data_url), Some("iVBORw0KGgo="));
    }

    #[test]
    fn test_extract_base64_invalid() {
        assert_eq!(extract_base64("not a data url"), None);
        assert_eq!(extract_base64(""), None);
    }

    #[test]
    fn test_extract_mime_type_jpeg() {
        let data_url = "data:image/jpeg;base64,/9j/4AAQ";
        assert_eq!(extract_mime_type(data_url), "image/jpeg");
    }

    #[test]
    fn test_extract_mime_type_png() {
        let data_url = "data:image/png;base64,iVBORw0KGgo=";
        assert_eq!(extract_mime_type(data_url), "image/png");
    }

    #[test]
    fn test_extract_mime_type_default() {
        assert_eq!(extract_mime_type("invalid"), "image/jpeg");
    }
}
