//! View components

pub mod camera_capture;
pub mod error_message;
pub mod header;
pub mod image_uploader;
pub mod price_history;
pub mod tab_navigation;
pub mod whisky_results;
