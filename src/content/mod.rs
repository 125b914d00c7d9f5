//! Content handed to the host environment.
//!
//! Rendered documents travel as base64 file content with MIME metadata;
//! rendering failures travel as a single text notification.

pub mod builder;
pub mod file;
pub mod types;

pub use builder::{deliver, ContentBuilder};
pub use file::detect_mime_from_bytes;
pub use types::{ContentItem, DeliveryResult, FileContent, FileMetadata};
