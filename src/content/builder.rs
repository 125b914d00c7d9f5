//! Builder for delivery results.

use log::warn;

use super::file::detect_mime_from_bytes;
use super::types::{ContentItem, DeliveryResult, FileContent};
use crate::generators::{NamedArtifact, RenderError};

#[derive(Debug, Default)]
pub struct ContentBuilder {
    items: Vec<ContentItem>,
    is_error: bool,
}

impl ContentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, message: impl Into<String>) -> Self {
        self.items.push(ContentItem::text(message));
        self
    }

    pub fn artifact(mut self, artifact: &NamedArtifact) -> Self {
        if detect_mime_from_bytes(&artifact.pdf) != Some(artifact.mime_type()) {
            warn!("{} does not look like a PDF", artifact.filename);
        }
        self.items.push(ContentItem::file(FileContent::from(artifact)));
        self
    }

    /// Mark this result as an error.
    pub fn error(mut self) -> Self {
        self.is_error = true;
        self
    }

    pub fn build(self) -> DeliveryResult {
        DeliveryResult {
            content: self.items,
            is_error: self.is_error,
        }
    }
}

/// Turn a render attempt into what the host shows or downloads.
///
/// Failures become one notification without any detail.
pub fn deliver(result: Result<NamedArtifact, RenderError>) -> DeliveryResult {
    match result {
        Ok(artifact) => ContentBuilder::new().artifact(&artifact).build(),
        Err(e) => ContentBuilder::new().text(e.user_message()).error().build(),
    }
}
