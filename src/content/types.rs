//! Core content types handed to the host for display or download.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::generators::NamedArtifact;

/// Describes a delivered file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    pub filename: String,
    pub mime_type: String,
    pub size_bytes: usize,
    /// RFC 3339
    pub created_at: String,
}

/// A rendered document as the host downloads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileContent {
    pub metadata: FileMetadata,
    /// Base64 of the document bytes
    pub data: String,
}

impl FileContent {
    pub fn decode_data(&self) -> Result<Vec<u8>, base64::DecodeError> {
        BASE64.decode(&self.data)
    }
}

impl From<&NamedArtifact> for FileContent {
    fn from(artifact: &NamedArtifact) -> Self {
        Self {
            metadata: FileMetadata {
                filename: artifact.filename.clone(),
                mime_type: artifact.mime_type().to_string(),
                size_bytes: artifact.len(),
                created_at: Utc::now().to_rfc3339(),
            },
            data: BASE64.encode(&artifact.pdf),
        }
    }
}

/// One item of a delivery: a message or a file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    Text { text: String },
    File { file: FileContent },
}

impl ContentItem {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn file(file: FileContent) -> Self {
        Self::File { file }
    }
}

/// What the host receives after a download attempt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeliveryResult {
    pub content: Vec<ContentItem>,
    /// Whether this result is a user-visible failure notification
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl DeliveryResult {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem::text(message)],
            is_error: true,
        }
    }

    /// The first file in the result, if any.
    pub fn file(&self) -> Option<&FileContent> {
        self.content.iter().find_map(|item| match item {
            ContentItem::File { file } => Some(file),
            _ => None,
        })
    }

    /// The first text message in the result, if any.
    pub fn message(&self) -> Option<&str> {
        self.content.iter().find_map(|item| match item {
            ContentItem::Text { text } => Some(text.as_str()),
            _ => None,
        })
    }
}
