//! Generators module - turns a validated record into a PDF document.
//!
//! - `canvas` - the drawing capability the layout is written against
//! - `pdf_canvas` - printpdf backed canvas
//! - `metrics` - Helvetica glyph widths and word wrapping
//! - `personal_details` - the personal details layout
//! - `service` - lazy canvas acquisition plus rendering

pub mod canvas;
pub mod common;
pub mod metrics;
pub mod pdf_canvas;
pub mod personal_details;
pub mod service;
pub mod traits;

pub use canvas::{Canvas, DrawOp, FontWeight, RecordingCanvas, RecordingCanvasProvider};
pub use pdf_canvas::{PdfCanvas, PdfCanvasProvider};
pub use personal_details::DocumentRenderer;
pub use service::RenderService;
pub use traits::{CanvasProvider, Validator};

use thiserror::Error;

/// MIME type of every generated artifact.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Failures raised by a canvas backend.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("failed to load font {0}: {1}")]
    Font(&'static str, String),
    #[error("PDF backend error: {0}")]
    Backend(String),
    #[error("canvas was already finished")]
    Finished,
}

/// Errors that can occur while rendering a document.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to set up canvas: {0}")]
    Setup(#[source] CanvasError),
    #[error("drawing failed: {0}")]
    Canvas(#[from] CanvasError),
}

impl RenderError {
    /// The single message shown to the user for any rendering failure.
    pub fn user_message(&self) -> &'static str {
        "Error generating PDF. Please try again."
    }
}

/// A rendered document with its suggested download name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedArtifact {
    pub filename: String,
    pub pdf: Vec<u8>,
}

impl NamedArtifact {
    pub fn mime_type(&self) -> &'static str {
        PDF_MIME_TYPE
    }

    pub fn len(&self) -> usize {
        self.pdf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pdf.is_empty()
    }
}
