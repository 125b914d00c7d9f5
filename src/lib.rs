//! Personal details form validation and PDF generation.
//!
//! A [`FormSession`] collects and validates the five fields, a
//! [`HandoffStore`] carries a submitted record to the preview, and a
//! [`RenderService`] lays the record out on a PDF canvas for download.

pub mod config;
pub mod content;
pub mod form;
pub mod generators;
pub mod handoff;
pub mod preview;

pub use config::{DocumentConfig, PageUnit};
pub use form::{validate, ErrorMap, FieldRecord, FormField, FormSession, ValidatedRecord};
pub use generators::{DocumentRenderer, NamedArtifact, RenderError, RenderService};
pub use handoff::{HandoffStore, HandoffToken};
pub use preview::{PreviewOutcome, PreviewScreen};

/// Initialize `env_logger` with an `info` default; `RUST_LOG` overrides it.
///
/// Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
