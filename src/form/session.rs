//! The in-progress form: current values plus the last validation result.

use log::{info, warn};
use thiserror::Error;

use super::validation::{validate, ErrorMap};
use super::{FieldRecord, FormField, ValidatedRecord};
use crate::generators::{NamedArtifact, RenderError, RenderService};
use crate::handoff::{HandoffError, HandoffStore, HandoffToken};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(ErrorMap),
    #[error(transparent)]
    Rendering(#[from] RenderError),
    #[error(transparent)]
    Handoff(#[from] HandoffError),
}

impl SubmitError {
    /// Field errors, if this is a validation failure.
    pub fn errors(&self) -> Option<&ErrorMap> {
        match self {
            Self::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Mutable form context owned by the collection surface.
#[derive(Debug, Default)]
pub struct FormSession {
    record: FieldRecord,
    errors: ErrorMap,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &FieldRecord {
        &self.record
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error_for(&self, field: FormField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Update one field. Its stale error is cleared, the others are kept.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.record.set(field, value);
        self.errors.clear(field);
    }

    /// Re-run validation over the whole record.
    pub fn validate(&mut self) -> bool {
        self.errors = validate(&self.record);
        self.errors.is_empty()
    }

    fn submit(&mut self) -> Result<ValidatedRecord, SubmitError> {
        match self.record.clone().into_validated() {
            Ok(record) => {
                self.errors = ErrorMap::new();
                Ok(record)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(SubmitError::Invalid(errors))
            }
        }
    }

    /// "View PDF": validate and hand the record over to the preview.
    pub fn view_pdf(&mut self, store: &HandoffStore) -> Result<HandoffToken, SubmitError> {
        let record = self.submit()?;
        let token = store.put(record.record())?;
        info!("Record handed to preview as {}", token);
        Ok(token)
    }

    /// "Download PDF": validate and render straight away.
    ///
    /// On a rendering failure the session is left untouched so the user can
    /// try again.
    pub async fn download_pdf(
        &mut self,
        service: &RenderService,
    ) -> Result<NamedArtifact, SubmitError> {
        let record = self.submit()?;
        service.render(&record).await.map_err(|e| {
            warn!("Download failed: {}", e);
            SubmitError::Rendering(e)
        })
    }

    /// Start over with an empty form.
    pub fn reset(&mut self) {
        self.record = FieldRecord::default();
        self.errors = ErrorMap::new();
    }
}
