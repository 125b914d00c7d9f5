//! Preview of a submitted record before download.

use log::warn;
use serde::Serialize;

use crate::form::{FieldRecord, FormField, ValidatedRecord};
use crate::generators::{NamedArtifact, RenderError, RenderService};
use crate::handoff::{HandoffStore, HandoffToken};

/// One label/value line of the preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug)]
pub enum PreviewOutcome {
    Ready(PreviewScreen),
    /// Nothing usable was handed over; send the user back to the form.
    RedirectToForm,
}

#[derive(Debug)]
pub struct PreviewScreen {
    record: ValidatedRecord,
}

impl PreviewScreen {
    /// Take the record for `token` out of the store.
    pub fn open(store: &HandoffStore, token: &HandoffToken) -> PreviewOutcome {
        let Some(record) = store.take(token) else {
            return PreviewOutcome::RedirectToForm;
        };

        match record.into_validated() {
            Ok(record) => PreviewOutcome::Ready(Self { record }),
            Err(errors) => {
                warn!("Hand-off record {} failed validation: {}", token, errors.summary());
                PreviewOutcome::RedirectToForm
            }
        }
    }

    pub fn record(&self) -> &FieldRecord {
        self.record.record()
    }

    /// Rows in display order, labels ending in a colon.
    pub fn rows(&self) -> Vec<PreviewRow> {
        FormField::ALL
            .into_iter()
            .map(|field| PreviewRow {
                label: field.caption(),
                value: self.record.get(field).to_string(),
            })
            .collect()
    }

    pub async fn download(&self, service: &RenderService) -> Result<NamedArtifact, RenderError> {
        service.render(&self.record).await
    }
}
