//! Layout for the "Personal Details" document.
//!
//! A bold title, four label/value rows on a fixed pitch, then a wrapped
//! description block. The layout is a pure function of the record: the same
//! record always produces the same sequence of canvas calls.

use log::{error, info};

use super::canvas::{Canvas, FontWeight};
use super::common::artifact_filename;
use super::{NamedArtifact, RenderError};
use crate::form::{FormField, ValidatedRecord};

pub const TITLE: &str = "Personal Details";
pub const TITLE_FONT_SIZE: f32 = 20.0;
pub const BODY_FONT_SIZE: f32 = 12.0;

pub const LEFT_MARGIN: f32 = 20.0;
pub const VALUE_OFFSET: f32 = 80.0;
pub const TITLE_Y: f32 = 30.0;
pub const FIRST_ROW_Y: f32 = 60.0;
pub const LINE_PITCH: f32 = 20.0;
/// Gap between the "Description:" label and the wrapped text.
pub const DESCRIPTION_GAP: f32 = 10.0;
pub const DESCRIPTION_WIDTH: f32 = 150.0;

/// Fields printed as label/value rows, in order.
const ROW_FIELDS: [FormField; 4] = [
    FormField::Name,
    FormField::Email,
    FormField::Phone,
    FormField::Position,
];

/// Lays out a validated record on a canvas.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentRenderer;

impl DocumentRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw `record` onto `canvas` and finish it into a named artifact.
    pub fn render(
        &self,
        record: &ValidatedRecord,
        canvas: &mut dyn Canvas,
    ) -> Result<NamedArtifact, RenderError> {
        let filename = artifact_filename(&record.name);

        let pdf = draw(record, canvas)
            .and_then(|_| canvas.finish())
            .map_err(|e| {
                error!("Error generating PDF {}: {}", filename, e);
                RenderError::from(e)
            })?;

        info!("Generated {} ({} bytes)", filename, pdf.len());
        Ok(NamedArtifact { filename, pdf })
    }
}

fn draw(record: &ValidatedRecord, canvas: &mut dyn Canvas) -> Result<(), super::CanvasError> {
    canvas.set_font_size(TITLE_FONT_SIZE)?;
    canvas.set_font_weight(FontWeight::Bold)?;
    canvas.draw_text(TITLE, LEFT_MARGIN, TITLE_Y)?;
    canvas.set_font_size(BODY_FONT_SIZE)?;

    let mut y = FIRST_ROW_Y;
    for (i, field) in ROW_FIELDS.iter().enumerate() {
        canvas.set_font_weight(FontWeight::Bold)?;
        canvas.draw_text(&field.caption(), LEFT_MARGIN, y)?;
        canvas.set_font_weight(FontWeight::Normal)?;
        canvas.draw_text(record.get(*field), VALUE_OFFSET, y)?;

        // The last row is followed by a wider gap before the description.
        y += if i + 1 == ROW_FIELDS.len() {
            LINE_PITCH * 1.5
        } else {
            LINE_PITCH
        };
    }

    canvas.set_font_weight(FontWeight::Bold)?;
    canvas.draw_text(&FormField::Description.caption(), LEFT_MARGIN, y)?;
    y += DESCRIPTION_GAP;

    canvas.set_font_weight(FontWeight::Normal)?;
    let lines = canvas.wrap_text(&record.description, DESCRIPTION_WIDTH);
    canvas.draw_lines(&lines, LEFT_MARGIN, y)?;

    Ok(())
}
