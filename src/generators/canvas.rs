//! Drawing capability used by document layouts.
//!
//! Coordinates are page units with the origin at the top-left corner and `y`
//! growing downwards. `y` always addresses the text baseline.

use serde::Serialize;

use super::metrics::{text_width_pt, wrap_words};
use super::traits::CanvasProvider;
use super::CanvasError;

/// Line advance for multi-line text, as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// A drawing surface that collects positioned text and produces a document.
pub trait Canvas {
    fn set_font_size(&mut self, size: f32) -> Result<(), CanvasError>;

    fn set_font_weight(&mut self, weight: FontWeight) -> Result<(), CanvasError>;

    /// Draw one line of text with its baseline at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32) -> Result<(), CanvasError>;

    /// Draw several lines starting at `(x, y)`. The canvas decides the line advance.
    fn draw_lines(&mut self, lines: &[String], x: f32, y: f32) -> Result<(), CanvasError>;

    /// Split `text` into lines no wider than `max_width` in the current font.
    fn wrap_text(&self, text: &str, max_width: f32) -> Vec<String>;

    /// Serialize the document. A canvas can only be finished once.
    fn finish(&mut self) -> Result<Vec<u8>, CanvasError>;
}

/// One recorded canvas call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    FontSize { size: f32 },
    FontWeight { weight: FontWeight },
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        weight: FontWeight,
    },
}

/// Canvas that records draw calls instead of producing PDF bytes.
///
/// Units are points. Multi-line draws are expanded into one [`DrawOp::Text`]
/// per line using [`LINE_HEIGHT_FACTOR`], so the recorded positions match what
/// the PDF canvas places on the page.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<DrawOp>,
    font_size: f32,
    weight: FontWeight,
    finished: bool,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self {
            font_size: 16.0,
            ..Self::default()
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Only the text draws, in order.
    pub fn texts(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Text { .. }))
    }

    /// The visible text of the page, one draw per line.
    pub fn transcript(&self) -> String {
        self.texts()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Canvas for RecordingCanvas {
    fn set_font_size(&mut self, size: f32) -> Result<(), CanvasError> {
        self.font_size = size;
        self.ops.push(DrawOp::FontSize { size });
        Ok(())
    }

    fn set_font_weight(&mut self, weight: FontWeight) -> Result<(), CanvasError> {
        self.weight = weight;
        self.ops.push(DrawOp::FontWeight { weight });
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32) -> Result<(), CanvasError> {
        if self.finished {
            return Err(CanvasError::Finished);
        }
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            size: self.font_size,
            weight: self.weight,
        });
        Ok(())
    }

    fn draw_lines(&mut self, lines: &[String], x: f32, y: f32) -> Result<(), CanvasError> {
        let advance = self.font_size * LINE_HEIGHT_FACTOR;
        for (i, line) in lines.iter().enumerate() {
            self.draw_text(line, x, y + advance * i as f32)?;
        }
        Ok(())
    }

    fn wrap_text(&self, text: &str, max_width: f32) -> Vec<String> {
        wrap_words(text, max_width, |s| {
            text_width_pt(s, self.weight, self.font_size)
        })
    }

    fn finish(&mut self) -> Result<Vec<u8>, CanvasError> {
        if self.finished {
            return Err(CanvasError::Finished);
        }
        self.finished = true;
        Ok(self.transcript().into_bytes())
    }
}

/// Provider handing out [`RecordingCanvas`] instances.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordingCanvasProvider;

impl CanvasProvider for RecordingCanvasProvider {
    fn create(&self) -> Result<Box<dyn Canvas>, CanvasError> {
        Ok(Box::new(RecordingCanvas::new()))
    }
}
