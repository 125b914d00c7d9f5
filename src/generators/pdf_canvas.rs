//! printpdf backed canvas.
//!
//! Draws on a single A4 page with the builtin Helvetica faces. Layout
//! coordinates are converted from the configured page unit into printpdf's
//! millimetres with the origin flipped to the bottom-left corner.

use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

use super::canvas::{Canvas, FontWeight, LINE_HEIGHT_FACTOR};
use super::metrics::{text_width_pt, wrap_words};
use super::traits::CanvasProvider;
use super::CanvasError;
use crate::config::{DocumentConfig, PageUnit};

pub const A4_WIDTH_MM: f32 = 210.0;
pub const A4_HEIGHT_MM: f32 = 297.0;

pub struct PdfCanvas {
    doc: Option<PdfDocumentReference>,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    unit: PageUnit,
    font_size: f32,
    weight: FontWeight,
}

impl PdfCanvas {
    pub fn new(title: &str, unit: PageUnit) -> Result<Self, CanvasError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(A4_WIDTH_MM), Mm(A4_HEIGHT_MM), "Layer 1");
        let layer = doc.get_page(page).get_layer(layer);

        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| CanvasError::Font("Helvetica", e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| CanvasError::Font("Helvetica-Bold", e.to_string()))?;

        Ok(Self {
            doc: Some(doc),
            layer,
            regular,
            bold,
            unit,
            font_size: 16.0,
            weight: FontWeight::Normal,
        })
    }

    fn font(&self) -> &IndirectFontRef {
        match self.weight {
            FontWeight::Normal => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }

    fn x_mm(&self, x: f32) -> Mm {
        Mm(self.unit.to_mm(x))
    }

    fn y_mm(&self, y: f32) -> Mm {
        Mm(A4_HEIGHT_MM - self.unit.to_mm(y))
    }

    fn ensure_open(&self) -> Result<(), CanvasError> {
        if self.doc.is_none() {
            return Err(CanvasError::Finished);
        }
        Ok(())
    }
}

impl Canvas for PdfCanvas {
    fn set_font_size(&mut self, size: f32) -> Result<(), CanvasError> {
        self.font_size = size;
        Ok(())
    }

    fn set_font_weight(&mut self, weight: FontWeight) -> Result<(), CanvasError> {
        self.weight = weight;
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32) -> Result<(), CanvasError> {
        self.ensure_open()?;
        if text.is_empty() {
            return Ok(());
        }
        self.layer.use_text(
            text,
            self.font_size,
            self.x_mm(x),
            self.y_mm(y),
            self.font(),
        );
        Ok(())
    }

    fn draw_lines(&mut self, lines: &[String], x: f32, y: f32) -> Result<(), CanvasError> {
        self.ensure_open()?;
        if lines.iter().all(|line| line.is_empty()) {
            return Ok(());
        }

        let font = self.font().clone();
        self.layer.begin_text_section();
        self.layer.set_font(&font, self.font_size);
        self.layer.set_text_cursor(self.x_mm(x), self.y_mm(y));
        self.layer.set_line_height(self.font_size * LINE_HEIGHT_FACTOR);
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                self.layer.add_line_break();
            }
            self.layer.write_text(line.as_str(), &font);
        }
        self.layer.end_text_section();
        Ok(())
    }

    fn wrap_text(&self, text: &str, max_width: f32) -> Vec<String> {
        wrap_words(text, max_width, |s| {
            self.unit
                .from_pt(text_width_pt(s, self.weight, self.font_size))
        })
    }

    fn finish(&mut self) -> Result<Vec<u8>, CanvasError> {
        let doc = self.doc.take().ok_or(CanvasError::Finished)?;
        doc.save_to_bytes()
            .map_err(|e| CanvasError::Backend(e.to_string()))
    }
}

/// Creates a fresh [`PdfCanvas`] per document.
#[derive(Debug, Clone)]
pub struct PdfCanvasProvider {
    title: String,
    unit: PageUnit,
}

impl PdfCanvasProvider {
    pub fn new(config: &DocumentConfig) -> Self {
        Self {
            title: config.document_title.clone(),
            unit: config.page_unit,
        }
    }
}

impl CanvasProvider for PdfCanvasProvider {
    fn create(&self) -> Result<Box<dyn Canvas>, CanvasError> {
        Ok(Box::new(PdfCanvas::new(&self.title, self.unit)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_produces_pdf_bytes() {
        let mut canvas = PdfCanvas::new("Test", PageUnit::Point).unwrap();
        canvas.set_font_size(12.0).unwrap();
        canvas.draw_text("Hello", 20.0, 30.0).unwrap();
        let bytes = canvas.finish().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(matches!(canvas.finish(), Err(CanvasError::Finished)));
    }

    #[test]
    fn test_wrap_width_depends_on_unit() {
        let text = "word ".repeat(40);
        let mut in_pt = PdfCanvas::new("Test", PageUnit::Point).unwrap();
        let mut in_mm = PdfCanvas::new("Test", PageUnit::Millimeter).unwrap();
        in_pt.set_font_size(12.0).unwrap();
        in_mm.set_font_size(12.0).unwrap();

        // 150mm is wider than 150pt, so fewer lines are needed.
        let pt_lines = in_pt.wrap_text(text.trim_end(), 150.0);
        let mm_lines = in_mm.wrap_text(text.trim_end(), 150.0);
        assert!(pt_lines.len() > mm_lines.len());
    }
}
