//! Sniffing delivered file bytes.

use crate::generators::PDF_MIME_TYPE;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// MIME type implied by the leading bytes, if recognised.
pub fn detect_mime_from_bytes(data: &[u8]) -> Option<&'static str> {
    data.starts_with(PDF_MAGIC).then_some(PDF_MIME_TYPE)
}
