//! Common utilities for document generation.

use lazy_static::lazy_static;
use regex::Regex;

pub const FILENAME_SUFFIX: &str = "_details.pdf";

/// Longest file name most filesystems accept, in bytes.
pub const MAX_FILENAME_BYTES: usize = 255;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("whitespace pattern is valid");
}

/// Suggested download name: whitespace runs become `_`, then `_details.pdf`.
///
/// Characters that are not allowed in file names are removed afterwards. An
/// overlong name is cut short so the suffix always survives.
pub fn artifact_filename(name: &str) -> String {
    let base = WHITESPACE_RUN.replace_all(name, "_");
    let options = sanitize_filename::Options {
        truncate: false,
        ..Default::default()
    };
    let cleaned =
        sanitize_filename::sanitize_with_options(format!("{}{}", base, FILENAME_SUFFIX), options);
    let stem = cleaned.strip_suffix(FILENAME_SUFFIX).unwrap_or(&cleaned);

    let mut end = stem.len().min(MAX_FILENAME_BYTES - FILENAME_SUFFIX.len());
    while !stem.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}{}", &stem[..end], FILENAME_SUFFIX)
}
