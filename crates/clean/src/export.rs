// ABOUTME: Whitespace and Unicode normalization for clean text export.
// ABOUTME: Trims lines, collapses blank-line runs, and NFC-normalizes for embedding.

use unicode_normalization::UnicodeNormalization;

use crate::lines::split_lines;

/// Cleans and formats text for embedding-friendly export.
///
/// The whole input is NFC-normalized first, then split into lines. Each
/// line is trimmed; runs of blank lines collapse to at most one empty line,
/// and empty lines only ever appear between two content lines. Whitespace-only
/// input yields an empty string.
///
/// Idempotent: exporting an export returns it unchanged.
pub fn export_clean_text(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let normalized: String = text.nfc().collect();

    let mut out: Vec<&str> = Vec::new();
    let mut blank_pending = false;
    for line in split_lines(&normalized) {
        let line = line.trim();
        if line.is_empty() {
            blank_pending = true;
            continue;
        }
        // A pending blank only materializes between two content lines.
        if blank_pending && !out.is_empty() {
            out.push("");
        }
        out.push(line);
        blank_pending = false;
    }

    out.join("\n")
}
