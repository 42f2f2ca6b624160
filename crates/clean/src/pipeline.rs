// ABOUTME: Composes the cleaning stages over a single scraped-text artifact.
// ABOUTME: Splits into pages, removes boilerplate, filters language, then exports.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::boilerplate::remove_headers_footers;
use crate::export::export_clean_text;
use crate::language::filter_english_text;
use crate::options::CleanOptions;

/// Page boundary inside a generated artifact: a form feed or a blank-line run.
static PAGE_DELIMITER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\f|(?:\r?\n){2,}").expect("page delimiter regex"));

/// Runs the enabled cleaning stages over `text` in pipeline order.
///
/// The artifact is split into pages on blank-line runs, boilerplate is
/// removed across pages and the pages rejoined with a double newline, then
/// the language filter and clean exporter run over the rejoined text. Each
/// stage is independent; disabled stages pass the text through untouched.
pub fn process(text: &str, opts: &CleanOptions) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut text = text.to_string();

    if opts.remove_headers_footers {
        let pages: Vec<&str> = PAGE_DELIMITER.split(&text).collect();
        text = remove_headers_footers(&pages, opts.threshold).join("\n\n");
    }

    if opts.filter_english {
        text = filter_english_text(&text);
    }

    if opts.clean_export {
        text = export_clean_text(&text);
    }

    text
}
