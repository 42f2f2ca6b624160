// ABOUTME: Property tests for the cleaning core's documented invariants.
// ABOUTME: Exporter idempotence and hygiene, subtractive filtering, page preservation.

use llmstxt_clean::{
    export_clean_text, filter_english_lines, remove_headers_footers, DEFAULT_THRESHOLD,
};
use proptest::prelude::*;

/// Messy multi-line documents: padded lines, blank runs, some non-ASCII.
fn doc_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[ \t]{0,2}[a-zA-Z0-9 ,.\u{e9}\u{3b1}]{0,24}[ \t]{0,2}", 0..24)
        .prop_map(|lines| lines.join("\n"))
}

fn pages_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(doc_strategy(), 0..8)
}

proptest! {
    #[test]
    fn export_is_idempotent(text in doc_strategy()) {
        let once = export_clean_text(&text);
        let twice = export_clean_text(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn export_output_has_no_padded_lines_or_blank_runs(text in doc_strategy()) {
        let out = export_clean_text(&text);
        prop_assert!(!out.contains("\n\n\n"), "blank run in {out:?}");
        for line in out.split('\n') {
            prop_assert_eq!(line, line.trim(), "padded line in {:?}", &out);
        }
        prop_assert!(!out.starts_with('\n') && !out.ends_with('\n'), "edge blank in {out:?}");
    }

    #[test]
    fn filter_returns_a_subsequence_of_its_input(lines in prop::collection::vec(doc_strategy(), 0..16)) {
        let kept = filter_english_lines(&lines);
        prop_assert!(kept.len() <= lines.len());
        // Every kept line exists in the input, in order.
        let mut cursor = 0;
        for line in &kept {
            let pos = lines[cursor..].iter().position(|l| l == line);
            prop_assert!(pos.is_some(), "kept line {line:?} out of order");
            cursor += pos.unwrap() + 1;
        }
    }

    #[test]
    fn filter_never_keeps_short_lines(lines in prop::collection::vec("[a-z .]{0,15}", 0..16)) {
        for line in filter_english_lines(&lines) {
            prop_assert!(line.trim().chars().count() >= 10, "short line kept: {line:?}");
        }
    }

    #[test]
    fn remover_preserves_page_count_and_never_adds_lines(pages in pages_strategy()) {
        let cleaned = remove_headers_footers(&pages, DEFAULT_THRESHOLD);
        prop_assert_eq!(cleaned.len(), pages.len());
        for (before, after) in pages.iter().zip(&cleaned) {
            prop_assert!(
                after.split('\n').count() <= before.split('\n').count(),
                "page grew: {before:?} -> {after:?}"
            );
        }
    }

    #[test]
    fn remover_strips_lines_on_every_page(line in "[a-zA-Z ]{1,20}", bodies in prop::collection::vec("[a-z]{1,12}", 2..6)) {
        prop_assume!(!line.trim().is_empty());
        let trimmed = line.trim().to_string();
        prop_assume!(bodies.iter().all(|b| b != &trimmed));
        let pages: Vec<String> = bodies.iter().map(|b| format!("{line}\n{b}")).collect();
        for page in remove_headers_footers(&pages, DEFAULT_THRESHOLD) {
            for out_line in page.split('\n') {
                prop_assert_ne!(out_line.trim(), trimmed.as_str(), "boilerplate survived");
            }
        }
    }
}
