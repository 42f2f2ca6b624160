// ABOUTME: Cross-page boilerplate detection and removal for scraped text.
// ABOUTME: Strips lines whose trimmed form recurs across a threshold fraction of pages.

use std::collections::{HashMap, HashSet};

use crate::lines::split_lines;

/// Minimum fraction of pages a line must appear in to count as boilerplate.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Finds trimmed line values that occur in at least `threshold` of the pages.
///
/// A line repeated within a single page counts once toward its frequency:
/// each page contributes a set of distinct trimmed lines, and the global
/// counter is incremented per set member.
fn find_repetitive_lines<S: AsRef<str>>(pages: &[S], threshold: f64) -> HashSet<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for page in pages {
        let mut seen: HashSet<&str> = HashSet::new();
        for line in split_lines(page.as_ref()) {
            let line = line.trim();
            if !line.is_empty() && seen.insert(line) {
                *counts.entry(line).or_insert(0) += 1;
            }
        }
    }

    let total = pages.len() as f64;
    counts
        .into_iter()
        .filter(|(_, count)| *count as f64 / total >= threshold)
        .map(|(line, _)| line.to_string())
        .collect()
}

/// Removes headers, footers, and navigation lines repeated across pages.
///
/// Pages come back in order, one output per input, with untrimmed line
/// content and blank lines intact; only lines whose trimmed form crossed
/// the threshold are dropped. An empty page sequence yields an empty
/// vector.
///
/// Sharp edge: with a single page, every distinct non-blank line has
/// frequency 1/1 and crosses any threshold at or below 1.0, so single-page
/// input loses all of its content. Thresholds are not validated: values
/// above 1.0 remove nothing, values at or below 0.0 remove every non-blank
/// line.
pub fn remove_headers_footers<S: AsRef<str>>(pages: &[S], threshold: f64) -> Vec<String> {
    if pages.is_empty() {
        return Vec::new();
    }

    let repetitive = find_repetitive_lines(pages, threshold);

    pages
        .iter()
        .map(|page| {
            split_lines(page.as_ref())
                .filter(|line| !repetitive.contains(line.trim()))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect()
}
