// ABOUTME: Heuristic English-language line filter for scraped text.
// ABOUTME: Keeps lines with enough common stopwords and a high ASCII-letter ratio.

use crate::lines::split_lines;

/// Common English function words used as a weak signal of English prose.
/// Matched space-bounded against the lowercased line.
const ENGLISH_STOPWORDS: [&str; 20] = [
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "I", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at",
];

/// Checks whether a line is likely English prose.
///
/// Accepts iff the trimmed line is at least 10 characters, at least two
/// distinct stopwords match space-bounded (at a line edge or surrounded by
/// spaces), and more than 60% of the non-whitespace characters are ASCII
/// letters. Deliberately coarse: no tokenization, so punctuation-adjacent
/// stopwords ("the,") do not match.
fn is_english(line: &str) -> bool {
    if line.trim().chars().count() < 10 {
        return false;
    }

    let lower = line.to_lowercase();
    let mut stopwords = 0;
    for word in ENGLISH_STOPWORDS {
        if lower.contains(&format!(" {word} "))
            || lower.starts_with(&format!("{word} "))
            || lower.ends_with(&format!(" {word}"))
        {
            stopwords += 1;
            if stopwords >= 2 {
                break;
            }
        }
    }
    if stopwords < 2 {
        return false;
    }

    let ascii_letters = line.chars().filter(|c| c.is_ascii_alphabetic()).count();
    let total = line.chars().filter(|c| !c.is_whitespace()).count();
    if total == 0 {
        return false;
    }
    ascii_letters as f64 / total as f64 > 0.6
}

/// Filters a block of text, keeping only lines likely to be English.
///
/// Lines are classified independently and pass through unmodified; the
/// survivors are joined with `\n`. Empty input yields an empty string.
pub fn filter_english_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    split_lines(text)
        .filter(|line| is_english(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Filters a sequence of lines, keeping only lines likely to be English.
pub fn filter_english_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.as_ref())
        .filter(|line| is_english(line))
        .map(str::to_string)
        .collect()
}
