// ABOUTME: Stage toggles and threshold configuration for the cleaning pipeline.
// ABOUTME: CleanOptions enables each stage independently, all on by default.

use serde::Deserialize;

use crate::boilerplate::DEFAULT_THRESHOLD;

/// Configuration for [`process`](crate::pipeline::process).
///
/// Each stage toggles independently; a disabled stage passes text through
/// untouched. Web callers typically supply these as JSON, so every field
/// has a serde default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CleanOptions {
    /// Keep only lines that heuristically look like English prose.
    pub filter_english: bool,
    /// Strip lines repeated across a threshold fraction of pages.
    pub remove_headers_footers: bool,
    /// Trim, collapse, and Unicode-normalize the final output.
    pub clean_export: bool,
    /// Fraction of pages a line must appear in to count as boilerplate.
    pub threshold: f64,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            filter_english: true,
            remove_headers_footers: true,
            clean_export: true,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl CleanOptions {
    /// Create options with every stage enabled and the default threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the English language filter.
    pub fn filter_english(mut self, on: bool) -> Self {
        self.filter_english = on;
        self
    }

    /// Enable or disable cross-page header/footer removal.
    pub fn remove_headers_footers(mut self, on: bool) -> Self {
        self.remove_headers_footers = on;
        self
    }

    /// Enable or disable clean export normalization.
    pub fn clean_export(mut self, on: bool) -> Self {
        self.clean_export = on;
        self
    }

    /// Override the boilerplate threshold.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_enable_every_stage() {
        let opts = CleanOptions::default();
        assert!(opts.filter_english);
        assert!(opts.remove_headers_footers);
        assert!(opts.clean_export);
        assert_eq!(opts.threshold, DEFAULT_THRESHOLD);
    }

    #[test]
    fn setters_chain() {
        let opts = CleanOptions::new()
            .filter_english(false)
            .threshold(0.8);
        assert!(!opts.filter_english);
        assert!(opts.remove_headers_footers);
        assert_eq!(opts.threshold, 0.8);
    }

    #[test]
    fn deserializes_with_partial_fields() {
        let opts: CleanOptions =
            serde_json::from_str(r#"{"filter_english": false, "threshold": 0.9}"#).unwrap();
        assert!(!opts.filter_english);
        assert_eq!(opts.threshold, 0.9);
        assert!(opts.remove_headers_footers);
        assert!(opts.clean_export);
    }

    #[test]
    fn deserializes_empty_object_to_defaults() {
        let opts: CleanOptions = serde_json::from_str("{}").unwrap();
        assert!(opts.filter_english);
        assert_eq!(opts.threshold, DEFAULT_THRESHOLD);
    }
}
