// ABOUTME: Text-cleaning core for llms.txt artifacts.
// ABOUTME: Re-exports the boilerplate remover, language filter, clean exporter, and pipeline.

//! llmstxt-clean - post-processing for scraped website text.
//!
//! Takes a large scraped-text artifact (an "llms.txt"/"llms-full.txt"
//! document) and makes it more suitable for language-model ingestion:
//! headers and footers repeated across pages are stripped, lines that do
//! not look like English prose are filtered out, and the result is
//! whitespace- and Unicode-normalized for deterministic export.
//!
//! All functions are pure, synchronous transformations over in-memory
//! strings: no I/O, no shared state, total for any input.
//!
//! # Example
//!
//! ```
//! use llmstxt_clean::{process, CleanOptions};
//!
//! let raw = "Docs Inc.\n\nThe guide is here to help you.\n\nDocs Inc.";
//! let cleaned = process(raw, &CleanOptions::default());
//! assert_eq!(cleaned, "The guide is here to help you.");
//! ```

pub mod boilerplate;
pub mod export;
pub mod language;
mod lines;
pub mod options;
pub mod pipeline;

pub use boilerplate::{remove_headers_footers, DEFAULT_THRESHOLD};
pub use export::export_clean_text;
pub use language::{filter_english_lines, filter_english_text};
pub use options::CleanOptions;
pub use pipeline::process;
