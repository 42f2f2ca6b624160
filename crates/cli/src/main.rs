// ABOUTME: CLI for cleaning llms.txt artifacts with the llmstxt-clean pipeline.
// ABOUTME: Loads text from a file, stdin, or URL, runs the enabled stages, writes the result.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use llmstxt_clean::{process, CleanOptions, DEFAULT_THRESHOLD};
use serde_json::json;

/// Refuse inputs larger than this many bytes.
const MAX_INPUT_SIZE: u64 = 10 * 1024 * 1024;

/// Clean a scraped llms.txt/llms-full.txt artifact for LLM ingestion.
#[derive(Parser, Debug)]
#[command(name = "llmstxt")]
#[command(about = "Remove cross-page boilerplate, filter non-English lines, and normalize scraped text", long_about = None)]
struct Args {
    /// Input file path, http(s) URL, or "-" to read from stdin.
    target: String,

    /// Write the cleaned text to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip the English language filter.
    #[arg(long, default_value_t = false)]
    no_filter: bool,

    /// Skip cross-page header/footer removal.
    #[arg(long, default_value_t = false)]
    no_header_footer: bool,

    /// Skip whitespace/Unicode normalization of the output.
    #[arg(long, default_value_t = false)]
    no_clean: bool,

    /// Fraction of pages a line must repeat across to count as boilerplate.
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,

    /// Overwrite the output file if it already exists.
    #[arg(long, default_value_t = false)]
    force: bool,

    /// Print a JSON processing summary to stderr.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(output) = &args.output {
        if same_file(&args.target, output) {
            bail!("input and output paths must be different");
        }
    }

    let raw = load_text(&args.target)?;
    if raw.trim().is_empty() {
        bail!("input is empty: {}", args.target);
    }

    let opts = CleanOptions::new()
        .filter_english(!args.no_filter)
        .remove_headers_footers(!args.no_header_footer)
        .clean_export(!args.no_clean)
        .threshold(args.threshold);

    let cleaned = process(&raw, &opts);

    if args.stats {
        let summary = json!({
            "target": args.target,
            "input_bytes": raw.len(),
            "input_lines": raw.lines().count(),
            "output_bytes": cleaned.len(),
            "output_lines": cleaned.lines().count(),
        });
        eprintln!("{}", serde_json::to_string(&summary)?);
    }

    match &args.output {
        Some(path) => write_output(path, &cleaned, args.force)?,
        None => println!("{}", cleaned),
    }

    Ok(())
}

/// Loads the artifact from stdin ("-"), an http(s) URL, or a local file.
fn load_text(target: &str) -> Result<String> {
    if target == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        check_size(buf.len() as u64, target)?;
        return Ok(buf);
    }

    if is_url(target) {
        let resp = reqwest::blocking::get(target)?.error_for_status()?;
        let text = resp.text()?;
        check_size(text.len() as u64, target)?;
        return Ok(text);
    }

    let path = Path::new(target);
    let meta = fs::metadata(path).map_err(|_| anyhow!("input file not found: {}", target))?;
    if !meta.is_file() {
        bail!("input path is not a file: {}", target);
    }
    check_size(meta.len(), target)?;
    fs::read_to_string(path).with_context(|| format!("failed to read {}", target))
}

fn is_url(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://")
}

fn check_size(len: u64, target: &str) -> Result<()> {
    if len > MAX_INPUT_SIZE {
        bail!("input exceeds {} byte limit: {}", MAX_INPUT_SIZE, target);
    }
    Ok(())
}

/// True when target is a local file resolving to the same path as `output`.
fn same_file(target: &str, output: &Path) -> bool {
    if target == "-" || is_url(target) {
        return false;
    }
    match (fs::canonicalize(target), fs::canonicalize(output)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn write_output(path: &Path, cleaned: &str, force: bool) -> Result<()> {
    if path.is_dir() {
        bail!("output path is a directory: {}", path.display());
    }
    if path.exists() && !force {
        bail!(
            "output file exists: {} (pass --force to overwrite)",
            path.display()
        );
    }
    fs::write(path, cleaned).with_context(|| format!("failed to write {}", path.display()))
}
