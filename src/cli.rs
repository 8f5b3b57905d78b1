use crate::report::{render_json, render_text, ReportOptions};
use crate::{Extractor, MatchSet, Registry};
use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Extract emails, URLs, phone numbers and other patterns from text
#[derive(Parser, Debug)]
#[command(name = "regex-extractor", author, version, about, long_about = None)]
pub struct Args {
    /// Files to scan (reads stdin when none are given)
    pub files: Vec<PathBuf>,

    /// Show only specific categories (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub categories: Vec<String>,

    /// Exclude specific categories (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// JSON rule file replacing the built-in categories
    #[arg(short, long)]
    pub rules: Option<PathBuf>,

    /// Print results as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Mask credit card numbers except the last four digits
    #[arg(short, long)]
    pub mask: bool,

    /// Print the total number of matches
    #[arg(short, long)]
    pub summary: bool,

    /// Refuse inputs larger than this many bytes
    #[arg(long)]
    pub max_input_bytes: Option<usize>,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn trimmed(names: &[String]) -> Vec<String> {
    names
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn load_registry(args: &Args) -> Result<Registry> {
    let registry = match &args.rules {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read rule file {}", path.display()))?;
            Registry::from_json(&json)
                .with_context(|| format!("Failed to load rules from {}", path.display()))?
        }
        None => Registry::builtin()?,
    };

    Ok(registry.select(&trimmed(&args.categories), &trimmed(&args.exclude)))
}

pub fn render(result: &MatchSet, args: &Args) -> Result<String> {
    let opts = ReportOptions {
        summary: args.summary,
        mask: args.mask,
    };

    if args.json {
        Ok(serde_json::to_string_pretty(&render_json(result, &opts))?)
    } else {
        Ok(render_text(result, &opts))
    }
}

/// Scan stdin or the given files and write one report per input to `out`.
pub fn run(args: &Args, mut stdin: impl Read, out: &mut impl Write) -> Result<()> {
    let registry = load_registry(args)?;
    debug!(categories = registry.len(), "registry ready");

    let mut extractor = Extractor::new(registry);
    if let Some(max) = args.max_input_bytes {
        extractor = extractor.with_max_input_len(max);
    }

    if args.files.is_empty() {
        let mut text = String::new();
        stdin
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        let result = extractor.extract_all(&text)?;
        writeln!(out, "{}", render(&result, args)?)?;
        return Ok(());
    }

    info!(files = args.files.len(), "processing files");
    let results: Vec<Result<MatchSet>> = args
        .files
        .par_iter()
        .map(|path| {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            extractor
                .extract_all(&text)
                .with_context(|| format!("Failed to scan {}", path.display()))
        })
        .collect();

    let several = args.files.len() > 1;
    for (path, result) in args.files.iter().zip(results) {
        let result = result?;
        if several {
            writeln!(out, "==> {} <==", path.display())?;
        }
        writeln!(out, "{}", render(&result, args)?)?;
    }

    Ok(())
}
