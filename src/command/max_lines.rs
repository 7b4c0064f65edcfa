//! `cargo localver max-lines` — enforce a per-file line limit.
//!
//! Walks the given roots for `.rs` files, skipping hidden directories plus
//! `target/` and `node_modules/`, and fails when any file exceeds the limit.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use ignore::WalkBuilder;

use crate::error::{LocalverError, Result};

#[derive(Parser, Debug, Clone)]
pub struct MaxLinesArgs {
    /// Maximum allowed physical lines per file
    #[arg(long, value_name = "N", default_value_t = 1000)]
    pub max_lines: usize,

    /// Root directory to scan (repeatable, defaults to the current directory)
    #[arg(long = "root", value_name = "DIR")]
    pub roots: Vec<PathBuf>,
}

pub fn execute(args: MaxLinesArgs) -> Result<()> {
    let roots = if args.roots.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.roots
    };

    let mut offenders: Vec<(usize, PathBuf)> = Vec::new();
    for root in &roots {
        if !root.exists() {
            log::debug!("skipping missing root: {}", root.display());
            continue;
        }

        for entry in WalkBuilder::new(root)
            .filter_entry(|e| {
                e.file_name() != "target" && e.file_name() != "node_modules"
            })
            .build()
        {
            let entry = entry.map_err(|e| anyhow::anyhow!(e))?;
            let path = entry.path();
            if entry.file_type().is_some_and(|t| t.is_file())
                && path.extension().and_then(|e| e.to_str()) == Some("rs")
            {
                let lines = count_lines(path)?;
                if lines > args.max_lines {
                    offenders.push((lines, path.to_path_buf()));
                }
            }
        }
    }

    if offenders.is_empty() {
        log::info!("no Rust files over {} lines", args.max_lines);
        return Ok(());
    }

    offenders.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));

    eprintln!(
        "{}",
        format!(
            "Found {} Rust files over {} lines:",
            offenders.len(),
            args.max_lines
        )
        .red()
        .bold()
    );
    for (lines, path) in &offenders {
        eprintln!("- {}: {lines}", path.display());
    }

    Err(LocalverError::LineLimitExceeded {
        files: offenders.len(),
        max: args.max_lines,
    })
}

/// Physical line count, tolerating invalid UTF-8.
fn count_lines(path: &Path) -> Result<usize> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).lines().count())
}
