//! manifind - find dependency manifests and lockfiles.
//!
//! Usage:
//!   manifind [PATH]                        List selected manifests
//!   manifind [PATH] -d 6 -f package.json   Deeper search, one file name only
//!   manifind [PATH] --all                  Also list every file visited
//!   manifind [PATH] --format json          Emit `{ files, allFilesFound }`

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use manifind_core::{FindResult, FinderConfig};

#[derive(Parser)]
#[command(
    name = "manifind",
    version,
    about = "Find dependency manifests and lockfiles in a directory tree",
    long_about = "manifind walks a directory tree and reports dependency manifests \
                  (package.json, Gemfile.lock, pom.xml, ...), preferring lockfiles over \
                  their descriptors in the same directory.\n\n\
                  Set RUST_LOG=manifind_scan=debug to trace the walk."
)]
struct Cli {
    /// Path to search (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Maximum depth to descend
    #[arg(short = 'd', long)]
    levels_deep: Option<u32>,

    /// Directory name or glob to prune (repeatable)
    #[arg(short, long)]
    ignore: Vec<String>,

    /// Exact file name to keep (repeatable)
    #[arg(short, long)]
    filter: Vec<String>,

    /// Do not prune node_modules and .build by default
    #[arg(long)]
    no_default_ignores: bool,

    /// Report nested gradle subprojects separately
    #[arg(long)]
    keep_gradle_subprojects: bool,

    /// Number of threads for directory reads (0 = auto)
    #[arg(short = 'j', long, default_value = "0")]
    threads: usize,

    /// Also list files that were visited but not selected
    #[arg(short, long)]
    all: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = FinderConfig::builder()
        .path(cli.path.clone())
        .levels_deep(cli.levels_deep)
        .ignore(cli.ignore)
        .filter(cli.filter)
        .include_default_ignores(!cli.no_default_ignores)
        .collapse_gradle_subprojects(!cli.keep_gradle_subprojects)
        .threads(cli.threads)
        .build()
        .context("Invalid options")?;

    let result = manifind_scan::find(config)
        .await
        .with_context(|| format!("Failed to search {}", cli.path.display()))?;

    match cli.format {
        OutputFormat::Text => print_text(&result, cli.all),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}

fn print_text(result: &FindResult, all: bool) {
    for path in &result.files {
        println!("{}", path.display());
    }

    if all {
        println!();
        println!("Not selected:");
        for path in result.filtered_out() {
            println!("  {}", path.display());
        }
    }

    eprintln!(
        "{} manifests selected, {} files visited",
        result.files.len(),
        result.all_files_found.len()
    );
}
