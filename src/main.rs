use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod metric;
mod model;
mod profile;
mod render;

use metric::Metric;
use model::ReportOptions;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "profsort")]
#[command(about = "Sort a profile table by total or self time", long_about = None)]
struct Cli {
    /// Profile table: `calls total_time self_time ... function` per line.
    #[arg(short, long, default_value = "profile.txt")]
    input: PathBuf,

    /// Column to sort by.
    #[arg(short, long, value_enum, default_value_t = Metric::TotalTime)]
    by: Metric,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Only report functions whose name matches this regex.
    #[arg(long)]
    filter: Option<String>,

    /// Report at most N functions.
    #[arg(short = 'n', long)]
    top: Option<usize>,

    /// Debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let filter = cli
        .filter
        .as_deref()
        .map(regex::Regex::new)
        .transpose()
        .context("invalid --filter regex")?;

    let mut opts = ReportOptions::new(cli.by);
    opts.filter = filter;
    opts.top = cli.top;

    // 1) Load.
    let rows = profile::parse_profile_file(&cli.input)?;
    debug!(path = %cli.input.display(), rows = rows.len(), "loaded profile");

    // 2) Normalize + sort.
    let report = model::build_report(rows, &opts)?;
    if report.entries.is_empty() && opts.filter.is_some() {
        warn!("filter matched no functions");
    }
    debug!(metric = ?report.metric, entries = report.entries.len(), "built report");

    // 3) Render fully before touching stdout, so failures print nothing.
    let out = match cli.format {
        OutputFormat::Text => render::render_text(&report),
        OutputFormat::Json => render::render_json(&report)?,
    };
    std::io::stdout().lock().write_all(out.as_bytes())?;

    Ok(())
}
