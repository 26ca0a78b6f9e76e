use anyhow::Result;
use clap::Parser;
use fixturegen::convert::convert_files;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// The TDVT source files the tool was originally written for; used when no
/// paths are given on the command line.
const DEFAULT_FILES: [&str; 3] = [
    "Batters_headers.csv",
    "Calcs_headers.csv",
    "Staples_utf8_headers.csv",
];

#[derive(Parser)]
#[command(name = "fixturegen")]
#[command(about = "Convert CSV files into YAML fixture documents for the test data loader")]
struct Args {
    /// CSV files to convert; defaults to the standard TDVT set
    paths: Vec<PathBuf>,

    /// Directory the .yml files are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // ─── 1) init logging ─────────────────────────────────────────────
    let default = if args.verbose { "debug" } else { "info" };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // ─── 2) resolve inputs ───────────────────────────────────────────
    let paths: Vec<PathBuf> = if args.paths.is_empty() {
        DEFAULT_FILES.iter().map(PathBuf::from).collect()
    } else {
        args.paths
    };
    info!(files = paths.len(), out_dir = %args.out_dir.display(), "startup");

    // ─── 3) convert, stopping at the first failure ───────────────────
    convert_files(&paths, &args.out_dir)
}
