//! CLI entry point for the gradebook tool.
//!
//! Sets up logging, parses the roster/summary path options, and hands the
//! process's stdin/stdout to the interactive shell loop.

use anyhow::Result;
use clap::Parser;
use gradebook::roster::Gradebook;
use gradebook::shell;
use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(about = "Track students and grades from an interactive console menu", long_about = None)]
struct Cli {
    /// CSV file the roster is saved to and loaded from
    #[arg(short, long, default_value = "gradebook.csv")]
    roster: PathBuf,

    /// CSV file the summary report is exported to
    #[arg(short, long, default_value = "summary.csv")]
    summary: PathBuf,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file. The stderr
    // default is warn so diagnostics don't interleave with the menu.
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/gradebook.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("gradebook.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut gradebook = Gradebook::new();
    shell::run(
        stdin.lock(),
        stdout.lock(),
        &mut gradebook,
        &cli.roster,
        &cli.summary,
    )
}
