//! LogDate Rewind viewer - entry point.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Replay a LogDate journal Rewind story in the terminal.
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(version)]
#[command(about = "TUI application for replaying LogDate journal Rewind stories")]
pub struct Args {
    /// Path to a Rewind export (JSON Lines). Reads stdin when omitted.
    pub file: Option<PathBuf>,

    /// Per-panel display duration in milliseconds before auto-advance.
    #[arg(short, long, value_name = "MS")]
    pub duration_ms: Option<u64>,

    /// Horizontal drag distance, in columns, that counts as a swipe.
    #[arg(long, value_name = "COLS")]
    pub drag_threshold: Option<u16>,

    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors.
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Propagate --no-color through the conventional env var so every
    // layer sees the same decision.
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Resolve configuration: defaults → config file → env vars → CLI args.
    let config = {
        let config_file = rewind::config::load_config_with_precedence(args.config.clone())?;
        let merged = rewind::config::merge_config(config_file);
        let with_env = rewind::config::apply_env_overrides(merged);
        rewind::config::apply_cli_overrides(with_env, args.duration_ms, args.drag_threshold)
    };

    rewind::logging::init(&config.log_file_path)?;
    info!(config = ?config, "configuration loaded and resolved");

    let input_source = rewind::source::detect_input_source(args.file.clone())?;
    let colors = rewind::view::ColorConfig::from_env_and_args(args.no_color);

    let reason = rewind::view::run_with_source(input_source, &config, colors)?;
    info!(?reason, "rewind finished");

    Ok(())
}
