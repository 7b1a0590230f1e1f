//! Scrawl - a minimal terminal text editor with a column ruler.
//!
//! # Usage
//!
//! ```bash
//! scrawl
//! scrawl notes.txt
//! scrawl --font "DejaVu Sans Mono:14" notes.txt
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use scrawl::app::App;
use scrawl::config::{load_prefs, prefs_path};
use scrawl::font::FontSpec;

/// A minimal terminal text editor with a column ruler
#[derive(Parser, Debug)]
#[command(name = "scrawl", version, about, long_about = None)]
struct Cli {
    /// File to edit (created on save if absent)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Override the configured font, e.g. "DejaVu Sans Mono:14"
    #[arg(long, value_name = "FAMILY:SIZE")]
    font: Option<String>,

    /// Use an alternate preferences file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let prefs_file = cli.config.unwrap_or_else(prefs_path);
    let prefs = match load_prefs(&prefs_file) {
        Ok(prefs) => prefs,
        Err(err) => {
            // A broken preferences file should not keep the editor from
            // starting.
            tracing::warn!("{err:#}; using default preferences");
            scrawl::config::Prefs::default()
        }
    };

    let font_override = cli
        .font
        .as_deref()
        .map(str::parse::<FontSpec>)
        .transpose()
        .context("Invalid --font (expected FAMILY:SIZE)")?;

    App::new()
        .with_file(cli.file)
        .with_font(font_override)
        .with_prefs(prefs)
        .with_prefs_path(Some(prefs_file))
        .run()
        .context("Application error")
}
