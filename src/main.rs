// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "scan-overlay")]
#[command(about = "Barcode scan overlay controller harness")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a scan event stream and print overlay geometry as JSON lines
    Replay {
        /// JSON-lines scan event file (one ScanResult per line)
        input: PathBuf,

        /// Configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Reported surface width in pixels
        #[arg(long, default_value = "400")]
        width: f32,

        /// Reported surface height in pixels
        #[arg(long, default_value = "300")]
        height: f32,

        /// Enable the bounding polygon
        #[arg(short, long)]
        bounding_box: bool,

        /// Enable the payload text label
        #[arg(short, long)]
        text: bool,

        /// Alert on every scan event
        #[arg(short, long)]
        alert: bool,
    },

    /// Render the overlay interactively in the terminal
    Terminal {
        /// JSON-lines scan event file looped as the detector feed
        input: PathBuf,

        /// Configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=scan_overlay=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Replay {
            input,
            config,
            width,
            height,
            bounding_box,
            text,
            alert,
        } => Ok(cli::replay_events(cli::ReplayOptions {
            input,
            config,
            width,
            height,
            bounding_box,
            text,
            alert,
        })?),
        Commands::Terminal { input, config } => Ok(scan_overlay::terminal::run(input, config)?),
    }
}
