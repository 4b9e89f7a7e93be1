// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use viewfinder::{PixelEncoding, TargetPlatform};

mod cli;

#[derive(Parser)]
#[command(name = "viewfinder")]
#[command(about = "Select and apply the best capture mode for a camera")]
#[command(version = viewfinder::constants::app_version())]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List capture devices and their configurations
    List,

    /// Select the best viewfinder configuration
    Select {
        /// Capture device path (default: last used, then first found)
        #[arg(short, long, conflicts_with = "fixture")]
        device: Option<String>,

        /// Read configurations from a JSON fixture instead of hardware
        #[arg(short, long)]
        fixture: Option<PathBuf>,

        /// Platform whose default encodings apply (ios, android, desktop)
        #[arg(short, long)]
        platform: Option<TargetPlatform>,

        /// Acceptable encoding; repeat to accept several (overrides platform)
        #[arg(short, long = "encoding")]
        encodings: Vec<PixelEncoding>,

        /// Apply the selected configuration to the device
        #[arg(short, long)]
        apply: bool,
    },

    /// Show the config file and effective encoding preferences
    Config,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=viewfinder=info
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
        Commands::List => cli::list_devices(),
        Commands::Select {
            device,
            fixture,
            platform,
            encodings,
            apply,
        } => cli::select(cli::SelectOptions {
            device,
            fixture,
            platform,
            encodings,
            apply,
        }),
        Commands::Config => cli::show_config(),
    }
}
