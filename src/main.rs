// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use polaroid_booth::Config;
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "polaroid-booth")]
#[command(about = "Photo booth that prints captures as polaroid cards")]
#[command(version)]
struct Cli {
    /// Directory holding the stored canvas (overrides the config file)
    #[arg(long, global = true)]
    storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take a photo from an image file and print it onto the canvas
    Snap {
        /// Image to use as the captured frame
        #[arg(short, long)]
        input: PathBuf,

        /// Keep the image as-is instead of mirroring it like the preview
        #[arg(long)]
        no_mirror: bool,

        /// Skip the printing pause
        #[arg(long)]
        instant: bool,
    },

    /// List photos bottom to top
    List,

    /// Move a photo (drag end)
    Move {
        /// Photo id or unique id prefix
        id: String,
        x: f64,
        y: f64,
    },

    /// Set a photo's caption (truncated to 40 characters)
    Caption {
        /// Photo id or unique id prefix
        id: String,
        text: String,
    },

    /// Bring a photo to the front
    Front {
        /// Photo id or unique id prefix
        id: String,
    },

    /// Change one photo's card color
    Recolor {
        /// Photo id or unique id prefix
        id: String,
        /// Hex color (#rgb, #rrggbb) or preset name
        color: String,
    },

    /// Delete a photo
    Delete {
        /// Photo id or unique id prefix
        id: String,
    },

    /// Delete every photo (settings are kept)
    Clear,

    /// Set the card color for new photos
    Color {
        /// Hex color (#rgb, #rrggbb) or preset name
        color: String,
    },

    /// Save a photo's image to disk
    Export {
        /// Photo id or unique id prefix
        id: String,

        /// Output directory (default: ~/Pictures/Polaroids)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=polaroid_booth=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load();
    if let Some(dir) = cli.storage_dir {
        config.storage_dir = Some(dir);
    }

    match cli.command {
        Commands::Snap {
            input,
            no_mirror,
            instant,
        } => {
            if no_mirror {
                config.mirror_preview = false;
            }
            if instant {
                config.print_delay_ms = 0;
            }
            cli::snap(&config, &input)
        }
        Commands::List => cli::list(&config),
        Commands::Move { id, x, y } => cli::move_photo(&config, &id, x, y),
        Commands::Caption { id, text } => cli::caption(&config, &id, &text),
        Commands::Front { id } => cli::bring_to_front(&config, &id),
        Commands::Recolor { id, color } => cli::recolor(&config, &id, &color),
        Commands::Delete { id } => cli::delete(&config, &id),
        Commands::Clear => cli::clear(&config),
        Commands::Color { color } => cli::set_default_color(&config, &color),
        Commands::Export { id, output } => cli::export(&config, &id, output),
    }
}
