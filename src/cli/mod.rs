pub mod completions;
pub mod convert;
pub mod extract;
pub mod palettes;

use clap::{Parser, Subcommand};

/// pixl - Pixel art image converter
#[derive(Parser, Debug)]
#[command(name = "pixl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert an image into palette-quantized pixel art
    Convert(convert::ConvertArgs),

    /// List the built-in palettes
    Palettes(palettes::PalettesArgs),

    /// Extract a palette from an image
    Extract(extract::ExtractArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
