//! Palettes command implementation.
//!
//! Prints the built-in palette tables, either human-readable or as JSON.

use clap::Args;
use serde::Serialize;

use crate::error::{PixlError, Result};
use crate::output::{plural, Printer};
use crate::types::Builtin;

/// List the built-in palettes
#[derive(Args, Debug)]
pub struct PalettesArgs {
    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct PaletteInfo {
    name: &'static str,
    colours: Vec<String>,
}

pub fn run(args: PalettesArgs, printer: &Printer) -> Result<()> {
    let infos: Vec<PaletteInfo> = Builtin::all()
        .into_iter()
        .map(|builtin| PaletteInfo {
            name: builtin.name(),
            colours: builtin.table().iter().map(|c| c.to_string()).collect(),
        })
        .collect();

    if args.json {
        let json = serde_json::to_string_pretty(&infos).map_err(|e| PixlError::Parse {
            message: format!("Failed to serialize palettes: {}", e),
            help: None,
        })?;
        println!("{}", json);
        return Ok(());
    }

    for info in &infos {
        println!(
            "{} ({})",
            printer.bold(info.name),
            plural(info.colours.len(), "colour", "colours")
        );
        for hex in &info.colours {
            println!("  {}", hex);
        }
        println!();
    }

    Ok(())
}
