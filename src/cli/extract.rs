//! Extract command implementation.
//!
//! Samples a palette from an image and prints it as hex lines, one colour
//! per line, suitable for piping or pasting elsewhere.

use std::path::PathBuf;

use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::render::load_image;
use crate::types::PaletteSpec;

/// Extract a palette from an image
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Image file to sample colours from
    #[arg(required = true)]
    pub file: PathBuf,

    /// Number of colours to extract
    #[arg(long, short, default_value = "16")]
    pub colors: usize,

    /// Seed for the underflow fill (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: ExtractArgs, printer: &Printer) -> Result<()> {
    let buffer = load_image(&args.file)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let resolved = PaletteSpec::DeriveFromSource.resolve(args.colors, Some(&buffer), &mut rng)?;

    let sampled = resolved.palette.len() - resolved.random_fill;
    printer.status(
        "Sampled",
        &format!(
            "{} from {}",
            plural(sampled, "colour", "colours"),
            display_path(&args.file)
        ),
    );
    if resolved.random_fill > 0 {
        printer.warning(
            "Palette",
            &format!(
                "filled {} with random colours",
                plural(resolved.random_fill, "entry", "entries")
            ),
        );
    }

    // Print palette lines to stdout
    for colour in resolved.palette.iter() {
        println!("{}", colour);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ExtractArgs,
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::parse_from(["pixl", "photo.png"]);
        assert_eq!(cli.args.colors, 16);
        assert_eq!(cli.args.seed, None);
    }

    #[test]
    fn test_extract_from_file() {
        use crate::buffer::PixelBuffer;
        use crate::render::write_png;
        use crate::types::Colour;
        use tempfile::tempdir;

        let dir = tempdir().unwrap();
        let path = dir.path().join("sample.png");

        let mut buffer = PixelBuffer::new(2, 1);
        buffer.set_colour(0, 0, Colour::rgb(255, 0, 0));
        buffer.set_colour(1, 0, Colour::rgb(0, 0, 255));
        write_png(&buffer, &path, 1).unwrap();

        let cli = TestCli::parse_from([
            "pixl",
            path.to_str().unwrap(),
            "--colors",
            "2",
            "--seed",
            "1",
        ]);

        run(cli.args, &Printer::new()).unwrap();
    }
}
