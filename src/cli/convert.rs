//! Convert command implementation.
//!
//! Decodes the source image, downsamples it, runs the conversion pipeline,
//! and writes the quantized PNG.

use std::path::PathBuf;

use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::pipeline::convert;
use crate::render::{load_image, resize_to_width, write_png};
use crate::types::{Adjustments, ConversionRequest, PaletteSpec};

/// Convert an image into palette-quantized pixel art
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input image file
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output PNG path
    #[arg(long, short, default_value = "pixel-art.png")]
    pub out: PathBuf,

    /// Output width in pixels (height follows the aspect ratio)
    #[arg(long, short, default_value = "64")]
    pub width: u32,

    /// Number of palette colours
    #[arg(long, short, default_value = "16")]
    pub colors: usize,

    /// Palette name, or "derive-from-source" to sample the image
    #[arg(long, short, default_value = "standard")]
    pub palette: String,

    /// Dither intensity (0-100)
    #[arg(long, short, default_value = "50")]
    pub dither: u32,

    /// Brightness adjustment (-255 to 255)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub brightness: i32,

    /// Contrast adjustment (-254 to 254)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub contrast: i32,

    /// Saturation adjustment (-100 and up)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub saturation: i32,

    /// Integer upscale factor for the output PNG
    #[arg(long, default_value = "1")]
    pub scale: u32,

    /// Seed for the palette underflow fill (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: ConvertArgs, printer: &Printer) -> Result<()> {
    let source = load_image(&args.input)?;
    printer.status(
        "Loaded",
        &format!(
            "{} ({}x{})",
            display_path(&args.input),
            source.width(),
            source.height()
        ),
    );

    let resized = resize_to_width(&source, args.width)?;

    let request = ConversionRequest {
        adjustments: Adjustments::new(args.brightness, args.contrast, args.saturation),
        palette: PaletteSpec::parse(&args.palette),
        colour_count: args.colors,
        dither: args.dither,
    };

    printer.info(
        "Palette",
        &format!(
            "{} ({})",
            args.palette,
            plural(args.colors, "colour", "colours")
        ),
    );

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Extraction samples the full decoded image, not the downsampled copy.
    let conversion = convert(&resized, &request, Some(&source), &mut rng)?;

    if conversion.random_fill > 0 {
        printer.warning(
            "Palette",
            &format!(
                "source ran out of distinct colours; filled {} randomly",
                plural(conversion.random_fill, "entry", "entries"),
            ),
        );
    }

    write_png(&conversion.pixels, &args.out, args.scale)?;

    printer.success(
        "Converted",
        &format!(
            "{} ({}x{}, {} colours) -> {}",
            display_path(&args.input),
            conversion.pixels.width(),
            conversion.pixels.height(),
            conversion.palette.len(),
            display_path(&args.out)
        ),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ConvertArgs,
    }

    #[test]
    fn test_defaults() {
        let cli = TestCli::parse_from(["pixl", "photo.png"]);
        assert_eq!(cli.args.width, 64);
        assert_eq!(cli.args.colors, 16);
        assert_eq!(cli.args.palette, "standard");
        assert_eq!(cli.args.dither, 50);
        assert_eq!(cli.args.scale, 1);
        assert_eq!(cli.args.seed, None);
    }

    #[test]
    fn test_negative_adjustments_parse() {
        let cli = TestCli::parse_from([
            "pixl",
            "photo.png",
            "--brightness",
            "-40",
            "--contrast",
            "-20",
            "--saturation",
            "-100",
        ]);
        assert_eq!(cli.args.brightness, -40);
        assert_eq!(cli.args.contrast, -20);
        assert_eq!(cli.args.saturation, -100);
    }

    #[test]
    fn test_end_to_end_file_conversion() {
        use crate::buffer::PixelBuffer;
        use crate::types::Colour;
        use tempfile::tempdir;

        let dir = tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");

        // 4x4 mid-grey source
        let mut buffer = PixelBuffer::new(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                buffer.set_colour(x, y, Colour::rgb(128, 128, 128));
            }
        }
        write_png(&buffer, &input, 1).unwrap();

        let cli = TestCli::parse_from([
            "pixl",
            input.to_str().unwrap(),
            "--out",
            output.to_str().unwrap(),
            "--width",
            "2",
            "--palette",
            "grayscale",
            "--colors",
            "9",
            "--dither",
            "0",
        ]);

        run(cli.args, &Printer::new()).unwrap();

        let result = load_image(&output).unwrap();
        assert_eq!(result.width(), 2);
        assert_eq!(result.height(), 2);
        // 128 is an exact grayscale entry
        assert_eq!(result.colour_at(0, 0), Colour::rgb(128, 128, 128));
    }
}
