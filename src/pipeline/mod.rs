//! The conversion pipeline.
//!
//! Composes the stages over a pre-resized buffer:
//! tonal adjustment → palette resolution (once) → dither + quantize
//! (per pixel). One conversion runs synchronously to completion or
//! failure; on failure no buffer is returned, so callers never see a
//! half-mutated image.

pub mod adjust;
pub mod dither;
pub mod quantize;

use rand::Rng;

use crate::buffer::PixelBuffer;
use crate::error::{PixlError, Result};
use crate::types::{ConversionRequest, Palette};

pub use adjust::adjust;
pub use dither::{dither_offset, BAYER_4X4};
pub use quantize::{quantize, quantize_rows, LinearScan, NearestColourIndex};

/// The output of a conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The quantized pixel buffer.
    pub pixels: PixelBuffer,
    /// The palette that was applied, for introspection or reuse.
    pub palette: Palette,
    /// Palette entries that were random-filled during image extraction.
    /// Nonzero means the source yielded fewer distinct colours than
    /// requested; callers should surface this as a warning.
    pub random_fill: usize,
}

/// Run the full pipeline over a source buffer.
///
/// The source is copied, never mutated; resizing is the caller's
/// responsibility. `original` is the un-resized image, if the caller has
/// one: palette extraction (for `derive-from-source`) samples it in
/// preference to the working buffer, so the palette reflects the full
/// image rather than the handful of pixels that survive downsampling.
/// Extraction always reads unadjusted pixels. `rng` feeds the palette
/// underflow fill, so a seeded generator makes the whole conversion
/// deterministic.
pub fn convert<R: Rng>(
    source: &PixelBuffer,
    request: &ConversionRequest,
    original: Option<&PixelBuffer>,
    rng: &mut R,
) -> Result<Conversion> {
    if source.pixel_count() == 0 {
        return Err(PixlError::MissingInput {
            message: "No source image loaded".to_string(),
        });
    }
    request.validate()?;

    let extraction_source = original.unwrap_or(source);
    let resolved = request
        .palette
        .resolve(request.colour_count, Some(extraction_source), rng)?;

    let mut pixels = source.clone();
    adjust(&mut pixels, &request.adjustments);
    quantize(&mut pixels, &resolved.palette, request.dither_intensity());

    Ok(Conversion {
        pixels,
        palette: resolved.palette,
        random_fill: resolved.random_fill,
    })
}
