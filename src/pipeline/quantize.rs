//! Nearest-colour quantization with ordered dithering.
//!
//! Each pixel gets the dither offset added uniformly to its RGB channels,
//! is clamped and rounded back to 8-bit, and is then replaced by the
//! nearest palette entry. The nearest-entry search sits behind a trait so
//! a spatial index (k-d tree, grid hash) can be swapped in later; any
//! implementation must preserve squared-Euclidean distance and
//! lowest-index tie-breaking exactly.

use std::ops::Range;

use crate::buffer::PixelBuffer;
use crate::types::{Colour, Palette};

use super::dither::dither_offset;

/// Nearest-palette-entry lookup.
///
/// Contract: returns the index of the entry minimizing squared Euclidean
/// RGB distance, ties broken by the lowest index.
pub trait NearestColourIndex {
    fn nearest(&self, colour: Colour) -> usize;
}

/// Straightforward linear scan over the palette.
///
/// O(palette) per lookup; fine for the palette sizes in play here.
pub struct LinearScan<'a> {
    palette: &'a Palette,
}

impl<'a> LinearScan<'a> {
    /// Build a scanner over a non-empty palette.
    pub fn new(palette: &'a Palette) -> Self {
        debug_assert!(!palette.is_empty());
        Self { palette }
    }
}

impl NearestColourIndex for LinearScan<'_> {
    fn nearest(&self, colour: Colour) -> usize {
        let mut best_index = 0;
        let mut best_dist = u32::MAX;

        for (i, entry) in self.palette.iter().enumerate() {
            let dist = colour.distance_sq(*entry);
            if dist < best_dist {
                best_dist = dist;
                best_index = i;
            }
        }

        best_index
    }
}

/// Quantize a range of rows in place.
///
/// Rows are independent (ordered dithering carries no inter-pixel state),
/// so callers may split the row range across threads, each with its own
/// mutable sub-borrow of the buffer.
pub fn quantize_rows<I: NearestColourIndex>(
    buffer: &mut PixelBuffer,
    rows: Range<u32>,
    palette: &Palette,
    index: &I,
    intensity: f32,
) {
    for y in rows {
        for x in 0..buffer.width() {
            let offset = dither_offset(x, y, intensity);
            let c = buffer.colour_at(x, y);

            let dithered = Colour::rgb(
                apply_offset(c.r, offset),
                apply_offset(c.g, offset),
                apply_offset(c.b, offset),
            );

            let entry = palette
                .get(index.nearest(dithered))
                .unwrap_or(Colour::BLACK);
            buffer.set_colour(x, y, entry);
        }
    }
}

/// Quantize the whole buffer in place.
pub fn quantize(buffer: &mut PixelBuffer, palette: &Palette, intensity: f32) {
    let index = LinearScan::new(palette);
    let rows = 0..buffer.height();
    quantize_rows(buffer, rows, palette, &index, intensity);
}

/// Add the dither offset to a channel, clamping and rounding to 8-bit.
#[inline]
fn apply_offset(channel: u8, offset: f32) -> u8 {
    (channel as f32 + offset).round().clamp(0.0, 255.0) as u8
}
