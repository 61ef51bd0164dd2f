//! Ordered dithering offsets.
//!
//! A fixed Bayer 4x4 threshold matrix tiled over the image. The offset is
//! stateless per pixel (no error diffusion), so quantization can proceed
//! in any order or in parallel.

/// Bayer 4x4 ordered dithering threshold matrix.
/// Values are in the range [0, 16) and are normalized to [-0.5, 0.5)
/// by computing (value / 16.0 - 0.5) before scaling by the spread.
pub const BAYER_4X4: [[u8; 4]; 4] = [
    [0, 8, 2, 10],
    [12, 4, 14, 6],
    [3, 11, 1, 9],
    [15, 7, 13, 5],
];

/// Base spread in channel levels at full intensity.
const DITHER_SPREAD: f32 = 64.0;

/// Dither offset for pixel (x, y).
///
/// `intensity` is in [0.0, 1.0] and scales the 64-level base spread. The
/// result is added uniformly to all three RGB channels before the nearest
/// palette lookup.
#[inline]
pub fn dither_offset(x: u32, y: u32, intensity: f32) -> f32 {
    let threshold = BAYER_4X4[y as usize % 4][x as usize % 4] as f32 / 16.0 - 0.5;
    threshold * intensity * DITHER_SPREAD
}
