//! Tonal adjustment: brightness, contrast, saturation.
//!
//! Applied in place to the RGB channels of a pixel buffer; alpha is never
//! touched. The sub-step order is fixed and each sub-step clamps before the
//! next one reads: contrast operates on the clamped brightness output, and
//! the grayscale reference for saturation is computed from the clamped
//! contrast output. Reordering or skipping the intermediate clamps changes
//! the result.

use crate::buffer::PixelBuffer;
use crate::types::Adjustments;

/// Rec. 601 luma weights.
const LUMA_R: f32 = 0.2989;
const LUMA_G: f32 = 0.5870;
const LUMA_B: f32 = 0.1140;

/// Apply brightness, contrast, and saturation to a buffer in place.
///
/// Expects pre-validated adjustments; see `Adjustments::validate`.
/// Intermediate math is f32, clamped per sub-step, with round-half-up only
/// at final 8-bit storage.
pub fn adjust(buffer: &mut PixelBuffer, adjustments: &Adjustments) {
    if adjustments.is_identity() {
        return;
    }

    let brightness = adjustments.brightness as f32;
    let contrast_factor = adjustments.contrast_factor();
    let saturation_factor = adjustments.saturation_factor();

    for px in buffer.data_mut().chunks_exact_mut(4) {
        let mut r = px[0] as f32;
        let mut g = px[1] as f32;
        let mut b = px[2] as f32;

        // Brightness
        r = (r + brightness).clamp(0.0, 255.0);
        g = (g + brightness).clamp(0.0, 255.0);
        b = (b + brightness).clamp(0.0, 255.0);

        // Contrast, scaled around the 128 midpoint
        r = (contrast_factor * (r - 128.0) + 128.0).clamp(0.0, 255.0);
        g = (contrast_factor * (g - 128.0) + 128.0).clamp(0.0, 255.0);
        b = (contrast_factor * (b - 128.0) + 128.0).clamp(0.0, 255.0);

        // Saturation, interpolating toward/away from the grey value
        let gray = LUMA_R * r + LUMA_G * g + LUMA_B * b;
        r = (gray + saturation_factor * (r - gray)).clamp(0.0, 255.0);
        g = (gray + saturation_factor * (g - gray)).clamp(0.0, 255.0);
        b = (gray + saturation_factor * (b - gray)).clamp(0.0, 255.0);

        px[0] = r.round() as u8;
        px[1] = g.round() as u8;
        px[2] = b.round() as u8;
    }
}
