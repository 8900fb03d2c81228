//! Hue/saturation gradient rendering.

use huepick_color::{hsl_to_rgb, rgb_as_rgb24, Hsl};
use rayon::prelude::*;
use tracing::debug;

use crate::buffer::PixelBuffer;
use crate::error::CanvasResult;

/// Luminosity of every gradient pixel.
pub const GRADIENT_LUMINOSITY: f64 = 0.5;

/// Render a 2D hue/saturation gradient.
///
/// Hue grows left to right (`col / width`), saturation falls top to bottom
/// (`1 - row / height`), luminosity is fixed at 0.5 and alpha is opaque.
/// Fails with `TooLarge` if the buffer size overflows.
pub fn hue_saturation_gradient(width: u32, height: u32) -> CanvasResult<PixelBuffer> {
    debug!(width, height, "rendering hue/saturation gradient");

    let mut pixels = PixelBuffer::new(width, height)?;
    if pixels.is_empty() {
        return Ok(pixels);
    }

    pixels
        .pixels_mut()
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(row, out)| {
            let saturation = 1.0 - row as f64 / f64::from(height);
            for (col, px) in out.iter_mut().enumerate() {
                let hue = col as f64 / f64::from(width);
                let rgb = rgb_as_rgb24(hsl_to_rgb(Hsl::new(hue, saturation, GRADIENT_LUMINOSITY)));
                let [red, green, blue] = rgb.to_array();
                *px = [red, green, blue, 255];
            }
        });

    debug!(bytes = pixels.as_bytes().len(), "gradient rendered");
    Ok(pixels)
}
