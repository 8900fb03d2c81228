//! Average pixel values of an RGBA buffer.

use huepick_color::Rgb24;
use tracing::debug;

use crate::buffer::PixelBuffer;
use crate::error::{CanvasError, CanvasResult};

/// Per-channel arithmetic mean of every pixel, rounded to nearest with ties
/// to even (the rounding of a clamped 8-bit canvas array).
///
/// Returns `[red, green, blue, alpha]`, each in `[0, 255]`.
pub fn average_pixel(pixels: &PixelBuffer) -> CanvasResult<[u8; 4]> {
    let count = pixels.pixel_count() as u64;
    if count == 0 {
        return Err(CanvasError::EmptyBuffer);
    }

    let mut sums = [0u64; 4];
    for px in pixels.pixels() {
        for (sum, &channel) in sums.iter_mut().zip(px) {
            *sum += u64::from(channel);
        }
    }

    let average = sums.map(|sum| round_half_even(sum, count));
    debug!(
        width = pixels.width(),
        height = pixels.height(),
        ?average,
        "averaged pixels"
    );
    Ok(average)
}

/// `sum / count` rounded to nearest, ties to even. The quotient of channel
/// sums is at most 255, so the narrowing cast is lossless.
fn round_half_even(sum: u64, count: u64) -> u8 {
    let (quotient, remainder) = (sum / count, sum % count);
    let rounded = match (2 * remainder).cmp(&count) {
        std::cmp::Ordering::Less => quotient,
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal => quotient + (quotient & 1),
    };
    rounded as u8
}

/// The average pixel as a true color, alpha dropped.
pub fn average_color(pixels: &PixelBuffer) -> CanvasResult<Rgb24> {
    let [red, green, blue, _] = average_pixel(pixels)?;
    Ok(Rgb24::new(red, green, blue))
}
