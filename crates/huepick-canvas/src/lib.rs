//! HuePick Canvas - RGBA pixel buffers on top of the color library.
//!
//! Renders the hue/saturation gradient shown by the color map and averages
//! image regions down to a single picked color.

pub mod average;
pub mod buffer;
pub mod error;
pub mod gradient;

pub use average::{average_color, average_pixel};
pub use buffer::{PixelBuffer, Region, BYTES_PER_PIXEL};
pub use error::{CanvasError, CanvasResult};
pub use gradient::{hue_saturation_gradient, GRADIENT_LUMINOSITY};
