//! HuePick Color - conversions between HSL, HSV and RGB.
//!
//! All values are immutable `Copy` types built through clamping
//! constructors, and every conversion is a pure, total function:
//! - `component`: normalized and 8-bit component encodings
//! - `model`: the `Hsl`, `Hsv`, `Rgb` and `Rgb24` color models
//! - `convert`: conversions between the models
//! - `canonical`: order-independent JSON keys for comparing colors

pub mod canonical;
pub mod component;
pub mod convert;
pub mod error;
pub mod model;

pub use canonical::{color_as_str, ColorKey};
pub use component::{component_8bit, normalized_component, Component8Bit, NormalizedComponent};
pub use convert::{hsl_to_rgb, hsv_to_rgb, rgb_as_rgb24, rgb_from_rgb24, rgb_to_hsl};
pub use error::{ColorError, ColorResult};
pub use model::{Hsl, Hsv, NormalizedColorModel, Rgb, Rgb24};
