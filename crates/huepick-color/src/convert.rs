//! Conversions between HSL, HSV, RGB and 24-bit RGB.
//!
//! Every function here is pure and total: inputs are already normalized, and
//! every output component is clamped back into `[0, 1]`.

use crate::component::{component_8bit, normalized_component, NormalizedComponent};
use crate::model::{Hsl, Hsv, Rgb, Rgb24};

/// Saturations at or below this are treated as gray and get hue 0.
pub const ACHROMATIC_EPSILON: f64 = 1e-5;

/// Phase offsets selecting red, green and blue from the shared HSL formula.
const HSL_PHASES: [f64; 3] = [0.0, 8.0, 4.0];

/// Phase offsets selecting red, green and blue from the shared HSV formula.
const HSV_PHASES: [f64; 3] = [5.0, 3.0, 1.0];

/// Convert HSL to RGB.
///
/// Uses the piecewise-linear form of the HSL to RGB mapping (CSS Color 4):
/// `a = s * min(l, 1 - l)`, then per channel
/// `l - a * clamp(min(k - 3, 9 - k, 1), -1, 1)` with `k = (n + 12h) mod 12`.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let Hsl {
        hue,
        saturation,
        luminosity,
    } = hsl;
    let (h, s, l) = (hue.get(), saturation.get(), luminosity.get());
    let a = s * l.min(1.0 - l);

    let channel = |n: f64| -> NormalizedComponent {
        let k = (n + h * 12.0).rem_euclid(12.0);
        let step = (k - 3.0).min(9.0 - k).min(1.0).clamp(-1.0, 1.0);
        normalized_component(l - a * step)
    };

    let [r, g, b] = HSL_PHASES;
    Rgb {
        red: channel(r),
        green: channel(g),
        blue: channel(b),
    }
}

/// Convert RGB to HSL.
///
/// Near-gray results (saturation at or below [`ACHROMATIC_EPSILON`]) are
/// canonicalized to hue 0.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let [red, green, blue] = rgb.to_array();
    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let luminosity = (min + max) / 2.0;
    let d = max - min;

    let mut hue = 0.0;
    let mut saturation = 0.0;

    if d != 0.0 {
        saturation = if luminosity == 0.0 || luminosity == 1.0 {
            0.0
        } else {
            (max - luminosity) / luminosity.min(1.0 - luminosity)
        };

        hue = if max == red {
            (green - blue) / d + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (blue - red) / d + 2.0
        } else {
            (red - green) / d + 4.0
        };
        hue /= 6.0;
    }

    // Far out-of-gamut input can yield a negative saturation; flip to the
    // opposite hue instead. Defensive only: clamped channels always give
    // max >= luminosity, so this is unreachable through the public API.
    if saturation < 0.0 {
        hue += 0.5;
        saturation = saturation.abs();
    }

    if hue >= 1.0 {
        hue -= 1.0;
    }

    if saturation <= ACHROMATIC_EPSILON {
        hue = 0.0;
    }

    Hsl {
        hue: normalized_component(hue),
        saturation: normalized_component(saturation),
        luminosity: normalized_component(luminosity),
    }
}

/// Convert HSV to RGB.
///
/// Per channel `v - s * v * max(min(k, 4 - k, 1), 0)` with
/// `k = (n + 6h) mod 6`.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let (h, s, v) = (hsv.hue.get(), hsv.saturation.get(), hsv.value.get());
    let a = s * v;

    let channel = |n: f64| -> NormalizedComponent {
        let k = (n + h * 6.0).rem_euclid(6.0);
        let step = k.min(4.0 - k).min(1.0).max(0.0);
        normalized_component(v - a * step)
    };

    let [r, g, b] = HSV_PHASES;
    Rgb {
        red: channel(r),
        green: channel(g),
        blue: channel(b),
    }
}

/// Quantize an RGB color to true color.
pub fn rgb_as_rgb24(rgb: Rgb) -> Rgb24 {
    Rgb24 {
        red: component_8bit(rgb.red),
        green: component_8bit(rgb.green),
        blue: component_8bit(rgb.blue),
    }
}

/// Expand a true color back to normalized RGB.
///
/// `rgb_as_rgb24(rgb_from_rgb24(x)) == x` for every `x`; the reverse does
/// not hold because quantization drops precision.
pub fn rgb_from_rgb24(rgb24: Rgb24) -> Rgb {
    let expand = |c: u8| normalized_component(f64::from(c) / 255.0);
    Rgb {
        red: expand(rgb24.red.get()),
        green: expand(rgb24.green.get()),
        blue: expand(rgb24.blue.get()),
    }
}

impl From<Hsl> for Rgb {
    fn from(value: Hsl) -> Self {
        hsl_to_rgb(value)
    }
}

impl From<Hsv> for Rgb {
    fn from(value: Hsv) -> Self {
        hsv_to_rgb(value)
    }
}

impl From<Rgb> for Hsl {
    fn from(value: Rgb) -> Self {
        rgb_to_hsl(value)
    }
}

impl From<Rgb> for Rgb24 {
    fn from(value: Rgb) -> Self {
        rgb_as_rgb24(value)
    }
}

impl From<Rgb24> for Rgb {
    fn from(value: Rgb24) -> Self {
        rgb_from_rgb24(value)
    }
}
