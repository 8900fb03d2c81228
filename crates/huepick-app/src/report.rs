//! Turning command-line input into colors, and colors into reports.

use std::fmt;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use huepick_color::{
    color_as_str, hsl_to_rgb, hsv_to_rgb, rgb_as_rgb24, rgb_from_rgb24, rgb_to_hsl, ColorKey, Hsl,
    Hsv, NormalizedComponent, Rgb, Rgb24,
};
use serde::Serialize;

/// Color model of the values given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputModel {
    /// hue, saturation, luminosity in [0, 1]
    Hsl,
    /// hue, saturation, value in [0, 1]
    Hsv,
    /// red, green, blue in [0, 1]
    Rgb,
    /// red, green, blue in [0, 255]
    Rgb24,
}

/// One color shown in every model the picker displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorReport {
    pub input: InputModel,
    pub rgb: Rgb,
    pub rgb24: Rgb24,
    pub hsl: Hsl,
    pub hex: String,
    pub key: ColorKey,
}

impl ColorReport {
    /// Parse three command-line values as a color in `model`.
    pub fn parse(model: InputModel, values: &[String]) -> Result<Self> {
        let [a, b, c] = values else {
            bail!("expected 3 values for {model:?}, got {}", values.len());
        };

        let report = match model {
            InputModel::Hsl => {
                let hsl = Hsl {
                    hue: strict(a)?,
                    saturation: strict(b)?,
                    luminosity: strict(c)?,
                };
                Self::build(model, hsl_to_rgb(hsl), Some(hsl))
            }
            InputModel::Hsv => {
                let hsv = Hsv {
                    hue: strict(a)?,
                    saturation: strict(b)?,
                    value: strict(c)?,
                };
                Self::build(model, hsv_to_rgb(hsv), None)
            }
            InputModel::Rgb => {
                let rgb = Rgb {
                    red: strict(a)?,
                    green: strict(b)?,
                    blue: strict(c)?,
                };
                Self::build(model, rgb, None)
            }
            InputModel::Rgb24 => {
                let rgb24 = Rgb24::new(byte(a)?, byte(b)?, byte(c)?);
                Self::build(model, rgb_from_rgb24(rgb24), None)
            }
        };
        Ok(report)
    }

    /// Derive every representation from `rgb`. An HSL input is kept as given
    /// rather than recomputed, so its hue survives for gray colors.
    pub fn build(input: InputModel, rgb: Rgb, hsl: Option<Hsl>) -> Self {
        let rgb24 = rgb_as_rgb24(rgb);
        Self {
            input,
            rgb,
            rgb24,
            hsl: hsl.unwrap_or_else(|| rgb_to_hsl(rgb)),
            hex: rgb24.to_hex(),
            key: color_as_str(&rgb),
        }
    }
}

impl fmt::Display for ColorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb.to_array();
        let [r8, g8, b8] = self.rgb24.to_array();
        let [h, s, l] = self.hsl.to_array();
        writeln!(f, "rgb    {r:.4} {g:.4} {b:.4}")?;
        writeln!(f, "rgb24  {r8} {g8} {b8}")?;
        writeln!(f, "hsl    {h:.4} {s:.4} {l:.4}")?;
        writeln!(f, "hex    {}", self.hex)?;
        write!(f, "key    {}", self.key)
    }
}

/// Average of an image region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AverageReport {
    pub rgba: [u8; 4],
    pub color: ColorReport,
}

impl AverageReport {
    pub fn new(rgba: [u8; 4]) -> Self {
        let [red, green, blue, _] = rgba;
        let rgb = rgb_from_rgb24(Rgb24::new(red, green, blue));
        Self {
            rgba,
            color: ColorReport::build(InputModel::Rgb24, rgb, None),
        }
    }
}

impl fmt::Display for AverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.rgba;
        writeln!(f, "rgba   {r} {g} {b} {a}")?;
        write!(f, "{}", self.color)
    }
}

/// Parse a normalized component without clamping.
fn strict(value: &str) -> Result<NormalizedComponent> {
    let parsed: f64 = value
        .trim()
        .parse()
        .with_context(|| format!("{value:?} is not a number"))?;
    Ok(NormalizedComponent::try_new(parsed)?)
}

fn byte(value: &str) -> Result<u8> {
    value
        .trim()
        .parse()
        .with_context(|| format!("{value:?} is not an integer in [0, 255]"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_hsl_red() {
        let report = ColorReport::parse(InputModel::Hsl, &args(&["0", "1", "0.5"])).unwrap();
        assert_eq!(report.rgb24, Rgb24::new(255, 0, 0));
        assert_eq!(report.hex, "#ff0000");
        assert_eq!(report.key.as_str(), r#"{"blue":0.0,"green":0.0,"red":1.0}"#);
    }

    #[test]
    fn test_hsl_input_kept() {
        let report = ColorReport::parse(InputModel::Hsl, &args(&["0.3", "0", "0.5"])).unwrap();
        assert_eq!(report.hsl, Hsl::new(0.3, 0.0, 0.5));
    }

    #[test]
    fn test_hsv_white() {
        let report = ColorReport::parse(InputModel::Hsv, &args(&["0", "0", "1"])).unwrap();
        assert_eq!(report.rgb24, Rgb24::new(255, 255, 255));
        assert_eq!(report.hsl, Hsl::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_rgb24_input() {
        let report = ColorReport::parse(InputModel::Rgb24, &args(&["255", "0", "0"])).unwrap();
        assert_eq!(report.rgb, Rgb::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(ColorReport::parse(InputModel::Rgb, &args(&["1.2", "0", "0"])).is_err());
        assert!(ColorReport::parse(InputModel::Rgb, &args(&["NaN", "0", "0"])).is_err());
        assert!(ColorReport::parse(InputModel::Rgb24, &args(&["256", "0", "0"])).is_err());
        assert!(ColorReport::parse(InputModel::Hsl, &args(&["0", "0"])).is_err());
    }

    #[test]
    fn test_average_report() {
        let report = AverageReport::new([0, 255, 0, 128]);
        assert_eq!(report.color.rgb24, Rgb24::new(0, 255, 0));
        assert!(report.to_string().starts_with("rgba   0 255 0 128"));
    }

    #[test]
    fn test_json_shape() {
        let report = ColorReport::parse(InputModel::Rgb24, &args(&["0", "0", "255"])).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["input"], "rgb24");
        assert_eq!(json["rgb24"]["blue"], 255);
    }
}
