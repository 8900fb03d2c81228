//! Color models: HSL, HSV, normalized RGB and 24-bit RGB.

use std::collections::{BTreeMap, HashMap};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::component::{normalized_component, Component8Bit, NormalizedComponent};

/// A color whose components are all normalized.
///
/// Gives generic access to component names and values, which is what the
/// canonical key serializer works on.
pub trait NormalizedColorModel {
    /// Component name and value pairs, in no particular order.
    fn components(&self) -> Vec<(&str, NormalizedComponent)>;
}

/// Color represented with the HSL model in RGB space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: NormalizedComponent,
    pub saturation: NormalizedComponent,
    pub luminosity: NormalizedComponent,
}

impl Hsl {
    /// Create an HSL color, clamping every component into `[0, 1]`.
    pub fn new(hue: f64, saturation: f64, luminosity: f64) -> Self {
        Self {
            hue: normalized_component(hue),
            saturation: normalized_component(saturation),
            luminosity: normalized_component(luminosity),
        }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.hue.get(), self.saturation.get(), self.luminosity.get()]
    }
}

impl NormalizedColorModel for Hsl {
    fn components(&self) -> Vec<(&str, NormalizedComponent)> {
        vec![
            ("hue", self.hue),
            ("saturation", self.saturation),
            ("luminosity", self.luminosity),
        ]
    }
}

/// Color represented with the HSV model in RGB space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsv {
    pub hue: NormalizedComponent,
    pub saturation: NormalizedComponent,
    pub value: NormalizedComponent,
}

impl Hsv {
    /// Create an HSV color, clamping every component into `[0, 1]`.
    pub fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue: normalized_component(hue),
            saturation: normalized_component(saturation),
            value: normalized_component(value),
        }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.hue.get(), self.saturation.get(), self.value.get()]
    }
}

impl NormalizedColorModel for Hsv {
    fn components(&self) -> Vec<(&str, NormalizedComponent)> {
        vec![
            ("hue", self.hue),
            ("saturation", self.saturation),
            ("value", self.value),
        ]
    }
}

/// Color represented with the RGB model, normalized channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub red: NormalizedComponent,
    pub green: NormalizedComponent,
    pub blue: NormalizedComponent,
}

impl Rgb {
    /// Create an RGB color, clamping every channel into `[0, 1]`.
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red: normalized_component(red),
            green: normalized_component(green),
            blue: normalized_component(blue),
        }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.red.get(), self.green.get(), self.blue.get()]
    }

    // Common colors
    pub const BLACK: Self = Self {
        red: NormalizedComponent::ZERO,
        green: NormalizedComponent::ZERO,
        blue: NormalizedComponent::ZERO,
    };
    pub const WHITE: Self = Self {
        red: NormalizedComponent::ONE,
        green: NormalizedComponent::ONE,
        blue: NormalizedComponent::ONE,
    };
}

impl NormalizedColorModel for Rgb {
    fn components(&self) -> Vec<(&str, NormalizedComponent)> {
        vec![
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
        ]
    }
}

/// True color: 8 bits per channel.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Pod, Zeroable,
)]
#[repr(C)]
pub struct Rgb24 {
    pub red: Component8Bit,
    pub green: Component8Bit,
    pub blue: Component8Bit,
}

impl Rgb24 {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red.into(),
            green: green.into(),
            blue: blue.into(),
        }
    }

    pub fn from_array([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.red.get(), self.green.get(), self.blue.get()]
    }

    /// Lowercase `#rrggbb` notation.
    pub fn to_hex(self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            self.red.get(),
            self.green.get(),
            self.blue.get()
        )
    }
}

impl From<[u8; 3]> for Rgb24 {
    fn from(value: [u8; 3]) -> Self {
        Self::from_array(value)
    }
}

impl From<Rgb24> for [u8; 3] {
    fn from(value: Rgb24) -> Self {
        value.to_array()
    }
}

impl<S: std::hash::BuildHasher> NormalizedColorModel for HashMap<String, NormalizedComponent, S> {
    fn components(&self) -> Vec<(&str, NormalizedComponent)> {
        self.iter().map(|(name, value)| (name.as_str(), *value)).collect()
    }
}

impl NormalizedColorModel for BTreeMap<String, NormalizedComponent> {
    fn components(&self) -> Vec<(&str, NormalizedComponent)> {
        self.iter().map(|(name, value)| (name.as_str(), *value)).collect()
    }
}
