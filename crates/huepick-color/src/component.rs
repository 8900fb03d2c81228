//! Component encodings: normalized floats and 8-bit integers.
//!
//! Both types are smart-constructor newtypes. A [`NormalizedComponent`] can
//! only be obtained by clamping (or strictly validating) a float, and a
//! [`Component8Bit`] is derived from a normalized value or wraps a raw byte,
//! whose domain is already `[0, 255]`.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ColorError, ColorResult};

/// A color component in the closed interval `[0.0, 1.0]`.
///
/// Never NaN and never negative zero, so equality is total.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct NormalizedComponent(f64);

impl NormalizedComponent {
    pub const ZERO: Self = Self(0.0);
    pub const ONE: Self = Self(1.0);

    /// Clamp `value` into `[0, 1]`.
    ///
    /// Non-finite input is clamped too: `NaN` and `-inf` become 0, `+inf`
    /// becomes 1.
    #[inline]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        let clamped = value.clamp(0.0, 1.0);
        // -0.0 would serialize differently from 0.0
        if clamped == 0.0 {
            Self::ZERO
        } else {
            Self(clamped)
        }
    }

    /// Validate `value` without clamping.
    pub fn try_new(value: f64) -> ColorResult<Self> {
        if !value.is_finite() {
            return Err(ColorError::NonFinite(value));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(ColorError::OutOfRange { value });
        }
        Ok(Self::new(value))
    }

    /// The raw float value.
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Eq for NormalizedComponent {}

impl From<NormalizedComponent> for f64 {
    fn from(value: NormalizedComponent) -> Self {
        value.0
    }
}

impl fmt::Display for NormalizedComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for NormalizedComponent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for NormalizedComponent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(Self::new)
    }
}

/// A color component in the integer range `[0, 255]`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Pod,
    Zeroable,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Component8Bit(u8);

impl Component8Bit {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(255);

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<u8> for Component8Bit {
    #[inline]
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Component8Bit> for u8 {
    #[inline]
    fn from(value: Component8Bit) -> Self {
        value.0
    }
}

impl fmt::Display for Component8Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Create a normalized component, clamping `value` into `[0, 1]`.
#[inline]
pub fn normalized_component(value: f64) -> NormalizedComponent {
    NormalizedComponent::new(value)
}

/// Map a normalized component onto `[0, 255]`.
///
/// Computes `floor(value * 256)` capped at 255, so every 8-bit bucket covers
/// an equal share of the unit interval and 1.0 lands on 255.
#[inline]
pub fn component_8bit(value: NormalizedComponent) -> Component8Bit {
    let value = normalized_component(value.get()).get();
    Component8Bit((value * 256.0).floor().min(255.0) as u8)
}
