//! Canonical string form of a color, used as a comparison and cache key.
//!
//! The key is a JSON object with component names in sorted order, so two
//! colors with the same name/value pairs produce the same key no matter how
//! their components were built or iterated.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::component::NormalizedComponent;
use crate::error::{ColorError, ColorResult};
use crate::model::NormalizedColorModel;

/// Canonical JSON serialization of a color's components.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorKey(String);

impl ColorKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Parse the key back into its component map.
    pub fn components(&self) -> ColorResult<BTreeMap<String, NormalizedComponent>> {
        self.decode()
    }

    /// Parse the key back into a concrete color model.
    pub fn decode<T: DeserializeOwned>(&self) -> ColorResult<T> {
        serde_json::from_str(&self.0).map_err(|e| ColorError::InvalidKey(e.to_string()))
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ColorKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Serialize `color` into its canonical key.
pub fn color_as_str<C: NormalizedColorModel + ?Sized>(color: &C) -> ColorKey {
    let mut components = color.components();
    components.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut map = Map::with_capacity(components.len());
    for (name, value) in components {
        // Normalized components are always finite.
        let number = Number::from_f64(value.get()).map_or(Value::Null, Value::Number);
        map.insert(name.to_owned(), number);
    }
    ColorKey(Value::Object(map).to_string())
}
