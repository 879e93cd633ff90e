// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Feature property bags
//!
//! Vector-tile properties arrive as loosely typed values; extrusion only
//! cares whether a value converts to a number.

use crate::error::{Error, Result};
use rustc_hash::FxHashMap;

/// A single property value from a vector-tile feature
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum PropertyValue {
    Number(f64),
    Text(String),
    Bool(bool),
}

impl PropertyValue {
    /// Numeric view of the value without parsing. `Text` returns `None`.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(n) => Some(*n),
            PropertyValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            PropertyValue::Text(_) => None,
        }
    }

    /// Convert to a number, parsing text values.
    ///
    /// Tile sources routinely encode heights as strings ("24.5"), so text
    /// is parsed rather than rejected. A non-numeric string is a fatal
    /// conversion error for the feature being processed.
    pub fn to_number(&self, key: &str) -> Result<f64> {
        match self {
            PropertyValue::Number(n) => Ok(*n),
            PropertyValue::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            PropertyValue::Text(s) => {
                fast_float::parse(s.trim()).map_err(|_| Error::NotNumeric {
                    key: key.to_string(),
                    value: s.clone(),
                })
            }
        }
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        PropertyValue::Number(n)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::Text(s.to_string())
    }
}

/// String-keyed property map attached to a feature
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyBag {
    map: FxHashMap<String, PropertyValue>,
}

impl PropertyBag {
    /// Create an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.map.insert(key.into(), value.into());
    }

    /// Check whether a key is present
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Get the raw value for a key
    #[inline]
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.map.get(key)
    }

    /// Numeric lookup: `Ok(None)` when the key is absent, an error only
    /// when a present value fails conversion.
    pub fn number(&self, key: &str) -> Result<Option<f64>> {
        match self.map.get(key) {
            Some(value) => value.to_number(key).map(Some),
            None => Ok(None),
        }
    }

    /// Number of properties in the bag
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the bag is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_passthrough() {
        let v = PropertyValue::Number(12.5);
        assert_eq!(v.to_number("h").unwrap(), 12.5);
    }

    #[test]
    fn test_text_parses() {
        let v = PropertyValue::Text(" 24.75 ".into());
        assert_eq!(v.to_number("h").unwrap(), 24.75);
    }

    #[test]
    fn test_bool_converts() {
        assert_eq!(PropertyValue::Bool(true).to_number("h").unwrap(), 1.0);
        assert_eq!(PropertyValue::Bool(false).to_number("h").unwrap(), 0.0);
    }

    #[test]
    fn test_malformed_text_is_fatal() {
        let v = PropertyValue::Text("tall-ish".into());
        let err = v.to_number("height").unwrap_err();
        assert!(err.to_string().contains("height"));
        assert!(err.to_string().contains("tall-ish"));
    }

    #[test]
    fn test_missing_key_is_not_an_error() {
        let bag = PropertyBag::new();
        assert_eq!(bag.number("height").unwrap(), None);
    }

    #[test]
    fn test_bag_lookup() {
        let mut bag = PropertyBag::new();
        bag.insert("height", 24.0);
        bag.insert("name", "station");
        assert!(bag.contains("height"));
        assert_eq!(bag.number("height").unwrap(), Some(24.0));
        assert!(bag.number("name").is_err());
    }
}
