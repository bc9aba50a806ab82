// File: crates/graphic-core/src/breakpoint.rs
// Summary: Width-keyed layout variants and resolution of the variant for a viewport width.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Minimum-width thresholds mapped to configuration records.
///
/// Invariants: non-empty, thresholds finite, non-negative and unique.
/// Entries are kept sorted ascending by threshold.
#[derive(Clone, PartialEq)]
pub struct BreakpointSet<T> {
    entries: Vec<(f64, T)>,
}

impl<T> BreakpointSet<T> {
    /// Build from `(threshold, record)` pairs in any order.
    pub fn new(pairs: impl IntoIterator<Item = (f64, T)>) -> Result<Self, ConfigurationError> {
        let mut entries: Vec<(f64, T)> = Vec::new();
        for (threshold, record) in pairs {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(ConfigurationError::InvalidThreshold { key: threshold.to_string() });
            }
            entries.push((threshold, record));
        }
        if entries.is_empty() {
            return Err(ConfigurationError::EmptyBreakpoints);
        }
        entries.sort_by(|a, b| a.0.total_cmp(&b.0));
        if let Some(w) = entries.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(ConfigurationError::DuplicateThreshold { threshold: w[0].0 });
        }
        Ok(Self { entries })
    }

    /// Build from string keys as they appear in JSON config (`"0"`, `"600"`).
    pub fn from_keyed(raw: BTreeMap<String, T>) -> Result<Self, ConfigurationError> {
        let mut pairs = Vec::with_capacity(raw.len());
        for (key, record) in raw {
            let threshold = key
                .trim()
                .parse::<f64>()
                .map_err(|_| ConfigurationError::InvalidThreshold { key: key.clone() })?;
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(ConfigurationError::InvalidThreshold { key });
            }
            pairs.push((threshold, record));
        }
        Self::new(pairs)
    }

    /// Pick the record whose threshold is the largest one not exceeding `width`.
    pub fn resolve(&self, width: f64) -> Result<&T, ConfigurationError> {
        self.entries
            .iter()
            .rev()
            .find(|(threshold, _)| *threshold <= width)
            .map(|(_, record)| record)
            .ok_or(ConfigurationError::NoMatchingBreakpoint { width })
    }

    /// Thresholds in ascending order.
    pub fn thresholds(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(t, _)| *t)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for BreakpointSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter().map(|(t, r)| (t, r))).finish()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for BreakpointSet<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, T>::deserialize(deserializer)?;
        Self::from_keyed(raw).map_err(serde::de::Error::custom)
    }
}

impl<T: Serialize> Serialize for BreakpointSet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (threshold, record) in &self.entries {
            map.serialize_entry(&threshold.to_string(), record)?;
        }
        map.end()
    }
}

/// Per-breakpoint placement of an annotation box relative to its marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationLayout {
    /// Horizontal offset of the box edge from the marker, px.
    #[serde(default)]
    pub dx: f64,
    /// Vertical offset of the box top from the marker, px.
    #[serde(default)]
    pub dy: f64,
    /// Rendered box width, px.
    pub width: f64,
    /// Right-align text; the box then extends leftward from `dx`.
    #[serde(default)]
    pub flip: bool,
}
