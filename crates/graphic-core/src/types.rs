// File: crates/graphic-core/src/types.rs
// Summary: Shared sizes, margins and the parsed input records graphics are drawn from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default outer width of the small multiples, in pixels.
pub const WIDTH: f64 = 300.0;
/// Default outer height of the small multiples, in pixels.
pub const HEIGHT: f64 = 120.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    /// Room for a bottom axis only.
    fn default() -> Self {
        Self::new(0, 0, 0, 12)
    }
}

/// One day of a time series (e.g. closures per day).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DatedCount {
    pub date: NaiveDate,
    pub count: f64,
}

/// A geolocated tally; `id` joins it to annotation config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoCount {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub count: f64,
}

/// A tally keyed by district name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DistrictCount {
    pub district: String,
    pub count: f64,
}

/// Geographic extent of a base map.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    #[serde(rename = "N")]
    pub north: f64,
    #[serde(rename = "S")]
    pub south: f64,
    #[serde(rename = "E")]
    pub east: f64,
    #[serde(rename = "W")]
    pub west: f64,
}
