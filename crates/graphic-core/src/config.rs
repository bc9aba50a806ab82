// File: crates/graphic-core/src/config.rs
// Summary: Static JSON configuration for annotated maps: bounds, annotations, labels, policies.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::annotation::DashPolicy;
use crate::breakpoint::{AnnotationLayout, BreakpointSet};
use crate::error::Result;
use crate::redraw::RedrawPolicy;
use crate::scale::SqrtScale;
use crate::types::Bounds;

/// Text callout for one data point, with a layout per breakpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub breakpoints: BreakpointSet<AnnotationLayout>,
    #[serde(default)]
    pub html: String,
}

/// Place-name label positioned in percent of the map, nudged by `dx`/`dy` percent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapLabel {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub dx: f64,
    #[serde(default)]
    pub dy: f64,
    #[serde(default = "default_rank")]
    pub rank: u8,
    pub html: String,
}

fn default_rank() -> u8 {
    1
}

/// Square-root radius scale settings: `[0, domain_max]` onto `[0, range_max]` px.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadiusConfig {
    pub domain_max: f64,
    pub range_max: f64,
}

impl RadiusConfig {
    pub fn scale(&self) -> SqrtScale {
        SqrtScale::new((0.0, self.domain_max), (0.0, self.range_max))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphicConfig {
    pub bounds: Bounds,
    /// Height as a fraction of width.
    #[serde(default = "default_aspect")]
    pub aspect: f64,
    /// Annotations keyed by data point id.
    #[serde(default)]
    pub annotations: BTreeMap<String, Annotation>,
    #[serde(default)]
    pub map_labels: Vec<MapLabel>,
    #[serde(default)]
    pub datum_radius: Option<RadiusConfig>,
    #[serde(default)]
    pub dash_policy: DashPolicy,
    #[serde(default)]
    pub redraw: RedrawPolicy,
}

fn default_aspect() -> f64 {
    0.75
}

impl GraphicConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn height_for(&self, width: f64) -> f64 {
        (width * self.aspect).round()
    }
}
