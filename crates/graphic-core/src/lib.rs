// File: crates/graphic-core/src/lib.rs
// Summary: Core library entry point; breakpoint resolution, connector geometry and responsive graphic layout.

pub mod annotate_map;
pub mod annotation;
pub mod breakpoint;
pub mod chart;
pub mod config;
pub mod error;
pub mod geometry;
pub mod palette;
pub mod redraw;
pub mod scale;
pub mod scene;
pub mod svg;
pub mod types;

pub use annotate_map::{annotate_map, join_annotations, AnnotatedPoint, MapGraphic, MapOptions};
pub use annotation::{compute_connector, Align, AnnotationBox, ConnectorGeometry, DashPattern, DashPolicy};
pub use breakpoint::{AnnotationLayout, BreakpointSet};
pub use chart::{AreaChart, DistrictBars};
pub use config::{Annotation, GraphicConfig, MapLabel};
pub use error::{ConfigurationError, Error, Result};
pub use geometry::Point2D;
pub use redraw::{Container, Graphic, RedrawPolicy, ResizeDriver};
pub use scale::{LinearScale, Scale, SqrtScale, TimeScale};
pub use scene::Scene;
pub use types::{Bounds, DatedCount, DistrictCount, GeoCount};
