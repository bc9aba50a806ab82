// File: crates/graphic-core/src/annotation.rs
// Summary: Connector geometry between an annotation box and a data marker, plus its dash pattern.

use serde::{Deserialize, Serialize};

use crate::breakpoint::AnnotationLayout;
use crate::geometry::Point2D;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// Where an annotation's text block sits. Units match the marker's point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnnotationBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    #[serde(default)]
    pub align: Align,
}

impl AnnotationBox {
    pub fn new(left: f64, top: f64, width: f64, align: Align) -> Self {
        Self { left, top, width, align }
    }

    /// Place the box around `point` using a resolved breakpoint layout.
    /// A flipped layout right-aligns its text and hangs the box to the left of `dx`.
    pub fn from_layout(point: Point2D, layout: &AnnotationLayout) -> Self {
        let (left, align) = if layout.flip {
            (point.x + layout.dx - layout.width, Align::Right)
        } else {
            (point.x + layout.dx, Align::Left)
        };
        Self { left, top: point.y + layout.dy, width: layout.width, align }
    }

    /// The corner the connector leaves from.
    pub fn anchor(&self) -> Point2D {
        let x = match self.align {
            Align::Right => self.left + self.width,
            Align::Left => self.left,
        };
        Point2D::new(x, self.top)
    }
}

/// How a negative painted length (anchor inside the marker) is emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DashPolicy {
    /// Paint nothing: `0,h`.
    #[default]
    ClampToZero,
    /// Emit the raw negative length and let the renderer decide.
    PassThrough,
}

/// Two-element `stroke-dasharray`: paint `dash` px from the start, then skip `gap` px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DashPattern {
    pub dash: f64,
    pub gap: f64,
}

/// Line from the box anchor `(x1, y1)` to the marker centre `(x2, y2)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectorGeometry {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    /// Full segment length.
    pub h: f64,
    /// `h` minus the marker radius; the painted part of the line.
    pub diff: f64,
}

impl ConnectorGeometry {
    /// The gap is `h`, longer than what remains after the dash, so only one dash is ever drawn.
    pub fn dash_pattern(&self, policy: DashPolicy) -> DashPattern {
        let dash = match policy {
            DashPolicy::ClampToZero => self.diff.max(0.0),
            DashPolicy::PassThrough => self.diff,
        };
        DashPattern { dash, gap: self.h }
    }
}

/// Connector from `bx`'s anchor to `point`, stopping at a circle of `circle_radius` around it.
/// Degenerate inputs (zero length, radius larger than the distance) still produce a geometry.
pub fn compute_connector(point: Point2D, circle_radius: f64, bx: &AnnotationBox) -> ConnectorGeometry {
    let anchor = bx.anchor();
    let h = anchor.distance(point);
    ConnectorGeometry {
        x1: anchor.x,
        y1: anchor.y,
        x2: point.x,
        y2: point.y,
        h,
        diff: h - circle_radius,
    }
}
