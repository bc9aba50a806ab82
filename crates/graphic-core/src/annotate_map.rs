// File: crates/graphic-core/src/annotate_map.rs
// Summary: Annotated map layout: marker circles, dashed connectors, annotation texts and map labels.
// Notes:
// - Every helper takes the immutable `MapOptions` explicitly; nothing is stashed between calls.
// - Breakpoint resolution and connector math run once per point per pass (`PointLayout`).

use std::collections::BTreeMap;

use log::debug;

use crate::annotation::{compute_connector, AnnotationBox, ConnectorGeometry, DashPolicy};
use crate::breakpoint::AnnotationLayout;
use crate::config::{Annotation, GraphicConfig, MapLabel};
use crate::error::{Error, Result};
use crate::geometry::Point2D;
use crate::redraw::Graphic;
use crate::scale::{LinearScale, Scale, SqrtScale};
use crate::scene::{Block, Element, Layer, Overlay, Scene};
use crate::svg::fmt_num;
use crate::types::{Bounds, GeoCount};

/// Marker radius when no radius scale is configured.
pub const MARKER_RADIUS: f64 = 3.0;

#[derive(Clone, Debug, PartialEq)]
pub struct AnnotatedPoint {
    pub datum: GeoCount,
    pub annotation: Option<Annotation>,
}

/// Attach annotations to points by id. Points without one stay unannotated.
pub fn join_annotations(points: Vec<GeoCount>, annotations: &BTreeMap<String, Annotation>) -> Vec<AnnotatedPoint> {
    points
        .into_iter()
        .map(|datum| {
            let annotation = annotations.get(&datum.id).cloned();
            AnnotatedPoint { datum, annotation }
        })
        .collect()
}

pub struct MapOptions<'a> {
    pub width: f64,
    pub height: f64,
    pub bounds: Bounds,
    pub points: &'a [AnnotatedPoint],
    /// Maps a point's `count` to its marker radius. `None` uses `MARKER_RADIUS`.
    pub datum_radius: Option<&'a dyn Scale>,
    pub map_labels: &'a [MapLabel],
    pub dash_policy: DashPolicy,
}

/// Everything derived for one annotated point during a pass.
#[derive(Clone, Debug, PartialEq)]
struct PointLayout<'a> {
    pub point: &'a AnnotatedPoint,
    pub annotation: &'a Annotation,
    pub settings: AnnotationLayout,
    pub origin: Point2D,
    pub radius: f64,
    pub text_box: AnnotationBox,
    pub connector: ConnectorGeometry,
}

struct Projection {
    px_x: LinearScale,
    px_y: LinearScale,
    pct_x: LinearScale,
    pct_y: LinearScale,
}

impl Projection {
    fn new(bounds: &Bounds, width: f64, height: f64) -> Result<Self> {
        let px_x = LinearScale::checked("longitude", (bounds.west, bounds.east), (0.0, width))?;
        let px_y = LinearScale::checked("latitude", (bounds.south, bounds.north), (height, 0.0))?;
        Ok(Self {
            px_x,
            px_y,
            pct_x: LinearScale::new(px_x.domain, (0.0, 100.0)),
            pct_y: LinearScale::new(px_y.domain, (100.0, 0.0)),
        })
    }

    fn px(&self, lat: f64, lng: f64) -> Point2D {
        Point2D::new(self.px_x.apply(lng), self.px_y.apply(lat))
    }

    fn pct(&self, lat: f64, lng: f64) -> Point2D {
        Point2D::new(self.pct_x.apply(lng), self.pct_y.apply(lat))
    }
}

/// Resolve settings and connector geometry for every annotated point.
/// Fails if any annotation has no breakpoint for `opts.width`.
fn layout_points<'a>(opts: &MapOptions<'a>, projection: &Projection) -> Result<Vec<PointLayout<'a>>> {
    let mut out = Vec::with_capacity(opts.points.len());
    for point in opts.points {
        let Some(annotation) = point.annotation.as_ref() else {
            debug!("point {} has no annotation; skipped", point.datum.id);
            continue;
        };
        let settings = *annotation.breakpoints.resolve(opts.width)?;
        let origin = projection.px(point.datum.lat, point.datum.lng);
        let radius = opts.datum_radius.map_or(MARKER_RADIUS, |s| s.apply(point.datum.count));
        let text_box = AnnotationBox::from_layout(origin, &settings);
        let connector = compute_connector(origin, radius, &text_box);
        out.push(PointLayout { point, annotation, settings, origin, radius, text_box, connector });
    }
    Ok(out)
}

/// Full clear-and-redraw of an annotated map at `opts.width`.
pub fn annotate_map(opts: &MapOptions<'_>) -> Result<Scene> {
    if !(opts.width > 0.0 && opts.height > 0.0 && opts.width.is_finite() && opts.height.is_finite()) {
        return Err(Error::InvalidSize { width: opts.width, height: opts.height });
    }
    let projection = Projection::new(&opts.bounds, opts.width, opts.height)?;
    let points = layout_points(opts, &projection)?;

    let mut scene = Scene::new(opts.width, opts.height);

    let mut circles = Layer::new("circles");
    for p in &points {
        circles.push(Element::Circle { cx: p.origin.x, cy: p.origin.y, r: p.radius });
    }
    scene.layers.push(circles);

    let mut lines = Layer::new("lines");
    for p in &points {
        let c = &p.connector;
        lines.push(Element::Line {
            x1: c.x1,
            y1: c.y1,
            x2: c.x2,
            y2: c.y2,
            dash: Some(c.dash_pattern(opts.dash_policy)),
        });
    }
    scene.layers.push(lines);

    scene.overlays.push(Overlay {
        class: "annotation-texts".to_string(),
        blocks: points.iter().map(|p| annotation_block(&projection, p)).collect(),
    });
    scene.overlays.push(Overlay {
        class: "map-labels".to_string(),
        blocks: opts.map_labels.iter().map(|l| label_block(&projection, l)).collect(),
    });
    Ok(scene)
}

fn annotation_block(projection: &Projection, p: &PointLayout<'_>) -> Block {
    let s = &p.settings;
    let pct = projection.pct(p.point.datum.lat, p.point.datum.lng);
    let margin_left = s.dx - if s.flip { s.width } else { 0.0 };
    Block::new("annotation", p.annotation.html.clone())
        .style("text-align", if s.flip { "right" } else { "left" })
        .style("width", format!("{}px", fmt_num(s.width)))
        .style("top", format!("{}%", fmt_num(pct.y)))
        .style("left", format!("{}%", fmt_num(pct.x)))
        .style("margin-left", format!("{}px", fmt_num(margin_left)))
        .style("margin-top", format!("{}px", fmt_num(s.dy)))
}

fn label_block(projection: &Projection, label: &MapLabel) -> Block {
    let pct = projection.pct(label.lat, label.lng);
    Block::new(format!("map-label rank{}", label.rank), format!(r#"<span class="label">{}</span>"#, label.html))
        .style("top", format!("{}%", fmt_num(pct.y + label.dy)))
        .style("left", format!("{}%", fmt_num(pct.x + label.dx)))
}

/// An annotated map bound to its configuration and data, redrawable at any width.
pub struct MapGraphic {
    pub config: GraphicConfig,
    pub points: Vec<AnnotatedPoint>,
    radius: Option<SqrtScale>,
}

impl MapGraphic {
    pub fn new(config: GraphicConfig, data: Vec<GeoCount>) -> Self {
        let points = join_annotations(data, &config.annotations);
        let radius = config.datum_radius.map(|r| r.scale());
        Self { config, points, radius }
    }
}

impl Graphic for MapGraphic {
    fn draw(&self, width: f64) -> Result<Scene> {
        let opts = MapOptions {
            width,
            height: self.config.height_for(width),
            bounds: self.config.bounds,
            points: &self.points,
            datum_radius: self.radius.as_ref().map(|s| s as &dyn Scale),
            map_labels: &self.config.map_labels,
            dash_policy: self.config.dash_policy,
        };
        annotate_map(&opts)
    }
}
