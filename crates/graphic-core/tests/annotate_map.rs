// File: crates/graphic-core/tests/annotate_map.rs
// Purpose: End-to-end annotated map layout from JSON config at different breakpoints.

use graphic_core::scene::Element;
use graphic_core::{ConfigurationError, Error, GeoCount, Graphic, GraphicConfig, MapGraphic};

const CONFIG: &str = r#"{
    "bounds": { "N": 42.0, "S": 41.6, "E": -87.5, "W": -87.9 },
    "aspect": 1.0,
    "annotations": {
        "loop": {
            "breakpoints": {
                "0":   { "dx": 20, "dy": -10, "width": 100 },
                "600": { "dx": -40, "dy": 0, "width": 150, "flip": true }
            },
            "html": "<b>Loop</b>"
        }
    },
    "mapLabels": [
        { "lat": 41.8, "lng": -87.7, "dx": 1, "dy": -2, "rank": 2, "html": "Chicago" }
    ]
}"#;

fn points() -> Vec<GeoCount> {
    vec![
        GeoCount { id: "loop".into(), lat: 41.8, lng: -87.7, count: 25.0 },
        GeoCount { id: "quiet".into(), lat: 41.7, lng: -87.6, count: 4.0 },
    ]
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn only_line(scene: &graphic_core::Scene) -> (f64, f64, f64, f64, f64, f64) {
    let lines = scene.layer("lines").expect("lines layer");
    assert_eq!(lines.elements.len(), 1, "unannotated points are omitted");
    match &lines.elements[0] {
        Element::Line { x1, y1, x2, y2, dash: Some(d) } => (*x1, *y1, *x2, *y2, d.dash, d.gap),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn narrow_layout_uses_first_breakpoint() {
    let map = MapGraphic::new(GraphicConfig::from_json_str(CONFIG).unwrap(), points());
    let scene = map.draw(400.0).unwrap();
    assert_eq!((scene.width, scene.height), (400.0, 400.0));

    let (x1, y1, x2, y2, dash, gap) = only_line(&scene);
    assert!(close(x1, 220.0) && close(y1, 190.0));
    assert!(close(x2, 200.0) && close(y2, 200.0));
    let h = 500f64.sqrt();
    assert!(close(gap, h));
    assert!(close(dash, h - 3.0));

    // fixed markers are drawn when there is no radius scale
    let circles = scene.layer("circles").expect("circles layer");
    assert_eq!(circles.elements.len(), 1);

    let texts = scene.overlay("annotation-texts").unwrap();
    let block = &texts.blocks[0];
    assert_eq!(block.html, "<b>Loop</b>");
    assert_eq!(block.style_value("text-align"), Some("left"));
    assert_eq!(block.style_value("width"), Some("100px"));
    assert_eq!(block.style_value("top"), Some("50%"));
    assert_eq!(block.style_value("left"), Some("50%"));
    assert_eq!(block.style_value("margin-left"), Some("20px"));
    assert_eq!(block.style_value("margin-top"), Some("-10px"));
}

#[test]
fn wide_layout_flips_the_box() {
    let map = MapGraphic::new(GraphicConfig::from_json_str(CONFIG).unwrap(), points());
    let scene = map.draw(800.0).unwrap();

    let (x1, y1, _, _, dash, gap) = only_line(&scene);
    assert!(close(x1, 360.0) && close(y1, 400.0));
    assert!(close(gap, 40.0));
    assert!(close(dash, 37.0));

    let block = &scene.overlay("annotation-texts").unwrap().blocks[0];
    assert_eq!(block.style_value("text-align"), Some("right"));
    assert_eq!(block.style_value("margin-left"), Some("-190px"));
}

#[test]
fn map_labels_are_offset_in_percent() {
    let map = MapGraphic::new(GraphicConfig::from_json_str(CONFIG).unwrap(), points());
    let scene = map.draw(400.0).unwrap();
    let labels = scene.overlay("map-labels").unwrap();
    assert_eq!(labels.blocks.len(), 1);
    let label = &labels.blocks[0];
    assert_eq!(label.class, "map-label rank2");
    assert_eq!(label.style_value("top"), Some("48%"));
    assert_eq!(label.style_value("left"), Some("51%"));
    assert_eq!(label.html, r#"<span class="label">Chicago</span>"#);
}

#[test]
fn radius_scale_sizes_markers_and_shortens_connector() {
    let mut config = GraphicConfig::from_json_str(CONFIG).unwrap();
    config.datum_radius = Some(graphic_core::config::RadiusConfig { domain_max: 100.0, range_max: 10.0 });
    let scene = MapGraphic::new(config, points()).draw(800.0).unwrap();
    let circles = scene.layer("circles").expect("circles layer");
    assert_eq!(circles.elements.len(), 1);
    match &circles.elements[0] {
        Element::Circle { cx, cy, r } => {
            assert!(close(*cx, 400.0) && close(*cy, 400.0));
            assert!(close(*r, 5.0), "r = {r}");
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(scene.to_svg().contains(r#"r="5""#));
    let (_, _, _, _, dash, gap) = only_line(&scene);
    assert!(close(gap, 40.0));
    assert!(close(dash, 35.0));
}

#[test]
fn missing_breakpoint_fails_the_pass() {
    let json = CONFIG.replace(r#""0":   { "dx": 20, "dy": -10, "width": 100 },"#, "");
    let map = MapGraphic::new(GraphicConfig::from_json_str(&json).unwrap(), points());
    match map.draw(400.0) {
        Err(Error::Configuration(ConfigurationError::NoMatchingBreakpoint { width })) => assert_eq!(width, 400.0),
        other => panic!("expected NoMatchingBreakpoint, got {other:?}"),
    }
    assert!(map.draw(600.0).is_ok());
}

#[test]
fn invalid_size_is_rejected() {
    let map = MapGraphic::new(GraphicConfig::from_json_str(CONFIG).unwrap(), points());
    assert!(matches!(map.draw(0.0), Err(Error::InvalidSize { .. })));
}

#[test]
fn svg_and_html_carry_the_connector() {
    let map = MapGraphic::new(GraphicConfig::from_json_str(CONFIG).unwrap(), points());
    let scene = map.draw(800.0).unwrap();
    let svg = scene.to_svg();
    assert!(svg.contains(r#"<line x1="360" y1="400" x2="400" y2="400""#), "{svg}");
    assert!(svg.contains("stroke-dasharray: 37,40"), "{svg}");
    let html = scene.to_html();
    assert!(html.contains(r#"<div class="annotation-texts">"#));
    assert!(html.contains("text-align: right; width: 150px"), "{html}");
}

const INSIDE: &str = r#"{
    "bounds": { "N": 10, "S": 0, "E": 10, "W": 0 },
    "aspect": 1.0,
    "annotations": {
        "c": { "breakpoints": { "0": { "dx": 1, "dy": 1, "width": 10 } }, "html": "C" }
    }
}"#;

fn inside_marker(policy: Option<&str>) -> String {
    let json = match policy {
        Some(p) => INSIDE.replacen("\"aspect\"", &format!("\"dashPolicy\": \"{p}\", \"aspect\""), 1),
        None => INSIDE.to_string(),
    };
    let data = vec![GeoCount { id: "c".into(), lat: 5.0, lng: 5.0, count: 1.0 }];
    MapGraphic::new(GraphicConfig::from_json_str(&json).unwrap(), data).draw(100.0).unwrap().to_svg()
}

#[test]
fn anchor_inside_marker_is_clamped_by_default() {
    let svg = inside_marker(None);
    assert!(svg.contains(r#"<line x1="51" y1="51" x2="50" y2="50""#), "{svg}");
    assert!(svg.contains("stroke-dasharray: 0,1.41"), "{svg}");
}

#[test]
fn pass_through_policy_emits_negative_dash() {
    let svg = inside_marker(Some("pass-through"));
    assert!(svg.contains("stroke-dasharray: -1.59,1.41"), "{svg}");
    assert_eq!(inside_marker(Some("clamp-to-zero")), inside_marker(None));
}
