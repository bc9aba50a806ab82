// File: crates/graphic-core/tests/redraw.rs
// Purpose: Resize orchestration: idempotent redraws, coalescing, last-writer-wins container.

use std::cell::Cell;

use graphic_core::redraw::Container;
use graphic_core::scene::{Element, Layer};
use graphic_core::{Error, GeoCount, Graphic, GraphicConfig, MapGraphic, RedrawPolicy, ResizeDriver, Result, Scene};

const CONFIG: &str = r#"{
    "bounds": { "N": 10.0, "S": 0.0, "E": 10.0, "W": 0.0 },
    "annotations": {
        "a": { "breakpoints": { "0": { "dx": 12, "width": 80 }, "700": { "dx": -12, "width": 120, "flip": true } }, "html": "A" },
        "b": { "breakpoints": { "0": { "dx": 8, "dy": 6, "width": 60 } }, "html": "B" }
    },
    "mapLabels": [ { "lat": 5, "lng": 5, "html": "Centre" } ]
}"#;

fn map() -> MapGraphic {
    let data = vec![
        GeoCount { id: "a".into(), lat: 2.5, lng: 7.5, count: 1.0 },
        GeoCount { id: "b".into(), lat: 8.0, lng: 1.0, count: 1.0 },
    ];
    MapGraphic::new(GraphicConfig::from_json_str(CONFIG).unwrap(), data)
}

#[test]
fn redraw_is_idempotent() {
    let g = map();
    for width in [320.0, 699.5, 1280.0] {
        let first = g.draw(width).unwrap();
        let second = g.draw(width).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_svg(), second.to_svg());
        assert_eq!(first.to_html(), second.to_html());
    }
}

#[test]
fn immediate_policy_redraws_every_event() {
    let g = map();
    let mut driver = ResizeDriver::new(&g, RedrawPolicy::Immediate);
    driver.load(800.0).unwrap();
    for w in [790.0, 640.0, 500.0] {
        assert!(driver.on_resize(w).unwrap());
    }
    assert_eq!(driver.redraws(), 4);
    assert_eq!(driver.container().width(), Some(500.0));
    assert_eq!(driver.container().scene(), Some(&g.draw(500.0).unwrap()));
}

#[test]
fn coalesced_resizes_settle_to_direct_redraw() {
    let g = map();
    let mut driver = ResizeDriver::new(&g, RedrawPolicy::Coalesce);
    driver.load(1024.0).unwrap();
    for w in [1000.0, 900.0, 720.0, 650.0] {
        assert!(!driver.on_resize(w).unwrap());
    }
    // nothing changes until the burst settles
    assert_eq!(driver.container().width(), Some(1024.0));
    assert!(driver.settle().unwrap());
    assert!(!driver.settle().unwrap());
    assert_eq!(driver.redraws(), 2);

    let settled = driver.container().scene().unwrap();
    let direct = g.draw(650.0).unwrap();
    assert_eq!(settled.to_svg(), direct.to_svg());
    assert_eq!(settled.to_html(), direct.to_html());
}

#[test]
fn stale_commit_is_dropped() {
    let mut container = Container::new();
    let older = container.begin();
    let newer = container.begin();
    assert!(container.commit(newer, 600.0, Scene::new(600.0, 400.0)));
    assert!(!container.commit(older, 300.0, Scene::new(300.0, 200.0)));
    assert_eq!(container.width(), Some(600.0));
    assert_eq!(container.scene().map(|s| s.width), Some(600.0));
    assert_eq!(container.generation(), 2);
}

/// Fails below a width, counting calls.
struct Fussy {
    min: f64,
    calls: Cell<usize>,
}

impl Graphic for Fussy {
    fn draw(&self, width: f64) -> Result<Scene> {
        self.calls.set(self.calls.get() + 1);
        if width < self.min {
            return Err(Error::InvalidSize { width, height: 0.0 });
        }
        let mut scene = Scene::new(width, 10.0);
        let mut layer = Layer::new("marks");
        layer.push(Element::Circle { cx: width / 2.0, cy: 5.0, r: 2.0 });
        scene.layers.push(layer);
        Ok(scene)
    }
}

#[test]
fn failed_redraw_keeps_previous_content() {
    let g = Fussy { min: 200.0, calls: Cell::new(0) };
    let mut driver = ResizeDriver::new(&g, RedrawPolicy::Immediate);
    driver.load(400.0).unwrap();
    assert!(driver.on_resize(100.0).is_err());
    assert_eq!(driver.container().width(), Some(400.0));
    assert_eq!(g.calls.get(), 2);
    assert_eq!(driver.redraws(), 1);
}
