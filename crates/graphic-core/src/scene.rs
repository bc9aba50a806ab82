// File: crates/graphic-core/src/scene.rs
// Summary: Declarative attribute sets produced by a draw pass (SVG layers + HTML overlay blocks).

use crate::annotation::DashPattern;

#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Circle { cx: f64, cy: f64, r: f64 },
    Line { x1: f64, y1: f64, x2: f64, y2: f64, dash: Option<DashPattern> },
    Path { class: String, d: String },
    Text { x: f64, y: f64, anchor: Option<&'static str>, text: String },
}

/// A `<g>` group of SVG elements.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub class: String,
    pub translate: Option<(f64, f64)>,
    pub elements: Vec<Element>,
}

impl Layer {
    pub fn new(class: impl Into<String>) -> Self {
        Self { class: class.into(), translate: None, elements: Vec::new() }
    }

    pub fn translated(mut self, x: f64, y: f64) -> Self {
        self.translate = Some((x, y));
        self
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }
}

/// An absolutely positioned HTML block (annotation text, map label).
/// Style pairs keep insertion order so output is stable.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub class: String,
    pub style: Vec<(String, String)>,
    pub html: String,
}

impl Block {
    pub fn new(class: impl Into<String>, html: impl Into<String>) -> Self {
        Self { class: class.into(), style: Vec::new(), html: html.into() }
    }

    pub fn style(mut self, key: &str, value: impl Into<String>) -> Self {
        self.style.push((key.to_string(), value.into()));
        self
    }

    pub fn style_value(&self, key: &str) -> Option<&str> {
        self.style.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

/// A container of HTML blocks, e.g. `.annotation-texts`.
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
    pub class: String,
    pub blocks: Vec<Block>,
}

/// Everything one redraw produces. Replaces the previous scene wholesale.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    /// `(min_x, min_y, width, height)` for responsive SVGs.
    pub view_box: Option<(f64, f64, f64, f64)>,
    pub layers: Vec<Layer>,
    pub overlays: Vec<Overlay>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, view_box: None, layers: Vec::new(), overlays: Vec::new() }
    }

    pub fn layer(&self, class: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.class == class)
    }

    pub fn overlay(&self, class: &str) -> Option<&Overlay> {
        self.overlays.iter().find(|o| o.class == class)
    }

    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(|l| l.elements.is_empty()) && self.overlays.iter().all(|o| o.blocks.is_empty())
    }
}
