// File: crates/graphic-core/src/svg.rs
// Summary: Deterministic SVG and HTML serialization of a Scene.

use std::fmt::Write as _;

use crate::palette;
use crate::scene::{Block, Element, Layer, Scene};

/// Paint applied by the emitter; class names stay in the output for page CSS to override.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgStyle {
    pub marker_fill: &'static str,
    pub connector_stroke: &'static str,
    pub area_fill: &'static str,
    pub axis_stroke: &'static str,
    pub text_fill: &'static str,
    pub font_size: f64,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            marker_fill: palette::PRIMARY[1].hex,
            connector_stroke: palette::PRIMARY[0].hex,
            area_fill: palette::PRIMARY[3].hex,
            axis_stroke: palette::PRIMARY[0].hex,
            text_fill: palette::PRIMARY[0].hex,
            font_size: 10.0,
        }
    }
}

/// Format a coordinate: integers without a fraction, otherwise at most two decimals.
pub fn fmt_num(v: f64) -> String {
    if v == 0.0 {
        // covers -0.0
        return "0".to_string();
    }
    if v.fract() == 0.0 && v.abs() < 1e15 {
        return format!("{}", v as i64);
    }
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

impl Scene {
    pub fn to_svg(&self) -> String {
        self.to_svg_with(&SvgStyle::default())
    }

    pub fn to_svg_with(&self, style: &SvgStyle) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}""#,
            fmt_num(self.width),
            fmt_num(self.height)
        );
        if let Some((x, y, w, h)) = self.view_box {
            let _ = write!(
                out,
                r#" viewBox="{} {} {} {}" preserveAspectRatio="xMidYMid""#,
                fmt_num(x),
                fmt_num(y),
                fmt_num(w),
                fmt_num(h)
            );
        }
        out.push_str(">\n");
        for layer in &self.layers {
            write_layer(&mut out, layer, style);
        }
        out.push_str("</svg>\n");
        out
    }

    /// Overlay containers and their blocks as positioned `<div>`s.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for overlay in &self.overlays {
            let _ = writeln!(out, r#"<div class="{}">"#, escape(&overlay.class));
            for block in &overlay.blocks {
                write_block(&mut out, block);
            }
            out.push_str("</div>\n");
        }
        out
    }
}

fn write_layer(out: &mut String, layer: &Layer, style: &SvgStyle) {
    match layer.translate {
        Some((x, y)) => {
            let _ = writeln!(
                out,
                r#"  <g class="{}" transform="translate({},{})">"#,
                escape(&layer.class),
                fmt_num(x),
                fmt_num(y)
            );
        }
        None => {
            let _ = writeln!(out, r#"  <g class="{}">"#, escape(&layer.class));
        }
    }
    for el in &layer.elements {
        write_element(out, el, style);
    }
    out.push_str("  </g>\n");
}

fn write_element(out: &mut String, el: &Element, style: &SvgStyle) {
    match el {
        Element::Circle { cx, cy, r } => {
            let _ = writeln!(
                out,
                r#"    <circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                fmt_num(*cx),
                fmt_num(*cy),
                fmt_num(*r),
                style.marker_fill
            );
        }
        Element::Line { x1, y1, x2, y2, dash } => {
            let _ = write!(
                out,
                r#"    <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}""#,
                fmt_num(*x1),
                fmt_num(*y1),
                fmt_num(*x2),
                fmt_num(*y2),
                style.connector_stroke
            );
            if let Some(d) = dash {
                let _ = write!(out, r#" style="stroke-dasharray: {},{}""#, fmt_num(d.dash), fmt_num(d.gap));
            }
            out.push_str("/>\n");
        }
        Element::Path { class, d } => {
            let _ = writeln!(
                out,
                r#"    <path class="{}" d="{}" fill="{}"/>"#,
                escape(class),
                d,
                style.area_fill
            );
        }
        Element::Text { x, y, anchor, text } => {
            let _ = write!(
                out,
                r#"    <text x="{}" y="{}" font-size="{}" fill="{}""#,
                fmt_num(*x),
                fmt_num(*y),
                fmt_num(style.font_size),
                style.text_fill
            );
            if let Some(a) = anchor {
                let _ = write!(out, r#" style="text-anchor: {}""#, a);
            }
            let _ = writeln!(out, ">{}</text>", escape(text));
        }
    }
}

fn write_block(out: &mut String, block: &Block) {
    let css = block
        .style
        .iter()
        .map(|(k, v)| format!("{}: {}", k, v))
        .collect::<Vec<_>>()
        .join("; ");
    let _ = writeln!(
        out,
        r#"  <div class="{}" style="{}">{}</div>"#,
        escape(&block.class),
        escape(&css),
        block.html
    );
}
