// File: crates/graphic-core/src/chart.rs
// Summary: Small-multiple charts: time-series area chart with a yearly axis, and district bars.

use chrono::{Datelike, NaiveDate};

use crate::error::{Error, Result};
use crate::redraw::Graphic;
use crate::scale::{LinearScale, Scale, TimeScale};
use crate::scene::{Element, Layer, Scene};
use crate::svg::fmt_num;
use crate::types::{DatedCount, DistrictCount, Insets, HEIGHT, WIDTH};

/// Area chart drawn at a fixed design size and scaled to the page through its viewBox.
pub struct AreaChart {
    pub outer_width: f64,
    pub outer_height: f64,
    pub insets: Insets,
    pub domain: (NaiveDate, NaiveDate),
    pub data: Vec<DatedCount>,
}

impl AreaChart {
    pub fn new(domain: (NaiveDate, NaiveDate), data: Vec<DatedCount>) -> Self {
        Self { outer_width: WIDTH, outer_height: HEIGHT, insets: Insets::default(), domain, data }
    }

    fn inner(&self) -> (f64, f64) {
        (
            self.outer_width - self.insets.hsum() as f64,
            self.outer_height - self.insets.vsum() as f64,
        )
    }

    /// Lay out at design size; `target_width` only sets the rendered size.
    pub fn layout(&self, target_width: f64) -> Result<Scene> {
        let (w, h) = self.inner();
        if !(w > 0.0 && h > 0.0 && target_width > 0.0) {
            return Err(Error::InvalidSize { width: target_width, height: self.outer_height });
        }
        let max = self
            .data
            .iter()
            .map(|d| d.count)
            .fold(f64::NEG_INFINITY, f64::max);
        if !max.is_finite() {
            return Err(Error::InvalidDomain { axis: "count", min: 0.0, max });
        }
        let x = TimeScale::new(self.domain.0, self.domain.1, (0.0, w))?;
        let y = LinearScale::new((0.0, max), (h, 0.0));

        let aspect = self.outer_width / self.outer_height;
        let mut scene = Scene::new(target_width, (target_width / aspect).round());
        scene.view_box = Some((0.0, 0.0, self.outer_width, self.outer_height));

        let left = self.insets.left as f64;
        let top = self.insets.top as f64;

        let mut plot = Layer::new("plot").translated(left, top);
        plot.push(Element::Path { class: "area".to_string(), d: area_path(&self.data, &x, &y, h) });
        scene.layers.push(plot);

        let tick_size = self.insets.bottom as f64;
        let mut axis = Layer::new("x axis").translated(left, top + h);
        axis.push(Element::Path {
            class: "domain".to_string(),
            d: format!("M0,{t}V0H{w}V{t}", t = fmt_num(tick_size), w = fmt_num(w)),
        });
        for tick in x.year_ticks() {
            let tx = x.to_px(tick);
            axis.push(Element::Line { x1: tx, y1: 0.0, x2: tx, y2: tick_size, dash: None });
            axis.push(Element::Text { x: tx + 3.0, y: 5.0, anchor: Some("start"), text: tick.year().to_string() });
        }
        scene.layers.push(axis);
        Ok(scene)
    }
}

impl Graphic for AreaChart {
    fn draw(&self, width: f64) -> Result<Scene> {
        self.layout(width)
    }
}

/// Closed area between the series and the baseline at `baseline_px`.
pub fn area_path(data: &[DatedCount], x: &TimeScale, y: &LinearScale, baseline_px: f64) -> String {
    if data.is_empty() {
        return String::new();
    }
    let mut d = String::new();
    for (i, p) in data.iter().enumerate() {
        d.push(if i == 0 { 'M' } else { 'L' });
        d.push_str(&format!("{},{}", fmt_num(x.to_px(p.date)), fmt_num(y.apply(p.count))));
    }
    for p in data.iter().rev() {
        d.push_str(&format!("L{},{}", fmt_num(x.to_px(p.date)), fmt_num(baseline_px)));
    }
    d.push('Z');
    d
}

/// Horizontal bars, one row per district, at the page width.
pub struct DistrictBars {
    pub row_height: f64,
    pub label_width: f64,
    pub data: Vec<DistrictCount>,
}

impl DistrictBars {
    pub fn new(data: Vec<DistrictCount>) -> Self {
        Self { row_height: 18.0, label_width: 40.0, data }
    }
}

impl Graphic for DistrictBars {
    fn draw(&self, width: f64) -> Result<Scene> {
        let plot_w = width - self.label_width;
        if !(plot_w > 0.0) {
            return Err(Error::InvalidSize { width, height: self.row_height });
        }
        let max = self.data.iter().map(|d| d.count).fold(0.0, f64::max);
        let x = LinearScale::new((0.0, max), (0.0, plot_w));
        let mut scene = Scene::new(width, self.row_height * self.data.len() as f64);

        let mut labels = Layer::new("labels");
        let mut bars = Layer::new("bars").translated(self.label_width, 0.0);
        for (i, d) in self.data.iter().enumerate() {
            let top = i as f64 * self.row_height;
            let bottom = top + self.row_height - 2.0;
            let right = x.apply(d.count);
            bars.push(Element::Path {
                class: "bar".to_string(),
                d: format!("M0,{t}H{r}V{b}H0Z", t = fmt_num(top), r = fmt_num(right), b = fmt_num(bottom)),
            });
            labels.push(Element::Text {
                x: self.label_width - 4.0,
                y: bottom - 4.0,
                anchor: Some("end"),
                text: d.district.clone(),
            });
        }
        scene.layers.push(labels);
        scene.layers.push(bars);
        Ok(scene)
    }
}
