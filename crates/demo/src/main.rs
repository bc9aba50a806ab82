// File: crates/demo/src/main.rs
// Summary: Demo loads pothole/district CSVs and an annotation config, then writes responsive graphics.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use graphic_core::{
    AreaChart, ConfigurationError, DatedCount, DistrictBars, DistrictCount, Error, GeoCount, Graphic,
    GraphicConfig, MapGraphic, RedrawPolicy, ResizeDriver,
};

#[derive(Parser, Debug)]
#[command(name = "graphic-demo", about = "Render annotated map and chart graphics at several widths")]
struct Cli {
    /// Annotated points CSV (id,lat,lng,count)
    #[arg(long, default_value = "data/points.csv")]
    points: PathBuf,

    /// Map configuration JSON (bounds, annotations, labels)
    #[arg(long, default_value = "data/annotations.json")]
    config: PathBuf,

    /// Daily closures CSV (DATE.CLOSED.R,closures)
    #[arg(long, default_value = "data/potholeClosuresPerDay.csv")]
    closures: PathBuf,

    /// Per-district counts CSV (district,count)
    #[arg(long)]
    districts: Option<PathBuf>,

    /// Viewport widths to simulate, in resize order
    #[arg(short, long = "width", default_values_t = [1024.0, 600.0, 320.0])]
    widths: Vec<f64>,

    /// Coalesce the resize burst into one redraw (overrides config)
    #[arg(long)]
    coalesce: bool,

    /// Output directory
    #[arg(short, long, default_value = "target/out")]
    out: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    std::fs::create_dir_all(&cli.out).with_context(|| format!("creating {}", cli.out.display()))?;

    let mut config = GraphicConfig::from_path(&cli.config)
        .with_context(|| format!("failed to load config '{}'", cli.config.display()))?;
    if cli.coalesce {
        config.redraw = RedrawPolicy::Coalesce;
    }
    let points = load_points(&cli.points)
        .with_context(|| format!("failed to load CSV '{}'", cli.points.display()))?;
    println!("Loaded {} points, {} annotations", points.len(), config.annotations.len());

    let policy = config.redraw;
    let map = MapGraphic::new(config, points);
    run_resizes(&map, "map", policy, &cli.widths, &cli.out)?;

    if cli.closures.exists() {
        let data = load_closures(&cli.closures)
            .with_context(|| format!("failed to load CSV '{}'", cli.closures.display()))?;
        println!("Loaded {} days of closures", data.len());
        let domain = (ymd(2013, 1, 1)?, ymd(2015, 1, 3)?);
        let chart = AreaChart::new(domain, data);
        run_resizes(&chart, "closures", policy, &cli.widths, &cli.out)?;
    } else {
        log::warn!("closures file {} not found; skipping area chart", cli.closures.display());
    }

    if let Some(path) = &cli.districts {
        let data = load_districts(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
        run_resizes(&DistrictBars::new(data), "districts", policy, &cli.widths, &cli.out)?;
    }
    Ok(())
}

/// Load once at the first width, then replay the rest as resize events.
fn run_resizes<G: Graphic>(graphic: &G, name: &str, policy: RedrawPolicy, widths: &[f64], out: &Path) -> Result<()> {
    let Some((&first, rest)) = widths.split_first() else {
        anyhow::bail!("at least one --width is required");
    };
    let mut driver = ResizeDriver::new(graphic, policy);
    draw_step(driver.load(first), first)?;
    write_current(&driver, name, out)?;
    for &w in rest {
        if draw_step(driver.on_resize(w), w)? {
            write_current(&driver, name, out)?;
        }
    }
    let last = widths[widths.len() - 1];
    if draw_step(driver.settle(), last)? {
        write_current(&driver, name, out)?;
    }
    log::info!("{name}: {} redraws for {} events", driver.redraws(), widths.len());
    Ok(())
}

fn draw_step<T>(result: graphic_core::Result<T>, width: f64) -> Result<T> {
    if let Err(Error::Configuration(ConfigurationError::NoMatchingBreakpoint { .. })) = &result {
        log::warn!("width {width} is narrower than every configured breakpoint");
    }
    Ok(result?)
}

fn write_current<G: Graphic>(driver: &ResizeDriver<'_, G>, name: &str, out: &Path) -> Result<()> {
    let container = driver.container();
    let (Some(scene), Some(width)) = (container.scene(), container.width()) else {
        return Ok(());
    };
    if scene.is_empty() {
        log::warn!("{name} at width {width} drew nothing");
    }
    let stem = format!("{name}_{width}");
    let svg_path = out.join(format!("{stem}.svg"));
    std::fs::write(&svg_path, scene.to_svg())?;
    println!("Wrote {}", svg_path.display());
    if !scene.overlays.is_empty() {
        let html_path = out.join(format!("{stem}.html"));
        std::fs::write(&html_path, scene.to_html())?;
        println!("Wrote {}", html_path.display());
    }
    Ok(())
}

fn ymd(y: i32, m: u32, d: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| anyhow::anyhow!("invalid date {y}-{m}-{d}"))
}

/// Load `id,lat,lng,count` rows; header names are matched case-insensitively.
fn load_points(path: &Path) -> Result<Vec<GeoCount>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    log::debug!("point headers: {:?}", headers);
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let (Some(i_id), Some(i_lat), Some(i_lng)) =
        (idx(&["id", "name"]), idx(&["lat", "latitude"]), idx(&["lng", "lon", "longitude"]))
    else {
        anyhow::bail!("points CSV needs id, lat and lng columns (got {:?})", headers);
    };
    let i_count = idx(&["count", "n"]);

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let num = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok());
        let (Some(lat), Some(lng)) = (num(i_lat), num(i_lng)) else {
            log::warn!("row {}: unparsable coordinates; skipped", row + 1);
            continue;
        };
        out.push(GeoCount {
            id: rec.get(i_id).unwrap_or_default().trim().to_string(),
            lat,
            lng,
            count: i_count.and_then(num).unwrap_or(0.0),
        });
    }
    Ok(out)
}

/// Load daily closures; dates are `%Y-%m-%d`.
fn load_closures(path: &Path) -> Result<Vec<DatedCount>> {
    let mut rdr = csv::Reader::from_path(path).with_context(|| format!("opening {}", path.display()))?;
    let headers = rdr.headers()?.clone();
    let i_date = headers.iter().position(|h| h == "DATE.CLOSED.R").unwrap_or(0);
    let i_count = headers.iter().position(|h| h == "closures").unwrap_or(1);
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let date = rec.get(i_date).unwrap_or_default();
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").with_context(|| format!("bad date {date:?}"))?;
        let count = rec
            .get(i_count)
            .unwrap_or_default()
            .trim()
            .parse::<f64>()
            .with_context(|| format!("bad count on {date}"))?;
        out.push(DatedCount { date, count });
    }
    Ok(out)
}

fn load_districts(path: &Path) -> Result<Vec<DistrictCount>> {
    let mut rdr = csv::Reader::from_path(path).with_context(|| format!("opening {}", path.display()))?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let district = rec.get(0).unwrap_or_default().trim().to_string();
        let count = rec.get(1).unwrap_or_default().trim().parse::<f64>().unwrap_or(0.0);
        out.push(DistrictCount { district, count });
    }
    Ok(out)
}
