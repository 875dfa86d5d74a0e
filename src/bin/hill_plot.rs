use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use csv::ReaderBuilder;
use plotters::prelude::*;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render stacked comparison panels from a hill_diff CSV"
)]
struct Cli {
    #[arg(long)]
    input: String,
    #[arg(long, default_value = "artifacts/hill.png")]
    output: PathBuf,
    #[arg(long, value_enum, default_value_t = PlotKind::Position)]
    kind: PlotKind,
    #[arg(long, default_value = "Truth vs Estimation")]
    title: String,
    #[arg(long, default_value_t = 1000)]
    width: u32,
    #[arg(long, default_value_t = 900)]
    height: u32,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum PlotKind {
    /// Hill position differences (R, T, N)
    Position,
    /// Hill velocity differences
    Velocity,
    /// Azimuth/elevation residuals
    Residuals,
}

impl PlotKind {
    fn columns(self) -> &'static [(&'static str, &'static str)] {
        match self {
            PlotKind::Position => &[("r_km", "R (km)"), ("t_km", "T (km)"), ("n_km", "N (km)")],
            PlotKind::Velocity => &[
                ("vr_km_s", "VR (km/s)"),
                ("vt_km_s", "VT (km/s)"),
                ("vn_km_s", "VN (km/s)"),
            ],
            PlotKind::Residuals => &[("az_rad", "Az (rad)"), ("el_rad", "El (rad)")],
        }
    }
}

struct Panel {
    label: &'static str,
    points: Vec<(f64, f64)>,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();
    let panels = read_panels(&cli.input, cli.kind)?;

    let t_min = panels
        .iter()
        .flat_map(|p| p.points.iter().map(|(t, _)| *t))
        .fold(f64::INFINITY, f64::min);
    let t_max = panels
        .iter()
        .flat_map(|p| p.points.iter().map(|(t, _)| *t))
        .fold(f64::NEG_INFINITY, f64::max);
    if !t_min.is_finite() || !t_max.is_finite() {
        return Err(anyhow::anyhow!("No samples in the provided CSV"));
    }
    let x_range = padded(0.0, t_max - t_min);

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;
    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;
    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 16.0, FontStyle::Normal);
    let y_formatter = |v: &f64| format!("{v:.3e}");
    let root = root.titled(&cli.title, caption_font)?;
    let areas = root.split_evenly((panels.len(), 1));
    let last = panels.len() - 1;

    for (idx, (panel, area)) in panels.iter().zip(areas.iter()).enumerate() {
        if panel.points.is_empty() {
            continue;
        }
        let y_min = panel.points.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
        let y_max = panel
            .points
            .iter()
            .map(|(_, y)| *y)
            .fold(f64::NEG_INFINITY, f64::max);

        let mut chart = ChartBuilder::on(area)
            .margin(10)
            .x_label_area_size(if idx == last { 40 } else { 10 })
            .y_label_area_size(80)
            .build_cartesian_2d(x_range.clone(), padded(y_min, y_max))?;

        let mut mesh = chart.configure_mesh();
        mesh.y_desc(panel.label)
            .label_style(label_font.clone())
            .y_labels(5)
            .y_label_formatter(&y_formatter);
        if idx == last {
            mesh.x_desc("Elapsed seconds");
        } else {
            mesh.x_labels(0);
        }
        mesh.draw()?;

        if !matches!(cli.kind, PlotKind::Residuals) {
            chart.draw_series(LineSeries::new(
                panel.points.iter().map(|(t, y)| (t - t_min, *y)),
                ShapeStyle::from(&BLUE).stroke_width(2),
            ))?;
        }
        chart.draw_series(
            panel
                .points
                .iter()
                .map(|(t, y)| Circle::new((t - t_min, *y), 3, BLUE.filled())),
        )?;
    }

    root.present()?;
    Ok(())
}

fn padded(min: f64, max: f64) -> std::ops::Range<f64> {
    let span = max - min;
    if span.abs() < 1e-12 {
        (min - 1.0)..(max + 1.0)
    } else {
        (min - 0.05 * span)..(max + 0.05 * span)
    }
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

fn read_panels(path: &str, kind: PlotKind) -> anyhow::Result<Vec<Panel>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let epoch_idx = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("epoch_s"))
        .ok_or_else(|| anyhow::anyhow!("CSV missing 'epoch_s' column"))?;

    let mut columns = Vec::new();
    let mut panels = Vec::new();
    for (name, label) in kind.columns() {
        let idx = headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| anyhow::anyhow!("CSV missing '{}' column", name))?;
        columns.push(idx);
        panels.push(Panel {
            label: *label,
            points: Vec::new(),
        });
    }

    for rec in rdr.records() {
        let r = rec?;
        let epoch: f64 = r.get(epoch_idx).unwrap_or("").parse().unwrap_or(f64::NAN);
        if !epoch.is_finite() {
            continue;
        }
        for (panel, &idx) in panels.iter_mut().zip(&columns) {
            let value: f64 = r.get(idx).unwrap_or("").parse().unwrap_or(f64::NAN);
            if value.is_finite() {
                panel.points.push((epoch, value));
            }
        }
    }
    Ok(panels)
}
