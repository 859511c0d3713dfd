//! Chart rendering: a grouped bar chart of consumed vs. average readings and
//! a pie chart of emissions by category, drawn into one overview image. The
//! drawing functions are generic over the backend so the same code produces
//! the `chart.png` artifact and the image embedded into the PDF.

use std::path::Path;

use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;

use footprint_core::models::report::FootprintReport;

use crate::error::ExportError;

pub const CHART_WIDTH: u32 = 960;
pub const CHART_HEIGHT: u32 = 480;

/// Slice palette for the emissions pie.
const PIE_COLORS: [RGBColor; 5] = [
    RGBColor(0xff, 0x99, 0x99),
    RGBColor(0x66, 0xb3, 0xff),
    RGBColor(0x99, 0xff, 0x99),
    RGBColor(0xff, 0xcc, 0x99),
    RGBColor(0xc2, 0xc2, 0xf0),
];

const CONSUMED_COLOR: RGBColor = RGBColor(0x2c, 0x6f, 0xbb);
const AVERAGE_COLOR: RGBColor = RGBColor(0xe0, 0x7b, 0x39);

/// An RGB8 raster of the overview chart, ready for PDF embedding.
pub struct ChartImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

/// Render the overview into an in-memory RGB buffer.
pub fn render_overview(report: &FootprintReport) -> Result<ChartImage, ExportError> {
    let mut rgb = vec![0u8; (CHART_WIDTH * CHART_HEIGHT * 3) as usize];
    {
        let root =
            BitMapBackend::with_buffer(&mut rgb, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        draw_overview(&root, report)?;
        root.present().map_err(chart_err)?;
    }
    Ok(ChartImage {
        width: CHART_WIDTH,
        height: CHART_HEIGHT,
        rgb,
    })
}

/// Render the overview straight to a PNG file.
pub fn write_overview_png(path: &Path, report: &FootprintReport) -> Result<(), ExportError> {
    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    draw_overview(&root, report)?;
    root.present().map_err(chart_err)?;
    Ok(())
}

/// Draw the full overview: comparison bars on the left, emissions pie on the
/// right. Models without emission factors get the bar chart across the whole
/// area.
pub fn draw_overview<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    report: &FootprintReport,
) -> Result<(), ExportError> {
    root.fill(&WHITE).map_err(chart_err)?;

    let has_emissions = report
        .results
        .iter()
        .any(|r| r.emissions_kg.unwrap_or(0.0) > 0.0);

    if has_emissions {
        let (width, _) = root.dim_in_pixel();
        let (left, right) = root.split_horizontally((width / 2) as i32);
        draw_comparison_bars(&left, report)?;
        draw_emissions_pie(&right, report)?;
    } else {
        draw_comparison_bars(root, report)?;
    }

    Ok(())
}

fn draw_comparison_bars<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    report: &FootprintReport,
) -> Result<(), ExportError> {
    let names: Vec<String> = report.results.iter().map(|r| r.name.clone()).collect();
    let count = names.len().max(1);

    let y_max = report
        .results
        .iter()
        .map(|r| r.consumed.max(r.reference_average))
        .fold(0.0_f64, f64::max)
        .max(1.0)
        * 1.15;

    let mut chart = ChartBuilder::on(area)
        .caption("Consumed vs Average", ("sans-serif", 22))
        .margin(12)
        .x_label_area_size(36)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..count as f64, 0.0..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(count)
        .x_label_formatter(&|x| {
            names
                .get(*x as usize)
                .cloned()
                .unwrap_or_default()
        })
        .y_desc("Consumption")
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(report.results.iter().enumerate().map(|(i, r)| {
            Rectangle::new(
                [(i as f64 + 0.12, 0.0), (i as f64 + 0.46, r.consumed)],
                CONSUMED_COLOR.filled(),
            )
        }))
        .map_err(chart_err)?
        .label("Consumed")
        .legend(|(x, y)| Rectangle::new([(x, y - 4), (x + 12, y + 4)], CONSUMED_COLOR.filled()));

    chart
        .draw_series(report.results.iter().enumerate().map(|(i, r)| {
            Rectangle::new(
                [(i as f64 + 0.54, 0.0), (i as f64 + 0.88, r.reference_average)],
                AVERAGE_COLOR.filled(),
            )
        }))
        .map_err(chart_err)?
        .label("Average")
        .legend(|(x, y)| Rectangle::new([(x, y - 4), (x + 12, y + 4)], AVERAGE_COLOR.filled()));

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()
        .map_err(chart_err)?;

    Ok(())
}

fn draw_emissions_pie<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    report: &FootprintReport,
) -> Result<(), ExportError> {
    let slices: Vec<(String, f64)> = report
        .results
        .iter()
        .filter_map(|r| r.emissions_kg.map(|kg| (r.name.clone(), kg)))
        .filter(|(_, kg)| *kg > 0.0)
        .collect();

    if slices.is_empty() {
        return Ok(());
    }

    let (width, height) = area.dim_in_pixel();
    let center = ((width / 2) as i32, (height / 2) as i32);
    let radius = f64::from(width.min(height)) / 2.0 - 48.0;

    let sizes: Vec<f64> = slices.iter().map(|(_, kg)| *kg).collect();
    let labels: Vec<String> = slices.iter().map(|(name, _)| name.clone()).collect();
    let colors: Vec<RGBColor> = (0..slices.len())
        .map(|i| PIE_COLORS[i % PIE_COLORS.len()])
        .collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(270.0);
    pie.label_style(("sans-serif", 16).into_font());
    pie.percentages(("sans-serif", 13).into_font());
    area.draw(&pie).map_err(chart_err)?;

    area.draw(&Text::new(
        "Emissions by Category",
        ((width / 2) as i32 - 90, 10),
        ("sans-serif", 18),
    ))
    .map_err(chart_err)?;

    Ok(())
}

fn chart_err<E: std::fmt::Display>(e: E) -> ExportError {
    ExportError::Chart(e.to_string())
}
