//! PDF layout of the rendered report body.
//!
//! Lays out the markdown subset produced by [`crate::render`] onto A4 pages
//! with builtin fonts, and optionally embeds the chart overview below the
//! text:
//! - `# Heading` → heading 1
//! - `## Heading` → heading 2
//! - `- item` → bullet line
//! - `**line**` → bold line
//! - Everything else → body line

use printpdf::{
    BuiltinFont, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, IndirectFontRef, Mm,
    PdfDocument, PdfDocumentReference, Px,
};

use crate::chart::ChartImage;
use crate::error::ExportError;
use crate::styles::DocumentStyles;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const LINE_GAP_MM: f32 = 2.0;
const CHART_DPI: f32 = 160.0;

/// Points to millimetres, with a little leading.
const PT_TO_MM_LINE: f32 = 0.55;

/// Generate a PDF from rendered template output, optionally embedding the
/// chart overview after the text.
pub fn generate_pdf(
    rendered: &str,
    styles: &DocumentStyles,
    chart: Option<&ChartImage>,
) -> Result<Vec<u8>, ExportError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        "Carbon Footprint Report",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );

    let body_font = builtin_font(&doc, &styles.body_font, false)?;
    let bold_font = builtin_font(&doc, &styles.heading_font, true)?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = PAGE_HEIGHT_MM - styles.margin_mm;

    for line in rendered.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            y -= LINE_GAP_MM;
            continue;
        }

        let (text, font, size) = if let Some(text) = trimmed.strip_prefix("## ") {
            (text.to_string(), &bold_font, styles.heading2_size)
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            (text.to_string(), &bold_font, styles.heading1_size)
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            (format!("    \u{2022} {text}"), &body_font, styles.body_size)
        } else if let Some(text) = trimmed
            .strip_prefix("**")
            .and_then(|t| t.strip_suffix("**"))
        {
            (text.to_string(), &bold_font, styles.body_size)
        } else {
            (trimmed.to_string(), &body_font, styles.body_size)
        };

        let line_height = size as f32 * PT_TO_MM_LINE;
        if y - line_height < styles.margin_mm {
            let (page, page_layer) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            layer = doc.get_page(page).get_layer(page_layer);
            y = PAGE_HEIGHT_MM - styles.margin_mm;
        }

        y -= line_height;
        layer.use_text(text, size as f32, Mm(styles.margin_mm), Mm(y), font);
        y -= LINE_GAP_MM;
    }

    if let Some(chart) = chart {
        let height_mm = chart.height as f32 / CHART_DPI * 25.4;
        if y - height_mm < styles.margin_mm {
            let (page, page_layer) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            layer = doc.get_page(page).get_layer(page_layer);
            y = PAGE_HEIGHT_MM - styles.margin_mm;
        }
        y -= height_mm;

        let image = Image::from(ImageXObject {
            width: Px(chart.width as usize),
            height: Px(chart.height as usize),
            color_space: ColorSpace::Rgb,
            bits_per_component: ColorBits::Bit8,
            interpolate: true,
            image_data: chart.rgb.clone(),
            image_filter: None,
            smask: None,
            clipping_bbox: None,
        });
        image.add_to_layer(
            layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(styles.margin_mm)),
                translate_y: Some(Mm(y)),
                dpi: Some(CHART_DPI),
                ..Default::default()
            },
        );
    }

    doc.save_to_bytes().map_err(|e| ExportError::Pdf(e.to_string()))
}

fn builtin_font(
    doc: &PdfDocumentReference,
    name: &str,
    bold: bool,
) -> Result<IndirectFontRef, ExportError> {
    let font = match (name, bold) {
        ("Times" | "Times New Roman", false) => BuiltinFont::TimesRoman,
        ("Times" | "Times New Roman", true) => BuiltinFont::TimesBold,
        ("Courier", false) => BuiltinFont::Courier,
        ("Courier", true) => BuiltinFont::CourierBold,
        (_, false) => BuiltinFont::Helvetica,
        (_, true) => BuiltinFont::HelveticaBold,
    };

    doc.add_builtin_font(font)
        .map_err(|e| ExportError::Pdf(e.to_string()))
}
