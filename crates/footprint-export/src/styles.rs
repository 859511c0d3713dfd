use serde::{Deserialize, Serialize};

/// Document styling configuration for exports. Font names map onto the PDF
/// builtin families; DOCX uses them verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// Font for body text (e.g. "Helvetica", "Times New Roman").
    pub body_font: String,

    /// Font for headings and the total line.
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Heading 1 font size in points.
    pub heading1_size: usize,

    /// Heading 2 font size in points.
    pub heading2_size: usize,

    /// Page margin in millimetres (applied uniformly).
    pub margin_mm: f32,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Helvetica".to_string(),
            heading_font: "Helvetica".to_string(),
            body_size: 12,
            heading1_size: 16,
            heading2_size: 14,
            margin_mm: 20.0,
        }
    }
}
