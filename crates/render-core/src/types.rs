use serde::{Deserialize, Serialize};

/// Page size presets plus an escape hatch for custom dimensions in
/// millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Paper {
    A4,
    Letter,
    Legal,
    Custom { width_mm: f64, height_mm: f64 },
}

impl Default for Paper {
    fn default() -> Self {
        Self::A4
    }
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Page margins in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 10.0,
            right: 10.0,
            bottom: 10.0,
            left: 10.0,
        }
    }
}

/// Archival output profiles some engines can produce.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Standard,
    PdfA1b,
    PdfX1a,
}

/// Diagonal text stamped across every page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Watermark {
    pub text: String,
    /// 0.0 (invisible) to 1.0 (opaque).
    pub opacity: f64,
}

/// Engine-facing page setup, independent of document content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    pub paper: Paper,
    pub orientation: Orientation,
    pub margins: Margins,
    pub format: OutputFormat,
    pub watermark: Option<Watermark>,
    /// Right-to-left text direction.
    pub rtl: bool,
}

/// A complete HTML document ready for conversion.
///
/// Header and footer regions repeat on every page; the `first_*` variants,
/// when set, replace them on page one only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HtmlDocument {
    pub body: String,
    pub stylesheet: String,
    pub header: Option<String>,
    pub footer: Option<String>,
    pub first_header: Option<String>,
    pub first_footer: Option<String>,
}

impl HtmlDocument {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Default::default()
        }
    }
}
