//! Global settings and per-document configuration.

use formpdf_access::middleware::{DEFAULT_TIMEOUT_MINUTES, DEFAULT_VIEW_CAPABILITY};
use formpdf_types::ConditionalLogic;
use formpdf_render_core::{Margins, Orientation, OutputFormat, Paper, Watermark};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Site-wide settings consumed by the pipeline and the access chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Template slug used when a configuration does not name one.
    #[serde(default = "default_template")]
    pub default_template: String,
    /// Only logged-in users may download documents.
    #[serde(default)]
    pub restricted_to_admin: bool,
    /// Anonymous-owner view window, in minutes.
    #[serde(default = "default_timeout")]
    pub logged_out_timeout_minutes: i64,
    /// Capability gating access to entries owned by others, and verbatim
    /// engine error disclosure.
    #[serde(default = "default_capability")]
    pub admin_capability: String,
    /// Postal convention for address blocks.
    #[serde(default)]
    pub zip_before_city: bool,
    /// Temp files older than this are swept.
    #[serde(default = "default_sweep_hours")]
    pub sweep_max_age_hours: i64,
}

fn default_template() -> String {
    "core-simple".to_string()
}

fn default_timeout() -> i64 {
    DEFAULT_TIMEOUT_MINUTES
}

fn default_capability() -> String {
    DEFAULT_VIEW_CAPABILITY.to_string()
}

fn default_sweep_hours() -> i64 {
    24
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            default_template: default_template(),
            restricted_to_admin: false,
            logged_out_timeout_minutes: default_timeout(),
            admin_capability: default_capability(),
            zip_before_city: false,
            sweep_max_age_hours: default_sweep_hours(),
        }
    }
}

/// One document configuration attached to a form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfConfig {
    /// Short alphanumeric id, unique within the form.
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Template slug; empty means use the global default.
    #[serde(default)]
    pub template: String,
    /// Filename pattern with merge tags, without the `.pdf` extension.
    #[serde(default = "default_filename")]
    pub filename: String,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub conditional_logic: Option<ConditionalLogic>,

    // Presentation switches
    #[serde(default)]
    pub show_empty: bool,
    #[serde(default = "default_true")]
    pub show_html: bool,
    #[serde(default)]
    pub show_page_names: bool,
    #[serde(default)]
    pub show_section_content: bool,

    // Page setup
    #[serde(default)]
    pub paper: Paper,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub rtl: bool,
    #[serde(default)]
    pub watermark: Option<Watermark>,

    // Regions, raw HTML
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub footer: Option<String>,
    #[serde(default)]
    pub first_header: Option<String>,
    #[serde(default)]
    pub first_footer: Option<String>,
    #[serde(default)]
    pub stylesheet: String,

    /// Keep a copy under the stable persistent path after every generation.
    #[serde(default)]
    pub always_save: bool,
}

fn default_filename() -> String {
    "{form_title}-{entry_id}".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            template: String::new(),
            filename: default_filename(),
            active: true,
            conditional_logic: None,
            show_empty: false,
            show_html: true,
            show_page_names: false,
            show_section_content: false,
            paper: Paper::default(),
            orientation: Orientation::default(),
            margins: Margins::default(),
            format: OutputFormat::default(),
            rtl: false,
            watermark: None,
            header: None,
            footer: None,
            first_header: None,
            first_footer: None,
            stylesheet: String::new(),
            always_save: false,
        }
    }
}

impl PdfConfig {
    /// The template to render with, falling back to the global default.
    pub fn template<'a>(&'a self, settings: &'a GlobalSettings) -> &'a str {
        if self.template.is_empty() {
            &settings.default_template
        } else {
            &self.template
        }
    }

    /// Ids are short lowercase alphanumeric tokens; anything else is
    /// rejected before it can reach a path component.
    pub fn id_is_valid(&self) -> bool {
        !self.id.is_empty() && self.id.chars().all(|c| c.is_ascii_alphanumeric())
    }
}

/// Deprecated key spellings and their current names. Values carry over
/// unchanged; boolean-ish strings are normalized by the deserializer.
const LEGACY_KEYS: &[(&str, &str)] = &[
    ("default-show-html", "show_html"),
    ("default-show-empty-field", "show_empty"),
    ("default-show-page-names", "show_page_names"),
    ("default-show-section-content", "show_section_content"),
    ("pdf_size", "paper"),
    ("rtl-support", "rtl"),
    ("save", "always_save"),
];

/// Translates deprecated setting names in a raw configuration map to the
/// current schema. The caller's map is not mutated; current-name keys always
/// win over their deprecated spellings.
pub fn upgrade_legacy_settings(raw: &Map<String, Value>) -> Map<String, Value> {
    let mut upgraded = Map::new();
    for (key, value) in raw {
        let current = LEGACY_KEYS
            .iter()
            .find(|(legacy, _)| legacy == key)
            .map(|(_, current)| *current);
        match current {
            Some(name) if !raw.contains_key(name) => {
                log::debug!("upgrading legacy setting '{key}' to '{name}'");
                let value = if name == "paper" {
                    normalize_paper(value)
                } else {
                    normalize_flag(value)
                };
                upgraded.insert(name.to_string(), value);
            }
            Some(_) => {} // current spelling present, deprecated one ignored
            None => {
                upgraded.insert(key.clone(), value.clone());
            }
        }
    }
    upgraded
}

/// Legacy paper sizes were stored in upper case ("A4", "LETTER").
fn normalize_paper(value: &Value) -> Value {
    match value.as_str() {
        Some(s) => Value::String(s.to_ascii_lowercase()),
        None => value.clone(),
    }
}

/// Legacy configurations stored booleans as "Yes"/"No" strings.
fn normalize_flag(value: &Value) -> Value {
    match value.as_str() {
        Some(s) if s.eq_ignore_ascii_case("yes") => Value::Bool(true),
        Some(s) if s.eq_ignore_ascii_case("no") => Value::Bool(false),
        _ => value.clone(),
    }
}
