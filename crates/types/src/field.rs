//! Static per-field metadata owned by the form definition.

use crate::ids::{FieldId, InputKey};
use crate::logic::ConditionalLogic;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every field type the rendering pipeline knows how to normalize.
///
/// Types outside this set are carried verbatim in `Unknown` and rendered by
/// the default normalizer.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum FieldType {
    Text,
    Textarea,
    Select,
    Multiselect,
    Number,
    Checkbox,
    Radio,
    Hidden,
    Html,
    Section,
    Name,
    Date,
    Time,
    Phone,
    Address,
    Website,
    Email,
    FileUpload,
    List,
    Poll,
    Quiz,
    Survey,
    Likert,
    Rank,
    Rating,
    PostTitle,
    PostContent,
    PostExcerpt,
    PostTags,
    PostCategory,
    PostImage,
    PostCustomField,
    Product,
    Quantity,
    Option,
    Shipping,
    Total,
    Signature,
    Consent,
    Tos,
    CreditCard,
    Captcha,
    Password,
    Page,
    Unknown(String),
}

impl FieldType {
    /// The wire spelling, as used in form definitions and CSS class names.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Multiselect => "multiselect",
            Self::Number => "number",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Hidden => "hidden",
            Self::Html => "html",
            Self::Section => "section",
            Self::Name => "name",
            Self::Date => "date",
            Self::Time => "time",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::Website => "website",
            Self::Email => "email",
            Self::FileUpload => "fileupload",
            Self::List => "list",
            Self::Poll => "poll",
            Self::Quiz => "quiz",
            Self::Survey => "survey",
            Self::Likert => "likert",
            Self::Rank => "rank",
            Self::Rating => "rating",
            Self::PostTitle => "post_title",
            Self::PostContent => "post_content",
            Self::PostExcerpt => "post_excerpt",
            Self::PostTags => "post_tags",
            Self::PostCategory => "post_category",
            Self::PostImage => "post_image",
            Self::PostCustomField => "post_custom_field",
            Self::Product => "product",
            Self::Quantity => "quantity",
            Self::Option => "option",
            Self::Shipping => "shipping",
            Self::Total => "total",
            Self::Signature => "signature",
            Self::Consent => "consent",
            Self::Tos => "tos",
            Self::CreditCard => "creditcard",
            Self::Captcha => "captcha",
            Self::Password => "password",
            Self::Page => "page",
            Self::Unknown(s) => s,
        }
    }

    /// Product-family fields are aggregated into one order summary rather
    /// than rendered inline.
    pub fn is_product_family(&self) -> bool {
        matches!(
            self,
            Self::Product | Self::Quantity | Self::Option | Self::Shipping | Self::Total
        )
    }

    /// Fields that never produce output and are skipped by the assembler.
    pub fn is_display_only(&self) -> bool {
        matches!(self, Self::Captcha | Self::Password | Self::Page)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FieldType {
    fn from(s: &str) -> Self {
        match s {
            "text" => Self::Text,
            "textarea" => Self::Textarea,
            "select" => Self::Select,
            "multiselect" => Self::Multiselect,
            "number" => Self::Number,
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            "hidden" => Self::Hidden,
            "html" => Self::Html,
            "section" => Self::Section,
            "name" => Self::Name,
            "date" => Self::Date,
            "time" => Self::Time,
            "phone" => Self::Phone,
            "address" => Self::Address,
            "website" => Self::Website,
            "email" => Self::Email,
            "fileupload" => Self::FileUpload,
            "list" => Self::List,
            "poll" => Self::Poll,
            "quiz" => Self::Quiz,
            "survey" => Self::Survey,
            "likert" => Self::Likert,
            "rank" => Self::Rank,
            "rating" => Self::Rating,
            "post_title" => Self::PostTitle,
            "post_content" => Self::PostContent,
            "post_excerpt" => Self::PostExcerpt,
            "post_tags" => Self::PostTags,
            "post_category" => Self::PostCategory,
            "post_image" => Self::PostImage,
            "post_custom_field" => Self::PostCustomField,
            "product" => Self::Product,
            "quantity" => Self::Quantity,
            "option" => Self::Option,
            "shipping" => Self::Shipping,
            "total" => Self::Total,
            "signature" => Self::Signature,
            "consent" => Self::Consent,
            "tos" => Self::Tos,
            "creditcard" => Self::CreditCard,
            "captcha" => Self::Captcha,
            "password" => Self::Password,
            "page" => Self::Page,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<String> for FieldType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl Serialize for FieldType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s))
    }
}

/// One selectable choice of a select/radio/checkbox-style field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Choice {
    pub text: String,
    pub value: String,
    /// Price attached to product option choices, e.g. `"$5.00"`.
    #[serde(default)]
    pub price: Option<String>,
}

/// One named sub-input of a multi-part field (name, address, consent, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldInput {
    pub id: InputKey,
    pub label: String,
}

/// Immutable metadata describing one form field.
///
/// Owned by the [`Form`](crate::Form) definition; the rendering subsystem
/// only ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDescriptor {
    pub id: FieldId,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Backing input type of composite fields (a poll backed by a radio).
    pub input_type: Option<FieldType>,
    pub label: String,
    pub description: String,
    pub css_class: String,
    pub choices: Vec<Choice>,
    pub inputs: Vec<FieldInput>,
    pub conditional_logic: Option<ConditionalLogic>,
    /// Static content of HTML-block fields.
    pub content: Option<String>,
    /// Base price of product fields, e.g. `"$30.00"`.
    pub base_price: Option<String>,
    /// Product field this option/quantity field belongs to.
    pub product_field: Option<FieldId>,
    pub disable_quantity: bool,
    /// Date display format: `mdy`, `dmy` or `ymd`, optionally suffixed with
    /// `_dash` or `_dot` for the separator.
    pub date_format: Option<String>,
    /// Number display format: `decimal_dot`, `decimal_comma` or `currency`.
    pub number_format: Option<String>,
    /// Declared display size of signature images, in pixels.
    pub display_width: Option<u32>,
    pub display_height: Option<u32>,
    pub multiple_files: bool,
    /// 1-based page the field sits on.
    pub page_number: u32,
}

impl Default for FieldDescriptor {
    fn default() -> Self {
        Self {
            id: FieldId(0),
            field_type: FieldType::Text,
            input_type: None,
            label: String::new(),
            description: String::new(),
            css_class: String::new(),
            choices: Vec::new(),
            inputs: Vec::new(),
            conditional_logic: None,
            content: None,
            base_price: None,
            product_field: None,
            disable_quantity: false,
            date_format: None,
            number_format: None,
            display_width: None,
            display_height: None,
            multiple_files: false,
            page_number: 1,
        }
    }
}

impl FieldDescriptor {
    /// Looks up a choice by its stored value and returns its display text.
    pub fn choice_text(&self, value: &str) -> Option<&str> {
        self.choices
            .iter()
            .find(|c| c.value == value)
            .map(|c| c.text.as_str())
    }

    /// The sub-input whose label matches, case-insensitively.
    pub fn input_by_label(&self, label: &str) -> Option<&FieldInput> {
        self.inputs
            .iter()
            .find(|i| i.label.eq_ignore_ascii_case(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_type_round_trip() {
        for raw in ["text", "post_custom_field", "fileupload", "creditcard"] {
            assert_eq!(FieldType::from(raw).as_str(), raw);
        }
    }

    #[test]
    fn unknown_type_carries_spelling() {
        let t = FieldType::from("nested_form");
        assert_eq!(t, FieldType::Unknown("nested_form".to_string()));
        assert_eq!(t.as_str(), "nested_form");
    }

    #[test]
    fn product_family_grouping() {
        assert!(FieldType::Shipping.is_product_family());
        assert!(FieldType::Total.is_product_family());
        assert!(!FieldType::Text.is_product_family());
    }

    #[test]
    fn descriptor_deserializes_with_defaults() {
        let field: FieldDescriptor =
            serde_json::from_str(r#"{"id": 3, "type": "address", "label": "Address"}"#).unwrap();
        assert_eq!(field.id, FieldId(3));
        assert_eq!(field.field_type, FieldType::Address);
        assert_eq!(field.page_number, 1);
        assert!(field.choices.is_empty());
    }
}
