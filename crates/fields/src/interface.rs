//! The capability trait every field normalizer satisfies.

use crate::escape;
use crate::form_data::FormData;
use formpdf_types::FieldDescriptor;
use serde_json::Value;

/// A normalizer wraps one `(FieldDescriptor, Entry)` pair and exposes three
/// views over the same memoized computation.
///
/// Implementations hold exactly one cache slot, filled lazily on the first
/// `value()` call and invalidated only by dropping the instance. `html()` and
/// `form_data()` must derive from that cached value so the three views never
/// disagree.
pub trait FieldValue {
    fn descriptor(&self) -> &FieldDescriptor;

    /// The canonical parsed representation: a string for simple fields, a
    /// structured map for multi-part ones. Memoized; side-effect-free beyond
    /// the cache write.
    fn value(&self) -> &Value;

    /// Sanitized HTML fragment of the value alone, inline-style friendly.
    /// User-supplied text is escaped here.
    fn value_html(&self) -> String;

    /// The flattened multi-key map this field contributes to custom
    /// templates.
    fn form_data(&self) -> FormData {
        let mut data = FormData::new();
        data.insert(self.descriptor(), self.value().clone());
        data
    }

    /// Layout emptiness: empty fields are skipped by the assembler unless
    /// configured otherwise.
    fn is_empty(&self) -> bool {
        is_empty_value(self.value())
    }

    /// Real emptiness, for types that always occupy layout space (consent,
    /// terms-of-service). Defaults to [`FieldValue::is_empty`].
    fn is_field_empty(&self) -> bool {
        self.is_empty()
    }

    /// Complete field markup: label block plus wrapped value fragment.
    fn html(&self) -> String {
        wrap_field(self.descriptor(), &self.value_html())
    }
}

/// Default emptiness semantics: null, blank string, empty collection, or a
/// collection whose members are all falsy.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.iter().all(is_empty_value),
        Value::Object(map) => map.values().all(is_empty_value),
    }
}

/// Standard wrapper markup shared by nearly all field types.
pub fn wrap_field(field: &FieldDescriptor, value_html: &str) -> String {
    let mut out = String::with_capacity(value_html.len() + 160);
    out.push_str(&format!(
        "<div id=\"field-{}\" class=\"gfpdf-{} gfpdf-field\">",
        field.id,
        escape::html(field.field_type.as_str())
    ));
    let label = field.label.trim();
    if !label.is_empty() {
        out.push_str(&format!(
            "<div class=\"label\"><strong>{}</strong></div>",
            escape::html(label)
        ));
    }
    out.push_str("<div class=\"value\">");
    out.push_str(value_html);
    out.push_str("</div></div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn emptiness_semantics() {
        assert!(is_empty_value(&Value::Null));
        assert!(is_empty_value(&json!("")));
        assert!(is_empty_value(&json!("  ")));
        assert!(is_empty_value(&json!([])));
        assert!(is_empty_value(&json!(["", null, false])));
        assert!(is_empty_value(&json!({"a": "", "b": null})));

        assert!(!is_empty_value(&json!("x")));
        assert!(!is_empty_value(&json!(["", "x"])));
        assert!(!is_empty_value(&json!(3.5)));
    }

    #[test]
    fn wrapper_escapes_label() {
        let field = FieldDescriptor {
            label: "<Name>".to_string(),
            ..Default::default()
        };
        let html = wrap_field(&field, "value");
        assert!(html.contains("&lt;Name&gt;"));
        assert!(html.contains("<div class=\"value\">value</div>"));
    }
}
